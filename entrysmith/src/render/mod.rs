//! Template renderer: a pure function from request to generated artifacts
//!
//! [`Renderer::render`] takes an immutable [`GenerationRequest`] plus the
//! inspected columns and produces the generated application source and the
//! matching target-table DDL. It never prompts, never touches the warehouse,
//! and never reads the clock; identical inputs yield byte-identical output.

use handlebars::Handlebars;
use serde_json::json;

use crate::error::Error;
use crate::request::{AppKind, FieldKind, FormField, GenerationRequest};
use crate::schema::ColumnDescriptor;

pub mod templates;

/// The two text artifacts of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedApp {
    /// Full source listing of the generated application
    pub source_code: String,
    /// `CREATE OR REPLACE TABLE` statement for the target table
    pub table_ddl: String,
}

/// Renders [`GenerationRequest`]s into [`RenderedApp`]s
pub struct Renderer {
    handlebars: Handlebars<'static>,
    fallback_user: String,
}

impl Renderer {
    /// Renderer with an `"unknown"` fallback user
    #[must_use]
    pub fn new() -> Self {
        Self::with_fallback_user("unknown")
    }

    /// Renderer with an explicit fallback user, embedded into the generated
    /// app for when the hosting platform provides no identity
    #[must_use]
    pub fn with_fallback_user(user: impl Into<String>) -> Self {
        let mut handlebars = Handlebars::new();

        // Generating code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        Self {
            handlebars,
            fallback_user: user.into(),
        }
    }

    /// Render both artifacts for `request`.
    ///
    /// `columns` are the inspected source-table columns; they feed the DDL
    /// for table-edit apps and are ignored for form apps (whose DDL comes
    /// from the authored fields).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] when a template fails to render.
    pub fn render(
        &self,
        request: &GenerationRequest,
        columns: &[ColumnDescriptor],
    ) -> Result<RenderedApp, Error> {
        tracing::debug!(target_table = %request.target_table, "rendering application");

        Ok(RenderedApp {
            source_code: self.render_source(request)?,
            table_ddl: self.render_ddl(request, columns)?,
        })
    }

    fn render_source(&self, request: &GenerationRequest) -> Result<String, Error> {
        let body = match request.app_kind {
            AppKind::TableEdit => templates::TABLE_EDIT_BODY,
            AppKind::FormCollect => templates::FORM_COLLECT_BODY,
        };
        let template = [templates::APP_PREAMBLE, body].concat();

        let fields: Vec<serde_json::Value> = request
            .form_fields
            .iter()
            .map(|field| {
                json!({
                    "name": field.name,
                    "widget": widget_fragment(field),
                })
            })
            .collect();

        let context = json!({
            "source_table": request.source_table.as_deref().unwrap_or(""),
            "target_table": request.target_table,
            "disabled_columns_py": python_string_list(&request.disabled_columns),
            "filter_columns_py": python_string_list(&request.filter_columns),
            "welcome": request.include_welcome,
            "fallback_user": self.fallback_user,
            "fields": fields,
        });

        Ok(self.handlebars.render_template(&template, &context)?)
    }

    fn render_ddl(
        &self,
        request: &GenerationRequest,
        columns: &[ColumnDescriptor],
    ) -> Result<String, Error> {
        let context = json!({
            "target_table": request.target_table,
            "column_block": ddl_column_block(request, columns),
        });

        Ok(self
            .handlebars
            .render_template(templates::CREATE_TABLE_DDL, &context)?)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// One `"NAME" TYPE,` fragment per known column, in input order, each
/// terminated so the fixed audit columns close the list. Table-edit DDL
/// follows the inspected source columns, form DDL follows the authored
/// fields. Empty input yields an empty block.
fn ddl_column_block(request: &GenerationRequest, columns: &[ColumnDescriptor]) -> String {
    let fragments: Vec<String> = match request.app_kind {
        AppKind::TableEdit => columns
            .iter()
            .map(|c| format!("\"{}\" {}", c.name, c.declared_type))
            .collect(),
        AppKind::FormCollect => request
            .form_fields
            .iter()
            .map(|f| format!("\"{}\" {}", f.name, f.kind.sql_type()))
            .collect(),
    };

    fragments
        .iter()
        .map(|fragment| format!("{fragment},\n    "))
        .collect()
}

/// Widget-construction fragment for one authored field
fn widget_fragment(field: &FormField) -> String {
    match field.kind {
        FieldKind::Text => format!("st.text_input(\"{}\")", field.name),
        FieldKind::Number => format!("st.number_input(\"{}\", step=1)", field.name),
        FieldKind::Date => format!("st.date_input(\"{}\")", field.name),
    }
}

/// Render a Python list literal of strings, preserving order
fn python_string_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("\"{item}\"")).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SqlType;

    fn table_edit_request() -> GenerationRequest {
        GenerationRequest {
            app_kind: AppKind::TableEdit,
            include_welcome: false,
            source_table: Some("DB.PUBLIC.ORDERS".to_string()),
            target_table: "DB.PUBLIC.ORDERS_EDITED".to_string(),
            filter_columns: vec!["REGION".to_string()],
            disabled_columns: vec!["A".to_string(), "B".to_string()],
            form_fields: vec![],
        }
    }

    #[test]
    fn python_list_preserves_order() {
        let items = vec!["B".to_string(), "A".to_string()];
        assert_eq!(python_string_list(&items), "[\"B\", \"A\"]");
        assert_eq!(python_string_list(&[]), "[]");
    }

    #[test]
    fn widget_fragments_match_kind() {
        let text = FormField::new("NAME", FieldKind::Text);
        let number = FormField::new("AGE", FieldKind::Number);
        let date = FormField::new("BORN", FieldKind::Date);
        assert_eq!(widget_fragment(&text), "st.text_input(\"NAME\")");
        assert_eq!(widget_fragment(&number), "st.number_input(\"AGE\", step=1)");
        assert_eq!(widget_fragment(&date), "st.date_input(\"BORN\")");
    }

    #[test]
    fn ddl_block_uses_inspected_columns_for_table_edit() {
        let columns = vec![
            ColumnDescriptor {
                name: "ID".to_string(),
                declared_type: SqlType::Number,
            },
            ColumnDescriptor {
                name: "NAME".to_string(),
                declared_type: SqlType::Varchar,
            },
        ];
        let block = ddl_column_block(&table_edit_request(), &columns);
        assert_eq!(block, "\"ID\" NUMBER,\n    \"NAME\" VARCHAR,\n    ");
    }

    #[test]
    fn ddl_block_uses_authored_fields_for_form_collect() {
        let request = GenerationRequest {
            app_kind: AppKind::FormCollect,
            include_welcome: false,
            source_table: None,
            target_table: "DB.PUBLIC.SURVEY".to_string(),
            filter_columns: vec![],
            disabled_columns: vec![],
            form_fields: vec![
                FormField::new("AGE", FieldKind::Number),
                FormField::new("NAME", FieldKind::Text),
            ],
        };
        // Inspected columns are ignored for form apps
        let stray = vec![ColumnDescriptor {
            name: "IGNORED".to_string(),
            declared_type: SqlType::Date,
        }];
        let block = ddl_column_block(&request, &stray);
        assert_eq!(block, "\"AGE\" NUMBER,\n    \"NAME\" VARCHAR,\n    ");
    }

    #[test]
    fn empty_columns_yield_empty_block() {
        assert_eq!(ddl_column_block(&table_edit_request(), &[]), "");
    }

    #[test]
    fn welcome_line_is_optional() {
        let renderer = Renderer::new();
        let mut request = table_edit_request();

        let without = renderer.render(&request, &[]).unwrap();
        assert!(!without.source_code.contains("Welcome,"));

        request.include_welcome = true;
        let with = renderer.render(&request, &[]).unwrap();
        assert!(with.source_code.contains("st.write(f\"Welcome, {ctx.user_name}!\")"));
    }

    #[test]
    fn fallback_user_is_embedded() {
        let renderer = Renderer::with_fallback_user("jsmith");
        let rendered = renderer.render(&table_edit_request(), &[]).unwrap();
        assert!(rendered
            .source_code
            .contains("st.experimental_user.get(\"user_name\", \"jsmith\")"));
    }
}
