//! The immutable description of one generation run

use serde::{Deserialize, Serialize};

use crate::schema::SqlType;

/// Which kind of application to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppKind {
    /// Editable grid over an existing source table, written back row by row
    TableEdit,
    /// Standalone form collecting single-row submissions
    FormCollect,
}

/// Input widget kind for a user-authored form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free text entry
    Text,
    /// Numeric entry
    Number,
    /// Date picker
    Date,
}

impl FieldKind {
    /// SQL type emitted for this field in the target-table DDL
    #[must_use]
    pub const fn sql_type(self) -> SqlType {
        match self {
            Self::Text => SqlType::Varchar,
            Self::Number => SqlType::Number,
            Self::Date => SqlType::Date,
        }
    }
}

/// A user-authored form field
///
/// Held only for the duration of one generation run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Normalized field name: uppercase, spaces replaced with underscores
    pub name: String,
    /// Widget kind
    pub kind: FieldKind,
}

impl FormField {
    /// Build a field, normalizing the raw name
    #[must_use]
    pub fn new(raw_name: &str, kind: FieldKind) -> Self {
        Self {
            name: normalize_field_name(raw_name),
            kind,
        }
    }
}

/// Normalize a raw field name: uppercase, spaces become underscores
#[must_use]
pub fn normalize_field_name(raw: &str) -> String {
    raw.trim().to_uppercase().replace(' ', "_")
}

/// Everything a single render needs; fully determines the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Application variant
    pub app_kind: AppKind,
    /// Greet the acting user at the top of the generated app
    pub include_welcome: bool,
    /// Source table for [`AppKind::TableEdit`]; `None` for form apps
    pub source_table: Option<String>,
    /// Target table both outputs are written for
    pub target_table: String,
    /// Columns the generated app offers as filters, in selection order
    pub filter_columns: Vec<String>,
    /// Columns the generated grid refuses to edit, in selection order
    pub disabled_columns: Vec<String>,
    /// Form fields for [`AppKind::FormCollect`], in authoring order
    pub form_fields: Vec<FormField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_field_names() {
        assert_eq!(normalize_field_name("order date"), "ORDER_DATE");
        assert_eq!(normalize_field_name("  Age "), "AGE");
        assert_eq!(normalize_field_name("ALREADY_UPPER"), "ALREADY_UPPER");
    }

    #[test]
    fn field_kinds_map_to_sql_types() {
        assert_eq!(FieldKind::Text.sql_type(), SqlType::Varchar);
        assert_eq!(FieldKind::Number.sql_type(), SqlType::Number);
        assert_eq!(FieldKind::Date.sql_type(), SqlType::Date);
    }
}
