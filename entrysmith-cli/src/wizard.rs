//! Interactive wizard assembling a [`GenerationRequest`]
//!
//! The wizard only collects; it never renders. Each flow returns the
//! finished request together with the inspected columns, so rendering can
//! run without touching the warehouse again.

use anyhow::{Context, Result};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};

use entrysmith::{
    AppKind, ColumnDescriptor, FieldKind, FormField, GenerationRequest, SchemaSource,
};

/// Ask which kind of app to generate
///
/// # Errors
///
/// Returns an error when the terminal interaction fails.
pub fn choose_app_kind() -> Result<AppKind> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select the type of app")
        .items(&["Table edit app", "Form collection app"])
        .default(0)
        .interact()
        .context("Failed to read app kind")?;

    Ok(if choice == 0 {
        AppKind::TableEdit
    } else {
        AppKind::FormCollect
    })
}

/// Collect a table-edit request: source and target tables, then filter and
/// non-editable columns multi-selected from the inspected schema
///
/// # Errors
///
/// Returns an error when a prompt fails or the schema lookup fails.
pub async fn table_edit_request<S: SchemaSource>(
    schema: &S,
) -> Result<(GenerationRequest, Vec<ColumnDescriptor>)> {
    let include_welcome = confirm_welcome()?;

    let source: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Fully qualified name of the source table or view (DATABASE.SCHEMA.TABLE)")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read source table")?;

    let columns = inspect_with_spinner(schema, &source).await?;
    let column_names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();

    let target: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Fully qualified name of the target table")
        .default(suggest_target(&source))
        .interact_text()
        .context("Failed to read target table")?;

    let filter_columns = pick_columns(
        "Select columns to filter on (filtering on specific columns improves performance)",
        &column_names,
    )?;
    let disabled_columns = pick_columns("Select columns to disable editing of", &column_names)?;

    let request = GenerationRequest {
        app_kind: AppKind::TableEdit,
        include_welcome,
        source_table: if source.is_empty() { None } else { Some(source) },
        target_table: target,
        filter_columns,
        disabled_columns,
        form_fields: vec![],
    };

    Ok((request, columns))
}

/// Collect a form-collection request: target table plus the ordered field
/// list, each field named and typed individually
///
/// # Errors
///
/// Returns an error when a prompt fails.
pub fn form_collect_request() -> Result<(GenerationRequest, Vec<ColumnDescriptor>)> {
    let include_welcome = confirm_welcome()?;

    let target: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Fully qualified name of the target table")
        .interact_text()
        .context("Failed to read target table")?;

    let field_count: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Number of fields")
        .validate_with(|count: &usize| {
            if *count >= 1 {
                Ok(())
            } else {
                Err("at least one field is required")
            }
        })
        .interact_text()
        .context("Failed to read field count")?;

    let mut form_fields = Vec::with_capacity(field_count);
    for index in 1..=field_count {
        let raw_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Field {index} name"))
            .interact_text()
            .context("Failed to read field name")?;

        let kind_choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Field {index} type"))
            .items(&["Text entry", "Number", "Date"])
            .default(0)
            .interact()
            .context("Failed to read field type")?;

        let kind = match kind_choice {
            0 => FieldKind::Text,
            1 => FieldKind::Number,
            _ => FieldKind::Date,
        };

        let field = FormField::new(&raw_name, kind);
        if field.name != raw_name {
            println!(
                "  Field will be created as {}",
                style(&field.name).cyan().bold()
            );
        }
        form_fields.push(field);
    }

    let request = GenerationRequest {
        app_kind: AppKind::FormCollect,
        include_welcome,
        source_table: None,
        target_table: target,
        filter_columns: vec![],
        disabled_columns: vec![],
        form_fields,
    };

    Ok((request, vec![]))
}

/// Default target-table suggestion for a source table
#[must_use]
pub fn suggest_target(source: &str) -> String {
    if source.is_empty() {
        String::new()
    } else {
        format!("{source}_EDITED")
    }
}

fn confirm_welcome() -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Include a welcome message for the user?")
        .default(false)
        .interact()
        .context("Failed to read welcome choice")
}

async fn inspect_with_spinner<S: SchemaSource>(
    schema: &S,
    source: &str,
) -> Result<Vec<ColumnDescriptor>> {
    if source.trim().is_empty() {
        return Ok(vec![]);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Failed to set progress style")?,
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message(format!("Inspecting {source}..."));

    let columns = schema.columns(source).await;
    spinner.finish_and_clear();

    columns.with_context(|| format!("Failed to inspect schema of {source}"))
}

fn pick_columns(prompt: &str, column_names: &[&str]) -> Result<Vec<String>> {
    if column_names.is_empty() {
        return Ok(vec![]);
    }

    let picked = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(column_names)
        .interact()
        .context("Failed to read column selection")?;

    Ok(picked
        .into_iter()
        .map(|index| column_names[index].to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_edited_suffix_for_target() {
        assert_eq!(suggest_target("DB.PUBLIC.ORDERS"), "DB.PUBLIC.ORDERS_EDITED");
        assert_eq!(suggest_target(""), "");
    }
}
