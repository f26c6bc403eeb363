//! Integration tests for artifact file writing

use std::fs;

use tempfile::TempDir;

use entrysmith::{AppKind, FieldKind, FormField, GenerationRequest, Renderer};
use entrysmith_cli_lib::output;

fn rendered_form_app() -> entrysmith::RenderedApp {
    let request = GenerationRequest {
        app_kind: AppKind::FormCollect,
        include_welcome: false,
        source_table: None,
        target_table: "DB.PUBLIC.SURVEY".to_string(),
        filter_columns: vec![],
        disabled_columns: vec![],
        form_fields: vec![FormField::new("AGE", FieldKind::Number)],
    };
    Renderer::new().render(&request, &[]).unwrap()
}

#[test]
fn writes_both_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let rendered = rendered_form_app();

    let files = output::write_rendered(temp_dir.path(), &rendered).unwrap();
    assert_eq!(files.len(), 2);

    let app = fs::read_to_string(temp_dir.path().join(output::APP_FILE)).unwrap();
    assert!(app.contains("st.number_input(\"AGE\", step=1)"));

    let ddl = fs::read_to_string(temp_dir.path().join(output::DDL_FILE)).unwrap();
    assert!(ddl.contains("CREATE OR REPLACE TABLE DB.PUBLIC.SURVEY"));
}

#[test]
fn creates_missing_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("generated").join("survey");

    let files = output::write_rendered(&nested, &rendered_form_app()).unwrap();
    for file in files {
        assert!(file.exists(), "missing: {}", file.display());
    }
}
