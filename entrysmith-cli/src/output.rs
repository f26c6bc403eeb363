//! Printing and writing of rendered artifacts

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use entrysmith::RenderedApp;

/// File name the generated application is written under
pub const APP_FILE: &str = "app.py";
/// File name the target-table DDL is written under
pub const DDL_FILE: &str = "create_table.sql";

/// Print both artifacts as styled read-only sections
pub fn print_rendered(rendered: &RenderedApp) {
    println!();
    println!("{}", style("Target table statement").cyan().bold());
    println!("{}", style("──────────────────────").dim());
    println!("{}", rendered.table_ddl);
    println!("{}", style("Generated application").cyan().bold());
    println!("{}", style("─────────────────────").dim());
    println!("{}", rendered.source_code);
}

/// Write both artifacts into `dir`, creating it if needed
///
/// # Errors
///
/// Returns an error when the directory cannot be created or a file cannot
/// be written.
pub fn write_rendered(dir: &Path, rendered: &RenderedApp) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let app_path = dir.join(APP_FILE);
    fs::write(&app_path, &rendered.source_code)
        .with_context(|| format!("Failed to write file: {}", app_path.display()))?;

    let ddl_path = dir.join(DDL_FILE);
    fs::write(&ddl_path, &rendered.table_ddl)
        .with_context(|| format!("Failed to write file: {}", ddl_path.display()))?;

    Ok(vec![app_path, ddl_path])
}
