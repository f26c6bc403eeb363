//! Interactive generation command

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use entrysmith::{AppKind, Renderer, Settings};
use entrysmith_cli_lib::{output, wizard};

/// Generate a data-entry app through the interactive wizard
pub struct NewCommand {
    output_dir: Option<PathBuf>,
}

impl NewCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(output_dir: Option<PathBuf>) -> Self {
        Self { output_dir }
    }

    /// Run the wizard, render, and print (and optionally write) the result
    ///
    /// # Errors
    ///
    /// Returns an error when a prompt, the schema lookup, rendering, or file
    /// writing fails.
    pub async fn execute(&self, settings: &Settings) -> Result<()> {
        let (request, columns) = match wizard::choose_app_kind()? {
            AppKind::TableEdit => {
                // Only the table-edit flow needs the warehouse
                let inspector = super::connect(settings).await?;
                wizard::table_edit_request(&inspector).await?
            }
            AppKind::FormCollect => wizard::form_collect_request()?,
        };

        let renderer = Renderer::with_fallback_user(&settings.identity.user_name);
        let rendered = renderer.render(&request, &columns)?;

        output::print_rendered(&rendered);

        if let Some(dir) = &self.output_dir {
            let files = output::write_rendered(dir, &rendered)?;
            println!("{} {} files:", style("Wrote").green().bold(), files.len());
            for file in &files {
                println!("  {} {}", style("✓").green(), style(file.display()).dim());
            }
        }

        println!();
        println!("{}", style("Next steps:").bold());
        println!(
            "  1. Run the {} statement in a warehouse worksheet",
            style("CREATE OR REPLACE TABLE").yellow()
        );
        println!(
            "  2. Deploy the generated application as a {} app in the same account",
            style("Streamlit").yellow()
        );

        Ok(())
    }
}
