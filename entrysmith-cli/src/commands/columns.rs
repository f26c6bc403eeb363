//! Table inspection command

use anyhow::Result;
use console::style;

use entrysmith::{SchemaSource, Settings};

/// List the columns of a warehouse table with their mapped types
pub struct ColumnsCommand {
    table: String,
}

impl ColumnsCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(table: String) -> Self {
        Self { table }
    }

    /// Inspect the table and print its column list
    ///
    /// # Errors
    ///
    /// Returns an error when the warehouse is unreachable or the identifier
    /// is malformed.
    pub async fn execute(&self, settings: &Settings) -> Result<()> {
        let inspector = super::connect(settings).await?;
        let columns = inspector.columns(&self.table).await?;

        if columns.is_empty() {
            println!(
                "No columns found for {}",
                style(&self.table).cyan().bold()
            );
            return Ok(());
        }

        println!("{}", style(&self.table).cyan().bold());
        for column in &columns {
            println!(
                "  {} {}",
                style(&column.name).bold(),
                style(column.declared_type).dim()
            );
        }

        Ok(())
    }
}
