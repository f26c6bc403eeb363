//! Error types and error handling

use thiserror::Error as ThisError;

/// Crate error type
#[derive(Debug, ThisError)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed table identifier
    #[error("Invalid table name '{0}': expected DATABASE.SCHEMA.TABLE")]
    InvalidTableName(String),

    /// Warehouse error
    #[error("Warehouse error: {0}")]
    Database(#[from] sqlx::Error),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),
}
