//! Schema inspection against a warehouse, plus an in-memory test double
//!
//! The [`SchemaSource`] trait is the seam between the generator and the
//! metadata store: the CLI wires in a [`WarehouseInspector`] backed by a
//! connection pool, while tests and offline runs use [`StaticSchema`].

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{ColumnDescriptor, QualifiedName};
use crate::error::Error;

/// Ordered column listing for a fully qualified table
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Return the ordered columns of `table`.
    ///
    /// A blank identifier returns an empty list without touching the store;
    /// so does an identifier that resolves to no known table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTableName`] for a malformed identifier and
    /// [`Error::Database`] when the metadata query itself fails.
    async fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, Error>;
}

/// Schema inspector backed by a live warehouse connection
///
/// Issues a single read-only query against `information_schema.columns`,
/// ordered by ordinal position, and maps each declared type into the fixed
/// vocabulary.
#[derive(Debug, Clone)]
pub struct WarehouseInspector {
    pool: PgPool,
}

impl WarehouseInspector {
    /// Wrap an existing connection pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaSource for WarehouseInspector {
    async fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, Error> {
        if table.trim().is_empty() {
            return Ok(Vec::new());
        }

        let name: QualifiedName = table.parse()?;
        tracing::debug!(table = %name, "inspecting table schema");

        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT column_name, data_type \
             FROM information_schema.columns \
             WHERE table_catalog = $1 AND table_schema = $2 AND table_name = $3 \
             ORDER BY ordinal_position",
        )
        .bind(&name.database)
        .bind(&name.schema)
        .bind(&name.table)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|(column, declared)| ColumnDescriptor::from_remote(column, declared))
            .collect())
    }
}

/// In-memory schema source for tests and offline runs
#[derive(Debug, Clone, Default)]
pub struct StaticSchema {
    tables: HashMap<String, Vec<ColumnDescriptor>>,
}

impl StaticSchema {
    /// Empty schema source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table and its ordered columns
    #[must_use]
    pub fn with_table(mut self, name: &str, columns: Vec<ColumnDescriptor>) -> Self {
        self.tables.insert(name.to_string(), columns);
        self
    }
}

#[async_trait]
impl SchemaSource for StaticSchema {
    async fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, Error> {
        if table.trim().is_empty() {
            return Ok(Vec::new());
        }
        table.parse::<QualifiedName>()?;
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SqlType;

    fn sample() -> StaticSchema {
        StaticSchema::new().with_table(
            "DB.PUBLIC.ORDERS",
            vec![
                ColumnDescriptor::from_remote("ID", "NUMBER"),
                ColumnDescriptor::from_remote("\"Placed At\"", "TIMESTAMP_NTZ(9)"),
            ],
        )
    }

    #[tokio::test]
    async fn blank_identifier_yields_empty_list() {
        let schema = sample();
        assert!(schema.columns("").await.unwrap().is_empty());
        assert!(schema.columns("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_table_yields_empty_list() {
        let schema = sample();
        assert!(schema.columns("DB.PUBLIC.MISSING").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_identifier_is_rejected() {
        let schema = sample();
        assert!(schema.columns("ORDERS").await.is_err());
    }

    #[tokio::test]
    async fn known_table_yields_ordered_sanitized_columns() {
        let schema = sample();
        let columns = schema.columns("DB.PUBLIC.ORDERS").await.unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "ID");
        assert_eq!(columns[0].declared_type, SqlType::Number);
        assert_eq!(columns[1].name, "Placed At");
        assert_eq!(columns[1].declared_type, SqlType::Varchar);
    }
}
