//! Warehouse schema model: column descriptors, type mapping, identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub mod inspect;

/// The small fixed SQL type vocabulary emitted into generated DDL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlType {
    /// Variable-length text
    Varchar,
    /// Exact numeric
    Number,
    /// Approximate numeric
    Float,
    /// Boolean
    Boolean,
    /// Calendar date
    Date,
}

impl SqlType {
    /// Map a remote type name into the fixed vocabulary.
    ///
    /// The mapping is case-insensitive and total: the seven recognized names
    /// map per the fixed table below, everything else falls back to
    /// `VARCHAR`.
    ///
    /// | remote | mapped |
    /// |---|---|
    /// | VARCHAR, STRING | VARCHAR |
    /// | NUMBER | NUMBER |
    /// | FLOAT, DOUBLE | FLOAT |
    /// | BOOLEAN | BOOLEAN |
    /// | DATE | DATE |
    #[must_use]
    pub fn from_declared(declared: &str) -> Self {
        match declared.trim().to_ascii_uppercase().as_str() {
            "VARCHAR" | "STRING" => Self::Varchar,
            "NUMBER" => Self::Number,
            "FLOAT" | "DOUBLE" => Self::Float,
            "BOOLEAN" => Self::Boolean,
            "DATE" => Self::Date,
            _ => Self::Varchar,
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Varchar => "VARCHAR",
            Self::Number => "NUMBER",
            Self::Float => "FLOAT",
            Self::Boolean => "BOOLEAN",
            Self::Date => "DATE",
        };
        f.write_str(keyword)
    }
}

/// One column of an inspected table, with its type already mapped into the
/// fixed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Sanitized column name (surrounding quotes stripped)
    pub name: String,
    /// Declared type, mapped via [`SqlType::from_declared`]
    pub declared_type: SqlType,
}

impl ColumnDescriptor {
    /// Build a descriptor from the raw name and type strings a metadata
    /// query returns
    #[must_use]
    pub fn from_remote(name: &str, declared: &str) -> Self {
        Self {
            name: sanitize_column_name(name),
            declared_type: SqlType::from_declared(declared),
        }
    }
}

/// Strip the surrounding double-quotes some warehouses report around
/// case-sensitive column names
#[must_use]
pub fn sanitize_column_name(name: &str) -> String {
    name.trim_matches('"').to_string()
}

/// A fully qualified three-part table identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    /// Database (catalog) component
    pub database: String,
    /// Schema component
    pub schema: String,
    /// Table or view component
    pub table: String,
}

impl FromStr for QualifiedName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [database, schema, table]
                if !database.is_empty() && !schema.is_empty() && !table.is_empty() =>
            {
                Ok(Self {
                    database: (*database).to_string(),
                    schema: (*schema).to_string(),
                    table: (*table).to_string(),
                })
            }
            _ => Err(Error::InvalidTableName(s.to_string())),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.database, self.schema, self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_types() {
        assert_eq!(SqlType::from_declared("VARCHAR"), SqlType::Varchar);
        assert_eq!(SqlType::from_declared("STRING"), SqlType::Varchar);
        assert_eq!(SqlType::from_declared("NUMBER"), SqlType::Number);
        assert_eq!(SqlType::from_declared("FLOAT"), SqlType::Float);
        assert_eq!(SqlType::from_declared("DOUBLE"), SqlType::Float);
        assert_eq!(SqlType::from_declared("BOOLEAN"), SqlType::Boolean);
        assert_eq!(SqlType::from_declared("DATE"), SqlType::Date);
    }

    #[test]
    fn mapping_is_case_insensitive() {
        assert_eq!(SqlType::from_declared("string"), SqlType::Varchar);
        assert_eq!(SqlType::from_declared("Double"), SqlType::Float);
        assert_eq!(SqlType::from_declared("bOOlean"), SqlType::Boolean);
    }

    #[test]
    fn unrecognized_types_fall_back_to_varchar() {
        for declared in ["TIMESTAMP_NTZ(9)", "GEOGRAPHY", "VARIANT", "", "  "] {
            assert_eq!(SqlType::from_declared(declared), SqlType::Varchar);
        }
    }

    #[test]
    fn sanitizes_quoted_names() {
        assert_eq!(sanitize_column_name("\"Order Id\""), "Order Id");
        assert_eq!(sanitize_column_name("PLAIN"), "PLAIN");
    }

    #[test]
    fn parses_three_part_names() {
        let name: QualifiedName = "DB.SCHEMA.TABLE".parse().unwrap();
        assert_eq!(name.database, "DB");
        assert_eq!(name.schema, "SCHEMA");
        assert_eq!(name.table, "TABLE");
        assert_eq!(name.to_string(), "DB.SCHEMA.TABLE");
    }

    #[test]
    fn rejects_malformed_names() {
        for raw in ["", "TABLE", "SCHEMA.TABLE", "A.B.C.D", "DB..TABLE"] {
            assert!(raw.parse::<QualifiedName>().is_err(), "should reject {raw:?}");
        }
    }
}
