//! entrysmith: generate small data-entry apps for managed warehouses
//!
//! This crate turns a description of a simple data-entry or data-review
//! application — a table editor over an existing warehouse table, or a
//! standalone form collector — into two text artifacts:
//!
//! 1. the source of a small Streamlit-in-Snowflake application implementing
//!    that description, and
//! 2. a matching `CREATE OR REPLACE TABLE` statement for the target table.
//!
//! # Design Principles
//!
//! 1. **Collect, then render**: assembling a [`GenerationRequest`] (however
//!    the caller does it — the companion CLI uses an interactive wizard) is
//!    strictly separate from rendering it. [`Renderer::render`] is a pure
//!    function of the request and the inspected columns; identical inputs
//!    produce byte-identical output.
//! 2. **Explicit context in generated code**: the generated application
//!    builds one context object (session handle + acting user) and threads
//!    it through every helper — no implicit globals.
//! 3. **Parameterized inserts**: generated statements bind values instead of
//!    splicing them into SQL text.
//!
//! # Quick Start
//!
//! ```rust
//! use entrysmith::{AppKind, FieldKind, FormField, GenerationRequest, Renderer};
//!
//! # fn main() -> Result<(), entrysmith::Error> {
//! let request = GenerationRequest {
//!     app_kind: AppKind::FormCollect,
//!     include_welcome: true,
//!     source_table: None,
//!     target_table: "ANALYTICS.FORMS.SURVEY".to_string(),
//!     filter_columns: vec![],
//!     disabled_columns: vec![],
//!     form_fields: vec![
//!         FormField::new("age", FieldKind::Number),
//!         FormField::new("full name", FieldKind::Text),
//!     ],
//! };
//!
//! let rendered = Renderer::new().render(&request, &[])?;
//! assert!(rendered.table_ddl.contains("CREATE OR REPLACE TABLE"));
//! assert!(rendered.source_code.contains("st.number_input"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod render;
pub mod request;
pub mod schema;

pub use config::Settings;
pub use error::Error;
pub use render::{RenderedApp, Renderer};
pub use request::{AppKind, FieldKind, FormField, GenerationRequest};
pub use schema::{ColumnDescriptor, QualifiedName, SqlType};
pub use schema::inspect::{SchemaSource, StaticSchema, WarehouseInspector};
