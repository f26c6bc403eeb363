//! CLI command implementations

use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;

use entrysmith::{Settings, WarehouseInspector};

pub mod columns;
pub mod new;

pub use columns::ColumnsCommand;
pub use new::NewCommand;

/// Open the warehouse metadata pool configured in `settings`
pub(crate) async fn connect(settings: &Settings) -> Result<WarehouseInspector> {
    let url = settings.warehouse.url.as_deref().context(
        "warehouse.url is not configured; set it in entrysmith.toml or ENTRYSMITH_WAREHOUSE__URL",
    )?;

    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(settings.warehouse.connect_timeout_secs))
        .connect(url)
        .await
        .context("Failed to connect to the warehouse")?;

    Ok(WarehouseInspector::new(pool))
}
