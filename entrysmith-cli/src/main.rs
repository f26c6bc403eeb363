//! entrysmith CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{ColumnsCommand, NewCommand};
use entrysmith::Settings;

#[derive(Parser)]
#[command(name = "entrysmith")]
#[command(version)]
#[command(about = "Generate warehouse data-entry apps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a data-entry app through an interactive wizard
    New {
        /// Directory to write app.py and create_table.sql into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the columns of a warehouse table
    Columns {
        /// Fully qualified table name (DATABASE.SCHEMA.TABLE)
        table: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let settings = Settings::load()?;

    match cli.command {
        Commands::New { output } => {
            NewCommand::new(output).execute(&settings).await?;
        }
        Commands::Columns { table } => {
            ColumnsCommand::new(table).execute(&settings).await?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            EnvFilter::new("debug,entrysmith=trace")
        } else {
            EnvFilter::new("info")
        }
    });

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}
