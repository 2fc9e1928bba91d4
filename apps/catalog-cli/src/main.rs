//! # Catalog CLI
//!
//! Runs the demo CRUD sequence against `DATABASE_URL` and writes the listed
//! products to stdout as a JSON array.
//!
//! ## Environment
//! - `DATABASE_URL` - connection string (default `sqlite://catalog.db`)
//! - `CATALOG_UPDATE_ID` / `CATALOG_DELETE_ID` - ids the demo targets
//! - `CATALOG_RUN_MIGRATIONS` - apply the embedded schema (default `true`)
//! - `CATALOG_STRICT_WRITES` - fail update/delete of unknown ids (default `false`)
//! - `RUST_LOG` - log filter; logs go to stderr
//!
//! Any error ends the process with a non-zero exit status.

mod config;
mod demo;

use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CatalogConfig;
use catalog_core::Product;
use catalog_db::Database;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = CatalogConfig::load()?;
    info!(
        db_url = %config.database_url.chars().take(30).collect::<String>(),
        strict_writes = config.strict_writes,
        "Configuration loaded"
    );

    let db = Database::new(config.db_config()).await?;

    let products = demo::run(&db, &config).await?;

    write_products(std::io::stdout().lock(), &products)?;

    db.close().await;
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every statement the repository runs
/// - Default: `info,catalog=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Writes `products` as one JSON array followed by a newline.
fn write_products(mut out: impl Write, products: &[Product]) -> std::io::Result<()> {
    serde_json::to_writer(&mut out, products)?;
    writeln!(out)?;
    out.flush()
}
