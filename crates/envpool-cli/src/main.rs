//! envpool entry point
//!
//! Builds a MySQL pool from `MYSQL_*` variables, reports it and closes it.
//!
//! Run with:
//! ```bash
//! MYSQL_HOST=localhost MYSQL_USER=root MYSQL_PASSWORD=secret MYSQL_DATABASE=app \
//!     cargo run -p envpool-cli
//! ```
//!
//! A `.env` file in the working directory is loaded first if present.
//! `LOG_LEVEL` and `LOG_FORMAT` control log output.

use anyhow::Context;
use envpool_common::{load_dotenv, try_init_tracing_with_config, ProcessEnv, TracingConfig};
use envpool_db::{create_db, DbPool};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // .env may carry LOG_* settings, so load it before tracing starts
    let dotenv_loaded = load_dotenv();

    if let Err(e) = try_init_tracing_with_config(TracingConfig::from_env(&ProcessEnv)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(dotenv_loaded).await {
        error!(error = %format!("{e:#}"), "Error");
        std::process::exit(1);
    }
}

async fn run(dotenv_loaded: bool) -> anyhow::Result<()> {
    info!(dotenv_loaded, "Creating MySQL pool...");

    let pool = create_db().await.context("Failed to create MySQL pool")?;

    info!(
        connections = pool.inner().size(),
        closed = pool.is_closed(),
        "MySQL pool created"
    );

    pool.close().await;
    info!("MySQL pool closed");

    Ok(())
}
