//! # envpool-db
//!
//! Builds a MySQL connection pool from environment variables.
//!
//! ## Overview
//!
//! The factory validates the required `MYSQL_*` variables, coerces the
//! optional tuning values and hands the result to a [`PoolDriver`]. The
//! environment source, the driver and the logger can all be swapped:
//!
//! - [`EnvSource`]: where variables come from (the process environment by default)
//! - [`PoolDriver`]: what actually constructs the pool ([`MySqlDriver`] by default)
//! - [`PoolLogger`]: where progress and failures are reported ([`TracingLogger`] by default)
//!
//! Pool mechanics belong to the driver; this crate only configures it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use envpool_db::{create_db, DbPool};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_db().await?;
//!     // ... run queries through pool.inner()
//!     pool.close().await;
//!     Ok(())
//! }
//! ```

pub mod driver;
pub mod error;
pub mod factory;
pub mod logger;

// Re-export commonly used types
pub use driver::{DbPool, MySqlDriver, MySqlPoolHandle, PoolDriver};
pub use envpool_common::{ConfigError, EnvSource, PoolConfig, ProcessEnv};
pub use error::CreateDbError;
pub use factory::{create_db, create_db_with, DbFactory};
pub use logger::{PoolLogger, TracingLogger};
