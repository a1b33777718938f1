//! Pool drivers
//!
//! A driver is the external library that owns pool mechanics. The factory
//! only ever calls [`PoolDriver::create_pool`] once per pool.

mod mysql;

use async_trait::async_trait;
use envpool_common::PoolConfig;

pub use mysql::{MySqlDriver, MySqlPoolHandle};

/// Constructs connection pools from a validated configuration
#[async_trait]
pub trait PoolDriver: Send + Sync {
    type Pool: DbPool;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Build a pool. Implementations may connect eagerly or lazily.
    async fn create_pool(&self, config: &PoolConfig) -> Result<Self::Pool, Self::Error>;
}

/// The minimum surface of a pool returned by a driver
#[async_trait]
pub trait DbPool: Send + Sync {
    /// Close every connection and stop handing out new ones
    async fn close(&self);

    /// Whether [`DbPool::close`] has been called
    fn is_closed(&self) -> bool;
}
