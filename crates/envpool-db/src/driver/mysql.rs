//! MySQL driver backed by SQLx

use std::time::Duration;

use async_trait::async_trait;
use envpool_common::PoolConfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::MySql;

use super::{DbPool, PoolDriver};

/// Deadline for an acquire, including opening a new connection
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds [`MySqlPool`]s through SQLx
///
/// By default the pool is created lazily: no connection is opened until the
/// first acquire, so construction only fails on a bad configuration.
#[derive(Debug, Clone)]
pub struct MySqlDriver {
    eager: bool,
    acquire_timeout: Duration,
}

impl Default for MySqlDriver {
    fn default() -> Self {
        Self {
            eager: false,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl MySqlDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a first connection while creating the pool so that bad
    /// credentials or an unreachable host surface immediately.
    #[must_use]
    pub fn eager(mut self) -> Self {
        self.eager = true;
        self
    }

    /// Deadline for [`MySqlPoolHandle::acquire`], connection setup included
    #[must_use]
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    fn connect_options(config: &PoolConfig) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        match config.port {
            Some(port) => options.port(port),
            None => options,
        }
    }

    fn pool_options(&self, config: &PoolConfig) -> MySqlPoolOptions {
        if config.queue_limit > 0 {
            tracing::warn!(
                queue_limit = config.queue_limit,
                "MySQL driver does not bound the acquire queue; queue_limit is ignored"
            );
        }

        // SQLx also bounds connection setup by the acquire timeout, so
        // `wait_for_connections` is applied in `MySqlPoolHandle::acquire` instead.
        MySqlPoolOptions::new()
            .max_connections(config.connection_limit.max(1))
            .min_connections(0)
            .acquire_timeout(self.acquire_timeout)
    }
}

#[async_trait]
impl PoolDriver for MySqlDriver {
    type Pool = MySqlPoolHandle;
    type Error = sqlx::Error;

    fn name(&self) -> &'static str {
        "sqlx-mysql"
    }

    async fn create_pool(&self, config: &PoolConfig) -> Result<Self::Pool, Self::Error> {
        let options = Self::connect_options(config);
        let pool_options = self.pool_options(config);

        let pool = if self.eager {
            pool_options.connect_with(options).await?
        } else {
            pool_options.connect_lazy_with(options)
        };

        Ok(MySqlPoolHandle {
            pool,
            wait_for_connections: config.wait_for_connections,
        })
    }
}

/// A pool produced by [`MySqlDriver`]
#[derive(Debug, Clone)]
pub struct MySqlPoolHandle {
    pool: MySqlPool,
    wait_for_connections: bool,
}

impl MySqlPoolHandle {
    /// Check out a connection.
    ///
    /// With `wait_for_connections` disabled, an exhausted pool (every
    /// connection open and none idle) fails at once with
    /// [`sqlx::Error::PoolTimedOut`] instead of queueing. A pool below its
    /// limit still opens a new connection.
    pub async fn acquire(&self) -> Result<PoolConnection<MySql>, sqlx::Error> {
        if !self.wait_for_connections {
            if let Some(conn) = self.pool.try_acquire() {
                return Ok(conn);
            }
            if self.pool.size() >= self.pool.options().get_max_connections() {
                return Err(sqlx::Error::PoolTimedOut);
            }
        }
        self.pool.acquire().await
    }

    #[must_use]
    pub fn waits_for_connections(&self) -> bool {
        self.wait_for_connections
    }

    /// The underlying SQLx pool, for running queries
    #[must_use]
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    #[must_use]
    pub fn into_inner(self) -> MySqlPool {
        self.pool
    }
}

impl From<MySqlPoolHandle> for MySqlPool {
    fn from(handle: MySqlPoolHandle) -> Self {
        handle.pool
    }
}

#[async_trait]
impl DbPool for MySqlPoolHandle {
    async fn close(&self) {
        self.pool.close().await;
    }

    fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
