//! Pool factory
//!
//! Validates the environment, then makes exactly one call to the driver.

use std::error::Error;
use std::sync::Arc;

use envpool_common::{EnvSource, PoolConfig, ProcessEnv};

use crate::driver::{MySqlDriver, MySqlPoolHandle, PoolDriver};
use crate::error::CreateDbError;
use crate::logger::{PoolLogger, TracingLogger};

/// Build a pool from an environment source with the given driver.
///
/// Missing required variables fail before the driver is touched and are not
/// logged. A driver failure is logged through `logger` and returned as-is
/// inside [`CreateDbError::Driver`].
pub async fn create_db_with<E, D>(
    env: &E,
    driver: &D,
    logger: &dyn PoolLogger,
) -> Result<D::Pool, CreateDbError<D::Error>>
where
    E: EnvSource + Sync + ?Sized,
    D: PoolDriver + ?Sized,
{
    let config = PoolConfig::from_env(env)?;

    logger.debug(&format!("Using MySQL driver {}", driver.name()));
    logger.debug_config(&config);

    match driver.create_pool(&config).await {
        Ok(pool) => {
            logger.debug("MySQL pool created");
            Ok(pool)
        }
        Err(err) => {
            logger.error("Failed to create MySQL connection pool", &err);
            let mut cause = err.source();
            while let Some(e) = cause {
                logger.debug(&format!("Caused by: {e}"));
                cause = e.source();
            }
            Err(CreateDbError::Driver(err))
        }
    }
}

/// Build a pool from the process environment with the SQLx MySQL driver
pub async fn create_db() -> Result<MySqlPoolHandle, CreateDbError<sqlx::Error>> {
    DbFactory::new().create().await
}

/// Builder over the injectable pieces of [`create_db_with`]
///
/// ```rust,ignore
/// let pool = DbFactory::new()
///     .env(HashMap::from([("MYSQL_HOST", "db"), /* ... */]))
///     .logger(Arc::new(MyLogger))
///     .create()
///     .await?;
/// ```
pub struct DbFactory<E = ProcessEnv, D = MySqlDriver> {
    env: E,
    driver: D,
    logger: Arc<dyn PoolLogger>,
}

impl DbFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            env: ProcessEnv,
            driver: MySqlDriver::default(),
            logger: Arc::new(TracingLogger),
        }
    }
}

impl Default for DbFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, D> DbFactory<E, D> {
    /// Read variables from `env` instead of the process environment
    pub fn env<E2: EnvSource>(self, env: E2) -> DbFactory<E2, D> {
        DbFactory {
            env,
            driver: self.driver,
            logger: self.logger,
        }
    }

    pub fn driver<D2: PoolDriver>(self, driver: D2) -> DbFactory<E, D2> {
        DbFactory {
            env: self.env,
            driver,
            logger: self.logger,
        }
    }

    pub fn logger(mut self, logger: Arc<dyn PoolLogger>) -> Self {
        self.logger = logger;
        self
    }
}

impl<E, D> DbFactory<E, D>
where
    E: EnvSource + Sync,
    D: PoolDriver,
{
    /// Validate the environment and construct the pool
    pub async fn create(&self) -> Result<D::Pool, CreateDbError<D::Error>> {
        create_db_with(&self.env, &self.driver, self.logger.as_ref()).await
    }
}
