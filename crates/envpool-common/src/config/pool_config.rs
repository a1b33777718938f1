//! MySQL pool configuration assembled from environment variables

use std::fmt;

use super::env_source::EnvSource;
use super::parse::{leading_int, parse_bool};
use crate::error::ConfigError;

pub const MYSQL_HOST: &str = "MYSQL_HOST";
pub const MYSQL_USER: &str = "MYSQL_USER";
/// Older name for `MYSQL_USER`, still honoured when `MYSQL_USER` is unset
pub const MYSQL_USERNAME: &str = "MYSQL_USERNAME";
pub const MYSQL_PASSWORD: &str = "MYSQL_PASSWORD";
pub const MYSQL_DATABASE: &str = "MYSQL_DATABASE";
pub const MYSQL_PORT: &str = "MYSQL_PORT";
pub const MYSQL_WAIT_FOR_CONNECTIONS: &str = "MYSQL_WAIT_FOR_CONNECTIONS";
pub const MYSQL_CONNECTION_LIMIT: &str = "MYSQL_CONNECTION_LIMIT";
pub const MYSQL_QUEUE_LIMIT: &str = "MYSQL_QUEUE_LIMIT";

/// Required variables, in the order they are reported when missing
pub const REQUIRED_VARS: [&str; 4] = [MYSQL_HOST, MYSQL_USER, MYSQL_PASSWORD, MYSQL_DATABASE];

pub const DEFAULT_WAIT_FOR_CONNECTIONS: bool = true;
pub const DEFAULT_CONNECTION_LIMIT: u32 = 10;
/// 0 means the wait queue is unbounded
pub const DEFAULT_QUEUE_LIMIT: u32 = 0;

/// Connection pool configuration handed to a driver
#[derive(Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    /// `None` lets the driver pick its default port
    pub port: Option<u16>,
    /// Queue callers when every connection is busy instead of failing at once
    pub wait_for_connections: bool,
    /// Maximum number of open connections
    pub connection_limit: u32,
    /// Maximum number of queued acquire requests, 0 for no limit
    pub queue_limit: u32,
}

impl PoolConfig {
    /// Build a configuration from an environment source
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingVars`] listing every required variable
    /// that is unset or empty. Optional values never cause an error.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Result<Self, ConfigError> {
        let required = |key: &str| env.var(key).filter(|v| !v.is_empty());

        let host = required(MYSQL_HOST);
        let user = required(MYSQL_USER).or_else(|| required(MYSQL_USERNAME));
        let password = required(MYSQL_PASSWORD);
        let database = required(MYSQL_DATABASE);

        match (host, user, password, database) {
            (Some(host), Some(user), Some(password), Some(database)) => Ok(Self {
                host,
                user,
                password,
                database,
                port: optional_port(env),
                wait_for_connections: parse_bool(
                    env.var(MYSQL_WAIT_FOR_CONNECTIONS).as_deref(),
                    DEFAULT_WAIT_FOR_CONNECTIONS,
                ),
                connection_limit: optional_number(env, MYSQL_CONNECTION_LIMIT)
                    .unwrap_or(DEFAULT_CONNECTION_LIMIT),
                queue_limit: optional_number(env, MYSQL_QUEUE_LIMIT)
                    .unwrap_or(DEFAULT_QUEUE_LIMIT),
            }),
            (host, user, password, database) => {
                let present = [
                    host.is_some(),
                    user.is_some(),
                    password.is_some(),
                    database.is_some(),
                ];
                let missing = REQUIRED_VARS
                    .iter()
                    .zip(present)
                    .filter(|(_, present)| !present)
                    .map(|(name, _)| *name)
                    .collect();
                Err(ConfigError::MissingVars(missing))
            }
        }
    }
}

/// Read an optional integer that must fit `T`.
///
/// Unset or unparseable values give `None` silently; a number outside the
/// range of `T` (negative limits, oversized ports) is logged and dropped.
fn optional_number<E, T>(env: &E, key: &'static str) -> Option<T>
where
    E: EnvSource + ?Sized,
    T: TryFrom<i64>,
{
    let n = leading_int(&env.var(key)?)?;
    match T::try_from(n) {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(var = key, value = n, "Value out of range, using default");
            None
        }
    }
}

/// `MYSQL_PORT`, where 0 is rejected like any other out-of-range value
fn optional_port<E: EnvSource + ?Sized>(env: &E) -> Option<u16> {
    match optional_number(env, MYSQL_PORT) {
        Some(0) => {
            tracing::warn!(var = MYSQL_PORT, value = 0, "Value out of range, using default");
            None
        }
        port => port,
    }
}

impl fmt::Debug for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("port", &self.port)
            .field("wait_for_connections", &self.wait_for_connections)
            .field("connection_limit", &self.connection_limit)
            .field("queue_limit", &self.queue_limit)
            .finish()
    }
}
