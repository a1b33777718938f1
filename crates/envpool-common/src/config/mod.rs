//! Environment-driven configuration

mod env_source;
mod parse;
mod pool_config;

pub use env_source::{load_dotenv, EnvSource, ProcessEnv};
pub use parse::{parse_bool, parse_int};
pub use pool_config::{
    PoolConfig, DEFAULT_CONNECTION_LIMIT, DEFAULT_QUEUE_LIMIT, DEFAULT_WAIT_FOR_CONNECTIONS,
    MYSQL_CONNECTION_LIMIT, MYSQL_DATABASE, MYSQL_HOST, MYSQL_PASSWORD, MYSQL_PORT,
    MYSQL_QUEUE_LIMIT, MYSQL_USER, MYSQL_USERNAME, MYSQL_WAIT_FOR_CONNECTIONS, REQUIRED_VARS,
};
