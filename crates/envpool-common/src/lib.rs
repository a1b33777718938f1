//! # envpool-common
//!
//! Shared utilities: environment sources, pool configuration, errors and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    load_dotenv, parse_bool, parse_int, EnvSource, PoolConfig, ProcessEnv, DEFAULT_CONNECTION_LIMIT,
    DEFAULT_QUEUE_LIMIT, DEFAULT_WAIT_FOR_CONNECTIONS, REQUIRED_VARS,
};
pub use error::ConfigError;
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
