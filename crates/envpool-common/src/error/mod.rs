//! Error types

mod config_error;

pub use config_error::ConfigError;
