//! Progress and failure reporting for pool creation

use std::error::Error;
use std::sync::Arc;

use envpool_common::PoolConfig;

/// Receives log output from the factory
///
/// Only `error` is mandatory; debug output is dropped unless overridden.
pub trait PoolLogger: Send + Sync {
    fn error(&self, message: &str, error: &(dyn Error + 'static));

    fn debug(&self, _message: &str) {}

    /// Report the configuration about to be handed to the driver.
    /// The default renders it through the password-redacting `Debug` impl.
    fn debug_config(&self, config: &PoolConfig) {
        self.debug(&format!("Creating MySQL pool with config {config:?}"));
    }
}

impl<T: PoolLogger + ?Sized> PoolLogger for Arc<T> {
    fn error(&self, message: &str, error: &(dyn Error + 'static)) {
        (**self).error(message, error);
    }

    fn debug(&self, message: &str) {
        (**self).debug(message);
    }

    fn debug_config(&self, config: &PoolConfig) {
        (**self).debug_config(config);
    }
}

/// Forwards to `tracing` events under the `envpool` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl PoolLogger for TracingLogger {
    fn error(&self, message: &str, error: &(dyn Error + 'static)) {
        tracing::error!(target: "envpool", error = %error, "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "envpool", "{message}");
    }

    fn debug_config(&self, config: &PoolConfig) {
        tracing::debug!(
            target: "envpool",
            host = %config.host,
            user = %config.user,
            database = %config.database,
            port = ?config.port,
            wait_for_connections = config.wait_for_connections,
            connection_limit = config.connection_limit,
            queue_limit = config.queue_limit,
            "Creating MySQL pool with config"
        );
    }
}
