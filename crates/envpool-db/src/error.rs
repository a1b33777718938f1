//! Pool creation errors

use envpool_common::ConfigError;

/// Failure of [`create_db_with`](crate::create_db_with)
///
/// Driver errors pass through untouched: their message and source chain are
/// exactly what the driver produced.
#[derive(Debug, thiserror::Error)]
pub enum CreateDbError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Driver(E),
}

impl<E> CreateDbError<E>
where
    E: std::error::Error + 'static,
{
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// The driver's own error, if construction got that far
    pub fn into_driver_error(self) -> Option<E> {
        match self {
            Self::Driver(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}
