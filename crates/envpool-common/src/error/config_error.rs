//! Configuration errors

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "Database environment variables are not set: {}. Please check your .env file.",
        .0.join(", ")
    )]
    MissingVars(Vec<&'static str>),
}

impl ConfigError {
    /// Names of the required variables that were absent or empty
    #[must_use]
    pub fn missing_vars(&self) -> &[&'static str] {
        match self {
            Self::MissingVars(vars) => vars,
        }
    }
}
