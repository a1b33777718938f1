//! Environment variable sources
//!
//! Pool configuration is read through [`EnvSource`] rather than `std::env`
//! directly, so tests can hand in a plain map.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A string-keyed source of configuration values
pub trait EnvSource {
    /// Look up a variable. `None` means the variable is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<K, V, S> EnvSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.as_ref().to_owned())
    }
}

impl<K, V> EnvSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.as_ref().to_owned())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Load a `.env` file into the process environment if one is present.
///
/// Returns `true` when a file was loaded. A missing file is not an error.
pub fn load_dotenv() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load .env file");
            false
        }
    }
}
