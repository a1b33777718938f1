//! Environment fixtures

use std::collections::HashMap;

/// Environment map type used throughout the tests
pub type TestEnv = HashMap<String, String>;

/// The four required variables with throwaway values
pub fn valid_env() -> TestEnv {
    env_from(&[
        ("MYSQL_HOST", "localhost"),
        ("MYSQL_USER", "root"),
        ("MYSQL_PASSWORD", "password"),
        ("MYSQL_DATABASE", "test"),
    ])
}

/// `valid_env` using the older `MYSQL_USERNAME` spelling
pub fn legacy_env() -> TestEnv {
    let mut env = valid_env();
    let user = env.remove("MYSQL_USER").unwrap_or_default();
    env.insert("MYSQL_USERNAME".to_string(), user);
    env
}

/// `valid_env` with extra or overriding variables
pub fn valid_env_with(overrides: &[(&str, &str)]) -> TestEnv {
    let mut env = valid_env();
    env.extend(env_from(overrides));
    env
}

pub fn env_from(pairs: &[(&str, &str)]) -> TestEnv {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
