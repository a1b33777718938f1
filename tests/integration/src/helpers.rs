//! Test doubles for the pool factory
//!
//! `FakeDriver` records every configuration it is handed and either returns
//! a `FakePool` or a scripted error. `RecordingLogger` captures log calls so
//! tests can assert on exactly what was reported.

use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use envpool_common::PoolConfig;
use envpool_db::{DbPool, PoolDriver, PoolLogger};

/// Error returned by a failing [`FakeDriver`]
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct FakeDriverError {
    pub message: String,
    #[source]
    pub cause: Option<std::io::Error>,
}

/// A pool that only tracks whether it was closed
#[derive(Debug, Default)]
pub struct FakePool {
    pub id: usize,
    closed: AtomicBool,
}

#[async_trait]
impl DbPool for FakePool {
    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
enum Outcome {
    Succeed,
    Fail { message: String, cause: Option<String> },
}

/// Driver double; clones share the same call log
#[derive(Debug, Clone)]
pub struct FakeDriver {
    outcome: Outcome,
    calls: Arc<Mutex<Vec<PoolConfig>>>,
}

impl FakeDriver {
    pub fn succeeding() -> Self {
        Self {
            outcome: Outcome::Succeed,
            calls: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Outcome::Fail {
                message: message.to_string(),
                cause: None,
            },
            calls: Arc::default(),
        }
    }

    /// Fail with an error whose `source()` is an I/O error carrying `cause`
    pub fn failing_with_cause(message: &str, cause: &str) -> Self {
        Self {
            outcome: Outcome::Fail {
                message: message.to_string(),
                cause: Some(cause.to_string()),
            },
            calls: Arc::default(),
        }
    }

    /// Every configuration passed to `create_pool`, in call order
    pub fn calls(&self) -> Vec<PoolConfig> {
        self.calls.lock().expect("driver call log poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("driver call log poisoned").len()
    }
}

#[async_trait]
impl PoolDriver for FakeDriver {
    type Pool = FakePool;
    type Error = FakeDriverError;

    fn name(&self) -> &'static str {
        "fake"
    }

    async fn create_pool(&self, config: &PoolConfig) -> Result<FakePool, FakeDriverError> {
        let id = {
            let mut calls = self.calls.lock().expect("driver call log poisoned");
            calls.push(config.clone());
            calls.len()
        };

        match &self.outcome {
            Outcome::Succeed => Ok(FakePool {
                id,
                ..FakePool::default()
            }),
            Outcome::Fail { message, cause } => Err(FakeDriverError {
                message: message.clone(),
                cause: cause.as_deref().map(std::io::Error::other),
            }),
        }
    }
}

/// One captured log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Error { message: String, error: String },
    Debug(String),
}

/// Logger double that keeps every call in order
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().expect("log poisoned").clone()
    }

    pub fn errors(&self) -> Vec<(String, String)> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                LogEntry::Error { message, error } => Some((message, error)),
                LogEntry::Debug(_) => None,
            })
            .collect()
    }

    pub fn debug_lines(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                LogEntry::Debug(line) => Some(line),
                LogEntry::Error { .. } => None,
            })
            .collect()
    }

    fn push(&self, entry: LogEntry) {
        self.entries.lock().expect("log poisoned").push(entry);
    }
}

impl PoolLogger for RecordingLogger {
    fn error(&self, message: &str, error: &(dyn Error + 'static)) {
        self.push(LogEntry::Error {
            message: message.to_string(),
            error: error.to_string(),
        });
    }

    fn debug(&self, message: &str) {
        self.push(LogEntry::Debug(message.to_string()));
    }
}

/// Logger that only implements the mandatory `error` call
#[derive(Debug, Default)]
pub struct ErrorOnlyLogger {
    pub errors: Mutex<Vec<String>>,
}

impl PoolLogger for ErrorOnlyLogger {
    fn error(&self, message: &str, _error: &(dyn Error + 'static)) {
        self.errors
            .lock()
            .expect("log poisoned")
            .push(message.to_string());
    }
}
