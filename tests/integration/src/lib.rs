//! Integration test utilities for envpool
//!
//! Fake drivers, recording loggers and environment fixtures for exercising
//! the pool factory without a MySQL server.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
