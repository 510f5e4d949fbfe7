//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent builder, a validated configuration value,
//! and a macro for declaring action enums with minimal boilerplate.

pub mod config;
pub mod error;
pub mod macros;
pub mod store;

pub use config::StoreConfig;
pub use error::{BuildError, ConfigError};
pub use store::StoreBuilder;
