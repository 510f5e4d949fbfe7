//! Build and configuration errors.

use std::error::Error as StdError;
use thiserror::Error;

/// A single problem found in a [`StoreConfig`](super::StoreConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Store name is set but blank")]
    BlankName,

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("History limit ({limit}) is set but history recording is disabled")]
    HistoryLimitWithoutRecording { limit: usize },

    #[error("Invalid store configuration: {0}")]
    Parse(String),
}

/// Errors that can occur when building a store.
#[derive(Debug, Error)]
pub enum BuildError<E: StdError + 'static> {
    #[error("Reducer not specified. Call .reducer(reducer) before .build()")]
    MissingReducer,

    #[error("Invalid store configuration: {}", format_violations(.0))]
    InvalidConfig(Vec<ConfigError>),

    #[error("Initial reduction failed: {0}")]
    Reducer(#[source] E),
}

fn format_violations(violations: &[ConfigError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
