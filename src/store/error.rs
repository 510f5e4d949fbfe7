//! Store error types.

use std::error::Error as StdError;
use thiserror::Error;

/// Errors returned by a [`SharedStore`](super::SharedStore).
///
/// A plain [`Store`](super::Store) returns its reducer's error unchanged;
/// sharing a store across threads adds lock poisoning.
#[derive(Debug, Error)]
pub enum SharedStoreError<E: StdError + 'static> {
    /// The reducer rejected the action; state is unchanged
    #[error("Reducer failed: {0}")]
    Reducer(#[source] E),

    /// A reducer panicked while holding the store lock
    #[error("Store lock poisoned by a panicking reducer")]
    Poisoned,
}

impl<E: StdError + 'static> SharedStoreError<E> {
    /// The reducer's error, if that is what this is.
    pub fn into_reducer_error(self) -> Option<E> {
        match self {
            Self::Reducer(error) => Some(error),
            Self::Poisoned => None,
        }
    }
}
