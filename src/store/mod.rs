//! The imperative shell around the pure core.
//!
//! A [`Store`] owns the current state and routes every transition through
//! its reducer. [`SharedStore`] puts a store behind a lock for callers on
//! several threads.

mod error;
mod shared;
mod store;

pub use error::SharedStoreError;
pub use shared::SharedStore;
pub use store::{Store, StoreId};
