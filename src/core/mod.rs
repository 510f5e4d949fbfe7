//! Core reducer/store types and logic.
//!
//! This module contains the pure functional core:
//! - State values via the `State` trait
//! - Actions and the `Message` a reducer receives
//! - The `Reducer` trait, closure adapters, and a store-free `fold`
//! - Immutable transition history
//!
//! Nothing in this module holds mutable state; the store in
//! [`crate::store`] is the only place a state gets replaced.

mod action;
mod history;
mod reducer;
mod state;

pub use action::{Action, Message, RawAction};
pub use history::{StateHistory, StateTransition};
pub use reducer::{fold, pure_fn, reducer_fn, FnReducer, PureFn, Reducer};
pub use state::State;
