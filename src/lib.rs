//! Refold: a pure functional reducer/store
//!
//! Refold follows a "pure core, imperative shell" split. A reducer is a pure
//! function from the previous state and an action to the next state; the
//! store is the single place that state gets replaced.
//!
//! # Core Concepts
//!
//! - **State**: any cloneable, comparable, serializable value
//! - **Action**: an intent to change state, identified by its `kind`
//! - **Reducer**: `(Option<&State>, Message<Action>) -> Result<State, Error>`
//! - **Store**: owns the current state and folds dispatched actions into it
//!
//! Actions a reducer does not recognize leave the state unchanged. A
//! reducer error leaves it unchanged too, and reaches the caller as-is.
//!
//! # Example
//!
//! ```rust
//! use refold::action_enum;
//! use refold::core::{Message, Reducer};
//! use refold::Store;
//! use serde::{Deserialize, Serialize};
//! use std::convert::Infallible;
//!
//! #[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
//! struct Counter {
//!     count: i64,
//! }
//!
//! action_enum! {
//!     enum CounterAction {
//!         Increment = "INCREMENT",
//!         Decrement = "DECREMENT",
//!         Unknown = "UNKNOWN",
//!     }
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!     type Error = Infallible;
//!
//!     fn reduce(
//!         &self,
//!         state: Option<&Counter>,
//!         message: Message<'_, CounterAction>,
//!     ) -> Result<Counter, Infallible> {
//!         let state = state.cloned().unwrap_or_default();
//!         Ok(match message.action() {
//!             Some(CounterAction::Increment) => Counter { count: state.count + 1 },
//!             Some(CounterAction::Decrement) => Counter { count: state.count - 1 },
//!             _ => state,
//!         })
//!     }
//! }
//!
//! let mut store = Store::create(CounterReducer).unwrap();
//! assert_eq!(store.state(), &Counter { count: 0 });
//!
//! store.dispatch(&CounterAction::Increment).unwrap();
//! assert_eq!(store.state(), &Counter { count: 1 });
//!
//! store.dispatch(&CounterAction::Decrement).unwrap();
//! store.dispatch(&CounterAction::Unknown).unwrap();
//! assert_eq!(store.state(), &Counter { count: 0 });
//! ```

pub mod builder;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use crate::builder::{BuildError, StoreBuilder, StoreConfig};
pub use crate::core::{fold, Action, Message, RawAction, Reducer, State, StateHistory};
pub use crate::store::{SharedStore, SharedStoreError, Store, StoreId};
