//! Core State trait for store state.
//!
//! A store's state is an opaque, application-defined value. The store only
//! needs to clone it, compare it, and (for history) serialize it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values a store can hold.
///
/// States are immutable values. A store replaces its state wholesale on
/// each transition and never mutates it in place.
///
/// # Required Traits
///
/// - `Clone`: reducers derive the next state from a borrowed previous one
/// - `PartialEq`: the store detects no-op transitions by comparison
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for history
///
/// Implemented automatically for every type meeting these bounds.
///
/// # Example
///
/// ```rust
/// use refold::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
/// struct Counter {
///     count: i64,
/// }
///
/// fn assert_state<S: State>() {}
/// assert_state::<Counter>();
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
}

impl<T> State for T where
    T: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
}
