//! The store: owner of the current state.

use crate::builder::{BuildError, StoreConfig};
use crate::core::{Action, Message, Reducer, StateHistory, StateTransition};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier attached to a store's log events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(Uuid);

impl StoreId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Holds one immutable state value and the reducer that replaces it.
///
/// Every transition goes through [`dispatch`](Store::dispatch), which
/// computes `reducer(state, action)` and swaps the result in. The previous
/// state is never mutated, so a handle from [`get_state`](Store::get_state)
/// keeps observing the value it was taken from.
///
/// # Example
///
/// ```rust
/// use refold::core::{pure_fn, Message, RawAction};
/// use refold::Store;
///
/// let reducer = pure_fn(|count: Option<&i64>, message: Message<'_, RawAction>| {
///     let count = count.copied().unwrap_or(0);
///     match message.kind() {
///         "INCREMENT" => count + 1,
///         "DECREMENT" => count - 1,
///         _ => count,
///     }
/// });
///
/// let mut store = Store::create(reducer).unwrap();
/// assert_eq!(*store.get_state(), 0);
///
/// store.dispatch(&RawAction::new("INCREMENT")).unwrap();
/// assert_eq!(*store.get_state(), 1);
///
/// store.dispatch(&RawAction::new("UNKNOWN")).unwrap();
/// assert_eq!(*store.get_state(), 1);
/// ```
pub struct Store<R: Reducer> {
    id: StoreId,
    name: Option<String>,
    reducer: R,
    state: Arc<R::State>,
    history: Option<StateHistory<R::State>>,
    dispatch_count: u64,
}

impl<R: Reducer> Store<R> {
    /// Create a store whose state is `reducer(None, Init)`.
    ///
    /// A reducer error during initialization is returned unchanged.
    pub fn create(reducer: R) -> Result<Self, R::Error> {
        Self::init(reducer, &StoreConfig::default())
    }

    /// Create a store with the given configuration.
    pub fn with_config(reducer: R, config: &StoreConfig) -> Result<Self, BuildError<R::Error>> {
        config.check().map_err(BuildError::InvalidConfig)?;
        Self::init(reducer, config).map_err(BuildError::Reducer)
    }

    /// Build from a config that has already been validated.
    pub(crate) fn init(reducer: R, config: &StoreConfig) -> Result<Self, R::Error> {
        let id = StoreId::new();
        let state = reducer.reduce(None, Message::Init)?;

        let history = match (config.record_history, config.history_limit) {
            (false, _) => None,
            (true, None) => Some(StateHistory::new()),
            (true, Some(limit)) => Some(StateHistory::with_limit(limit)),
        };

        tracing::debug!(
            store = %id,
            name = config.name.as_deref().unwrap_or_default(),
            record_history = config.record_history,
            "store created"
        );

        Ok(Self {
            id,
            name: config.name.clone(),
            reducer,
            state: Arc::new(state),
            history,
            dispatch_count: 0,
        })
    }

    /// Handle to the current state.
    ///
    /// The value behind the handle is never modified by later dispatches.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&self.state)
    }

    /// Borrow the current state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Replace the current state with `reducer(state, action)`.
    ///
    /// Returns the new state, which is exactly the value the reducer
    /// produced. If the reducer fails, the state is left untouched and the
    /// reducer's error is returned as-is.
    pub fn dispatch(&mut self, action: &R::Action) -> Result<&R::State, R::Error> {
        let next = match self
            .reducer
            .reduce(Some(self.state.as_ref()), Message::Action(action))
        {
            Ok(next) => next,
            Err(error) => {
                tracing::warn!(
                    store = %self.id,
                    action = action.kind(),
                    %error,
                    "reducer failed, state unchanged"
                );
                return Err(error);
            }
        };

        self.dispatch_count += 1;
        let changed = next != *self.state;

        tracing::trace!(
            store = %self.id,
            action = action.kind(),
            sequence = self.dispatch_count,
            changed,
            "dispatched action"
        );

        if let Some(history) = self.history.as_mut() {
            history.push(StateTransition {
                sequence: self.dispatch_count,
                action: action.kind().to_string(),
                from: self.state.as_ref().clone(),
                to: next.clone(),
                timestamp: Utc::now(),
            });
        }

        self.state = Arc::new(next);
        Ok(self.state.as_ref())
    }

    /// Number of successful dispatches so far.
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }

    /// Recorded transitions, when history is enabled.
    pub fn history(&self) -> Option<&StateHistory<R::State>> {
        self.history.as_ref()
    }

    /// Identifier attached to this store's log events.
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Configured label, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The reducer driving this store.
    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    /// Consume the store, keeping only its final state.
    pub fn into_state(self) -> Arc<R::State> {
        self.state
    }
}

impl<R: Reducer> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("state", &self.state)
            .field("dispatch_count", &self.dispatch_count)
            .finish_non_exhaustive()
    }
}
