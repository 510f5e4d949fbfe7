//! Builder for constructing stores.

use crate::builder::config::StoreConfig;
use crate::builder::error::BuildError;
use crate::core::Reducer;
use crate::store::Store;

/// Builder for constructing stores with a fluent API.
///
/// # Example
///
/// ```rust
/// use refold::builder::StoreBuilder;
/// use refold::core::{pure_fn, Action, Message, RawAction};
///
/// let reducer = pure_fn(|items: Option<&Vec<String>>, message: Message<'_, RawAction>| {
///     let mut items = items.cloned().unwrap_or_default();
///     if let Some(text) = message
///         .action()
///         .filter(|a| a.kind() == "ADD")
///         .and_then(|a| a.get("text")?.as_str())
///     {
///         items.push(text.to_string());
///     }
///     items
/// });
///
/// let mut store = StoreBuilder::new()
///     .reducer(reducer)
///     .name("todos")
///     .record_history(Some(10))
///     .build()
///     .unwrap();
///
/// store.dispatch(&RawAction::new("ADD").with("text", "write docs")).unwrap();
/// assert_eq!(store.state(), &vec!["write docs".to_string()]);
/// assert_eq!(store.history().map(|h| h.len()), Some(1));
/// ```
pub struct StoreBuilder<R: Reducer> {
    reducer: Option<R>,
    config: StoreConfig,
}

impl<R: Reducer> StoreBuilder<R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            reducer: None,
            config: StoreConfig::default(),
        }
    }

    /// Set the reducer (required).
    pub fn reducer(mut self, reducer: R) -> Self {
        self.reducer = Some(reducer);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Label the store's log events.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Turn on history, optionally keeping only the latest `limit` entries.
    /// `None` keeps every transition for the life of the store.
    pub fn record_history(mut self, limit: Option<usize>) -> Self {
        self.config.record_history = true;
        self.config.history_limit = limit;
        self
    }

    /// Build the store.
    /// Returns an error if the reducer is missing, the config is invalid,
    /// or the reducer fails to produce an initial state.
    pub fn build(self) -> Result<Store<R>, BuildError<R::Error>> {
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;
        self.config.check().map_err(BuildError::InvalidConfig)?;
        Store::init(reducer, &self.config).map_err(BuildError::Reducer)
    }
}

impl<R: Reducer> Default for StoreBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
