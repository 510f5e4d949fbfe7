//! Thread-safe handle to a store.

use crate::core::Reducer;
use crate::store::error::SharedStoreError;
use crate::store::store::Store;
use std::sync::{Arc, RwLock};

/// A store that several threads can dispatch to.
///
/// Dispatches are serialized by a write lock, so each transition is atomic
/// with respect to every reader. Cloning the handle shares the same store.
///
/// # Example
///
/// ```rust
/// use refold::core::{pure_fn, Message, RawAction};
/// use refold::{SharedStore, Store};
/// use std::thread;
///
/// let reducer = pure_fn(|count: Option<&u64>, message: Message<'_, RawAction>| {
///     let count = count.copied().unwrap_or(0);
///     if message.kind() == "INCREMENT" { count + 1 } else { count }
/// });
/// let shared = SharedStore::new(Store::create(reducer).unwrap());
///
/// let workers: Vec<_> = (0..4)
///     .map(|_| {
///         let shared = shared.clone();
///         thread::spawn(move || {
///             for _ in 0..10 {
///                 shared.dispatch(&RawAction::new("INCREMENT")).unwrap();
///             }
///         })
///     })
///     .collect();
/// for worker in workers {
///     worker.join().unwrap();
/// }
///
/// assert_eq!(*shared.get_state().unwrap(), 40);
/// ```
pub struct SharedStore<R: Reducer> {
    inner: Arc<RwLock<Store<R>>>,
}

impl<R: Reducer> SharedStore<R> {
    pub fn new(store: Store<R>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Dispatch under the write lock, returning the new state.
    pub fn dispatch(
        &self,
        action: &R::Action,
    ) -> Result<Arc<R::State>, SharedStoreError<R::Error>> {
        let mut store = self.inner.write().map_err(|_| SharedStoreError::Poisoned)?;
        store.dispatch(action).map_err(SharedStoreError::Reducer)?;
        Ok(store.get_state())
    }

    /// Handle to the current state.
    pub fn get_state(&self) -> Result<Arc<R::State>, SharedStoreError<R::Error>> {
        let store = self.inner.read().map_err(|_| SharedStoreError::Poisoned)?;
        Ok(store.get_state())
    }

    /// Run a closure against the store under the read lock.
    pub fn read<F, T>(&self, f: F) -> Result<T, SharedStoreError<R::Error>>
    where
        F: FnOnce(&Store<R>) -> T,
    {
        let store = self.inner.read().map_err(|_| SharedStoreError::Poisoned)?;
        Ok(f(&store))
    }
}

impl<R: Reducer> Clone for SharedStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> From<Store<R>> for SharedStore<R> {
    fn from(store: Store<R>) -> Self {
        Self::new(store)
    }
}
