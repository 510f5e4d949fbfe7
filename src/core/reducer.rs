//! Reducers: pure transition functions from (previous state, action) to
//! next state.

use super::action::{Action, Message};
use super::state::State;
use std::convert::Infallible;
use std::error::Error;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure function computing the next state from the previous one.
///
/// `state` is `None` only for the `Init` message, in which case the reducer
/// supplies its own default. Reducers receive shared references and so can
/// never mutate their inputs. Determinism (equal inputs yield equal outputs)
/// is a contract the implementor upholds.
///
/// Actions the reducer does not recognize must return the previous state
/// unchanged; that is a defined no-op, not an error.
///
/// # Example
///
/// ```rust
/// use refold::core::{Action, Message, Reducer};
/// use serde::{Deserialize, Serialize};
/// use std::convert::Infallible;
///
/// #[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
/// struct Counter {
///     count: i64,
/// }
///
/// #[derive(Debug)]
/// enum CounterAction {
///     Increment,
///     Decrement,
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Increment => "INCREMENT",
///             Self::Decrement => "DECREMENT",
///         }
///     }
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = Counter;
///     type Action = CounterAction;
///     type Error = Infallible;
///
///     fn reduce(
///         &self,
///         state: Option<&Counter>,
///         message: Message<'_, CounterAction>,
///     ) -> Result<Counter, Infallible> {
///         let state = state.cloned().unwrap_or_default();
///         Ok(match message.action() {
///             Some(CounterAction::Increment) => Counter { count: state.count + 1 },
///             Some(CounterAction::Decrement) => Counter { count: state.count - 1 },
///             None => state,
///         })
///     }
/// }
///
/// let initial = CounterReducer.reduce(None, Message::Init).unwrap();
/// assert_eq!(initial, Counter { count: 0 });
/// ```
pub trait Reducer: Send + Sync {
    type State: State;
    type Action: Action;
    type Error: Error + Send + Sync + 'static;

    fn reduce(
        &self,
        state: Option<&Self::State>,
        message: Message<'_, Self::Action>,
    ) -> Result<Self::State, Self::Error>;
}

impl<R: Reducer + ?Sized> Reducer for Arc<R> {
    type State = R::State;
    type Action = R::Action;
    type Error = R::Error;

    fn reduce(
        &self,
        state: Option<&Self::State>,
        message: Message<'_, Self::Action>,
    ) -> Result<Self::State, Self::Error> {
        (**self).reduce(state, message)
    }
}

impl<R: Reducer + ?Sized> Reducer for Box<R> {
    type State = R::State;
    type Action = R::Action;
    type Error = R::Error;

    fn reduce(
        &self,
        state: Option<&Self::State>,
        message: Message<'_, Self::Action>,
    ) -> Result<Self::State, Self::Error> {
        (**self).reduce(state, message)
    }
}

/// Reducer backed by a fallible closure. Built with [`reducer_fn`].
pub struct FnReducer<S, A, E, F> {
    f: F,
    _phantom: PhantomData<fn() -> (S, A, E)>,
}

impl<S, A, E, F> Reducer for FnReducer<S, A, E, F>
where
    S: State,
    A: Action,
    E: Error + Send + Sync + 'static,
    F: Fn(Option<&S>, Message<'_, A>) -> Result<S, E> + Send + Sync,
{
    type State = S;
    type Action = A;
    type Error = E;

    fn reduce(&self, state: Option<&S>, message: Message<'_, A>) -> Result<S, E> {
        (self.f)(state, message)
    }
}

/// Create a reducer from a fallible closure.
///
/// # Example
///
/// ```rust
/// use refold::core::{reducer_fn, Message, RawAction, Reducer};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("value overflowed")]
/// struct Overflow;
///
/// let reducer = reducer_fn(|state: Option<&u8>, message: Message<'_, RawAction>| {
///     let value = state.copied().unwrap_or(250);
///     match message.kind() {
///         "BUMP" => value.checked_add(5).ok_or(Overflow),
///         _ => Ok(value),
///     }
/// });
///
/// let start = reducer.reduce(None, Message::Init).unwrap();
/// let bump = RawAction::new("BUMP");
/// let next = reducer.reduce(Some(&start), Message::Action(&bump)).unwrap();
/// assert_eq!(next, 255);
/// assert!(reducer.reduce(Some(&next), Message::Action(&bump)).is_err());
/// ```
pub fn reducer_fn<S, A, E, F>(f: F) -> FnReducer<S, A, E, F>
where
    S: State,
    A: Action,
    E: Error + Send + Sync + 'static,
    F: Fn(Option<&S>, Message<'_, A>) -> Result<S, E> + Send + Sync,
{
    FnReducer {
        f,
        _phantom: PhantomData,
    }
}

/// Reducer backed by an infallible closure. Built with [`pure_fn`].
pub struct PureFn<S, A, F> {
    f: F,
    _phantom: PhantomData<fn() -> (S, A)>,
}

impl<S, A, F> Reducer for PureFn<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(Option<&S>, Message<'_, A>) -> S + Send + Sync,
{
    type State = S;
    type Action = A;
    type Error = Infallible;

    fn reduce(&self, state: Option<&S>, message: Message<'_, A>) -> Result<S, Infallible> {
        Ok((self.f)(state, message))
    }
}

/// Create a reducer from a closure that cannot fail.
pub fn pure_fn<S, A, F>(f: F) -> PureFn<S, A, F>
where
    S: State,
    A: Action,
    F: Fn(Option<&S>, Message<'_, A>) -> S + Send + Sync,
{
    PureFn {
        f,
        _phantom: PhantomData,
    }
}

/// Fold a sequence of actions through a reducer without a store.
///
/// Starts from `reducer(None, Init)` and stops at the first error. A store
/// dispatching the same actions in order ends in the same state.
pub fn fold<'a, R, I>(reducer: &R, actions: I) -> Result<R::State, R::Error>
where
    R: Reducer + ?Sized,
    R::Action: 'a,
    I: IntoIterator<Item = &'a R::Action>,
{
    let initial = reducer.reduce(None, Message::Init)?;
    actions.into_iter().try_fold(initial, |state, action| {
        reducer.reduce(Some(&state), Message::Action(action))
    })
}
