//! Actions and the messages reducers receive.
//!
//! An action describes an intent to change state. Every action carries a
//! discriminant (`kind`) that selects the transition logic; anything else
//! on the action is payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Trait for values that can be dispatched to a store.
///
/// Actions are immutable and borrowed for a single dispatch; the store
/// never retains them.
///
/// # Example
///
/// ```rust
/// use refold::core::Action;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum CounterAction {
///     Increment,
///     Decrement,
///     Add(i64),
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Increment => "INCREMENT",
///             Self::Decrement => "DECREMENT",
///             Self::Add(_) => "ADD",
///         }
///     }
/// }
///
/// assert_eq!(CounterAction::Add(3).kind(), "ADD");
/// ```
pub trait Action: Debug + Send + Sync {
    /// The discriminant selecting which transition applies.
    fn kind(&self) -> &str;
}

/// Input handed to a reducer.
///
/// `Init` is the empty action a store uses to ask the reducer for its
/// starting state. Every later call carries a caller-supplied action.
#[derive(Debug)]
pub enum Message<'a, A> {
    Init,
    Action(&'a A),
}

impl<A> Clone for Message<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Message<'_, A> {}

impl<'a, A: Action> Message<'a, A> {
    /// Discriminant of the message. `Init` has the empty discriminant.
    pub fn kind(&self) -> &'a str {
        match *self {
            Message::Init => "",
            Message::Action(action) => action.kind(),
        }
    }

    /// The wrapped action, or `None` for `Init`.
    pub fn action(&self) -> Option<&'a A> {
        match *self {
            Message::Init => None,
            Message::Action(action) => Some(action),
        }
    }

    /// Whether this is the initialization message.
    pub fn is_init(&self) -> bool {
        matches!(self, Message::Init)
    }
}

/// Dynamically shaped action: `{ "type": <discriminant>, ...payload }`.
///
/// Useful when actions arrive as data rather than as a typed enum.
///
/// # Example
///
/// ```rust
/// use refold::core::{Action, RawAction};
///
/// let action = RawAction::from_json(r#"{"type":"ADD","amount":5}"#).unwrap();
/// assert_eq!(action.kind(), "ADD");
/// assert_eq!(action.get("amount").and_then(|v| v.as_i64()), Some(5));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl RawAction {
    /// Create an action with the given discriminant and no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Map::new(),
        }
    }

    /// Add a payload field, returning the extended action.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Look up a payload field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Every payload field, without the discriminant.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Parse an action from its JSON form. A missing `type` is an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to the flat `{"type": ..., ...payload}` form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Action for RawAction {
    fn kind(&self) -> &str {
        &self.kind
    }
}
