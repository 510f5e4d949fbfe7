//! State transition history tracking.
//!
//! Provides an immutable, optionally bounded record of the transitions a
//! store has performed.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single dispatched transition.
///
/// # Example
///
/// ```rust
/// use refold::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     sequence: 1,
///     action: "INCREMENT".to_string(),
///     from: 0i64,
///     to: 1i64,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Position of the dispatch in the store's lifetime, starting at 1
    pub sequence: u64,
    /// Discriminant of the dispatched action
    pub action: String,
    /// The state before the dispatch
    pub from: S,
    /// The state after the dispatch
    pub to: S,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Whether the dispatch produced a different state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of state transitions.
///
/// History is immutable from the outside: `record` returns a new history
/// with the transition added. With a limit set, only the most recent
/// `limit` transitions are kept.
///
/// # Example
///
/// ```rust
/// use refold::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     sequence: 1,
///     action: "START".to_string(),
///     from: "idle".to_string(),
///     to: "running".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     sequence: 2,
///     action: "STOP".to_string(),
///     from: "running".to_string(),
///     to: "done".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // idle -> running -> done
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history keeping at most `limit` transitions.
    ///
    /// A limit of zero keeps nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(64)),
            limit: Some(limit),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use refold::core::{StateHistory, StateTransition};
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition {
    ///     sequence: 1,
    ///     action: "FLIP".to_string(),
    ///     from: false,
    ///     to: true,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(new_history.len(), 1);
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Append in place. The store owns its history exclusively, so it
    /// skips the copy `record` makes.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        if self.limit == Some(0) {
            return;
        }
        if let Some(limit) = self.limit {
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// oldest retained transition, then the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last retained transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Iterate retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> + '_ {
        self.transitions.iter()
    }

    /// The most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
