//! Property-based tests for the reducer/store core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated action sequences.

use chrono::Utc;
use proptest::prelude::*;
use refold::core::{fold, Message, RawAction, Reducer, StateHistory, StateTransition};
use refold::{action_enum, Store, StoreBuilder};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
struct Tally {
    count: i64,
    label: String,
}

action_enum! {
    enum TallyAction {
        Increment = "INCREMENT",
        Decrement = "DECREMENT",
        Add(i64) = "ADD",
        Label(String) = "LABEL",
        Unknown(String),
    }
}

struct TallyReducer;

impl Reducer for TallyReducer {
    type State = Tally;
    type Action = TallyAction;
    type Error = Infallible;

    fn reduce(
        &self,
        state: Option<&Tally>,
        message: Message<'_, TallyAction>,
    ) -> Result<Tally, Infallible> {
        let state = state.cloned().unwrap_or_default();
        Ok(match message.action() {
            Some(TallyAction::Increment) => Tally {
                count: state.count + 1,
                ..state
            },
            Some(TallyAction::Decrement) => Tally {
                count: state.count - 1,
                ..state
            },
            Some(TallyAction::Add(n)) => Tally {
                count: state.count + n,
                ..state
            },
            Some(TallyAction::Label(label)) => Tally {
                label: label.clone(),
                ..state
            },
            _ => state,
        })
    }
}

fn arbitrary_action() -> impl Strategy<Value = TallyAction> {
    prop_oneof![
        Just(TallyAction::Increment),
        Just(TallyAction::Decrement),
        (-1000i64..1000).prop_map(TallyAction::Add),
        "[a-z]{0,8}".prop_map(TallyAction::Label),
        "[A-Z_]{1,12}".prop_map(TallyAction::Unknown),
    ]
}

/// Reducer over JSON-shaped actions, recognizing only `ADD` and `LABEL`.
struct RawTallyReducer;

impl Reducer for RawTallyReducer {
    type State = Tally;
    type Action = RawAction;
    type Error = Infallible;

    fn reduce(
        &self,
        state: Option<&Tally>,
        message: Message<'_, RawAction>,
    ) -> Result<Tally, Infallible> {
        let state = state.cloned().unwrap_or_default();
        let Some(action) = message.action() else {
            return Ok(state);
        };
        Ok(match message.kind() {
            "ADD" => Tally {
                count: state.count + action.get("amount").and_then(|v| v.as_i64()).unwrap_or(0),
                ..state
            },
            "LABEL" => Tally {
                label: action
                    .get("label")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string(),
                ..state
            },
            _ => state,
        })
    }
}

fn unrecognized_kind() -> impl Strategy<Value = String> {
    "[A-Za-z_]{0,12}".prop_filter("handled kind", |kind| kind != "ADD" && kind != "LABEL")
}

prop_compose! {
    fn arbitrary_tally()(count in -10_000i64..10_000, label in "[a-z]{0,8}") -> Tally {
        Tally { count, label }
    }
}

proptest! {
    #[test]
    fn store_agrees_with_pure_fold(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut store = Store::create(TallyReducer).unwrap();
        for action in &actions {
            store.dispatch(action).unwrap();
        }

        let expected = fold(&TallyReducer, &actions).unwrap();
        prop_assert_eq!(store.state(), &expected);
        prop_assert_eq!(store.dispatch_count(), actions.len() as u64);
    }

    #[test]
    fn unknown_actions_are_identity(
        amount in -1000i64..1000,
        label in "[a-z]{0,8}",
        kinds in prop::collection::vec(unrecognized_kind(), 1..10)
    ) {
        let mut store = Store::create(RawTallyReducer).unwrap();
        store.dispatch(&RawAction::new("ADD").with("amount", amount)).unwrap();
        store.dispatch(&RawAction::new("LABEL").with("label", label)).unwrap();
        let before = store.get_state();

        for kind in kinds {
            store.dispatch(&RawAction::new(kind).with("amount", 1)).unwrap();
            prop_assert_eq!(&*store.get_state(), &*before);
        }
    }

    #[test]
    fn reducer_is_deterministic(state in arbitrary_tally(), action in arbitrary_action()) {
        let first = TallyReducer.reduce(Some(&state), Message::Action(&action)).unwrap();
        let second = TallyReducer.reduce(Some(&state), Message::Action(&action)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn earlier_snapshots_never_change(actions in prop::collection::vec(arbitrary_action(), 1..20)) {
        let mut store = Store::create(TallyReducer).unwrap();
        let mut snapshots = Vec::new();
        let mut copies = Vec::new();

        for action in &actions {
            let snapshot = store.get_state();
            copies.push((*snapshot).clone());
            snapshots.push(snapshot);
            store.dispatch(action).unwrap();
        }

        for (snapshot, copy) in snapshots.iter().zip(&copies) {
            prop_assert_eq!(&**snapshot, copy);
        }
    }

    #[test]
    fn history_path_replays_the_store(actions in prop::collection::vec(arbitrary_action(), 1..20)) {
        let mut store = StoreBuilder::new()
            .reducer(TallyReducer)
            .record_history(None)
            .build()
            .unwrap();

        let mut expected_path = vec![store.state().clone()];
        for action in &actions {
            expected_path.push(store.dispatch(action).unwrap().clone());
        }

        let history = store.history().unwrap();
        let path = history.get_path();
        prop_assert_eq!(path.len(), expected_path.len());
        for (state, expected) in path.iter().zip(&expected_path) {
            prop_assert_eq!(*state, expected);
        }
    }

    #[test]
    fn history_limit_is_respected(
        limit in 1usize..8,
        actions in prop::collection::vec(arbitrary_action(), 0..30)
    ) {
        let mut store = StoreBuilder::new()
            .reducer(TallyReducer)
            .record_history(Some(limit))
            .build()
            .unwrap();

        for action in &actions {
            store.dispatch(action).unwrap();
        }

        let history = store.history().unwrap();
        prop_assert_eq!(history.len(), actions.len().min(limit));
        if let Some(last) = history.last() {
            prop_assert_eq!(last.sequence, actions.len() as u64);
        }
    }

    #[test]
    fn history_record_is_pure(from in arbitrary_tally(), to in arbitrary_tally()) {
        let history = StateHistory::new();

        let new_history = history.record(StateTransition {
            sequence: 1,
            action: "ADD".to_string(),
            from,
            to,
            timestamp: Utc::now(),
        });

        prop_assert_eq!(history.len(), 0);
        prop_assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn history_roundtrip_serialization(actions in prop::collection::vec(arbitrary_action(), 0..10)) {
        let mut store = StoreBuilder::new()
            .reducer(TallyReducer)
            .record_history(None)
            .build()
            .unwrap();
        for action in &actions {
            store.dispatch(action).unwrap();
        }
        let history = store.history().unwrap();

        let json = serde_json::to_string(history).unwrap();
        let deserialized: StateHistory<Tally> = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(deserialized.get_path(), history.get_path());
    }
}
