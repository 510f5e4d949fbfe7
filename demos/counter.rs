//! Counter Store
//!
//! This example demonstrates the reducer/store loop on the classic counter.
//!
//! Key concepts:
//! - The store asks the reducer for its initial state
//! - Each dispatch folds one action into the state
//! - Unknown actions leave the state unchanged
//! - History records every transition when enabled
//!
//! Run with: cargo run --example counter
//! Set RUST_LOG=refold=trace to see every dispatch.

use refold::action_enum;
use refold::core::{Message, Reducer};
use refold::StoreBuilder;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing_subscriber::EnvFilter;

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
struct Counter {
    count: i64,
}

action_enum! {
    enum CounterAction {
        Increment = "INCREMENT",
        Decrement = "DECREMENT",
        Unknown = "UNKNOWN",
    }
}

struct CounterReducer;

impl Reducer for CounterReducer {
    type State = Counter;
    type Action = CounterAction;
    type Error = Infallible;

    fn reduce(
        &self,
        state: Option<&Counter>,
        message: Message<'_, CounterAction>,
    ) -> Result<Counter, Infallible> {
        let state = state.cloned().unwrap_or_default();
        Ok(match message.action() {
            Some(CounterAction::Increment) => Counter {
                count: state.count + 1,
            },
            Some(CounterAction::Decrement) => Counter {
                count: state.count - 1,
            },
            _ => state,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("refold=debug")),
        )
        .init();

    println!("=== Counter Store Example ===\n");

    let mut store = StoreBuilder::new()
        .reducer(CounterReducer)
        .name("counter")
        .record_history(Some(16))
        .build()?;

    println!("Initial state: {:?}", store.state());

    for action in [
        CounterAction::Increment,
        CounterAction::Decrement,
        CounterAction::Unknown,
    ] {
        let state = store.dispatch(&action)?;
        println!("After {:?}: {:?}", action, state);
    }

    if let Some(history) = store.history() {
        println!("\nTransitions:");
        for transition in history.transitions() {
            println!(
                "  #{} {}: {:?} -> {:?}{}",
                transition.sequence,
                transition.action,
                transition.from,
                transition.to,
                if transition.changed() { "" } else { " (no-op)" }
            );
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
