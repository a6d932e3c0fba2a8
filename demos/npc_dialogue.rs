//! NPC Dialogue Script
//!
//! This example drives a small ferryman conversation with picks.
//!
//! Key concepts:
//! - Handlers discovered from `<prefix>__<id>` names via `script!`
//! - Repeat / Advance / NoOp directives
//! - Option tags handed to the presentation layer
//! - Cursor persisted by the caller between picks
//!
//! Run with: cargo run --example npc_dialogue
//! Set RUST_LOG=talkstate=debug to see engine diagnostics.

#![allow(non_snake_case)]

use std::sync::Arc;
use talkstate::core::{OptionTag, Pick, StepIndex, TransitionResult};
use talkstate::script;
use talkstate::script::ScriptInstance;
use tracing_subscriber::EnvFilter;

/// "Where to, traveller?" Three lines of small talk, then a choice.
fn greet__10(step: StepIndex, _: Pick) -> Option<TransitionResult> {
    if step < 2 {
        return Some(TransitionResult::Repeat);
    }
    Some(TransitionResult::Advance(20))
}

/// Destination menu: 0 sails, 1 declines, anything else is ignored.
fn destination__20(_: StepIndex, pick: Pick) -> Option<TransitionResult> {
    match pick {
        0 => Some(TransitionResult::Advance(30)),
        1 => Some(TransitionResult::Advance(40)),
        _ => Some(TransitionResult::NoOp),
    }
}

fn sail__30(_: StepIndex, _: Pick) -> Option<TransitionResult> {
    Some(TransitionResult::Advance(0))
}

fn decline__40(_: StepIndex, _: Pick) -> Option<TransitionResult> {
    Some(TransitionResult::Advance(0))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== NPC Dialogue Script ===\n");

    let built = script! {
        name: "ferryman",
        first: 10,
        handlers: [greet__10, destination__20, sail__30, decline__40],
        options: {
            10 => OptionTag::Next,
            20 => OptionTag::SelectableDistractor,
            30 => OptionTag::TakeBoat,
            40 => OptionTag::Close,
        },
    };
    let definition = match built {
        Ok(definition) => Arc::new(definition),
        Err(error) => {
            eprintln!("Script failed to build: {error}");
            return;
        }
    };

    println!("Registered states: {:?}\n", definition.registry().ids());

    let mut session = ScriptInstance::begin(Arc::clone(&definition));
    for pick in [0, 0, 0, 7, 0, 0] {
        let before = session.cursor();
        let option = session.option();
        match session.pick(pick) {
            Ok(step) => println!(
                "state {:>2} step {} [{:<20}] pick {} -> {:?} => state {} step {}",
                before.state_id,
                before.step_index,
                option.name(),
                pick,
                step.result,
                step.state_id,
                step.step_index,
            ),
            Err(error) => {
                eprintln!("Script error: {error}");
                return;
            }
        }
        if session.is_finished() {
            println!("\nConversation finished at state {}", session.state_id());
            break;
        }
    }

    println!("\n=== Example Complete ===");
}
