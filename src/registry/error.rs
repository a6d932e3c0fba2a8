//! Authoring errors raised by malformed script definitions.

use crate::core::{Pick, StateId, StepIndex};
use thiserror::Error;

/// Defects in how a script was written, as opposed to how it is driven.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthoringError {
    #[error("State {id} is declared by both '{first}' and '{second}'")]
    DuplicateState {
        id: StateId,
        first: String,
        second: String,
    },

    #[error("Handler '{name}' is declared more than once")]
    DuplicateHandler { name: String },

    #[error("Handler name '{name}' does not follow the '<prefix>__<digits>' convention")]
    MalformedHandlerName { name: String },

    #[error("First state not specified. Call .first(id) before .build()")]
    MissingFirstState,

    #[error("The {role} state {id} has no handler")]
    UnregisteredEntry { role: EntryRole, id: StateId },

    #[error("Handler for state {state_id} returned no directive (step {step_index}, pick {pick})")]
    MissingDirective {
        state_id: StateId,
        step_index: StepIndex,
        pick: Pick,
    },
}

/// Which entry point an `UnregisteredEntry` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRole {
    First,
    Select,
}

impl std::fmt::Display for EntryRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Select => f.write_str("select"),
        }
    }
}
