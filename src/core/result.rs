//! Handler outcomes and the resolved step they produce.

use super::option::OptionTag;
use serde::{Deserialize, Serialize};

/// Numeric identifier of a script state.
pub type StateId = u32;

/// Counter of consecutive visits to the same state. Resets on transition.
pub type StepIndex = u32;

/// Discrete choice supplied by whoever drives the interaction.
pub type Pick = u32;

/// Control-flow half of a handler outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Directive {
    /// Stay in the current state and advance the step index.
    Repeat,
    /// Move to another state and reset the step index.
    Advance(StateId),
    /// Input meant nothing here; keep state and step index.
    NoOp,
}

/// Outcome of invoking a state handler.
///
/// `ButtonHint` carries presentation metadata only. For the engine it
/// behaves like `NoOp`: state and step index are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionResult {
    Repeat,
    Advance(StateId),
    NoOp,
    ButtonHint(OptionTag),
}

impl TransitionResult {
    /// The state change this result asks for.
    pub fn directive(&self) -> Directive {
        match self {
            Self::Repeat => Directive::Repeat,
            Self::Advance(next) => Directive::Advance(*next),
            Self::NoOp | Self::ButtonHint(_) => Directive::NoOp,
        }
    }

    /// The affordance hint, if this result carries one.
    pub fn button_hint(&self) -> Option<OptionTag> {
        match self {
            Self::ButtonHint(tag) => Some(*tag),
            _ => None,
        }
    }
}

impl From<Directive> for TransitionResult {
    fn from(directive: Directive) -> Self {
        match directive {
            Directive::Repeat => Self::Repeat,
            Directive::Advance(next) => Self::Advance(next),
            Directive::NoOp => Self::NoOp,
        }
    }
}

/// Position of a session inside a script.
///
/// The engine never stores cursors; callers persist them between picks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    pub state_id: StateId,
    pub step_index: StepIndex,
}

impl Cursor {
    /// Cursor at the start of `state_id`.
    pub fn at(state_id: StateId) -> Self {
        Self {
            state_id,
            step_index: 0,
        }
    }

    /// Apply a directive, returning the cursor it leads to (pure).
    pub fn apply(self, directive: Directive) -> Self {
        match directive {
            Directive::Repeat => Self {
                state_id: self.state_id,
                step_index: self.step_index.saturating_add(1),
            },
            Directive::Advance(next) => Self::at(next),
            Directive::NoOp => self,
        }
    }
}

/// Result of resolving one pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// What the handler returned, or `NoOp` for an unknown state.
    pub result: TransitionResult,
    pub state_id: StateId,
    pub step_index: StepIndex,
}

impl Step {
    /// The cursor the caller should persist.
    pub fn cursor(&self) -> Cursor {
        Cursor {
            state_id: self.state_id,
            step_index: self.step_index,
        }
    }
}
