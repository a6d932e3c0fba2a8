//! Vocabulary shared by both engines.
//!
//! - Identifier aliases and the `Cursor` a session persists
//! - `TransitionResult` / `Directive`, the outcome of a handler
//! - `OptionTag`, presentation metadata the engines pass through untouched
//! - `PhaseHistory`, the record of lifecycle transitions
//!
//! Everything here is plain data with pure operations.

mod history;
mod option;
mod result;

pub use history::{PhaseHistory, PhaseTransition};
pub use option::OptionTag;
pub use result::{Cursor, Directive, Pick, StateId, Step, StepIndex, TransitionResult};
