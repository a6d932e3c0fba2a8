//! Per-session script cursor.

use crate::core::{Cursor, OptionTag, Pick, StateId, Step, StepIndex};
use crate::registry::AuthoringError;
use crate::script::ScriptDefinition;
use std::sync::Arc;

/// One interaction session over a shared definition.
///
/// The session owns its cursor; the definition is shared read-only, so any
/// number of sessions can run against the same `Arc<ScriptDefinition>`.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use talkstate::core::TransitionResult;
/// use talkstate::script::{ScriptBuilder, ScriptInstance};
///
/// let definition = Arc::new(
///     ScriptBuilder::new("ferryman")
///         .first(10)
///         .handler("ask__10", |_, pick| match pick {
///             0 => Some(TransitionResult::Advance(20)),
///             _ => Some(TransitionResult::NoOp),
///         })
///         .handler("sail__20", |_, _| Some(TransitionResult::Advance(0)))
///         .build()
///         .unwrap(),
/// );
///
/// let mut session = ScriptInstance::begin(Arc::clone(&definition));
/// session.pick(0).unwrap();
/// assert_eq!(session.state_id(), 20);
/// session.pick(0).unwrap();
/// assert!(session.is_finished());
/// ```
#[derive(Debug, Clone)]
pub struct ScriptInstance {
    definition: Arc<ScriptDefinition>,
    cursor: Cursor,
}

impl ScriptInstance {
    /// Start at the definition's first state.
    pub fn begin(definition: Arc<ScriptDefinition>) -> Self {
        let cursor = Cursor::at(definition.first());
        Self { definition, cursor }
    }

    /// Start at the definition's select state.
    pub fn begin_select(definition: Arc<ScriptDefinition>) -> Self {
        let cursor = Cursor::at(definition.select());
        Self { definition, cursor }
    }

    /// Continue from a cursor the caller persisted earlier.
    pub fn resume(definition: Arc<ScriptDefinition>, cursor: Cursor) -> Self {
        Self { definition, cursor }
    }

    /// Feed a pick and move the cursor.
    ///
    /// On error the cursor is left where it was.
    pub fn pick(&mut self, pick: Pick) -> Result<Step, AuthoringError> {
        let step = self
            .definition
            .execute(self.cursor.state_id, self.cursor.step_index, pick)?;
        self.cursor = step.cursor();
        Ok(step)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn state_id(&self) -> StateId {
        self.cursor.state_id
    }

    pub fn step_index(&self) -> StepIndex {
        self.cursor.step_index
    }

    /// Affordance of the current state.
    pub fn option(&self) -> OptionTag {
        self.definition.option(self.cursor.state_id)
    }

    /// True once the cursor sits on a state without a handler.
    pub fn is_finished(&self) -> bool {
        !self.definition.registry().contains(self.cursor.state_id)
    }

    pub fn definition(&self) -> &Arc<ScriptDefinition> {
        &self.definition
    }
}
