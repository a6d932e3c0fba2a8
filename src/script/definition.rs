//! Immutable script definitions.

use crate::core::{OptionTag, Pick, StateId, Step, StepIndex};
use crate::registry::{AuthoringError, HandlerRegistry};
use crate::script::engine;
use std::collections::HashMap;

/// Declarative catalog of states for one interactive entity.
///
/// Built once through [`ScriptBuilder`](crate::script::ScriptBuilder) and
/// read-only afterwards; share it between sessions with `Arc`.
#[derive(Debug)]
pub struct ScriptDefinition {
    pub(crate) name: String,
    pub(crate) first: StateId,
    pub(crate) select: Option<StateId>,
    pub(crate) registry: HandlerRegistry,
    pub(crate) options: HashMap<StateId, OptionTag>,
}

impl ScriptDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry state for a default conversation start.
    pub fn first(&self) -> StateId {
        self.first
    }

    /// Entry state when the interaction starts from a branch selection.
    ///
    /// Falls back to [`first`](Self::first) when no select state was declared.
    pub fn select(&self) -> StateId {
        self.select.unwrap_or(self.first)
    }

    pub fn has_select(&self) -> bool {
        self.select.is_some()
    }

    /// Affordance declared for `state_id`, `OptionTag::Close` when unset.
    pub fn option(&self, state_id: StateId) -> OptionTag {
        self.options.get(&state_id).copied().unwrap_or_default()
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Resolve one pick against this definition.
    ///
    /// See [`engine::execute`].
    pub fn execute(
        &self,
        state_id: StateId,
        step_index: StepIndex,
        pick: Pick,
    ) -> Result<Step, AuthoringError> {
        engine::execute(self, state_id, step_index, pick)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{OptionTag, TransitionResult};
    use crate::script::ScriptBuilder;

    #[test]
    fn select_falls_back_to_first() {
        let definition = ScriptBuilder::new("npc")
            .first(10)
            .state(10, |_, _| Some(TransitionResult::Advance(0)))
            .build()
            .unwrap();

        assert_eq!(definition.first(), 10);
        assert_eq!(definition.select(), 10);
        assert!(!definition.has_select());
    }

    #[test]
    fn declared_select_is_returned() {
        let definition = ScriptBuilder::new("npc")
            .first(10)
            .select(30)
            .state(10, |_, _| Some(TransitionResult::Advance(0)))
            .state(30, |_, _| Some(TransitionResult::Advance(10)))
            .build()
            .unwrap();

        assert_eq!(definition.select(), 30);
        assert!(definition.has_select());
    }

    #[test]
    fn options_default_to_close() {
        let definition = ScriptBuilder::new("npc")
            .first(10)
            .state(10, |_, _| Some(TransitionResult::Repeat))
            .option(10, OptionTag::SelectableTalk)
            .build()
            .unwrap();

        assert_eq!(definition.option(10), OptionTag::SelectableTalk);
        assert_eq!(definition.option(99), OptionTag::Close);
        assert_eq!(definition.name(), "npc");
    }
}
