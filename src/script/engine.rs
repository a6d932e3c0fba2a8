//! Transition resolution for pick-driven scripts.

use crate::core::{Cursor, Pick, StateId, Step, StepIndex, TransitionResult};
use crate::registry::AuthoringError;
use crate::script::ScriptDefinition;
use tracing::{debug, warn};

/// Resolve one step of interaction.
///
/// Looks up the handler for `state_id`, invokes it with `(step_index, pick)`
/// and applies the returned directive:
///
/// - `Repeat` keeps the state and advances the step index
/// - `Advance(n)` moves to `n` (registered or not) with step index 0
/// - `NoOp` and `ButtonHint` keep both values
///
/// An id with no handler resolves to `NoOp` with the inputs unchanged.
/// A handler that returns no directive is an authoring defect and yields
/// [`AuthoringError::MissingDirective`].
///
/// The function holds no state: identical inputs give identical outputs.
///
/// # Example
///
/// ```rust
/// use talkstate::core::TransitionResult;
/// use talkstate::script::{execute, ScriptBuilder};
///
/// let definition = ScriptBuilder::new("guard")
///     .first(10)
///     .handler("gate__10", |_, pick| match pick {
///         1 => Some(TransitionResult::Repeat),
///         2 => Some(TransitionResult::Advance(20)),
///         _ => Some(TransitionResult::NoOp),
///     })
///     .build()
///     .unwrap();
///
/// let step = execute(&definition, 10, 0, 1).unwrap();
/// assert_eq!((step.state_id, step.step_index), (10, 1));
///
/// let step = execute(&definition, 10, 1, 2).unwrap();
/// assert_eq!((step.state_id, step.step_index), (20, 0));
/// ```
pub fn execute(
    definition: &ScriptDefinition,
    state_id: StateId,
    step_index: StepIndex,
    pick: Pick,
) -> Result<Step, AuthoringError> {
    let Some(handler) = definition.registry().get(state_id) else {
        warn!(
            target: "talkstate::script",
            script = definition.name(),
            state_id,
            "no handler for state, ignoring pick"
        );
        return Ok(Step {
            result: TransitionResult::NoOp,
            state_id,
            step_index,
        });
    };

    let Some(result) = handler(step_index, pick) else {
        warn!(
            target: "talkstate::script",
            script = definition.name(),
            state_id,
            step_index,
            pick,
            "handler returned no directive"
        );
        return Err(AuthoringError::MissingDirective {
            state_id,
            step_index,
            pick,
        });
    };

    let next = Cursor {
        state_id,
        step_index,
    }
    .apply(result.directive());

    debug!(
        target: "talkstate::script",
        script = definition.name(),
        state_id,
        step_index,
        pick,
        ?result,
        next_state = next.state_id,
        next_step = next.step_index,
        "resolved pick"
    );

    Ok(Step {
        result,
        state_id: next.state_id,
        step_index: next.step_index,
    })
}
