//! Property-based tests for both engines.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::sync::Arc;
use talkstate::core::{Cursor, PhaseHistory, PhaseTransition, TransitionResult};
use talkstate::lifecycle::{HookError, LifecycleEngine, LifecycleError, NextPhase, Phase};
use talkstate::registry::{parse_handler_id, HandlerEntry, HandlerRegistry};
use talkstate::script::{execute, ScriptBuilder, ScriptDefinition, ScriptInstance};

/// Handler outcome chosen by the generator for a given state.
#[derive(Clone, Copy, Debug)]
enum Behaviour {
    Repeat,
    Advance(u32),
    NoOp,
    ByPick(u32),
}

fn behaviour_result(behaviour: Behaviour, step: u32, pick: u32) -> TransitionResult {
    match behaviour {
        Behaviour::Repeat => TransitionResult::Repeat,
        Behaviour::Advance(next) => TransitionResult::Advance(next),
        Behaviour::NoOp => TransitionResult::NoOp,
        Behaviour::ByPick(next) => match (step + pick) % 3 {
            0 => TransitionResult::Repeat,
            1 => TransitionResult::Advance(next),
            _ => TransitionResult::NoOp,
        },
    }
}

prop_compose! {
    fn arbitrary_behaviour()(variant in 0..4u8, next in 0..64u32) -> Behaviour {
        match variant {
            0 => Behaviour::Repeat,
            1 => Behaviour::Advance(next),
            2 => Behaviour::NoOp,
            _ => Behaviour::ByPick(next),
        }
    }
}

prop_compose! {
    fn arbitrary_definition()(
        states in prop::collection::btree_map(0..32u32, arbitrary_behaviour(), 1..8)
    ) -> Arc<ScriptDefinition> {
        let first = *states.keys().next().unwrap();
        let mut builder = ScriptBuilder::new("generated").first(first);
        for (id, behaviour) in states {
            builder = builder.state(id, move |step, pick| {
                Some(behaviour_result(behaviour, step, pick))
            });
        }
        Arc::new(builder.build().unwrap())
    }
}

proptest! {
    #[test]
    fn execute_is_deterministic(
        definition in arbitrary_definition(),
        state_id in 0..40u32,
        step_index in 0..10u32,
        pick in 0..5u32,
    ) {
        let first = execute(&definition, state_id, step_index, pick);
        let second = execute(&definition, state_id, step_index, pick);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_state_is_noop(
        definition in arbitrary_definition(),
        step_index in 0..10u32,
        pick in 0..5u32,
    ) {
        let unknown = 1_000;
        prop_assume!(!definition.registry().contains(unknown));

        let step = execute(&definition, unknown, step_index, pick).unwrap();
        prop_assert_eq!(step.result, TransitionResult::NoOp);
        prop_assert_eq!(step.state_id, unknown);
        prop_assert_eq!(step.step_index, step_index);
    }

    #[test]
    fn results_follow_directive_rules(
        definition in arbitrary_definition(),
        step_index in 0..10u32,
        pick in 0..5u32,
    ) {
        for state_id in definition.registry().ids() {
            let step = execute(&definition, state_id, step_index, pick).unwrap();
            match step.result {
                TransitionResult::Repeat => {
                    prop_assert_eq!(step.state_id, state_id);
                    prop_assert_eq!(step.step_index, step_index + 1);
                }
                TransitionResult::Advance(next) => {
                    prop_assert_eq!(step.state_id, next);
                    prop_assert_eq!(step.step_index, 0);
                }
                TransitionResult::NoOp | TransitionResult::ButtonHint(_) => {
                    prop_assert_eq!(step.state_id, state_id);
                    prop_assert_eq!(step.step_index, step_index);
                }
            }
        }
    }

    #[test]
    fn advance_ignores_prior_step_index(next in 0..1_000u32, step_index in 0..u32::MAX) {
        let definition = ScriptBuilder::new("advance")
            .first(1)
            .state(1, move |_, _| Some(TransitionResult::Advance(next)))
            .build()
            .unwrap();

        let step = execute(&definition, 1, step_index, 0).unwrap();
        prop_assert_eq!(step.cursor(), Cursor::at(next));
    }

    #[test]
    fn instance_matches_free_function(
        definition in arbitrary_definition(),
        picks in prop::collection::vec(0..5u32, 0..12),
    ) {
        let mut session = ScriptInstance::begin(Arc::clone(&definition));
        let mut cursor = Cursor::at(definition.first());

        for pick in picks {
            let expected = execute(&definition, cursor.state_id, cursor.step_index, pick)
                .unwrap();
            let actual = session.pick(pick).unwrap();
            prop_assert_eq!(expected, actual);
            cursor = expected.cursor();
            prop_assert_eq!(session.cursor(), cursor);
        }
    }

    #[test]
    fn handler_names_round_trip(prefix in "[a-z][a-z_]{0,8}[a-z]", id in 0..100_000u32) {
        let name = format!("{prefix}__{id}");
        prop_assert_eq!(parse_handler_id(&name), Some(id));
    }

    #[test]
    fn distinct_names_with_same_id_never_build(id in 0..1_000u32) {
        let result = HandlerRegistry::build(vec![
            HandlerEntry::named(format!("left__{id}"), |_, _| Some(TransitionResult::NoOp)),
            HandlerEntry::named(format!("right__{id}"), |_, _| Some(TransitionResult::NoOp)),
        ]);
        prop_assert!(result.is_err());
    }

    #[test]
    fn history_record_is_pure(ticks in prop::collection::vec(0..100u64, 0..8)) {
        let mut history = PhaseHistory::new();
        for (i, tick) in ticks.iter().enumerate() {
            let before = history.len();
            let next = history.record(PhaseTransition {
                from: format!("P{i}"),
                to: format!("P{}", i + 1),
                timestamp: chrono::Utc::now(),
                tick: *tick,
            });
            prop_assert_eq!(history.len(), before);
            prop_assert_eq!(next.len(), before + 1);
            history = next;
        }
        let expected = if ticks.is_empty() {
            0
        } else {
            ticks.len() + 1
        };
        prop_assert_eq!(history.path().len(), expected);
    }
}

/// Counts its ticks in the shared context and hands over after `hold`.
struct Hold {
    id: u32,
    hold: u32,
}

impl Phase<Vec<String>> for Hold {
    fn name(&self) -> &str {
        "Hold"
    }

    fn on_enter(&mut self, log: &mut Vec<String>) -> Result<NextPhase<Vec<String>>, HookError> {
        log.push(format!("enter:{}", self.id));
        Ok(None)
    }

    fn on_tick(&mut self, log: &mut Vec<String>) -> Result<NextPhase<Vec<String>>, HookError> {
        log.push(format!("tick:{}", self.id));
        if self.hold == 0 {
            return Ok(Some(Box::new(Hold {
                id: self.id + 1,
                hold: self.id % 3,
            })));
        }
        self.hold -= 1;
        Ok(None)
    }

    fn on_exit(&mut self, log: &mut Vec<String>) -> Result<(), HookError> {
        log.push(format!("exit:{}", self.id));
        Ok(())
    }
}

proptest! {
    #[test]
    fn every_exit_is_followed_by_next_enter(hold in 0..4u32, ticks in 1..40usize) {
        let mut log = Vec::new();
        let mut engine: LifecycleEngine<Vec<String>> = LifecycleEngine::new();
        engine
            .enter(Box::new(Hold { id: 0, hold }), &mut log)
            .unwrap();

        for _ in 0..ticks {
            engine.tick(&mut log).unwrap();
        }

        for (i, event) in log.iter().enumerate() {
            if let Some(id) = event.strip_prefix("exit:") {
                let id: u32 = id.parse().unwrap();
                let expected = format!("enter:{}", id + 1);
                prop_assert_eq!(log.get(i + 1), Some(&expected));
            }
        }

        let exits = log.iter().filter(|e| e.starts_with("exit:")).count();
        prop_assert_eq!(engine.history().len(), exits);
    }

    #[test]
    fn terminated_engine_rejects_ticks(ticks in 0..10usize) {
        let mut log = Vec::new();
        let mut engine: LifecycleEngine<Vec<String>> = LifecycleEngine::new();
        engine
            .enter(Box::new(Hold { id: 0, hold: 2 }), &mut log)
            .unwrap();
        for _ in 0..ticks {
            engine.tick(&mut log).unwrap();
        }
        engine.terminate(&mut log).unwrap();

        let before = log.len();
        prop_assert_eq!(engine.tick(&mut log), Err(LifecycleError::Terminated));
        prop_assert_eq!(log.len(), before);
    }
}
