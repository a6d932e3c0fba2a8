//! Dungeon Phases
//!
//! This example drives a timed dungeon through lifecycle phases.
//!
//! Key concepts:
//! - Phases with on_enter / on_tick / on_exit hooks
//! - Transitions returned from hooks
//! - Clock-paced ticks through `update`
//! - Forced transition (cinematic skip)
//!
//! Run with: cargo run --example dungeon_phases
//! Set RUST_LOG=talkstate=debug to see engine diagnostics.

use talkstate::lifecycle::{HookError, LifecycleBuilder, LifecycleEngine, NextPhase, Phase};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Field {
    elapsed_ms: u64,
    monsters: u32,
    messages: Vec<String>,
}

struct Intro;
struct Wave {
    number: u32,
}
struct Reward;

impl Phase<Field> for Intro {
    fn name(&self) -> &str {
        "Intro"
    }

    fn on_enter(&mut self, field: &mut Field) -> Result<NextPhase<Field>, HookError> {
        field.messages.push("cinematic starts".to_string());
        Ok(None)
    }

    fn on_tick(&mut self, field: &mut Field) -> Result<NextPhase<Field>, HookError> {
        if field.elapsed_ms >= 5_000 {
            return Ok(Some(Box::new(Wave { number: 1 })));
        }
        Ok(None)
    }

    fn on_exit(&mut self, field: &mut Field) -> Result<(), HookError> {
        field.messages.push("cinematic ends".to_string());
        Ok(())
    }
}

impl Phase<Field> for Wave {
    fn name(&self) -> &str {
        "Wave"
    }

    fn on_enter(&mut self, field: &mut Field) -> Result<NextPhase<Field>, HookError> {
        let number = self.number;
        field.monsters = number * 2;
        let line = format!("wave {number} spawns {} monsters", field.monsters);
        field.messages.push(line);
        Ok(None)
    }

    fn on_tick(&mut self, field: &mut Field) -> Result<NextPhase<Field>, HookError> {
        field.monsters = field.monsters.saturating_sub(1);
        if field.monsters > 0 {
            return Ok(None);
        }
        if self.number < 2 {
            return Ok(Some(Box::new(Wave {
                number: self.number + 1,
            })));
        }
        Ok(Some(Box::new(Reward)))
    }
}

impl Phase<Field> for Reward {
    fn name(&self) -> &str {
        "Reward"
    }

    fn on_enter(&mut self, field: &mut Field) -> Result<NextPhase<Field>, HookError> {
        field.messages.push("chest appears".to_string());
        Ok(None)
    }

    fn on_tick(&mut self, _: &mut Field) -> Result<NextPhase<Field>, HookError> {
        Ok(None)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Dungeon Phases ===\n");

    let mut field = Field::default();
    let mut engine: LifecycleEngine<Field> =
        LifecycleBuilder::new().tick_interval_ms(1_000).build();

    if let Err(error) = engine.enter(Box::new(Intro), &mut field) {
        eprintln!("Dungeon failed to start: {error}");
        return;
    }

    // Party skips the cinematic after two seconds.
    let mut skipped = false;
    for now in (0..=12_000).step_by(250) {
        field.elapsed_ms = now;
        if now == 2_000 && !skipped {
            skipped = engine
                .force_transition(Box::new(Wave { number: 1 }))
                .is_ok();
        }
        match engine.update(now, &mut field) {
            Ok(true) => println!(
                "{:>6} ms  tick {:>2}  phase {:<6} monsters {}",
                now,
                engine.ticks(),
                engine.current_name().unwrap_or("-"),
                field.monsters
            ),
            Ok(false) => {}
            Err(error) => {
                eprintln!("Dungeon error: {error}");
                return;
            }
        }
    }

    if let Err(error) = engine.terminate(&mut field) {
        eprintln!("Dungeon failed to close: {error}");
    }

    println!("\nMessages:");
    for message in &field.messages {
        println!("  - {message}");
    }

    println!("\nPhase path: {}", engine.history().path().join(" -> "));
    println!("\n=== Example Complete ===");
}
