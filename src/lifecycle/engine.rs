//! Engine that owns the active phase and drives it through ticks.

use crate::core::{PhaseHistory, PhaseTransition};
use crate::lifecycle::config::LifecycleConfig;
use crate::lifecycle::error::{HookKind, LifecycleError};
use crate::lifecycle::phase::Phase;
use chrono::Utc;
use tracing::debug;

/// Observable engine status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Uninitialized,
    Active,
    Terminated,
}

enum Slot<Ctx> {
    Uninitialized,
    Active(Box<dyn Phase<Ctx>>),
    Terminated,
}

/// Owns exactly one active phase at a time.
///
/// `Uninitialized --enter--> Active --terminate--> Terminated`. While
/// active, each `tick` either performs a queued transition or calls
/// `on_tick` on the current phase. A transition runs the old phase's
/// `on_exit` to completion, drops it, then runs the new phase's `on_enter`.
pub struct LifecycleEngine<Ctx> {
    slot: Slot<Ctx>,
    pending: Option<Box<dyn Phase<Ctx>>>,
    config: LifecycleConfig,
    history: PhaseHistory,
    ticks: u64,
    next_tick_at: Option<u64>,
}

impl<Ctx> LifecycleEngine<Ctx> {
    /// Create an uninitialized engine with default settings
    pub fn new() -> Self {
        Self::with_config(LifecycleConfig::default())
    }

    pub fn with_config(config: LifecycleConfig) -> Self {
        Self {
            slot: Slot::Uninitialized,
            pending: None,
            config,
            history: PhaseHistory::new(),
            ticks: 0,
            next_tick_at: None,
        }
    }

    pub fn status(&self) -> Status {
        match self.slot {
            Slot::Uninitialized => Status::Uninitialized,
            Slot::Active(_) => Status::Active,
            Slot::Terminated => Status::Terminated,
        }
    }

    /// Name of the active phase, if any.
    pub fn current_name(&self) -> Option<&str> {
        match &self.slot {
            Slot::Active(phase) => Some(phase.name()),
            _ => None,
        }
    }

    /// Name of the phase queued for the next tick, if any.
    pub fn pending_name(&self) -> Option<&str> {
        self.pending.as_ref().map(|phase| phase.name())
    }

    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    /// Number of ticks accepted so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Activate the initial phase and run its `on_enter`.
    ///
    /// If `on_enter` fails the phase stays active and the error is returned.
    pub fn enter(
        &mut self,
        initial: Box<dyn Phase<Ctx>>,
        ctx: &mut Ctx,
    ) -> Result<(), LifecycleError> {
        match &self.slot {
            Slot::Uninitialized => {}
            Slot::Active(current) => {
                return Err(LifecycleError::AlreadyEntered {
                    current: current.name().to_string(),
                })
            }
            Slot::Terminated => return Err(LifecycleError::Terminated),
        }

        self.slot = Slot::Active(initial);
        self.run_enter(ctx)
    }

    /// Advance the active phase by one tick.
    ///
    /// A queued transition (from `on_enter` or `force_transition`) is
    /// taken instead of calling `on_tick`.
    pub fn tick(&mut self, ctx: &mut Ctx) -> Result<(), LifecycleError> {
        self.ensure_active()?;
        self.ticks += 1;

        if let Some(next) = self.pending.take() {
            return self.transition(next, ctx);
        }

        let tick = self.ticks;
        let phase = self.active_mut()?;
        let name = phase.name().to_string();
        debug!(target: "talkstate::lifecycle", phase = %name, tick, "on_tick");
        match phase.on_tick(ctx) {
            Ok(Some(next)) => self.transition(next, ctx),
            Ok(None) => Ok(()),
            Err(source) => Err(LifecycleError::hook(name, HookKind::Tick, source)),
        }
    }

    /// Tick if `now_ms` has reached the next scheduled tick.
    ///
    /// The first call always ticks; later ticks follow every
    /// `tick_interval_ms`. Returns whether a tick was taken.
    pub fn update(&mut self, now_ms: u64, ctx: &mut Ctx) -> Result<bool, LifecycleError> {
        self.ensure_active()?;

        let interval = self.config.tick_interval_ms;
        let due_at = self.next_tick_at.unwrap_or(now_ms);
        if now_ms < due_at {
            return Ok(false);
        }

        self.next_tick_at = Some(due_at.saturating_add(interval));
        self.tick(ctx)?;
        Ok(true)
    }

    /// Queue `next` to replace the active phase on the next tick.
    ///
    /// Replaces any transition already queued.
    pub fn force_transition(&mut self, next: Box<dyn Phase<Ctx>>) -> Result<(), LifecycleError> {
        self.ensure_active()?;
        debug!(target: "talkstate::lifecycle", next = next.name(), "transition forced");
        self.pending = Some(next);
        Ok(())
    }

    /// Run `on_exit` on the active phase and stop the engine.
    ///
    /// If `on_exit` fails the engine stays active.
    pub fn terminate(&mut self, ctx: &mut Ctx) -> Result<(), LifecycleError> {
        let phase = self.active_mut()?;
        let name = phase.name().to_string();
        debug!(target: "talkstate::lifecycle", phase = %name, "on_exit (terminate)");
        phase
            .on_exit(ctx)
            .map_err(|source| LifecycleError::hook(name, HookKind::Exit, source))?;

        self.slot = Slot::Terminated;
        self.pending = None;
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), LifecycleError> {
        match self.slot {
            Slot::Uninitialized => Err(LifecycleError::NotEntered),
            Slot::Active(_) => Ok(()),
            Slot::Terminated => Err(LifecycleError::Terminated),
        }
    }

    fn active_mut(&mut self) -> Result<&mut Box<dyn Phase<Ctx>>, LifecycleError> {
        match &mut self.slot {
            Slot::Uninitialized => Err(LifecycleError::NotEntered),
            Slot::Active(phase) => Ok(phase),
            Slot::Terminated => Err(LifecycleError::Terminated),
        }
    }

    fn run_enter(&mut self, ctx: &mut Ctx) -> Result<(), LifecycleError> {
        let phase = self.active_mut()?;
        let name = phase.name().to_string();
        debug!(target: "talkstate::lifecycle", phase = %name, "on_enter");
        let queued = phase
            .on_enter(ctx)
            .map_err(|source| LifecycleError::hook(name, HookKind::Enter, source))?;
        self.pending = queued;
        Ok(())
    }

    // Old phase exits fully before it is dropped and the new one enters.
    // A failed exit keeps the old phase active and re-queues `next`.
    fn transition(
        &mut self,
        next: Box<dyn Phase<Ctx>>,
        ctx: &mut Ctx,
    ) -> Result<(), LifecycleError> {
        let phase = self.active_mut()?;
        let from = phase.name().to_string();
        debug!(target: "talkstate::lifecycle", phase = %from, next = next.name(), "on_exit");
        if let Err(source) = phase.on_exit(ctx) {
            self.pending = Some(next);
            return Err(LifecycleError::hook(from, HookKind::Exit, source));
        }

        if self.config.record_history {
            self.history = self.history.record(PhaseTransition {
                from,
                to: next.name().to_string(),
                timestamp: Utc::now(),
                tick: self.ticks,
            });
        }

        self.slot = Slot::Active(next);
        self.run_enter(ctx)
    }
}

impl<Ctx> Default for LifecycleEngine<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}
