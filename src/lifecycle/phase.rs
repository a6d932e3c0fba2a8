//! The `Phase` trait implemented by lifecycle states.

use crate::lifecycle::error::HookError;

/// What a hook hands back: the phase to move to, if any.
pub type NextPhase<Ctx> = Option<Box<dyn Phase<Ctx>>>;

/// A live state object driven by a [`LifecycleEngine`](crate::lifecycle::LifecycleEngine).
///
/// Hooks receive the driver's context mutably; that is where a phase
/// reads the world and leaves its effects. Returning `Some(next)` from a
/// hook asks the engine to transition.
///
/// # Example
///
/// ```rust
/// use talkstate::lifecycle::{HookError, NextPhase, Phase};
///
/// struct Countdown {
///     remaining: u32,
/// }
///
/// struct Done;
///
/// impl Phase<Vec<String>> for Countdown {
///     fn name(&self) -> &str {
///         "Countdown"
///     }
///
///     fn on_tick(&mut self, log: &mut Vec<String>) -> Result<NextPhase<Vec<String>>, HookError> {
///         log.push(format!("{} left", self.remaining));
///         if self.remaining == 0 {
///             return Ok(Some(Box::new(Done)));
///         }
///         self.remaining -= 1;
///         Ok(None)
///     }
/// }
///
/// impl Phase<Vec<String>> for Done {
///     fn name(&self) -> &str {
///         "Done"
///     }
///
///     fn on_tick(&mut self, _: &mut Vec<String>) -> Result<NextPhase<Vec<String>>, HookError> {
///         Ok(None)
///     }
/// }
/// ```
pub trait Phase<Ctx> {
    /// Name for history and diagnostics.
    fn name(&self) -> &str;

    /// Runs when the phase becomes active.
    ///
    /// A returned phase is queued and taken on the next tick, in place of
    /// calling `on_tick`.
    fn on_enter(&mut self, _ctx: &mut Ctx) -> Result<NextPhase<Ctx>, HookError> {
        Ok(None)
    }

    /// Runs on every tick while the phase is active.
    fn on_tick(&mut self, ctx: &mut Ctx) -> Result<NextPhase<Ctx>, HookError>;

    /// Runs when the phase is left, before the next phase enters.
    fn on_exit(&mut self, _ctx: &mut Ctx) -> Result<(), HookError> {
        Ok(())
    }
}
