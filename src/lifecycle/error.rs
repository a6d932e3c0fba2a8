//! Lifecycle engine errors.

use std::fmt;
use thiserror::Error;

/// Failure raised by author code inside a phase hook.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct HookError {
    message: String,
}

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Which hook failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    Enter,
    Tick,
    Exit,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter => f.write_str("on_enter"),
            Self::Tick => f.write_str("on_tick"),
            Self::Exit => f.write_str("on_exit"),
        }
    }
}

/// Errors returned by [`LifecycleEngine`](crate::lifecycle::LifecycleEngine).
///
/// `NotEntered`, `AlreadyEntered` and `Terminated` report protocol misuse
/// and leave the engine untouched. `Hook` carries a failure from author code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Lifecycle engine has not been entered. Call .enter(phase) first")]
    NotEntered,

    #[error("Lifecycle engine is already running phase '{current}'")]
    AlreadyEntered { current: String },

    #[error("Lifecycle engine has been terminated")]
    Terminated,

    #[error("{hook} of phase '{phase}' failed: {source}")]
    Hook {
        phase: String,
        hook: HookKind,
        #[source]
        source: HookError,
    },
}

impl LifecycleError {
    pub(crate) fn hook(phase: impl Into<String>, hook: HookKind, source: HookError) -> Self {
        Self::Hook {
            phase: phase.into(),
            hook,
            source,
        }
    }

    /// True for the protocol misuse family.
    pub fn is_misuse(&self) -> bool {
        !matches!(self, Self::Hook { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_error_displays_context() {
        let error = LifecycleError::hook("Boss", HookKind::Exit, HookError::new("door jammed"));
        assert_eq!(
            error.to_string(),
            "on_exit of phase 'Boss' failed: door jammed"
        );
        assert!(!error.is_misuse());
    }

    #[test]
    fn misuse_errors_are_flagged() {
        assert!(LifecycleError::NotEntered.is_misuse());
        assert!(LifecycleError::Terminated.is_misuse());
        assert!(LifecycleError::AlreadyEntered {
            current: "A".to_string()
        }
        .is_misuse());
    }
}
