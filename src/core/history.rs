//! Lifecycle transition history.
//!
//! Immutable record of which phases a lifecycle engine moved through and
//! when. Phases are trait objects, so the history keeps their names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase transition.
///
/// # Example
///
/// ```rust
/// use talkstate::core::PhaseTransition;
/// use chrono::Utc;
///
/// let transition = PhaseTransition {
///     from: "Ready".to_string(),
///     to: "Wave1".to_string(),
///     timestamp: Utc::now(),
///     tick: 3,
/// };
/// assert_eq!(transition.to, "Wave1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Name of the phase that exited
    pub from: String,
    /// Name of the phase that entered
    pub to: String,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
    /// Engine tick count at the time of the transition
    pub tick: u64,
}

/// Ordered history of phase transitions.
///
/// `record` returns a new history with the transition appended; the
/// receiver is left untouched.
///
/// # Example
///
/// ```rust
/// use talkstate::core::{PhaseHistory, PhaseTransition};
/// use chrono::Utc;
///
/// let history = PhaseHistory::new();
/// let history = history.record(PhaseTransition {
///     from: "Ready".to_string(),
///     to: "Wave1".to_string(),
///     timestamp: Utc::now(),
///     tick: 1,
/// });
/// let history = history.record(PhaseTransition {
///     from: "Wave1".to_string(),
///     to: "Boss".to_string(),
///     timestamp: Utc::now(),
///     tick: 9,
/// });
///
/// assert_eq!(history.path(), vec!["Ready", "Wave1", "Boss"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Names of the phases traversed: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: &str, to: &str, tick: u64) -> PhaseTransition {
        PhaseTransition {
            from: from.to_string(),
            to: to.to_string(),
            timestamp: Utc::now(),
            tick,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = PhaseHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
    }

    #[test]
    fn record_is_immutable() {
        let history = PhaseHistory::new();
        let next = history.record(transition("A", "B", 1));

        assert_eq!(history.len(), 0);
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn path_returns_phase_sequence() {
        let history = PhaseHistory::new()
            .record(transition("Ready", "Wave1", 1))
            .record(transition("Wave1", "Wave2", 4))
            .record(transition("Wave2", "Clear", 8));

        assert_eq!(history.path(), vec!["Ready", "Wave1", "Wave2", "Clear"]);
        assert_eq!(history.transitions()[2].tick, 8);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = PhaseHistory::new()
            .record(PhaseTransition {
                from: "A".to_string(),
                to: "B".to_string(),
                timestamp: start,
                tick: 1,
            })
            .record(PhaseTransition {
                from: "B".to_string(),
                to: "C".to_string(),
                timestamp: start + chrono::Duration::seconds(5),
                tick: 2,
            });

        assert_eq!(history.duration(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn empty_history_has_no_duration() {
        assert!(PhaseHistory::new().duration().is_none());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = PhaseHistory::new().record(transition("A", "B", 1));
        let json = serde_json::to_string(&history).unwrap();
        let back: PhaseHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, back);
    }
}
