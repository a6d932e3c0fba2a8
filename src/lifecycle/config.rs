//! Lifecycle engine configuration and builder.

use crate::lifecycle::LifecycleEngine;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default spacing between scheduled ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Settings for a lifecycle engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Minimum spacing between ticks taken by `update`
    pub tick_interval_ms: u64,

    /// Keep a `PhaseHistory` of completed transitions
    pub record_history: bool,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            record_history: true,
        }
    }
}

/// Builder for creating lifecycle engines
#[derive(Debug, Clone, Default)]
pub struct LifecycleBuilder {
    config: LifecycleConfig,
}

impl LifecycleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: LifecycleConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the tick cadence used by `update`
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.config.tick_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn tick_interval_ms(mut self, millis: u64) -> Self {
        self.config.tick_interval_ms = millis;
        self
    }

    /// Enable or disable transition history
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Build an uninitialized engine
    pub fn build<Ctx>(self) -> LifecycleEngine<Ctx> {
        LifecycleEngine::with_config(self.config)
    }
}
