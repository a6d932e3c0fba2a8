//! Tick-driven lifecycle engine.
//!
//! Models timed sequences such as dungeon phases: one strongly-typed
//! [`Phase`] is active at a time, receives `on_enter` / `on_tick` /
//! `on_exit` hooks, and names its successor by returning it from a hook.
//!
//! # Example
//!
//! ```rust
//! use talkstate::lifecycle::{
//!     HookError, LifecycleBuilder, LifecycleEngine, NextPhase, Phase, Status,
//! };
//!
//! struct Warmup;
//! struct Fight;
//!
//! impl Phase<u32> for Warmup {
//!     fn name(&self) -> &str {
//!         "Warmup"
//!     }
//!
//!     fn on_tick(&mut self, seconds: &mut u32) -> Result<NextPhase<u32>, HookError> {
//!         *seconds += 1;
//!         if *seconds < 3 {
//!             return Ok(None);
//!         }
//!         Ok(Some(Box::new(Fight)))
//!     }
//! }
//!
//! impl Phase<u32> for Fight {
//!     fn name(&self) -> &str {
//!         "Fight"
//!     }
//!
//!     fn on_tick(&mut self, _: &mut u32) -> Result<NextPhase<u32>, HookError> {
//!         Ok(None)
//!     }
//! }
//!
//! let mut seconds = 0;
//! let mut engine: LifecycleEngine<u32> = LifecycleBuilder::new().tick_interval_ms(1000).build();
//! engine.enter(Box::new(Warmup), &mut seconds).unwrap();
//! for _ in 0..3 {
//!     engine.tick(&mut seconds).unwrap();
//! }
//!
//! assert_eq!(engine.current_name(), Some("Fight"));
//! engine.terminate(&mut seconds).unwrap();
//! assert_eq!(engine.status(), Status::Terminated);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod phase;

pub use config::{LifecycleBuilder, LifecycleConfig, DEFAULT_TICK_INTERVAL_MS};
pub use engine::{LifecycleEngine, Status};
pub use error::{HookError, HookKind, LifecycleError};
pub use phase::{NextPhase, Phase};
