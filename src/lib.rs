//! Talkstate: state-machine runtimes for scripted interactions.
//!
//! Two engines share one vocabulary:
//!
//! - **Script engine** ([`script`]): dialogue-style interactions driven by
//!   picks. Stateless; the caller keeps the cursor.
//! - **Lifecycle engine** ([`lifecycle`]): timed sequences driven by ticks.
//!   Owns the active [`Phase`](lifecycle::Phase) and runs its hooks.
//!
//! Both resolve behavior through tables built once and shared read-only
//! afterwards ([`registry`]).
//!
//! # Core Concepts
//!
//! - **Handler**: function of `(step index, pick)` returning a
//!   [`TransitionResult`]
//! - **Directive**: `Repeat`, `Advance(id)` or `NoOp`
//! - **OptionTag**: presentation metadata carried alongside a state
//!
//! # Example
//!
//! ```rust
//! use talkstate::core::TransitionResult;
//! use talkstate::script::ScriptBuilder;
//!
//! let definition = ScriptBuilder::new("guard")
//!     .first(10)
//!     .handler("gate__10", |_, pick| match pick {
//!         1 => Some(TransitionResult::Repeat),
//!         2 => Some(TransitionResult::Advance(20)),
//!         _ => Some(TransitionResult::NoOp),
//!     })
//!     .build()
//!     .unwrap();
//!
//! let step = definition.execute(definition.first(), 0, 2).unwrap();
//! assert_eq!(step.result, TransitionResult::Advance(20));
//! assert_eq!((step.state_id, step.step_index), (20, 0));
//! ```

pub mod core;
pub mod lifecycle;
pub mod registry;
pub mod script;

// Re-export commonly used types
pub use crate::core::{Cursor, Directive, OptionTag, StateId, Step, TransitionResult};
pub use crate::lifecycle::{LifecycleEngine, Phase};
pub use crate::registry::{AuthoringError, HandlerRegistry};
pub use crate::script::{execute, ScriptBuilder, ScriptDefinition, ScriptInstance};
