//! Pick-driven script engine.
//!
//! Dialogue-style interactions keyed by `(state id, step index, pick)`.
//! The engine keeps no state between calls: a session stores its
//! [`Cursor`](crate::core::Cursor) and hands it back with each pick.
//!
//! # Key Concepts
//!
//! - **Definition**: immutable catalog of states, entry points and option tags
//! - **Builder / `script!`**: the two ways to declare a definition
//! - **`execute`**: resolves one pick into a [`Step`](crate::core::Step)
//! - **Instance**: convenience session owning a cursor

mod builder;
mod definition;
mod engine;
mod instance;
pub mod macros;

pub use builder::ScriptBuilder;
pub use definition::ScriptDefinition;
pub use engine::execute;
pub use instance::ScriptInstance;
