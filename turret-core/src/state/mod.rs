//! Engine state machine
//!
//! Defines the authoritative lifecycle of the turret.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::EngineState;
