//! Safety interlocks
//!
//! Tracks whether the step counters can be trusted.

pub mod power;

pub use power::MotorPowerState;
