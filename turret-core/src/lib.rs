//! Board-agnostic core logic for the turret controller firmware
//!
//! This crate contains all motion and safety logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (stepper lines, holding power, fire trigger)
//! - Per-axis step channels with abort-on-limit
//! - Limit-switch homing (calibration)
//! - Target planning against the safe-to-fire bounds
//! - Motor power gating and the engine state machine
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod motion;
pub mod safety;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use engine::{MotionEngine, Status};
pub use motion::{Axis, BoundsMode, MotionError, Position};
