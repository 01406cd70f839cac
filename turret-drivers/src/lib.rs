//! Hardware driver implementations
//!
//! This crate binds the traits defined in turret-core to
//! `embedded-hal` digital pins:
//!
//! - Step/direction axis lines with limit switch input
//! - Motor holding-power output
//! - Fire actuator output

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod stepper;

#[cfg(test)]
pub(crate) mod mock;

pub use actuator::{GpioFireTrigger, GpioHoldingPower};
pub use stepper::{StepDirConfig, StepDirPins};
