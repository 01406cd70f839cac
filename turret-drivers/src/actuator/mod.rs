//! Output actuators
//!
//! Single-pin outputs driven through SSRs, MOSFETs or driver enable lines.

pub mod gpio;

pub use gpio::{GpioFireTrigger, GpioHoldingPower};
