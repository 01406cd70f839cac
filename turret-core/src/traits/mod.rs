//! Hardware abstraction traits
//!
//! These traits define the interface between the motion engine
//! and the pin-level implementations in `turret-drivers`.

pub mod actuator;
pub mod stepper;

pub use actuator::{FireTrigger, HoldingPower};
pub use stepper::{Direction, PinFault, StepperIo};
