//! Holding power and fire actuator traits

use super::stepper::PinFault;

/// Trait for the motor driver holding-power output
///
/// When holding power is removed the axes can be moved by hand, so the
/// engine no longer trusts its step counters.
pub trait HoldingPower {
    /// Assert (`true`) or remove (`false`) holding power
    fn set_holding_power(&mut self, on: bool) -> Result<(), PinFault>;

    /// Check if holding power is currently asserted
    fn is_powered(&self) -> bool;
}

/// Trait for the firing actuator output
pub trait FireTrigger {
    /// Assert (`true`) or release (`false`) the actuator
    fn set_firing(&mut self, firing: bool) -> Result<(), PinFault>;

    /// Check if the actuator is currently asserted
    fn is_firing(&self) -> bool;
}
