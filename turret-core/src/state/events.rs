//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Both axes homed with holding power asserted
    CalibrationComplete,
    /// Homing gave up or a pin faulted during homing
    CalibrationFailed,
    /// A step sequence is starting
    MoveStarted,
    /// A step sequence ended, successfully or not
    MoveFinished,
    /// Holding power was removed
    PowerRemoved,
}
