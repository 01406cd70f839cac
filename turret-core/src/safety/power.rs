//! Motor power state
//!
//! Positions are only trustworthy while holding power has been asserted
//! continuously since the last calibration. An unpowered axis may have been
//! moved by hand, so any power removal invalidates the calibration.

/// Holding power and calibration trust tracking
#[derive(Debug, Clone, Default)]
pub struct MotorPowerState {
    /// Holding power output asserted
    powered: bool,
    /// Calibrated since power was last asserted
    calibrated: bool,
    /// Completed calibrations since construction
    calibrations: u32,
}

impl MotorPowerState {
    /// Create a new state: unpowered and uncalibrated
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that holding power was asserted
    ///
    /// This alone does not make positions trustworthy.
    pub fn power_on(&mut self) {
        self.powered = true;
    }

    /// Record that holding power was removed
    pub fn power_off(&mut self) {
        self.powered = false;
        self.calibrated = false;
    }

    /// Record a completed calibration
    ///
    /// Ignored unless power is asserted.
    pub fn calibration_complete(&mut self) {
        if self.powered {
            self.calibrated = true;
            self.calibrations = self.calibrations.saturating_add(1);
        }
    }

    /// Record a failed calibration
    pub fn calibration_failed(&mut self) {
        self.calibrated = false;
    }

    /// Check if the step counters can be trusted
    pub fn is_trusted(&self) -> bool {
        self.powered && self.calibrated
    }

    /// Check if a calibration must run before the next move
    pub fn needs_recalibration(&self) -> bool {
        !self.is_trusted()
    }

    /// Check if holding power is asserted
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Number of completed calibrations
    pub fn calibration_count(&self) -> u32 {
        self.calibrations
    }
}
