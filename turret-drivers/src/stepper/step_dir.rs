//! Step/direction driver lines
//!
//! Generic STEP/DIR stepper drivers (A4988, DRV8825, TB6600 and the like)
//! plus a limit switch input. Level conventions:
//!
//! - DIR high drives toward the limit switch (position counts down)
//! - The limit switch is normally open with a pull-up, reading low when
//!   triggered
//!
//! Both can be flipped in [`StepDirConfig`] to match the wiring.

use embedded_hal::digital::{InputPin, OutputPin};
use turret_core::traits::{Direction, PinFault, StepperIo};

/// Electrical conventions of one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepDirConfig {
    /// Swap the DIR levels
    pub dir_inverted: bool,
    /// Limit switch reads low when triggered
    pub limit_active_low: bool,
}

impl Default for StepDirConfig {
    fn default() -> Self {
        Self {
            dir_inverted: false,
            limit_active_low: true,
        }
    }
}

/// STEP, DIR and limit switch pins of one axis
pub struct StepDirPins<DIR, STEP, LIMIT> {
    dir: DIR,
    step: STEP,
    limit: LIMIT,
    config: StepDirConfig,
}

impl<DIR, STEP, LIMIT> StepDirPins<DIR, STEP, LIMIT>
where
    DIR: OutputPin,
    STEP: OutputPin,
    LIMIT: InputPin,
{
    /// Create axis lines with the default conventions
    pub fn new(dir: DIR, step: STEP, limit: LIMIT) -> Self {
        Self::with_config(dir, step, limit, StepDirConfig::default())
    }

    /// Create axis lines with explicit conventions
    pub fn with_config(dir: DIR, step: STEP, limit: LIMIT, config: StepDirConfig) -> Self {
        Self {
            dir,
            step,
            limit,
            config,
        }
    }

    /// Get the conventions in use
    pub fn config(&self) -> &StepDirConfig {
        &self.config
    }

    /// Release the pins
    pub fn release(self) -> (DIR, STEP, LIMIT) {
        (self.dir, self.step, self.limit)
    }
}

impl<DIR, STEP, LIMIT> StepperIo for StepDirPins<DIR, STEP, LIMIT>
where
    DIR: OutputPin,
    STEP: OutputPin,
    LIMIT: InputPin,
{
    fn set_direction(&mut self, dir: Direction) -> Result<(), PinFault> {
        // Reverse => high, unless inverted
        let high = (dir == Direction::Reverse) != self.config.dir_inverted;
        if high {
            self.dir.set_high().map_err(|_| PinFault)
        } else {
            self.dir.set_low().map_err(|_| PinFault)
        }
    }

    fn set_step(&mut self, high: bool) -> Result<(), PinFault> {
        if high {
            self.step.set_high().map_err(|_| PinFault)
        } else {
            self.step.set_low().map_err(|_| PinFault)
        }
    }

    fn limit_triggered(&mut self) -> Result<bool, PinFault> {
        if self.config.limit_active_low {
            self.limit.is_low().map_err(|_| PinFault)
        } else {
            self.limit.is_high().map_err(|_| PinFault)
        }
    }
}
