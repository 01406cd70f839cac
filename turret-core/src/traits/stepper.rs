//! Step/direction stepper line trait
//!
//! This trait abstracts over the three digital lines an axis needs:
//! direction, step and the limit switch input. Timing is not part of it;
//! the axis channel owns its delay source.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Step travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Position counts up (DIR line low)
    Forward,
    /// Position counts down, toward the limit switch (DIR line high)
    Reverse,
}

impl Direction {
    /// Direction for a signed step delta
    ///
    /// Zero is treated as forward.
    pub fn from_delta(delta: i32) -> Self {
        if delta < 0 {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }

    /// Position change produced by one step in this direction
    pub fn unit(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// A digital line reported an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinFault;

/// Trait for the lines of one step/direction axis
///
/// Implementations translate logical states into electrical levels,
/// including the limit switch polarity.
pub trait StepperIo {
    /// Drive the direction line for the next steps
    fn set_direction(&mut self, dir: Direction) -> Result<(), PinFault>;

    /// Drive the step line high (`true`) or low (`false`)
    ///
    /// The driver latches a step on the rising edge.
    fn set_step(&mut self, high: bool) -> Result<(), PinFault>;

    /// Check whether the limit switch is currently triggered
    ///
    /// Takes `&mut self` because embedded-hal input reads do.
    fn limit_triggered(&mut self) -> Result<bool, PinFault>;
}
