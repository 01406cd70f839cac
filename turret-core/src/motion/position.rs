//! Position and motion result types shared by the axis channels,
//! the planner and the engine.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Horizontal rotation
    Azimuth,
    /// Vertical tilt
    Elevation,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Azimuth => f.write_str("azimuth"),
            Axis::Elevation => f.write_str("elevation"),
        }
    }
}

/// Two-axis coordinate in steps relative to the calibrated zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Azimuth step count
    pub azimuth: i32,
    /// Elevation step count
    pub elevation: i32,
}

impl Position {
    /// The calibrated zero
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new position
    pub const fn new(azimuth: i32, elevation: i32) -> Self {
        Self {
            azimuth,
            elevation,
        }
    }

    /// Get the coordinate of one axis
    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Azimuth => self.azimuth,
            Axis::Elevation => self.elevation,
        }
    }

    /// Per-axis difference `self - from`
    ///
    /// Saturates instead of overflowing.
    pub fn delta_from(&self, from: Position) -> Position {
        Position {
            azimuth: self.azimuth.saturating_sub(from.azimuth),
            elevation: self.elevation.saturating_sub(from.elevation),
        }
    }
}

/// Whether a step sequence is validated against the axis bounds
///
/// Only calibration and parking use `Unchecked`; bounds mean nothing
/// before zero is established, and the parked pose may lie outside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoundsMode {
    /// Reject moves that would leave `[min, max]`
    Checked,
    /// Move regardless of bounds
    Unchecked,
}

/// Output or input line that reported a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoLine {
    /// Step, direction or limit line of an axis
    Axis(Axis),
    /// Motor holding-power output
    HoldingPower,
    /// Fire actuator output
    Fire,
}

/// Motion failures
///
/// None of these are fatal: the caller may retry, re-home or re-target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// Requested position lies outside the axis bounds; nothing moved
    OutOfBounds(Axis),
    /// Limit switch tripped mid-move; position reflects steps taken
    LimitTriggered(Axis),
    /// Homing step budget exhausted without reaching the switch
    HomingFailed(Axis),
    /// A pin reported an error
    Io(IoLine),
}

impl MotionError {
    /// Axis involved, if any
    pub fn axis(&self) -> Option<Axis> {
        match self {
            MotionError::OutOfBounds(axis)
            | MotionError::LimitTriggered(axis)
            | MotionError::HomingFailed(axis)
            | MotionError::Io(IoLine::Axis(axis)) => Some(*axis),
            MotionError::Io(_) => None,
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::OutOfBounds(axis) => write!(f, "{} out of bounds", axis),
            MotionError::LimitTriggered(axis) => write!(f, "{} limit triggered", axis),
            MotionError::HomingFailed(axis) => write!(f, "{} homing failed", axis),
            MotionError::Io(IoLine::Axis(axis)) => write!(f, "{} pin fault", axis),
            MotionError::Io(IoLine::HoldingPower) => f.write_str("motor power pin fault"),
            MotionError::Io(IoLine::Fire) => f.write_str("fire pin fault"),
        }
    }
}
