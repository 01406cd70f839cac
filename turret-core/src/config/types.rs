//! Configuration type definitions
//!
//! These types describe the mechanism: per-axis travel bounds, parked
//! offsets and step timing, plus the shared actuator timings.

use core::fmt;

use crate::motion::Axis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive step-count limits of one axis (the safe-to-fire zone)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisBounds {
    /// Lowest permitted position
    pub min: i32,
    /// Highest permitted position
    pub max: i32,
}

impl AxisBounds {
    /// Create new bounds
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Check if an absolute position is within bounds
    pub fn contains(&self, position: i32) -> bool {
        position >= self.min && position <= self.max
    }

    /// Check if moving `delta` steps from `position` stays within bounds
    ///
    /// Overflowing sums are out of bounds.
    pub fn admits_move(&self, position: i32, delta: i32) -> bool {
        position
            .checked_add(delta)
            .is_some_and(|target| self.contains(target))
    }
}

/// Per-axis configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisConfig {
    /// Travel limits used for target validation and checked moves
    pub bounds: AxisBounds,
    /// Parked position relative to the calibrated zero
    pub home_offset: i32,
    /// High phase of each step pulse in µs (sets traversal speed)
    pub step_delay_us: u32,
    /// Give up homing after this many steps (None = seek forever)
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_homing_steps: Option<u32>,
}

impl AxisConfig {
    /// Reference azimuth axis
    pub const AZIMUTH: Self = Self {
        bounds: AxisBounds::new(-14000, 0),
        home_offset: 0,
        step_delay_us: 800,
        max_homing_steps: Some(28000),
    };

    /// Reference elevation axis
    pub const ELEVATION: Self = Self {
        bounds: AxisBounds::new(-5000, 0),
        home_offset: 2030,
        step_delay_us: 1000,
        max_homing_steps: Some(10000),
    };
}

/// Shared timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Wait after changing a direction line, before the first step (ms)
    pub direction_settle_ms: u32,
    /// Low phase of each step pulse (µs)
    pub step_low_us: u32,
    /// Wait between reaching the target and firing (ms)
    pub fire_settle_ms: u32,
    /// Length of the fire pulse (ms)
    pub fire_pulse_ms: u32,
    /// Settle time after power-on initialization (ms)
    pub startup_ms: u32,
}

impl TimingConfig {
    /// Reference timings
    pub const DEFAULT: Self = Self {
        direction_settle_ms: 1,
        step_low_us: 2,
        fire_settle_ms: 500,
        fire_pulse_ms: 250,
        startup_ms: 500,
    };
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete turret configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurretConfig {
    /// Azimuth (rotation) axis
    pub azimuth: AxisConfig,
    /// Elevation axis
    pub elevation: AxisConfig,
    /// Shared timings
    #[cfg_attr(feature = "serde", serde(default))]
    pub timing: TimingConfig,
}

impl TurretConfig {
    /// Reference machine configuration
    pub const DEFAULT: Self = Self {
        azimuth: AxisConfig::AZIMUTH,
        elevation: AxisConfig::ELEVATION,
        timing: TimingConfig::DEFAULT,
    };

    /// Get the configuration of one axis
    pub fn axis(&self, axis: Axis) -> &AxisConfig {
        match axis {
            Axis::Azimuth => &self.azimuth,
            Axis::Elevation => &self.elevation,
        }
    }

    /// Validate the configuration
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for axis in [Axis::Azimuth, Axis::Elevation] {
            let cfg = self.axis(axis);
            if cfg.bounds.min > cfg.bounds.max {
                return Err(ConfigError::InvalidBounds(axis));
            }
            if cfg.step_delay_us == 0 {
                return Err(ConfigError::ZeroStepDelay(axis));
            }
            if cfg.max_homing_steps == Some(0) {
                return Err(ConfigError::ZeroHomingLimit(axis));
            }
        }
        Ok(())
    }
}

impl Default for TurretConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Bounds minimum exceeds maximum
    InvalidBounds(Axis),
    /// Step delay of zero would outrun any driver
    ZeroStepDelay(Axis),
    /// Homing limit of zero steps can never find the switch
    ZeroHomingLimit(Axis),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBounds(axis) => write!(f, "{} bounds min exceeds max", axis),
            ConfigError::ZeroStepDelay(axis) => write!(f, "{} step delay is zero", axis),
            ConfigError::ZeroHomingLimit(axis) => write!(f, "{} homing limit is zero", axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_machine() {
        let config = TurretConfig::default();

        assert_eq!(config.azimuth.bounds, AxisBounds::new(-14000, 0));
        assert_eq!(config.elevation.bounds, AxisBounds::new(-5000, 0));
        assert_eq!(config.elevation.home_offset, 2030);
        assert_eq!(config.azimuth.step_delay_us, 800);
        assert_eq!(config.elevation.step_delay_us, 1000);
        assert_eq!(config.timing.fire_pulse_ms, 250);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_bounds_inclusive() {
        let bounds = AxisBounds::new(-5000, 0);

        assert!(bounds.contains(0));
        assert!(bounds.contains(-5000));
        assert!(!bounds.contains(1));
        assert!(!bounds.contains(-5001));
    }

    #[test]
    fn test_admits_move_overflow() {
        let bounds = AxisBounds::new(i32::MIN, i32::MAX);

        assert!(bounds.admits_move(0, i32::MAX));
        assert!(!bounds.admits_move(1, i32::MAX));
        assert!(!bounds.admits_move(-1, i32::MIN));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut config = TurretConfig::default();
        config.elevation.bounds = AxisBounds::new(10, -10);

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBounds(Axis::Elevation))
        );
    }

    #[test]
    fn test_validate_rejects_zero_timings() {
        let mut config = TurretConfig::default();
        config.azimuth.step_delay_us = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroStepDelay(Axis::Azimuth))
        );

        let mut config = TurretConfig::default();
        config.elevation.max_homing_steps = Some(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroHomingLimit(Axis::Elevation))
        );
    }

    // Run with `cargo test -p turret-core --features serde` (alias `cargo test-config`)
    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_toml() {
        let text = r#"
            [azimuth]
            bounds = { min = -14000, max = 0 }
            home_offset = 0
            step_delay_us = 800

            [elevation]
            bounds = { min = -5000, max = 0 }
            home_offset = 2030
            step_delay_us = 1000
            max_homing_steps = 8000

            [timing]
            fire_pulse_ms = 100
        "#;

        let config: TurretConfig = toml::from_str(text).unwrap();

        assert_eq!(config.azimuth.max_homing_steps, None);
        assert_eq!(config.elevation.max_homing_steps, Some(8000));
        assert_eq!(config.timing.fire_pulse_ms, 100);
        assert_eq!(config.timing.fire_settle_ms, 500);
        assert_eq!(config.validate(), Ok(()));
    }
}
