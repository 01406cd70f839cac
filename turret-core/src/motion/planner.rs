//! Target planning
//!
//! Holds the last accepted target and turns it into per-axis step deltas.

use super::position::{Axis, MotionError, Position};
use crate::config::AxisBounds;

/// Validates and stores the requested target
///
/// The target is a desired coordinate; it never changes the tracked
/// position, which belongs to the axis channels.
#[derive(Debug, Clone)]
pub struct TargetPlanner {
    azimuth: AxisBounds,
    elevation: AxisBounds,
    target: Position,
}

impl TargetPlanner {
    /// Create a planner with its target at the origin
    pub fn new(azimuth: AxisBounds, elevation: AxisBounds) -> Self {
        Self {
            azimuth,
            elevation,
            target: Position::ORIGIN,
        }
    }

    /// Set a new absolute target
    ///
    /// Both coordinates are checked against their axis bounds before
    /// either is committed; a rejected target leaves the old one in place.
    pub fn set_target(&mut self, azimuth: i32, elevation: i32) -> Result<(), MotionError> {
        if !self.azimuth.contains(azimuth) {
            return Err(MotionError::OutOfBounds(Axis::Azimuth));
        }
        if !self.elevation.contains(elevation) {
            return Err(MotionError::OutOfBounds(Axis::Elevation));
        }

        self.target = Position::new(azimuth, elevation);
        Ok(())
    }

    /// Last accepted target
    pub fn target(&self) -> Position {
        self.target
    }

    /// Steps needed on each axis to get from `current` to the target
    pub fn delta_from(&self, current: Position) -> Position {
        self.target.delta_from(current)
    }

    /// Return the target to the origin (after calibration)
    pub fn reset(&mut self) {
        self.target = Position::ORIGIN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TurretConfig;
    use proptest::prelude::*;

    fn planner() -> TargetPlanner {
        let config = TurretConfig::default();
        TargetPlanner::new(config.azimuth.bounds, config.elevation.bounds)
    }

    #[test]
    fn test_rejects_elevation_below_min() {
        let mut planner = planner();
        planner.set_target(-10, -20).unwrap();

        assert_eq!(
            planner.set_target(0, -6000),
            Err(MotionError::OutOfBounds(Axis::Elevation))
        );
        assert_eq!(planner.target(), Position::new(-10, -20));
    }

    #[test]
    fn test_azimuth_checked_first() {
        let mut planner = planner();

        assert_eq!(
            planner.set_target(1, 1),
            Err(MotionError::OutOfBounds(Axis::Azimuth))
        );
    }

    #[test]
    fn test_delta() {
        let mut planner = planner();
        planner.set_target(-100, -200).unwrap();

        assert_eq!(
            planner.delta_from(Position::new(-40, -250)),
            Position::new(-60, 50)
        );
    }

    #[test]
    fn test_reset() {
        let mut planner = planner();
        planner.set_target(-100, -200).unwrap();
        planner.reset();

        assert_eq!(planner.target(), Position::ORIGIN);
    }

    proptest! {
        #[test]
        fn prop_out_of_bounds_leaves_target(az in -20000i32..5000, el in -8000i32..3000) {
            let mut planner = planner();
            planner.set_target(-1234, -567).unwrap();

            let in_bounds = (-14000..=0).contains(&az) && (-5000..=0).contains(&el);
            let result = planner.set_target(az, el);

            if in_bounds {
                prop_assert_eq!(result, Ok(()));
                prop_assert_eq!(planner.target(), Position::new(az, el));
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(planner.target(), Position::new(-1234, -567));
            }
        }
    }
}
