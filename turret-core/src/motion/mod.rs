//! Motion control
//!
//! Per-axis stepping, limit-switch homing and target planning.

pub mod axis;
pub mod homing;
pub mod planner;
pub mod position;

pub use axis::AxisChannel;
pub use homing::home_axis;
pub use planner::TargetPlanner;
pub use position::{Axis, BoundsMode, IoLine, MotionError, Position};
