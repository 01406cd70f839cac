//! Limit-switch homing
//!
//! Drives an axis toward its switch one unchecked step at a time until the
//! switch reads triggered, then declares that position zero.

use embedded_hal::delay::DelayNs;

use super::axis::AxisChannel;
use super::position::{BoundsMode, MotionError};
use crate::traits::StepperIo;

/// Home one axis against its limit switch
///
/// The switch is checked before every step, so an axis already sitting on
/// its switch takes no steps. Bounds are not applied: they mean nothing
/// until zero is established.
///
/// Returns the number of steps taken. Fails with
/// [`MotionError::HomingFailed`] when the configured step budget runs out.
pub fn home_axis<IO: StepperIo, D: DelayNs>(
    channel: &mut AxisChannel<IO, D>,
) -> Result<u32, MotionError> {
    let budget = channel.config().max_homing_steps;
    let mut steps: u32 = 0;

    while !channel.limit_triggered()? {
        if budget.is_some_and(|max| steps >= max) {
            return Err(MotionError::HomingFailed(channel.axis()));
        }

        match channel.step(-1, BoundsMode::Unchecked) {
            // The trip is picked up by the loop condition
            Ok(()) | Err(MotionError::LimitTriggered(_)) => {}
            Err(e) => return Err(e),
        }
        steps = steps.saturating_add(1);
    }

    channel.zero();
    Ok(steps)
}
