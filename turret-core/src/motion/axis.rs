//! Step/direction axis channel
//!
//! Moves one axis by a signed number of steps, tracking position per
//! step and stopping the moment the limit switch trips.

use embedded_hal::delay::DelayNs;

use super::position::{Axis, BoundsMode, IoLine, MotionError};
use crate::config::{AxisBounds, AxisConfig, TimingConfig};
use crate::traits::{Direction, StepperIo};

/// One axis of the turret
///
/// Owns the axis lines, a delay source and the step counter. The counter is
/// the engine's belief about where the axis sits; it only changes when a
/// step pulse is issued or calibration zeroes it.
pub struct AxisChannel<IO, D> {
    axis: Axis,
    io: IO,
    delay: D,
    config: AxisConfig,
    timing: TimingConfig,
    /// Steps from the calibrated zero
    position: i32,
}

impl<IO: StepperIo, D: DelayNs> AxisChannel<IO, D> {
    /// Create a new axis channel at position zero
    pub fn new(axis: Axis, io: IO, delay: D, config: AxisConfig, timing: TimingConfig) -> Self {
        Self {
            axis,
            io,
            delay,
            config,
            timing,
            position: 0,
        }
    }

    /// Move by `delta` steps
    ///
    /// The direction line is set and allowed to settle before anything else,
    /// including the bounds check. With [`BoundsMode::Checked`] a move that
    /// would end outside the axis bounds is rejected before any pulse.
    ///
    /// The limit switch is read after every pulse. When it trips the move
    /// stops with [`MotionError::LimitTriggered`] and the position reflects
    /// the steps actually taken.
    pub fn step(&mut self, delta: i32, mode: BoundsMode) -> Result<(), MotionError> {
        let dir = Direction::from_delta(delta);
        self.io.set_direction(dir).map_err(|_| self.fault())?;
        self.delay.delay_ms(self.timing.direction_settle_ms);

        if mode == BoundsMode::Checked && !self.config.bounds.admits_move(self.position, delta) {
            return Err(MotionError::OutOfBounds(self.axis));
        }

        for _ in 0..delta.unsigned_abs() {
            self.pulse()?;
            self.position = self.position.saturating_add(dir.unit());

            if self.limit_triggered()? {
                return Err(MotionError::LimitTriggered(self.axis));
            }
        }

        Ok(())
    }

    /// Issue one step pulse
    ///
    /// Low phase, short fixed delay, then high held for the axis step delay.
    fn pulse(&mut self) -> Result<(), MotionError> {
        self.io.set_step(false).map_err(|_| self.fault())?;
        self.delay.delay_us(self.timing.step_low_us);
        self.io.set_step(true).map_err(|_| self.fault())?;
        self.delay.delay_us(self.config.step_delay_us);
        Ok(())
    }

    /// Check if the limit switch is triggered
    pub fn limit_triggered(&mut self) -> Result<bool, MotionError> {
        self.io.limit_triggered().map_err(|_| self.fault())
    }

    /// Declare the current physical position to be zero
    pub(crate) fn zero(&mut self) {
        self.position = 0;
    }

    fn fault(&self) -> MotionError {
        MotionError::Io(IoLine::Axis(self.axis))
    }

    /// Which axis this is
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Current position in steps from the calibrated zero
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Travel bounds
    pub fn bounds(&self) -> AxisBounds {
        self.config.bounds
    }

    /// Get configuration reference
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Get the underlying lines
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Get the underlying lines mutably (for diagnostics)
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockIo};
    use proptest::prelude::*;

    fn channel(io: MockIo) -> AxisChannel<MockIo, MockDelay> {
        AxisChannel::new(
            Axis::Elevation,
            io,
            MockDelay::default(),
            AxisConfig::ELEVATION,
            TimingConfig::DEFAULT,
        )
    }

    #[test]
    fn test_direction_from_sign() {
        let mut axis = channel(MockIo::free());

        axis.step(-3, BoundsMode::Checked).unwrap();
        assert_eq!(axis.io().direction, Some(Direction::Reverse));

        axis.step(2, BoundsMode::Checked).unwrap();
        assert_eq!(axis.io().direction, Some(Direction::Forward));

        // Zero steps still drives the direction line, forward
        axis.step(0, BoundsMode::Checked).unwrap();
        assert_eq!(axis.io().direction, Some(Direction::Forward));
        assert_eq!(axis.io().direction_writes, 3);
        assert_eq!(axis.position(), -1);
    }

    #[test]
    fn test_out_of_bounds_rejected_without_pulses() {
        let mut axis = channel(MockIo::free());

        // Elevation bounds are [-5000, 0]
        assert_eq!(
            axis.step(1, BoundsMode::Checked),
            Err(MotionError::OutOfBounds(Axis::Elevation))
        );
        assert_eq!(
            axis.step(-5001, BoundsMode::Checked),
            Err(MotionError::OutOfBounds(Axis::Elevation))
        );
        assert_eq!(axis.io().rising_edges, 0);
        assert_eq!(axis.position(), 0);

        // Direction was still set before the check
        assert_eq!(axis.io().direction, Some(Direction::Reverse));
    }

    #[test]
    fn test_bounds_edges_accepted() {
        let mut axis = channel(MockIo::free());

        axis.step(-5000, BoundsMode::Checked).unwrap();
        assert_eq!(axis.position(), -5000);
        axis.step(5000, BoundsMode::Checked).unwrap();
        assert_eq!(axis.position(), 0);
    }

    #[test]
    fn test_unchecked_ignores_bounds() {
        let mut axis = channel(MockIo::free());

        axis.step(2030, BoundsMode::Unchecked).unwrap();
        assert_eq!(axis.position(), 2030);
        assert_eq!(axis.io().physical, 2030);
    }

    #[test]
    fn test_limit_stops_partial_move() {
        let mut io = MockIo::free();
        io.trip_in(7);
        let mut axis = channel(io);

        assert_eq!(
            axis.step(-20, BoundsMode::Checked),
            Err(MotionError::LimitTriggered(Axis::Elevation))
        );
        assert_eq!(axis.position(), -7);
        assert_eq!(axis.io().rising_edges, 7);
    }

    #[test]
    fn test_pulse_timing() {
        let mut axis = channel(MockIo::free());

        axis.step(-10, BoundsMode::Checked).unwrap();

        // 1 ms settle + 10 * (2 µs low + 1000 µs high)
        let expected_ns = 1_000_000 + 10 * (2_000 + 1_000_000);
        assert_eq!(axis.delay.elapsed_ns, expected_ns);
    }

    #[test]
    fn test_pin_fault_reported() {
        let mut io = MockIo::free();
        io.fail_step = true;
        let mut axis = channel(io);

        assert_eq!(
            axis.step(-1, BoundsMode::Checked),
            Err(MotionError::Io(IoLine::Axis(Axis::Elevation)))
        );
        assert_eq!(axis.position(), 0);
    }

    proptest! {
        #[test]
        fn prop_checked_move_lands_exactly(start in -5000i32..=0, delta in -5000i32..=5000) {
            let mut axis = channel(MockIo::free());
            axis.step(start, BoundsMode::Unchecked).unwrap();

            let result = axis.step(delta, BoundsMode::Checked);
            if (-5000..=0).contains(&(start + delta)) {
                prop_assert_eq!(result, Ok(()));
                prop_assert_eq!(axis.position(), start + delta);
            } else {
                prop_assert_eq!(result, Err(MotionError::OutOfBounds(Axis::Elevation)));
                prop_assert_eq!(axis.position(), start);
            }
        }

        #[test]
        fn prop_trip_after_k_moves_k(n in 1u32..400, k_frac in 0.0f64..1.0, reverse in any::<bool>()) {
            let k = ((n as f64) * k_frac) as u32 + 1;
            let k = k.min(n);
            let mut io = MockIo::free();
            io.trip_in(k);
            let mut axis = channel(io);

            let delta = if reverse { -(n as i32) } else { n as i32 };
            let result = axis.step(delta, BoundsMode::Unchecked);

            prop_assert_eq!(result, Err(MotionError::LimitTriggered(Axis::Elevation)));
            let expected = if reverse { -(k as i32) } else { k as i32 };
            prop_assert_eq!(axis.position(), expected);
        }
    }
}
