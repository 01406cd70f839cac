//! Motion engine
//!
//! Owns both axis channels, the holding-power and fire outputs, the target
//! planner and the power state, and sequences them into the operations the
//! command layer calls: reset, go home, set target, aim, fire.
//!
//! All operations block until they finish. Axes always move one after the
//! other, elevation first.
//!
//! # Usage
//!
//! ```ignore
//! let mut engine = MotionEngine::new(config, az_pins, el_pins, power, trigger, Delay)?;
//! engine.reset()?;
//! engine.aim_and_fire(-2000, -1500)?;
//! ```

pub mod status;

pub use status::Status;

use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::config::{ConfigError, TurretConfig};
use crate::motion::{
    home_axis, Axis, AxisChannel, BoundsMode, IoLine, MotionError, Position, TargetPlanner,
};
use crate::safety::MotorPowerState;
use crate::state::{EngineState, Event};
use crate::traits::{FireTrigger, HoldingPower, StepperIo};

/// Errors constructing the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Configuration failed validation
    Config(ConfigError),
    /// An output could not be driven to its safe level
    Io(IoLine),
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError::Config(e)
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Config(e) => write!(f, "invalid config: {}", e),
            InitError::Io(line) => write!(f, "{}", MotionError::Io(*line)),
        }
    }
}

/// Two-axis turret motion engine
pub struct MotionEngine<AZ, EL, P, F, D> {
    config: TurretConfig,
    azimuth: AxisChannel<AZ, D>,
    elevation: AxisChannel<EL, D>,
    power: P,
    trigger: F,
    delay: D,
    planner: TargetPlanner,
    power_state: MotorPowerState,
    state: EngineState,
}

impl<AZ, EL, P, F, D> MotionEngine<AZ, EL, P, F, D>
where
    AZ: StepperIo,
    EL: StepperIo,
    P: HoldingPower,
    F: FireTrigger,
    D: DelayNs + Clone,
{
    /// Create the engine and drive every output to its safe level
    ///
    /// The fire output is released and holding power removed, so the
    /// engine starts uncalibrated. Waits the configured startup time.
    pub fn new(
        config: TurretConfig,
        azimuth_io: AZ,
        elevation_io: EL,
        mut power: P,
        mut trigger: F,
        mut delay: D,
    ) -> Result<Self, InitError> {
        config.validate()?;

        trigger
            .set_firing(false)
            .map_err(|_| InitError::Io(IoLine::Fire))?;
        power
            .set_holding_power(false)
            .map_err(|_| InitError::Io(IoLine::HoldingPower))?;

        let azimuth = AxisChannel::new(
            Axis::Azimuth,
            azimuth_io,
            delay.clone(),
            config.azimuth,
            config.timing,
        );
        let elevation = AxisChannel::new(
            Axis::Elevation,
            elevation_io,
            delay.clone(),
            config.elevation,
            config.timing,
        );

        delay.delay_ms(config.timing.startup_ms);

        Ok(Self {
            config,
            azimuth,
            elevation,
            power,
            trigger,
            delay,
            planner: TargetPlanner::new(config.azimuth.bounds, config.elevation.bounds),
            power_state: MotorPowerState::new(),
            state: EngineState::Uncalibrated,
        })
    }

    /// Calibrate, park at the home offsets, then remove holding power
    ///
    /// Parking is skipped if calibration fails. Power is removed on every
    /// path; the first error is returned.
    pub fn go_home(&mut self) -> Result<(), MotionError> {
        let parked = self.reset().and_then(|()| self.park());
        let powered_off = self.set_motors(false);
        parked.and(powered_off)
    }

    /// Move both axes to their home offsets, elevation first
    fn park(&mut self) -> Result<(), MotionError> {
        self.apply(Event::MoveStarted);
        let elevation = self.config.elevation.home_offset - self.elevation.position();
        let azimuth = self.config.azimuth.home_offset - self.azimuth.position();
        let result = self
            .elevation
            .step(elevation, BoundsMode::Unchecked)
            .and_then(|()| self.azimuth.step(azimuth, BoundsMode::Unchecked));
        self.apply(Event::MoveFinished);
        result
    }

    /// Assert holding power and home both axes, elevation first
    ///
    /// On success both the tracked position and the target are at the
    /// origin and the engine is idle.
    pub fn reset(&mut self) -> Result<(), MotionError> {
        self.set_motors(true)?;

        let homed = home_axis(&mut self.elevation).and_then(|_| home_axis(&mut self.azimuth));
        if let Err(e) = homed {
            self.power_state.calibration_failed();
            self.apply(Event::CalibrationFailed);
            return Err(e);
        }

        self.planner.reset();
        self.power_state.calibration_complete();
        self.apply(Event::CalibrationComplete);
        Ok(())
    }

    /// Validate and store a new target without moving
    pub fn set_target(&mut self, azimuth: i32, elevation: i32) -> Result<(), MotionError> {
        self.planner.set_target(azimuth, elevation)
    }

    /// Move to the stored target
    ///
    /// Recalibrates first if holding power was dropped since the last
    /// calibration; the stored target survives that recalibration.
    /// Elevation moves first. If it fails, azimuth is left alone. Nothing
    /// is rolled back: the tracked position reflects the steps taken.
    pub fn aim(&mut self) -> Result<(), MotionError> {
        if self.power_state.needs_recalibration() {
            let target = self.planner.target();
            self.reset()?;
            self.planner.set_target(target.azimuth, target.elevation)?;
        }

        let delta = self.planner.delta_from(self.position());

        self.apply(Event::MoveStarted);
        let result = self
            .elevation
            .step(delta.elevation, BoundsMode::Checked)
            .and_then(|()| self.azimuth.step(delta.azimuth, BoundsMode::Checked));
        self.apply(Event::MoveFinished);

        result
    }

    /// Set a target and move to it
    ///
    /// A rejected target causes no motion.
    pub fn aim_at(&mut self, azimuth: i32, elevation: i32) -> Result<(), MotionError> {
        self.planner.set_target(azimuth, elevation)?;
        self.aim()
    }

    /// Aim, settle, then fire
    ///
    /// Fires only when the aim succeeded; otherwise the aim error is
    /// returned and the fire output is never asserted.
    pub fn aim_and_fire(&mut self, azimuth: i32, elevation: i32) -> Result<(), MotionError> {
        self.aim_at(azimuth, elevation)?;
        self.delay.delay_ms(self.config.timing.fire_settle_ms);
        self.fire()
    }

    /// Pulse the fire output
    ///
    /// No interlock here; callers that need one go through
    /// [`aim_and_fire`](Self::aim_and_fire). The output is always released.
    pub fn fire(&mut self) -> Result<(), MotionError> {
        let asserted = self.trigger.set_firing(true);
        if asserted.is_ok() {
            self.delay.delay_ms(self.config.timing.fire_pulse_ms);
        }
        let released = self.trigger.set_firing(false);

        asserted
            .and(released)
            .map_err(|_| MotionError::Io(IoLine::Fire))
    }

    /// Assert or remove holding power
    ///
    /// Removing power invalidates the calibration before the output is
    /// touched. Asserting power does not restore it.
    pub fn set_motors(&mut self, enabled: bool) -> Result<(), MotionError> {
        if enabled {
            self.power
                .set_holding_power(true)
                .map_err(|_| MotionError::Io(IoLine::HoldingPower))?;
            self.power_state.power_on();
        } else {
            self.power_state.power_off();
            self.apply(Event::PowerRemoved);
            self.power
                .set_holding_power(false)
                .map_err(|_| MotionError::Io(IoLine::HoldingPower))?;
        }
        Ok(())
    }

    fn apply(&mut self, event: Event) {
        self.state = self.state.transition(event);
    }

    /// Tracked position of both axes
    pub fn position(&self) -> Position {
        Position::new(self.azimuth.position(), self.elevation.position())
    }

    /// Last accepted target
    pub fn target(&self) -> Position {
        self.planner.target()
    }

    /// Current engine state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Check if positions are trusted (calibrated under continuous power)
    pub fn is_calibrated(&self) -> bool {
        self.power_state.is_trusted()
    }

    /// Completed calibrations since construction
    pub fn calibration_count(&self) -> u32 {
        self.power_state.calibration_count()
    }

    /// Diagnostic snapshot
    pub fn status(&self) -> Status {
        Status {
            position: self.position(),
            target: self.target(),
            powered: self.power.is_powered(),
            calibrated: self.power_state.is_trusted(),
            state: self.state,
            calibrations: self.power_state.calibration_count(),
        }
    }

    /// Get configuration reference
    pub fn config(&self) -> &TurretConfig {
        &self.config
    }

    /// Azimuth channel
    pub fn azimuth(&self) -> &AxisChannel<AZ, D> {
        &self.azimuth
    }

    /// Elevation channel
    pub fn elevation(&self) -> &AxisChannel<EL, D> {
        &self.elevation
    }

    /// Azimuth channel, mutable (for diagnostics)
    pub fn azimuth_mut(&mut self) -> &mut AxisChannel<AZ, D> {
        &mut self.azimuth
    }

    /// Elevation channel, mutable (for diagnostics)
    pub fn elevation_mut(&mut self) -> &mut AxisChannel<EL, D> {
        &mut self.elevation
    }

    /// Holding-power output
    pub fn holding_power(&self) -> &P {
        &self.power
    }

    /// Fire output
    pub fn fire_trigger(&self) -> &F {
        &self.trigger
    }
}
