//! Command dispatch
//!
//! Maps parsed console commands onto motion engine operations and logs
//! each outcome.

use defmt::*;
use embassy_rp::gpio::{Input, Output};

use turret_core::{MotionEngine, MotionError, Status};
use turret_drivers::{GpioFireTrigger, GpioHoldingPower, StepDirPins};
use turret_protocol::Command;

use crate::delay::BlockingDelay;

/// DIR, STEP and limit switch lines of one axis
pub type AxisPins = StepDirPins<Output<'static>, Output<'static>, Input<'static>>;

/// The engine as wired on the board
pub type TurretEngine = MotionEngine<
    AxisPins,
    AxisPins,
    GpioHoldingPower<Output<'static>>,
    GpioFireTrigger<Output<'static>>,
    BlockingDelay,
>;

/// Result of a successful command
pub enum Outcome {
    /// Nothing to report
    Done,
    /// Status report requested
    Status(Status),
}

/// Owns the engine and executes commands against it
pub struct Controller {
    engine: TurretEngine,
}

impl Controller {
    /// Create a controller around an initialized engine
    pub fn new(engine: TurretEngine) -> Self {
        Self { engine }
    }

    /// Execute one command to completion
    pub fn execute(&mut self, command: Command) -> Result<Outcome, MotionError> {
        if command.moves() {
            debug!("Executing {:?} from {:?}", command, self.engine.state());
        }

        let result = match command {
            Command::Home => self.engine.go_home(),
            Command::Reset => self.engine.reset(),
            Command::SetTarget { azimuth, elevation } => {
                self.engine.set_target(azimuth, elevation)
            }
            Command::Aim => self.engine.aim(),
            Command::AimAt { azimuth, elevation } => self.engine.aim_at(azimuth, elevation),
            Command::Fire => self.engine.fire(),
            Command::AimAndFire { azimuth, elevation } => {
                self.engine.aim_and_fire(azimuth, elevation)
            }
            Command::Motors(enabled) => self.engine.set_motors(enabled),
            Command::Status => return Ok(Outcome::Status(self.engine.status())),
        };

        match result {
            Ok(()) => {
                let position = self.engine.position();
                info!(
                    "{:?} done at az={} el={}",
                    command, position.azimuth, position.elevation
                );
                Ok(Outcome::Done)
            }
            Err(e) => {
                warn!("{:?} failed: {:?}", command, e);
                Err(e)
            }
        }
    }
}
