//! State machine definition
//!
//! Engine states and the events that move between them.

use core::fmt;

use super::events::Event;

/// Engine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineState {
    /// Position unknown; a calibration must run before any move
    Uncalibrated,
    /// Powered, calibrated and stationary
    Idle,
    /// Step sequence in progress
    Moving,
    /// Holding power removed; position no longer trusted
    PoweredOff,
}

impl EngineState {
    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use EngineState::*;
        use Event::*;

        match (self, event) {
            // Calibration can be (re)run from any stationary state
            (Uncalibrated | Idle | PoweredOff, CalibrationComplete) => Idle,
            (Uncalibrated | Idle | PoweredOff, CalibrationFailed) => Uncalibrated,

            (Idle, MoveStarted) => Moving,
            (Moving, MoveFinished) => Idle,

            // Power removal always wins
            (_, PowerRemoved) => PoweredOff,

            // Default: stay in current state
            _ => self,
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineState::Uncalibrated => "uncalibrated",
            EngineState::Idle => "idle",
            EngineState::Moving => "moving",
            EngineState::PoweredOff => "powered-off",
        };
        f.write_str(name)
    }
}
