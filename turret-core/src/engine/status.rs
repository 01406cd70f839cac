//! Diagnostic status snapshot

use core::fmt;

use crate::motion::Position;
use crate::state::EngineState;

/// Point-in-time summary of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    /// Tracked position
    pub position: Position,
    /// Last accepted target
    pub target: Position,
    /// Holding power asserted
    pub powered: bool,
    /// Step counters trusted (calibrated under continuous power)
    pub calibrated: bool,
    /// Engine state
    pub state: EngineState,
    /// Completed calibrations since construction
    pub calibrations: u32,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Azimuth: {} Elevation: {} Motors: {} State: {}",
            self.position.azimuth,
            self.position.elevation,
            if self.powered { "on" } else { "off" },
            self.state
        )
    }
}
