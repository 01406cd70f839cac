//! Stepper line implementations

pub mod step_dir;

pub use step_dir::{StepDirConfig, StepDirPins};
