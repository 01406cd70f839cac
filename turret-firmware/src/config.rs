//! Compiled-in turret configuration
//!
//! Generated by build.rs from turret.toml, which is validated at build time.

use turret_core::config::{AxisBounds, AxisConfig, TimingConfig, TurretConfig};

include!(concat!(env!("OUT_DIR"), "/turret_config.rs"));
