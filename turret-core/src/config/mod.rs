//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware builds them at
//! compile time from `turret.toml`.

pub mod types;

pub use types::*;
