//! Turret Command Protocol
//!
//! This crate defines the UART text protocol between a host terminal and the
//! turret controller. One command per line, replies one line each:
//!
//! ```text
//! > target -2000 -1500
//! < ok
//! > aimfire -2000 -1500
//! < ok
//! > aim 10 0
//! < err azimuth out of bounds
//! > status
//! < ok Azimuth: -2000 Elevation: -1500 Motors: on State: idle
//! ```
//!
//! Keywords are case-insensitive; arguments are decimal step counts.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod reply;

pub use command::{Command, ParseError};
pub use line::{LineBuffer, LineError, MAX_LINE_LEN};
pub use reply::{Reply, ReplyError, MAX_REPLY_LEN};
