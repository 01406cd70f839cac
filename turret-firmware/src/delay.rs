//! Blocking delay source for the motion engine
//!
//! Step timing is a busy wait on the embassy clock. The engine runs to
//! completion inside the console task, so nothing else needs the core
//! while a move is in progress.

use embassy_time::{block_for, Duration};
use embedded_hal::delay::DelayNs;

/// Busy-wait delay backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingDelay;

impl DelayNs for BlockingDelay {
    fn delay_ns(&mut self, ns: u32) {
        block_for(Duration::from_nanos(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
