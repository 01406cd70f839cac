//! Mock hardware for unit tests
//!
//! `MockIo` models the physical axis: rising step edges move a physical
//! counter in the latched direction, and the limit switch reads triggered
//! when that counter sits on the switch or after a scripted number of steps.

use embedded_hal::delay::DelayNs;

use crate::traits::{Direction, FireTrigger, HoldingPower, PinFault, StepperIo};

pub struct MockIo {
    pub direction: Option<Direction>,
    pub step_high: bool,
    /// Physical position in steps, independent of the channel's belief
    pub physical: i32,
    /// Physical position of the limit switch
    pub switch_at: Option<i32>,
    /// Trip the switch after this many more rising edges (stays tripped)
    pub trip_after: Option<u32>,
    pub rising_edges: u32,
    pub direction_writes: u32,
    pub fail_step: bool,
}

impl MockIo {
    /// Axis resting `offset` steps in front of its switch
    pub fn with_switch(offset: i32) -> Self {
        Self {
            physical: offset,
            switch_at: Some(0),
            ..Self::free()
        }
    }

    /// Axis whose switch never trips on its own
    pub fn free() -> Self {
        Self {
            direction: None,
            step_high: true,
            physical: 0,
            switch_at: None,
            trip_after: None,
            rising_edges: 0,
            direction_writes: 0,
            fail_step: false,
        }
    }

    /// Trip the switch after `steps` more steps
    pub fn trip_in(&mut self, steps: u32) {
        self.trip_after = Some(self.rising_edges + steps);
    }
}

impl StepperIo for MockIo {
    fn set_direction(&mut self, dir: Direction) -> Result<(), PinFault> {
        self.direction = Some(dir);
        self.direction_writes += 1;
        Ok(())
    }

    fn set_step(&mut self, high: bool) -> Result<(), PinFault> {
        if self.fail_step {
            return Err(PinFault);
        }
        if high && !self.step_high {
            self.rising_edges += 1;
            let unit = self.direction.map(Direction::unit).unwrap_or(1);
            self.physical += unit;
        }
        self.step_high = high;
        Ok(())
    }

    fn limit_triggered(&mut self) -> Result<bool, PinFault> {
        let on_switch = self.switch_at == Some(self.physical);
        let scripted = self.trip_after.is_some_and(|n| self.rising_edges >= n);
        Ok(on_switch || scripted)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    pub elapsed_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}

#[derive(Debug, Default)]
pub struct MockPower {
    pub on: bool,
    pub switches: u32,
}

impl HoldingPower for MockPower {
    fn set_holding_power(&mut self, on: bool) -> Result<(), PinFault> {
        self.on = on;
        self.switches += 1;
        Ok(())
    }

    fn is_powered(&self) -> bool {
        self.on
    }
}

#[derive(Debug, Default)]
pub struct MockTrigger {
    pub firing: bool,
    pub pulses: u32,
}

impl FireTrigger for MockTrigger {
    fn set_firing(&mut self, firing: bool) -> Result<(), PinFault> {
        if firing && !self.firing {
            self.pulses += 1;
        }
        self.firing = firing;
        Ok(())
    }

    fn is_firing(&self) -> bool {
        self.firing
    }
}
