//! GPIO holding-power and fire outputs
//!
//! Both outputs are a single pin that can be wired active-high (default)
//! or active-low. Each starts released.

use embedded_hal::digital::OutputPin;
use turret_core::traits::{FireTrigger, HoldingPower, PinFault};

/// Pin with a logical on/off state and configurable polarity
struct ActiveOutput<P> {
    pin: P,
    /// If true, ON = pin LOW
    inverted: bool,
    /// Current logical state (true = on)
    on: bool,
}

impl<P: OutputPin> ActiveOutput<P> {
    fn new(pin: P, inverted: bool) -> Self {
        let mut output = Self {
            pin,
            inverted,
            on: false,
        };
        // Best effort: the owner drives the safe level again before use
        let _ = output.set(false);
        output
    }

    fn set(&mut self, on: bool) -> Result<(), PinFault> {
        // Normal: on=true, inverted=false → high
        // Inverted: on=true, inverted=true → low
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| PinFault)?;
        self.on = on;
        Ok(())
    }
}

/// Motor driver holding-power output
///
/// Usually the shared ENABLE line of both drivers or a relay on their
/// supply.
pub struct GpioHoldingPower<P> {
    output: ActiveOutput<P>,
}

impl<P: OutputPin> GpioHoldingPower<P> {
    /// Create a new holding-power output, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, power is ON when the pin is LOW (for active-low enables)
    pub fn new(pin: P, inverted: bool) -> Self {
        Self {
            output: ActiveOutput::new(pin, inverted),
        }
    }

    /// Create an active-high holding-power output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create an active-low holding-power output (e.g. A4988 ENABLE)
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> HoldingPower for GpioHoldingPower<P> {
    fn set_holding_power(&mut self, on: bool) -> Result<(), PinFault> {
        self.output.set(on)
    }

    fn is_powered(&self) -> bool {
        self.output.on
    }
}

/// Fire actuator output
pub struct GpioFireTrigger<P> {
    output: ActiveOutput<P>,
}

impl<P: OutputPin> GpioFireTrigger<P> {
    /// Create a new fire output, initially released
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the actuator fires when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        Self {
            output: ActiveOutput::new(pin, inverted),
        }
    }

    /// Create an active-high fire output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }
}

impl<P: OutputPin> FireTrigger for GpioFireTrigger<P> {
    fn set_firing(&mut self, firing: bool) -> Result<(), PinFault> {
        self.output.set(firing)
    }

    fn is_firing(&self) -> bool {
        self.output.on
    }
}
