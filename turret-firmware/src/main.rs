//! Turret - Two-axis Stepper Turret Firmware
//!
//! Main firmware binary for RP2040-based turret controllers. Drives the
//! azimuth and elevation steppers open-loop, calibrates them against their
//! limit switches and gates the fire output on a trusted position.
//! Commands arrive as text lines on UART0.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use turret_core::MotionEngine;
use turret_drivers::{GpioFireTrigger, GpioHoldingPower, StepDirPins};

use crate::config::TURRET_CONFIG;
use crate::controller::Controller;
use crate::delay::BlockingDelay;

mod config;
mod controller;
mod delay;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Turret firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Command console on UART0 (GPIO0 TX, GPIO1 RX), 115200 baud default
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for command console");

    // Axis lines: DIR/STEP outputs plus a pulled-up limit switch that
    // reads low when triggered
    let azimuth = StepDirPins::new(
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::High),
        Input::new(p.PIN_2, Pull::Up),
    );
    let elevation = StepDirPins::new(
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_6, Level::High),
        Input::new(p.PIN_3, Pull::Up),
    );

    // Fire output starts released, holding power starts off
    let trigger = GpioFireTrigger::new_active_high(Output::new(p.PIN_8, Level::Low));
    let power = GpioHoldingPower::new_active_high(Output::new(p.PIN_10, Level::Low));

    let engine = match MotionEngine::new(
        TURRET_CONFIG,
        azimuth,
        elevation,
        power,
        trigger,
        BlockingDelay,
    ) {
        Ok(engine) => engine,
        Err(e) => {
            // Outputs are already at their safe levels; nothing to drive
            error!("Engine initialization failed: {:?}", e);
            return;
        }
    };

    info!(
        "Engine ready: azimuth {}..{}, elevation {}..{}",
        TURRET_CONFIG.azimuth.bounds.min,
        TURRET_CONFIG.azimuth.bounds.max,
        TURRET_CONFIG.elevation.bounds.min,
        TURRET_CONFIG.elevation.bounds.max
    );

    let controller = Controller::new(engine);

    spawner.spawn(tasks::console_task(rx, tx, controller)).unwrap();
    info!("Console task spawned");
}
