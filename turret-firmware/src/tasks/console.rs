//! Command console task
//!
//! Reads command lines from the UART, runs them on the controller and
//! writes one reply line per command.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, Write};

use turret_protocol::{Command, LineBuffer, Reply};

use crate::controller::{Controller, Outcome};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Console task - parses commands and replies over UART
#[embassy_executor::task]
pub async fn console_task(
    mut rx: BufferedUartRx,
    mut tx: BufferedUartTx,
    mut controller: Controller,
) {
    info!("Console task started");

    let mut lines = LineBuffer::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        let n = match rx.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                warn!("UART read error: {:?}", e);
                continue;
            }
        };

        trace!("RX: {} bytes", n);

        for &byte in &buf[..n] {
            match lines.feed(byte) {
                Ok(Some(line)) => {
                    // Blank lines are ignored rather than answered
                    if line.trim().is_empty() {
                        continue;
                    }
                    handle_line(&mut tx, &mut controller, &line).await;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Line error: {:?}", e);
                    send(&mut tx, Reply::Err(&e)).await;
                }
            }
        }
    }
}

/// Parse and execute one line, then reply
async fn handle_line(tx: &mut BufferedUartTx, controller: &mut Controller, line: &str) {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(e) => {
            warn!("Parse error: {:?}", e);
            send(tx, Reply::Err(&e)).await;
            return;
        }
    };

    match controller.execute(command) {
        Ok(Outcome::Done) => send(tx, Reply::Ok).await,
        Ok(Outcome::Status(status)) => send(tx, Reply::Detail(&status)).await,
        Err(e) => send(tx, Reply::Err(&e)).await,
    }
}

/// Render and write a reply line
async fn send(tx: &mut BufferedUartTx, reply: Reply<'_>) {
    let line = match reply.render() {
        Ok(line) => line,
        Err(_) => {
            error!("Reply too long for buffer");
            return;
        }
    };

    if let Err(e) = tx.write_all(line.as_bytes()).await {
        warn!("UART write error: {:?}", e);
    }
}
