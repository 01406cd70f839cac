//! Line assembly for the UART byte stream

use heapless::String;

/// Longest accepted command line, excluding the terminator
pub const MAX_LINE_LEN: usize = 64;

/// Errors that can occur while assembling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded `MAX_LINE_LEN`; the rest of it is discarded
    LineTooLong,
    /// Line is not valid UTF-8
    InvalidEncoding,
}

impl core::fmt::Display for LineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LineError::LineTooLong => f.write_str("line too long"),
            LineError::InvalidEncoding => f.write_str("invalid encoding"),
        }
    }
}

/// Accumulates received bytes into complete lines
///
/// Lines end at `\n`; `\r` is dropped so both `\n` and `\r\n` terminals
/// work. An overlong line is reported once, at its terminator, and the
/// buffer starts fresh on the next line.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    buffer: heapless::Vec<u8, MAX_LINE_LEN>,
    overflowed: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create an empty line buffer
    pub fn new() -> Self {
        Self {
            buffer: heapless::Vec::new(),
            overflowed: false,
        }
    }

    /// Reset to an empty line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a line,
    /// `Ok(None)` while more bytes are needed.
    pub fn feed(&mut self, byte: u8) -> Result<Option<String<MAX_LINE_LEN>>, LineError> {
        match byte {
            b'\r' => Ok(None),
            b'\n' => {
                let overflowed = self.overflowed;
                let bytes = core::mem::take(&mut self.buffer);
                self.reset();

                if overflowed {
                    return Err(LineError::LineTooLong);
                }
                String::from_utf8(bytes)
                    .map(Some)
                    .map_err(|_| LineError::InvalidEncoding)
            }
            _ => {
                if !self.overflowed && self.buffer.push(byte).is_err() {
                    self.overflowed = true;
                }
                Ok(None)
            }
        }
    }

    /// Number of bytes buffered for the current line
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if no bytes are buffered
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
