//! Reply rendering

use core::fmt::{self, Write};
use heapless::String;

/// Longest rendered reply, including the `\r\n` terminator
pub const MAX_REPLY_LEN: usize = 128;

/// Reply does not fit in the output buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReplyError;

/// A single reply line
#[derive(Clone, Copy)]
pub enum Reply<'a> {
    /// Command succeeded
    Ok,
    /// Command succeeded with something to report
    Detail(&'a dyn fmt::Display),
    /// Command failed
    Err(&'a dyn fmt::Display),
}

impl fmt::Display for Reply<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => f.write_str("ok"),
            Reply::Detail(detail) => write!(f, "ok {}", detail),
            Reply::Err(reason) => write!(f, "err {}", reason),
        }
    }
}

impl Reply<'_> {
    /// Render the reply as a terminated line
    pub fn render(&self) -> Result<String<MAX_REPLY_LEN>, ReplyError> {
        let mut line = String::new();
        write!(line, "{}\r\n", self).map_err(|_| ReplyError)?;
        Ok(line)
    }
}
