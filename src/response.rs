//! Response types for command execution.
//!
//! `Response` is the transmit buffer: the formatted text of one reply plus the
//! flags that decide how it is framed on the wire.

use crate::config::TX_CAPACITY;
use crate::error::CommandError;
use core::fmt::Write;

/// Formatted reply with framing flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Reply text
    pub message: heapless::String<TX_CAPACITY>,

    /// Add line terminator before message
    pub prefix_newline: bool,

    /// Add line terminator after message
    pub postfix_newline: bool,

    /// Add a blank line after the reply
    pub blank_line: bool,
}

impl Response {
    /// Create reply with default framing: message, terminator, blank line.
    ///
    /// Text longer than the transmit buffer is truncated.
    pub fn success(message: &str) -> Self {
        let mut msg = heapless::String::new();
        for c in message.chars() {
            if msg.push(c).is_err() {
                break;
            }
        }

        Self {
            message: msg,
            prefix_newline: false,
            postfix_newline: true,
            blank_line: true,
        }
    }

    /// Confirmation after a period write, carrying the read-back value.
    pub fn period(ticks: u16) -> Self {
        let mut response = Self::success("");
        write!(response.message, "PWM now has a period of: {} ", ticks).ok();
        response
    }

    /// Confirmation after a compare write, carrying the read-back value.
    pub fn duty_cycle(ticks: u16) -> Self {
        let mut response = Self::success("");
        write!(
            response.message,
            "PWM now has a duty cycle (in clock ticks) of: {} ",
            ticks
        )
        .ok();
        response
    }

    /// Error reply.
    pub fn error(err: &CommandError) -> Self {
        let mut response = Self::success("");
        write!(response.message, "{}", err).ok();
        response
    }

    /// Status notice on its own line, e.g. `"\r\nStopping PWM.\r\n"`.
    pub fn notice(message: &str) -> Self {
        Self::success(message).with_prefix_newline().without_blank_line()
    }

    /// Builder method to add a terminator before the message.
    pub fn with_prefix_newline(mut self) -> Self {
        self.prefix_newline = true;
        self
    }

    /// Builder method to suppress the terminator after the message.
    pub fn without_postfix_newline(mut self) -> Self {
        self.postfix_newline = false;
        self
    }

    /// Builder method to suppress the trailing blank line.
    pub fn without_blank_line(mut self) -> Self {
        self.blank_line = false;
        self
    }
}
