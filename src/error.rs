//! Error types for command handling.
//!
//! Every `CommandError` is recoverable: the interpreter reports it over the UART,
//! discards the line and waits for the next one.

use core::fmt;

/// Reasons a line did not result in a PWM write.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Line did not match `<mode> : <number>`
    Malformed,

    /// Well-formed line with a mode other than `p` or `d`
    UnknownMode(u8),

    /// Value rejected by the active range policy
    OutOfRange {
        /// Value that was typed
        value: u16,
        /// Smallest accepted value
        min: u16,
        /// Largest accepted value
        max: u16,
    },

    /// Line exceeded the input buffer and was discarded
    LineTooLong,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Malformed => write!(
                f,
                "Error! incorrect data. Did you type a number after a (p or d), a colon, and the spaces between?"
            ),
            CommandError::UnknownMode(_) => write!(f, "Error! You didn't type a p or d."),
            CommandError::OutOfRange { value, min, max } => write!(
                f,
                "Error! {} is outside the allowed range of {} to {}.",
                value, min, max
            ),
            CommandError::LineTooLong => write!(f, "Error! Line too long, input discarded."),
        }
    }
}
