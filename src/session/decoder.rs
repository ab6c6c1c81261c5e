//! Byte decoder for the receive path.
//!
//! Classifies each raw UART byte into a logical event. Pure function: it neither
//! touches the line buffer nor performs I/O.

/// Logical event for one received byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteEvent {
    /// Carriage return or line feed, ends the current line
    Terminator,

    /// `x`, stop the PWM immediately
    Stop,

    /// `e`, start the PWM immediately
    Start,

    /// Any other byte, part of the line
    Data(u8),
}

/// Decode a single received byte.
///
/// # Examples
///
/// ```
/// use servo_shell::session::decoder::{decode_byte, ByteEvent};
///
/// assert_eq!(decode_byte(b'\r'), ByteEvent::Terminator);
/// assert_eq!(decode_byte(b'x'), ByteEvent::Stop);
/// assert_eq!(decode_byte(b'7'), ByteEvent::Data(b'7'));
/// ```
pub fn decode_byte(byte: u8) -> ByteEvent {
    match byte {
        b'\r' | b'\n' => ByteEvent::Terminator,
        b'x' => ByteEvent::Stop,
        b'e' => ByteEvent::Start,
        other => ByteEvent::Data(other),
    }
}
