//! Byte-level serial transport abstraction.
//!
//! The `SerialIo` trait is the only view the interpreter has of the UART. It can
//! be implemented over a HAL serial port, a USB CDC class, stdio, or a test mock.

/// Platform-agnostic serial transport.
///
/// Implementations must not block indefinitely in `put_byte()` or `write_str()`:
/// the interpreter calls them from the byte-received handler, which on bare metal
/// runs in interrupt context.
pub trait SerialIo {
    /// Platform-specific error type
    type Error;

    /// Non-blocking byte read.
    ///
    /// Returns:
    /// - `Ok(Some(byte))` if a byte is available
    /// - `Ok(None)` if nothing has arrived
    /// - `Err(Self::Error)` on transport error
    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Write a single byte.
    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a string.
    ///
    /// Default implementation uses `put_byte()` repeatedly.
    /// Override for more efficient bulk writes if needed.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.put_byte(byte)?;
        }
        Ok(())
    }
}
