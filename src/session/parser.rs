//! Line grammar for PWM commands.
//!
//! A line has the form `<mode> : <number>`:
//!
//! - `mode` is the first byte of the line, taken as-is
//! - whitespace around the colon is optional, the colon itself is not
//! - `number` is an unsigned decimal that fits in a `u16`
//! - trailing whitespace is allowed, anything else after the number is not
//!
//! The parser only splits the line; mapping the mode byte to a command happens
//! in the interpreter.

use crate::error::CommandError;

/// Result of a successful parse: mode byte and value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// First byte of the line
    pub mode: u8,
    /// Decimal value after the colon
    pub value: u16,
}

/// Parse a complete line (terminator already stripped).
///
/// # Returns
///
/// * `Ok(ParsedLine)` - exactly one mode byte and one integer were found
/// * `Err(CommandError::Malformed)` - anything else
pub fn parse_line(line: &[u8]) -> Result<ParsedLine, CommandError> {
    let (&mode, rest) = line.split_first().ok_or(CommandError::Malformed)?;

    let rest = skip_whitespace(rest);
    let rest = rest.strip_prefix(b":").ok_or(CommandError::Malformed)?;
    let rest = skip_whitespace(rest);

    let digits_end = rest
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, tail) = rest.split_at(digits_end);

    if digits.is_empty() || !tail.iter().all(u8::is_ascii_whitespace) {
        return Err(CommandError::Malformed);
    }

    let value = parse_u16(digits)?;
    Ok(ParsedLine { mode, value })
}

fn skip_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Accumulate ASCII digits, rejecting values above `u16::MAX`.
fn parse_u16(digits: &[u8]) -> Result<u16, CommandError> {
    digits.iter().try_fold(0u16, |acc, &d| {
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u16::from(d - b'0')))
            .ok_or(CommandError::Malformed)
    })
}
