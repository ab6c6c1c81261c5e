//! Configuration traits and implementations for buffer sizing and defaults.
//!
//! The `InterpreterConfig` trait allows compile-time configuration of the line
//! capacity, the activation banner and the initial validation policy without
//! runtime overhead.

use crate::policy::RangePolicy;

/// Storage reserved for the receive line buffer, in bytes.
///
/// `InterpreterConfig::MAX_INPUT` may lower the usable capacity but never raise it.
pub const RX_CAPACITY: usize = 128;

/// Storage reserved for the transmit buffer, in bytes.
pub const TX_CAPACITY: usize = 128;

/// Interpreter configuration trait.
///
/// All values are const (zero runtime cost).
pub trait InterpreterConfig {
    /// Line capacity including the terminator slot (at most [`RX_CAPACITY`]).
    ///
    /// At most `MAX_INPUT - 1` bytes are accepted per line.
    const MAX_INPUT: usize;

    /// Message written by `Session::activate()`.
    const MSG_BANNER: &'static str = "PWM on. Please set the period: \r\n";

    /// Policy installed when the session is created.
    const DEFAULT_POLICY: RangePolicy = RangePolicy::unchecked();
}

/// Default configuration: 128-byte line, no value validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl InterpreterConfig for DefaultConfig {
    const MAX_INPUT: usize = 128;
}

/// Reduced line buffer for RAM-constrained parts.
///
/// - MAX_INPUT: 64 bytes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MinimalConfig;

impl InterpreterConfig for MinimalConfig {
    const MAX_INPUT: usize = 64;
}

/// Default sizes with the duty cycle held inside the servo pulse window.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ServoConfig;

impl InterpreterConfig for ServoConfig {
    const MAX_INPUT: usize = 128;
    const DEFAULT_POLICY: RangePolicy = RangePolicy::servo();
}
