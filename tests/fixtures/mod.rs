//! Test fixtures for servo-shell testing.
//!
//! Provides:
//! - `MockIo`: Test implementation of the SerialIo trait
//! - `MockPwm`: PWM register model that records every call
//! - `PwmCall`: Entries of the MockPwm call log

#![allow(dead_code)]

use servo_shell::{PwmPeripheral, SerialIo};
use std::collections::VecDeque;

// ============================================================================
// MockIo - Test I/O Implementation
// ============================================================================

/// Mock serial transport.
///
/// In-memory byte I/O with input queue and output capture.
#[derive(Debug)]
pub struct MockIo {
    /// Input queue (simulates bytes arriving on the UART)
    input: VecDeque<u8>,

    /// Output capture (collects all transmitted bytes)
    output: Vec<u8>,
}

impl MockIo {
    /// Create new MockIo with empty buffers.
    pub fn new() -> Self {
        Self {
            input: VecDeque::new(),
            output: Vec::new(),
        }
    }

    /// Create MockIo with pre-loaded input.
    pub fn with_input(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            output: Vec::new(),
        }
    }

    /// Queue input bytes.
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    /// Get captured output as string (lossy for non-UTF-8 bytes).
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Get captured output as raw bytes.
    pub fn output_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Remaining input count.
    pub fn input_len(&self) -> usize {
        self.input.len()
    }
}

impl Default for MockIo {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialIo for MockIo {
    type Error = ();

    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.input.pop_front())
    }

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.output.push(byte);
        Ok(())
    }
}

// ============================================================================
// FailingIo - Transport that rejects every write
// ============================================================================

/// Transport whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingIo;

impl SerialIo for FailingIo {
    type Error = &'static str;

    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(None)
    }

    fn put_byte(&mut self, _byte: u8) -> Result<(), Self::Error> {
        Err("tx fault")
    }
}

// ============================================================================
// MockPwm - Recording PWM
// ============================================================================

/// One call made on the MockPwm.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PwmCall {
    WritePeriod(u16),
    WriteCompare(u16),
    Start,
    Stop,
}

/// PWM model that records every mutating call.
#[derive(Debug, Default)]
pub struct MockPwm {
    pub period: u16,
    pub compare: u16,
    pub running: bool,
    pub calls: Vec<PwmCall>,
}

impl MockPwm {
    /// Create a stopped PWM with zeroed registers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of register writes (period or compare).
    pub fn write_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, PwmCall::WritePeriod(_) | PwmCall::WriteCompare(_)))
            .count()
    }

    /// Forget recorded calls, keep register state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl PwmPeripheral for MockPwm {
    fn write_period(&mut self, ticks: u16) {
        self.calls.push(PwmCall::WritePeriod(ticks));
        self.period = ticks;
    }

    fn read_period(&self) -> u16 {
        self.period
    }

    fn write_compare(&mut self, ticks: u16) {
        self.calls.push(PwmCall::WriteCompare(ticks));
        self.compare = ticks;
    }

    fn read_compare(&self) -> u16 {
        self.compare
    }

    fn start(&mut self) {
        self.calls.push(PwmCall::Start);
        self.running = true;
    }

    fn stop(&mut self) {
        self.calls.push(PwmCall::Stop);
        self.running = false;
    }
}
