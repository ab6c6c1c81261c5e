//! Interpreter session: line accumulation, dispatch and reply framing.
//!
//! A `Session` owns everything the receive path mutates (line buffer, overflow
//! flag, validation policy) together with the transport and the PWM. The code that
//! installs the UART receive interrupt owns the session and hands it to the
//! handler by `&mut`, calling [`Session::on_byte`] once per received byte.
//! Foreground polling loops can call [`Session::poll`] instead.
//!
//! Nothing here blocks or yields: a terminator runs the interpreter to
//! completion before `on_byte()` returns.

use crate::config::{InterpreterConfig, RX_CAPACITY};
use crate::error::CommandError;
use crate::io::SerialIo;
use crate::policy::RangePolicy;
use crate::pwm::PwmPeripheral;
use crate::response::Response;
use core::marker::PhantomData;

// Sub-modules
pub mod decoder;
pub mod interpreter;
pub mod parser;

// Re-export key types
pub use decoder::{ByteEvent, decode_byte};
pub use interpreter::{Command, interpret_line};
pub use parser::{ParsedLine, parse_line};

/// Echoed in place of a byte that did not fit the line buffer.
const BELL: u8 = 0x07;

/// Session activation state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Input ignored
    Inactive,

    /// Accepting commands
    Active,
}

/// Line-buffered command interpreter bound to one UART and one PWM.
///
/// Generic over:
/// - `IO`: SerialIo implementation
/// - `P`: PwmPeripheral implementation
/// - `C`: InterpreterConfig implementation
pub struct Session<IO, P, C>
where
    IO: SerialIo,
    P: PwmPeripheral,
    C: InterpreterConfig,
{
    /// Transport
    io: IO,

    /// PWM block
    pwm: P,

    /// Receive line buffer, at most `C::MAX_INPUT - 1` bytes
    rx: heapless::Vec<u8, RX_CAPACITY>,

    /// Bytes were dropped since the last terminator
    overflowed: bool,

    /// Value validation applied before PWM writes
    policy: RangePolicy,

    /// Activation state
    state: SessionState,

    /// Config type marker (zero-size)
    _config: PhantomData<C>,
}

impl<IO, P, C> core::fmt::Debug for Session<IO, P, C>
where
    IO: SerialIo,
    P: PwmPeripheral,
    C: InterpreterConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("rx", &self.rx.as_slice())
            .field("overflowed", &self.overflowed)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<IO, P, C> Session<IO, P, C>
where
    IO: SerialIo,
    P: PwmPeripheral,
    C: InterpreterConfig,
{
    /// Create a new session.
    ///
    /// Starts in `Inactive` state with `C::DEFAULT_POLICY`. Call `activate()` to
    /// start the PWM and print the banner.
    pub fn new(io: IO, pwm: P) -> Self {
        const {
            assert!(
                C::MAX_INPUT >= 2 && C::MAX_INPUT <= RX_CAPACITY,
                "MAX_INPUT must be between 2 and RX_CAPACITY"
            )
        };

        Self {
            io,
            pwm,
            rx: heapless::Vec::new(),
            overflowed: false,
            policy: C::DEFAULT_POLICY,
            state: SessionState::Inactive,
            _config: PhantomData,
        }
    }

    /// Builder method to replace the validation policy.
    pub fn with_policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Activate the session: start the PWM and write the banner.
    pub fn activate(&mut self) -> Result<(), IO::Error> {
        self.state = SessionState::Active;
        self.pwm.start();

        #[cfg(feature = "defmt")]
        defmt::info!("session active");

        self.io.write_str(C::MSG_BANNER)
    }

    /// Deactivate the session.
    ///
    /// Discards any partial line. Input is ignored until `activate()` is called
    /// again. The PWM keeps running.
    pub fn deactivate(&mut self) {
        self.state = SessionState::Inactive;
        self.clear_line();
    }

    /// Process a single received byte.
    ///
    /// Main entry point, called once per byte from the UART receive handler.
    /// Returns Err only when the transport fails; the line state is reset
    /// regardless.
    pub fn on_byte(&mut self, byte: u8) -> Result<(), IO::Error> {
        if self.state == SessionState::Inactive {
            return Ok(());
        }

        match decode_byte(byte) {
            ByteEvent::Terminator => self.handle_terminator(),

            ByteEvent::Data(b) => self.handle_data(b),

            event @ (ByteEvent::Stop | ByteEvent::Start) => {
                // Immediate commands drop whatever was typed so far
                self.clear_line();
                match Command::from_event(event) {
                    Some(command) => {
                        #[cfg(feature = "defmt")]
                        defmt::info!("immediate {}", command);

                        let response = self.execute(command);
                        self.write_response(&response)
                    }
                    None => Ok(()),
                }
            }
        }
    }

    /// Poll the transport for one byte and process it.
    ///
    /// Convenience for foreground loops with a polled UART. Interrupt-driven
    /// designs should read the byte in the handler and call `on_byte()`.
    pub fn poll(&mut self) -> Result<(), IO::Error> {
        if let Some(byte) = self.io.get_byte()? {
            self.on_byte(byte)?;
        }
        Ok(())
    }

    /// Append a line byte, or drop it once the line is full.
    fn handle_data(&mut self, byte: u8) -> Result<(), IO::Error> {
        let has_room = self.rx.len() + 1 < C::MAX_INPUT;

        if has_room && self.rx.push(byte).is_ok() {
            self.io.put_byte(byte)
        } else {
            if !self.overflowed {
                #[cfg(feature = "defmt")]
                defmt::warn!("line buffer full, dropping input");
            }
            self.overflowed = true;
            self.io.put_byte(BELL)
        }
    }

    /// Close the current line and run the interpreter on it.
    fn handle_terminator(&mut self) -> Result<(), IO::Error> {
        // Empty line, e.g. the second half of "\r\n"
        if self.rx.is_empty() && !self.overflowed {
            return Ok(());
        }

        let response = if self.overflowed {
            Response::error(&CommandError::LineTooLong)
        } else {
            interpret_line(&self.rx, &mut self.pwm, &self.policy)
        };
        self.clear_line();

        // Echo the terminator, then the reply
        self.io.write_str("\r\n")?;
        self.write_response(&response)
    }

    fn execute(&mut self, command: Command) -> Response {
        command
            .apply(&mut self.pwm, &self.policy)
            .unwrap_or_else(|err| Response::error(&err))
    }

    fn clear_line(&mut self) {
        self.rx.clear();
        self.overflowed = false;
    }

    /// Write a reply, applying its framing flags.
    fn write_response(&mut self, response: &Response) -> Result<(), IO::Error> {
        if response.prefix_newline {
            self.io.write_str("\r\n")?;
        }

        self.io.write_str(&response.message)?;

        if response.postfix_newline {
            self.io.write_str("\r\n")?;
        }

        if response.blank_line {
            self.io.write_str("\r\n")?;
        }

        Ok(())
    }

    /// Activation state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Active validation policy.
    pub fn policy(&self) -> &RangePolicy {
        &self.policy
    }

    /// Replace the validation policy.
    pub fn set_policy(&mut self, policy: RangePolicy) {
        self.policy = policy;
    }

    /// Bytes of the line typed so far.
    pub fn pending_input(&self) -> &[u8] {
        &self.rx
    }

    /// Whether bytes were dropped from the current line.
    pub fn line_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Get reference to the transport.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Get mutable reference to the transport.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Get reference to the PWM.
    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Get mutable reference to the PWM.
    pub fn pwm_mut(&mut self) -> &mut P {
        &mut self.pwm
    }

    /// Consume the session, returning transport and PWM.
    pub fn into_parts(self) -> (IO, P) {
        (self.io, self.pwm)
    }
}

// ============================================================================
// Tests
// ============================================================================
