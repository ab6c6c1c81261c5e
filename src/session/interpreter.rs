//! Command interpretation and dispatch to the PWM peripheral.

use crate::error::CommandError;
use crate::policy::RangePolicy;
use crate::pwm::PwmPeripheral;
use crate::response::Response;
use crate::session::decoder::ByteEvent;
use crate::session::parser::parse_line;

/// Text echoed when `x` stops the PWM.
pub const MSG_STOPPING: &str = "Stopping PWM.";

/// Text echoed when `e` restarts the PWM.
pub const MSG_RESTARTING: &str = "Restarting PWM.";

/// A command ready to be applied to the PWM.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Write the period register
    SetPeriod(u16),

    /// Write the compare register
    SetDutyCycle(u16),

    /// Stop the PWM
    Stop,

    /// Start the PWM
    Start,
}

impl Command {
    /// Build a command from a complete line.
    ///
    /// Mode `p` selects the period, `d` the duty cycle.
    pub fn from_line(line: &[u8]) -> Result<Self, CommandError> {
        let parsed = parse_line(line)?;
        match parsed.mode {
            b'p' => Ok(Command::SetPeriod(parsed.value)),
            b'd' => Ok(Command::SetDutyCycle(parsed.value)),
            other => Err(CommandError::UnknownMode(other)),
        }
    }

    /// Immediate command carried by a single byte, if any.
    pub fn from_event(event: ByteEvent) -> Option<Self> {
        match event {
            ByteEvent::Stop => Some(Command::Stop),
            ByteEvent::Start => Some(Command::Start),
            ByteEvent::Terminator | ByteEvent::Data(_) => None,
        }
    }

    /// Apply the command to the PWM and build the confirmation.
    ///
    /// Values are checked against `policy` before anything is written. The
    /// confirmation carries the value read back from the peripheral.
    pub fn apply<P: PwmPeripheral>(
        self,
        pwm: &mut P,
        policy: &RangePolicy,
    ) -> Result<Response, CommandError> {
        match self {
            Command::SetPeriod(ticks) => {
                pwm.write_period(policy.check_period(ticks)?);
                Ok(Response::period(pwm.read_period()))
            }
            Command::SetDutyCycle(ticks) => {
                pwm.write_compare(policy.check_duty_cycle(ticks)?);
                Ok(Response::duty_cycle(pwm.read_compare()))
            }
            Command::Stop => {
                pwm.stop();
                Ok(Response::notice(MSG_STOPPING))
            }
            Command::Start => {
                pwm.start();
                Ok(Response::notice(MSG_RESTARTING))
            }
        }
    }
}

/// Interpret one complete line: parse, validate, write the PWM, format the reply.
///
/// Never fails: parse errors, unknown modes and rejected values become error
/// replies and leave the PWM untouched.
pub fn interpret_line<P: PwmPeripheral>(
    line: &[u8],
    pwm: &mut P,
    policy: &RangePolicy,
) -> Response {
    let outcome = Command::from_line(line).and_then(|command| {
        #[cfg(feature = "defmt")]
        defmt::debug!("dispatch {}", command);
        command.apply(pwm, policy)
    });

    match outcome {
        Ok(response) => response,
        Err(err) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("rejected line: {}", err);
            Response::error(&err)
        }
    }
}
