//! Host simulator for servo-shell.
//!
//! Feeds stdin through a session backed by an in-memory PWM and writes the
//! replies to stdout, as a terminal attached to the board's UART would see them.
//! The final PWM state is printed to stderr on end of input.
//!
//! ```bash
//! printf 'p : 2000\rd : 150\r' | cargo run --features sim --bin servo-sim -- demos/servo-sim.toml
//! ```
//!
//! The config file is optional; without it the PWM starts at period 2000,
//! compare 150 and no value validation is applied.

use serde::Deserialize;
use servo_shell::{
    DefaultConfig, PwmPeripheral, RangePolicy, SerialIo, Session, SoftPwm, TickRange,
};
use std::error::Error;
use std::io::{self, Read, Write};

// =============================================================================
// Configuration File
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SimConfig {
    pwm: PwmSettings,
    limits: Limits,
}

/// Register values at power-up.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PwmSettings {
    period: u16,
    compare: u16,
}

impl Default for PwmSettings {
    fn default() -> Self {
        Self {
            period: 2000,
            compare: 150,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Limits {
    /// Start from the servo pulse window for the duty cycle
    servo: bool,
    period: Option<RangeSpec>,
    duty_cycle: Option<RangeSpec>,
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RangeSpec {
    min: u16,
    max: u16,
}

impl Limits {
    fn policy(&self) -> RangePolicy {
        let mut policy = if self.servo {
            RangePolicy::servo()
        } else {
            RangePolicy::unchecked()
        };

        if let Some(range) = self.period {
            policy = policy.with_period(TickRange::new(range.min, range.max));
        }
        if let Some(range) = self.duty_cycle {
            policy = policy.with_duty_cycle(TickRange::new(range.min, range.max));
        }
        policy
    }
}

fn load_config(path: &str) -> Result<SimConfig, Box<dyn Error>> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    let config = toml::from_str(&text).map_err(|e| format!("{}: {}", path, e))?;
    Ok(config)
}

// =============================================================================
// Stdio Transport
// =============================================================================

/// Blocking stdin/stdout transport. Reaching end of input sets `eof`.
struct StdioSerial {
    stdin: io::Stdin,
    stdout: io::Stdout,
    eof: bool,
}

impl StdioSerial {
    fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
            eof: false,
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl SerialIo for StdioSerial {
    type Error = io::Error;

    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut buf = [0u8; 1];
        match self.stdin.lock().read(&mut buf) {
            Ok(0) => {
                self.eof = true;
                Ok(None)
            }
            Ok(_) => Ok(Some(buf[0])),
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn put_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.stdout.write_all(&[byte])
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.stdout.write_all(s.as_bytes())
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => SimConfig::default(),
    };

    let pwm = SoftPwm::new(config.pwm.period, config.pwm.compare);
    let mut session: Session<StdioSerial, SoftPwm, DefaultConfig> =
        Session::new(StdioSerial::new(), pwm).with_policy(config.limits.policy());

    session.activate()?;
    session.io_mut().flush()?;

    while !session.io().eof {
        session.poll()?;
        session.io_mut().flush()?;
    }

    let (_, pwm) = session.into_parts();
    eprintln!(
        "PWM {}: period {} ticks, compare {} ticks",
        if pwm.is_running() { "running" } else { "stopped" },
        pwm.read_period(),
        pwm.read_compare()
    );

    Ok(())
}
