//! # servo-shell
//!
//! Line-buffered UART command interpreter for a servo PWM peripheral.
//!
//! Bytes arrive one at a time from the UART receive interrupt. They are echoed and
//! collected into a line; on `\r` or `\n` the line is parsed as `<mode> : <number>`
//! and the PWM period (`p`) or duty cycle (`d`) is written, followed by a
//! confirmation that carries the value read back from the peripheral. Two
//! single-byte commands act immediately: `x` stops the PWM, `e` starts it.
//!
//! **Key features:**
//! - **Static allocation** - fixed-size line and transmit buffers, no heap
//! - **Const configuration** - buffer sizes and defaults via `InterpreterConfig`
//! - **Validation policy** - optional tick ranges for period and duty cycle
//! - **Flexible I/O** - transport and PWM behind small traits
//!
//! ## Optional Features
//!
//! - `defmt` - log dispatches, rejected lines and overflows through defmt
//! - `sim` - build the `servo-sim` host simulator
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod io;
pub mod policy;
pub mod pwm;
pub mod response;
pub mod session;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Collaborator traits
pub use io::SerialIo;
pub use pwm::{PwmPeripheral, SoftPwm};

// Configuration
pub use config::{DefaultConfig, InterpreterConfig, MinimalConfig, ServoConfig};
pub use policy::{RangePolicy, TickRange};

// Error and response types
pub use error::CommandError;
pub use response::Response;

// Session types
pub use session::{Command, Session, SessionState, interpret_line};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
