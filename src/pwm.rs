//! PWM peripheral abstraction.
//!
//! `PwmPeripheral` mirrors the register API of a timer-based PWM block: a period
//! register, a compare register (the duty cycle, in clock ticks), and a run bit.
//! Register writes take effect synchronously, so none of the methods can fail.

/// PWM block driving the servo signal.
pub trait PwmPeripheral {
    /// Write the period register (cycle length in clock ticks).
    fn write_period(&mut self, ticks: u16);

    /// Read back the period register.
    fn read_period(&self) -> u16;

    /// Write the compare register (high time within the cycle, in clock ticks).
    fn write_compare(&mut self, ticks: u16);

    /// Read back the compare register.
    fn read_compare(&self) -> u16;

    /// Enable the counter and output.
    fn start(&mut self);

    /// Disable the counter and output. Register values are kept.
    fn stop(&mut self);
}

/// In-memory PWM model.
///
/// Holds period and compare values the way the hardware registers would. Used by
/// the host simulator and handy for bring-up before the real timer is wired.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SoftPwm {
    period: u16,
    compare: u16,
    running: bool,
}

impl SoftPwm {
    /// Create a stopped PWM with the given initial register values.
    pub const fn new(period: u16, compare: u16) -> Self {
        Self {
            period,
            compare,
            running: false,
        }
    }

    /// Whether the counter is enabled.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for SoftPwm {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl PwmPeripheral for SoftPwm {
    fn write_period(&mut self, ticks: u16) {
        self.period = ticks;
    }

    fn read_period(&self) -> u16 {
        self.period
    }

    fn write_compare(&mut self, ticks: u16) {
        self.compare = ticks;
    }

    fn read_compare(&self) -> u16 {
        self.compare
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }
}
