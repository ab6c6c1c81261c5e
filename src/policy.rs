//! Value validation policy for period and duty-cycle writes.
//!
//! By default nothing is checked and range enforcement is left to the PWM block.
//! Boards driving a hobby servo usually want the duty cycle held inside the
//! servo's pulse window, see [`RangePolicy::servo`].

use crate::error::CommandError;

/// Servo pulse window in clock ticks (1 ms to 2 ms at a 100 kHz PWM clock).
pub const SERVO_PULSE_TICKS: TickRange = TickRange::new(100, 200);

/// Inclusive range of tick values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickRange {
    /// Smallest accepted value
    pub min: u16,
    /// Largest accepted value
    pub max: u16,
}

impl TickRange {
    /// Create a range. `min` and `max` are swapped if given in the wrong order.
    pub const fn new(min: u16, max: u16) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Check whether `value` lies inside the range.
    pub const fn contains(&self, value: u16) -> bool {
        value >= self.min && value <= self.max
    }

    /// Validate `value`, producing `OutOfRange` when it lies outside.
    pub fn check(&self, value: u16) -> Result<u16, CommandError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(CommandError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Per-register validation applied before a value reaches the PWM.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RangePolicy {
    /// Accepted period values (`None` = unchecked)
    pub period: Option<TickRange>,
    /// Accepted compare values (`None` = unchecked)
    pub duty_cycle: Option<TickRange>,
}

impl RangePolicy {
    /// Accept every `u16`.
    pub const fn unchecked() -> Self {
        Self {
            period: None,
            duty_cycle: None,
        }
    }

    /// Hold the duty cycle inside [`SERVO_PULSE_TICKS`]; period unchecked.
    pub const fn servo() -> Self {
        Self {
            period: None,
            duty_cycle: Some(SERVO_PULSE_TICKS),
        }
    }

    /// Builder method to restrict the period.
    pub const fn with_period(mut self, range: TickRange) -> Self {
        self.period = Some(range);
        self
    }

    /// Builder method to restrict the duty cycle.
    pub const fn with_duty_cycle(mut self, range: TickRange) -> Self {
        self.duty_cycle = Some(range);
        self
    }

    /// Validate a period value.
    pub fn check_period(&self, ticks: u16) -> Result<u16, CommandError> {
        match &self.period {
            Some(range) => range.check(ticks),
            None => Ok(ticks),
        }
    }

    /// Validate a duty-cycle value.
    pub fn check_duty_cycle(&self, ticks: u16) -> Result<u16, CommandError> {
        match &self.duty_cycle {
            Some(range) => range.check(ticks),
            None => Ok(ticks),
        }
    }
}
