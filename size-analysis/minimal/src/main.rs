#![no_std]
#![no_main]

use core::cell::RefCell;
use cortex_m::interrupt::Mutex;
use panic_halt as _;
use servo_shell::{MinimalConfig, PwmPeripheral, SerialIo, Session};

// Minimal SerialIo implementation - measures only struct size
pub struct MinimalIo;

impl SerialIo for MinimalIo {
    type Error = ();

    fn get_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(None)
    }

    fn put_byte(&mut self, _byte: u8) -> Result<(), Self::Error> {
        Ok(())
    }
}

// Register-less PWM - keeps values in RAM
pub struct MinimalPwm {
    period: u16,
    compare: u16,
}

impl PwmPeripheral for MinimalPwm {
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

    fn start(&mut self) {}

    fn stop(&mut self) {}
}

type MinimalSession = Session<MinimalIo, MinimalPwm, MinimalConfig>;

// Shared with the receive handler, the way a UART ISR would own it
static SESSION: Mutex<RefCell<Option<MinimalSession>>> = Mutex::new(RefCell::new(None));

/// Stand-in for the UART receive interrupt body.
fn on_uart_rx(byte: u8) {
    cortex_m::interrupt::free(|cs| {
        if let Some(session) = SESSION.borrow(cs).borrow_mut().as_mut() {
            let _ = session.on_byte(byte);
        }
    });
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let mut session: MinimalSession = Session::new(
        MinimalIo,
        MinimalPwm {
            period: 0,
            compare: 0,
        },
    );

    // Activate to ensure all code paths are included
    // Use black_box to prevent optimizer from removing the code
    let _ = core::hint::black_box(session.activate());

    cortex_m::interrupt::free(|cs| {
        SESSION.borrow(cs).replace(Some(session));
    });

    // Feed one full command so the parser and formatter are linked in
    for &byte in core::hint::black_box(b"p : 2000\r") {
        on_uart_rx(byte);
    }

    loop {
        core::hint::black_box(&SESSION);
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
