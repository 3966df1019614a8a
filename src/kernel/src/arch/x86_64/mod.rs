//! x86_64 architecture support.
//!
//! Provides the VGA text console and serial port communication for x86_64 platforms.

pub mod serial;
pub mod vga;

pub use serial::{SerialLog, SERIAL};
pub use vga::{VgaConsole, CONSOLE};

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop with interrupts off.
///
/// Used after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    x86_64::instructions::interrupts::disable();
    loop {
        hlt();
    }
}
