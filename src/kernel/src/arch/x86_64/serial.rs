//! Serial port driver for x86_64.
//!
//! COM1 (0x3F8) carries the kernel log: the raw [`KernelLog`] sink the console
//! mirrors panics and logged numbers into, and the `log` crate backend.

use core::fmt::{self, Write};
use ember_hal::KernelLog;
use log::{Level, LevelFilter, Metadata, Record};
use spin::Mutex;
use uart_16550::SerialPort;

/// COM1 I/O port address.
const COM1_PORT: u16 = 0x3F8;

/// Global serial port instance, lazily initialized.
///
/// Uses a spinlock for safe concurrent access from multiple contexts,
/// including interrupt handlers.
pub static SERIAL: spin::Once<Mutex<SerialPort>> = spin::Once::new();

/// Initializes the global serial port.
///
/// This function is idempotent - calling it multiple times has no effect
/// after the first successful initialization.
pub fn init() {
    SERIAL.call_once(|| {
        // SAFETY: COM1_PORT (0x3F8) is a well-known x86 serial port address.
        // We're running in kernel mode with full I/O port access.
        // The uart_16550 crate handles the port initialization sequence correctly.
        let mut serial = unsafe { SerialPort::new(COM1_PORT) };
        serial.init();
        Mutex::new(serial)
    });
}

/// Returns a reference to the serial port, initializing if necessary.
fn get_serial() -> &'static Mutex<SerialPort> {
    init();
    SERIAL.get().expect("serial port not initialized")
}

/// Prints to the serial port without a newline.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::arch::x86_64::serial::_print(format_args!($($arg)*))
    };
}

/// Prints to the serial port with a newline.
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($($arg:tt)*) => ($crate::serial_print!("{}\n", format_args!($($arg)*)))
}

/// Internal print function used by macros.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    let serial = get_serial();
    serial.lock().write_fmt(args).expect("serial write failed");
}

/// The kernel log sink on COM1.
pub struct SerialLog;

impl KernelLog for SerialLog {
    fn log_str(&mut self, message: &str) {
        let _ = get_serial().lock().write_str(message);
    }

    fn log_byte(&mut self, byte: u8) {
        get_serial().lock().send(byte);
    }
}

/// `log` backend writing one line per record to COM1.
struct SerialLogger;

static LOGGER: SerialLogger = SerialLogger;

/// Installs the serial port as the `log` backend.
///
/// Later calls leave the first installation in place.
pub fn init_logger() {
    init();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if cfg!(debug_assertions) {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        });
    }
}

impl log::Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = get_serial().lock().write_fmt(format_args!(
            "{:5} {}~{:04} - {}\n",
            record.level(),
            record.module_path().unwrap_or("?").trim_start_matches("ember_"),
            record.line().unwrap_or(0),
            record.args(),
        ));
    }

    fn flush(&self) {}
}

/// Forces the serial lock open.
///
/// # Safety
///
/// Only for the panic handler: the previous holder must never run again.
pub unsafe fn force_unlock() {
    if let Some(serial) = SERIAL.get() {
        serial.force_unlock();
    }
}
