//! Boot logging with colored status indicators.
//!
//! Provides Linux-style boot messages with colored status brackets. Each
//! line is mirrored to the `log` backend so the serial capture has the same
//! history as the screen.

pub mod banner;

use crate::arch::x86_64::vga;
use crate::println;
use ember_common::{Attribute, Color};

/// Boot status indicators.
#[derive(Debug, Clone, Copy)]
pub enum Status {
    /// Success - `[ OK ]` in green
    Ok,
    /// Warning - `[WARN]` in yellow
    Warn,
    /// Informational - `[INFO]` in cyan
    Info,
}

impl Status {
    fn label(self) -> (&'static str, Color) {
        match self {
            Status::Ok => ("[ OK ]", Color::LightGreen),
            Status::Warn => ("[WARN]", Color::Yellow),
            Status::Info => ("[INFO]", Color::LightCyan),
        }
    }

    fn level(self) -> log::Level {
        match self {
            Status::Ok | Status::Info => log::Level::Info,
            Status::Warn => log::Level::Warn,
        }
    }
}

/// Log a boot stage with status.
///
/// Format: `[ OK ] Message text`
pub fn log(status: Status, message: &str) {
    let (text, color) = status.label();
    vga::print_colored(Attribute::new(color, Color::Black), format_args!("{}", text));
    println!(" {}", message);
    log::log!(status.level(), "{}", message);
}

/// Log a section header.
///
/// Prints a blank line before the header for visual separation.
pub fn log_section(name: &str) {
    println!();
    vga::print_colored(
        Attribute::new(Color::LightCyan, Color::Black),
        format_args!("-- {} --\n", name),
    );
}
