//! Boot-time self checks for the console.
//!
//! These run on the real machine before anything else uses the screen, and
//! report over serial only.

use crate::arch::x86_64::vga;
use crate::serial_println;
use ember_console::{addressing, Digits, COLS, ROWS};

/// Runs all boot self checks.
pub fn run_all() {
    serial_println!("Running console self checks...");

    test_addressing();
    test_digits();
    test_hardware_cursor();

    serial_println!("All console self checks passed!");
}

fn test_addressing() {
    serial_println!("test_addressing... ");
    for row in 0..ROWS {
        for col in 0..COLS {
            let offset = addressing::offset(col, row);
            assert_eq!(addressing::col(offset), col);
            assert_eq!(addressing::row(offset), row);
        }
    }
    serial_println!("[ok]");
}

fn test_digits() {
    serial_println!("test_digits... ");
    let hex = Digits::new(255, 16).expect("base 16 supported");
    assert!(hex.iter().eq(*b"FF"));
    let dec = Digits::new(255, 10).expect("base 10 supported");
    assert!(dec.iter().eq(*b"255"));
    serial_println!("[ok]");
}

fn test_hardware_cursor() {
    serial_println!("test_hardware_cursor... ");
    vga::with_console(|console| {
        let saved = console.cursor_offset();
        let probe = addressing::offset(COLS - 1, ROWS - 1);
        console.cursor().set(probe);
        assert_eq!(console.cursor().get(), probe);
        console.cursor().set(saved);
        assert_eq!(console.cursor().get(), saved);
    });
    serial_println!("[ok]");
}
