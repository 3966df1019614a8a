//! Unsigned integers in bases 2 through 36.
//!
//! Digits above 9 use capital letters, so 255 is `FF` in base 16 and 35 is
//! `Z` in base 36.

use crate::writer::{Console, Target};
use ember_common::{Attribute, ConsoleError};
use ember_hal::{KernelLog, PortIo, TextBuffer};

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base: ten digits plus 26 letters.
pub const MAX_BASE: u32 = 36;

/// Enough digits for any `u32` in base 2.
const MAX_DIGITS: usize = u32::BITS as usize;

/// Where formatted digits go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The screen, at the cursor, in the default color.
    Screen,
    /// The kernel log, one byte at a time.
    Log,
}

/// ASCII symbol for a digit value below [`MAX_BASE`].
const fn symbol(value: u32) -> u8 {
    if value > 9 {
        (value + 65 - 10) as u8
    } else {
        (value + 0x30) as u8
    }
}

/// The digits of a number, most significant first.
#[derive(Clone, Copy)]
pub struct Digits {
    /// Least significant first; read back to front.
    buf: [u8; MAX_DIGITS],
    len: usize,
}

impl Digits {
    /// Converts `n` to base `base`.
    pub fn new(n: u32, base: u32) -> Result<Self, ConsoleError> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(ConsoleError::UnsupportedBase(base));
        }
        Ok(Self::convert(n, base))
    }

    fn convert(mut n: u32, base: u32) -> Self {
        let mut digits = Digits {
            buf: [0; MAX_DIGITS],
            len: 0,
        };
        loop {
            digits.buf[digits.len] = symbol(n % base);
            digits.len += 1;
            n /= base;
            if n == 0 {
                break digits;
            }
        }
    }

    /// Digit symbols, most significant first.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.buf[..self.len].iter().rev().copied()
    }

    /// Number of digits. Always at least one.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; zero formats as `0`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<B, P, L> Console<B, P, L>
where
    B: TextBuffer,
    P: PortIo,
    L: KernelLog,
{
    /// Emits `n` in base `base` to `destination`.
    ///
    /// Nothing is emitted for a base outside 2..=36.
    pub fn print_base(&mut self, n: u32, base: u32, destination: Destination) -> Result<(), ConsoleError> {
        let digits = Digits::new(n, base)?;
        self.emit(&digits, destination);
        Ok(())
    }

    fn emit(&mut self, digits: &Digits, destination: Destination) {
        for digit in digits.iter() {
            match destination {
                Destination::Screen => {
                    self.print_char(digit, Target::Cursor, Attribute::DEFAULT);
                }
                Destination::Log => self.log_sink().log_byte(digit),
            }
        }
    }

    /// Prints `n` in hexadecimal at the cursor.
    pub fn hex(&mut self, n: u32) {
        self.emit(&Digits::convert(n, 16), Destination::Screen);
    }

    /// Prints `n` in decimal at the cursor.
    pub fn dec(&mut self, n: u32) {
        self.emit(&Digits::convert(n, 10), Destination::Screen);
    }

    /// Sends `n` in hexadecimal to the kernel log.
    pub fn log_hex(&mut self, n: u32) {
        self.emit(&Digits::convert(n, 16), Destination::Log);
    }

    /// Sends `n` in decimal to the kernel log.
    pub fn log_dec(&mut self, n: u32) {
        self.emit(&Digits::convert(n, 10), Destination::Log);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing;
    use crate::testutil::{console, row_text};
    use std::vec::Vec;

    fn digits(n: u32, base: u32) -> Vec<u8> {
        Digits::new(n, base).unwrap().iter().collect()
    }

    #[test]
    fn test_known_values() {
        assert_eq!(digits(255, 16), b"FF");
        assert_eq!(digits(255, 10), b"255");
        assert_eq!(digits(0, 10), b"0");
        assert_eq!(digits(5, 2), b"101");
        assert_eq!(digits(35, 36), b"Z");
        assert_eq!(digits(36, 36), b"10");
        assert_eq!(digits(u32::MAX, 16), b"FFFFFFFF");
        assert_eq!(digits(u32::MAX, 2).len(), 32);
    }

    #[test]
    fn test_unsupported_bases() {
        assert_eq!(Digits::new(1, 0).err(), Some(ConsoleError::UnsupportedBase(0)));
        assert_eq!(Digits::new(1, 1).err(), Some(ConsoleError::UnsupportedBase(1)));
        assert_eq!(Digits::new(1, 37).err(), Some(ConsoleError::UnsupportedBase(37)));
    }

    #[test]
    fn test_hex_and_dec_on_screen() {
        let mut console = console();
        console.clear_screen();
        console.hex(255);
        console.print(" ");
        console.dec(255);
        assert_eq!(row_text(&console, 0), "FF 255");
        assert_eq!(console.cursor_offset(), addressing::offset(6, 0));
        assert!(console.log_sink().bytes.is_empty());
    }

    #[test]
    fn test_log_variants_leave_screen_alone() {
        let mut console = console();
        console.clear_screen();
        console.log_hex(0xBEEF);
        console.log_dec(42);
        assert_eq!(console.log_sink().bytes, b"BEEF42");
        assert_eq!(row_text(&console, 0), "");
        assert_eq!(console.cursor_offset(), 0);
    }

    #[test]
    fn test_print_base_rejects_without_output() {
        let mut console = console();
        console.clear_screen();
        assert_eq!(
            console.print_base(10, 40, Destination::Screen),
            Err(ConsoleError::UnsupportedBase(40))
        );
        assert_eq!(row_text(&console, 0), "");
        console.print_base(10, 8, Destination::Screen).unwrap();
        assert_eq!(row_text(&console, 0), "12");
    }
}
