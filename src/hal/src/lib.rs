//! Ember OS Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware details,
//! so the console driver can run against real VGA hardware or an in-memory fake.

#![no_std]

/// Trait for single-byte port I/O.
///
/// Implementations are expected to be synchronous: a write has reached the
/// device by the time the call returns.
pub trait PortIo {
    /// Reads one byte from the given I/O port.
    fn read_u8(&mut self, port: u16) -> u8;
    /// Writes one byte to the given I/O port.
    fn write_u8(&mut self, port: u16, value: u8);
}

/// Trait for a byte-addressed text-mode video buffer.
///
/// Offsets are byte indices into the buffer. Implementations must reject
/// indices at or beyond [`TextBuffer::len`] rather than touch memory outside
/// the buffer.
pub trait TextBuffer {
    /// Size of the buffer in bytes.
    fn len(&self) -> usize;
    /// Reads the byte at `offset`.
    fn read(&self, offset: usize) -> u8;
    /// Writes `value` at `offset`.
    fn write(&mut self, offset: usize, value: u8);

    /// Returns true if the buffer has no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for the kernel log sink.
pub trait KernelLog {
    /// Appends a whole message.
    fn log_str(&mut self, message: &str);
    /// Appends a single byte.
    fn log_byte(&mut self, byte: u8);
}

/// Trait for a text-based console output.
pub trait Console {
    /// Writes a string to the console.
    fn write_str(&mut self, s: &str);
    /// Clears the console screen.
    fn clear(&mut self);
}
