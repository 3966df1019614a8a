//! Hardware cursor access through the CRT controller.
//!
//! The CRTC exposes its registers through an index port and a data port:
//! write a register number to the index port, then read or write the data
//! port. The cursor location is a 16-bit cell index split across registers
//! 14 (high byte) and 15 (low byte).

use crate::addressing::CELL_BYTES;
use ember_hal::PortIo;

/// CRTC index port.
pub const CTRL_PORT: u16 = 0x3D4;

/// CRTC data port.
pub const DATA_PORT: u16 = 0x3D5;

/// Cursor location high byte register.
pub const CURSOR_HIGH: u8 = 14;

/// Cursor location low byte register.
pub const CURSOR_LOW: u8 = 15;

/// The hardware cursor register pair.
///
/// Holds no position of its own: every [`get`](Self::get) goes to the ports.
pub struct CursorRegister<P> {
    ports: P,
}

impl<P: PortIo> CursorRegister<P> {
    /// Wraps a port I/O handle.
    pub const fn new(ports: P) -> Self {
        CursorRegister { ports }
    }

    /// Reads the cursor and returns it as a byte offset.
    pub fn get(&mut self) -> usize {
        self.ports.write_u8(CTRL_PORT, CURSOR_HIGH);
        let high = self.ports.read_u8(DATA_PORT);
        self.ports.write_u8(CTRL_PORT, CURSOR_LOW);
        let low = self.ports.read_u8(DATA_PORT);
        usize::from(u16::from_be_bytes([high, low])) * CELL_BYTES
    }

    /// Moves the cursor to a byte offset.
    ///
    /// The offset is not validated; anything past the grid hides the cursor
    /// on real hardware.
    pub fn set(&mut self, offset: usize) {
        let [high, low] = ((offset / CELL_BYTES) as u16).to_be_bytes();
        self.ports.write_u8(CTRL_PORT, CURSOR_HIGH);
        self.ports.write_u8(DATA_PORT, high);
        self.ports.write_u8(CTRL_PORT, CURSOR_LOW);
        self.ports.write_u8(DATA_PORT, low);
    }

    /// Shared access to the port handle.
    pub fn ports(&self) -> &P {
        &self.ports
    }

    /// Exclusive access to the port handle.
    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{FakePorts, PortAccess};
    use std::vec;

    #[test]
    fn test_set_then_get() {
        let mut cursor = CursorRegister::new(FakePorts::new());
        cursor.set(3998);
        assert_eq!(cursor.get(), 3998);
        cursor.set(0);
        assert_eq!(cursor.get(), 0);
    }

    #[test]
    fn test_set_splits_cell_index() {
        let mut cursor = CursorRegister::new(FakePorts::new());
        // cell 1000 = 0x03E8
        cursor.set(2000);
        assert_eq!(cursor.ports().register(CURSOR_HIGH), 0x03);
        assert_eq!(cursor.ports().register(CURSOR_LOW), 0xE8);
    }

    #[test]
    fn test_get_protocol_order() {
        let mut ports = FakePorts::new();
        ports.set_register(CURSOR_HIGH, 0x01);
        ports.set_register(CURSOR_LOW, 0x40);
        let mut cursor = CursorRegister::new(ports);
        assert_eq!(cursor.get(), 0x140 * 2);
        assert_eq!(
            cursor.ports().accesses(),
            &vec![
                PortAccess::Write(CTRL_PORT, CURSOR_HIGH),
                PortAccess::Read(DATA_PORT),
                PortAccess::Write(CTRL_PORT, CURSOR_LOW),
                PortAccess::Read(DATA_PORT),
            ][..]
        );
    }
}
