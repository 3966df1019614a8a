//! Host-side fakes for the console's hardware collaborators.

use crate::addressing::{self, COLS};
use crate::buffer::{Cell, MemoryBuffer};
use crate::cursor::{CTRL_PORT, DATA_PORT};
use crate::writer::Console;
use ember_hal::{KernelLog, PortIo};
use std::string::String;
use std::vec::Vec;

/// One port access seen by [`FakePorts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortAccess {
    Read(u16),
    Write(u16, u8),
}

/// Emulates the CRTC index/data register file.
pub struct FakePorts {
    index: u8,
    registers: [u8; 256],
    accesses: Vec<PortAccess>,
}

impl FakePorts {
    pub fn new() -> Self {
        FakePorts {
            index: 0,
            registers: [0; 256],
            accesses: Vec::new(),
        }
    }

    pub fn register(&self, index: u8) -> u8 {
        self.registers[usize::from(index)]
    }

    pub fn set_register(&mut self, index: u8, value: u8) {
        self.registers[usize::from(index)] = value;
    }

    pub fn accesses(&self) -> &[PortAccess] {
        &self.accesses
    }
}

impl PortIo for FakePorts {
    fn read_u8(&mut self, port: u16) -> u8 {
        self.accesses.push(PortAccess::Read(port));
        match port {
            CTRL_PORT => self.index,
            DATA_PORT => self.register(self.index),
            _ => 0xff,
        }
    }

    fn write_u8(&mut self, port: u16, value: u8) {
        self.accesses.push(PortAccess::Write(port, value));
        match port {
            CTRL_PORT => self.index = value,
            DATA_PORT => self.set_register(self.index, value),
            _ => {}
        }
    }
}

/// Collects everything sent to the kernel log.
#[derive(Default)]
pub struct RecordingLog {
    pub messages: Vec<String>,
    pub bytes: Vec<u8>,
}

impl KernelLog for RecordingLog {
    fn log_str(&mut self, message: &str) {
        self.messages.push(String::from(message));
    }

    fn log_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }
}

pub type TestConsole = Console<MemoryBuffer, FakePorts, RecordingLog>;

/// A console over zeroed memory with the cursor at the origin.
pub fn console() -> TestConsole {
    Console::new(MemoryBuffer::new(), FakePorts::new(), RecordingLog::default())
}

/// Glyphs of one row, trailing blanks and NULs trimmed.
pub fn row_text(console: &TestConsole, row: usize) -> String {
    let text: String = (0..COLS)
        .map(|col| char::from(console.cell(addressing::offset(col, row)).glyph))
        .collect();
    String::from(text.trim_end_matches([' ', '\0']))
}

/// Asserts that every cell of `row` is a default-colored space.
pub fn assert_row_blank(console: &TestConsole, row: usize) {
    for col in 0..COLS {
        assert_eq!(
            console.cell(addressing::offset(col, row)),
            Cell::BLANK,
            "cell ({}, {}) not blank",
            col,
            row
        );
    }
}
