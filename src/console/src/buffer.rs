//! Cell-level view of the video buffer and an in-memory buffer.

use crate::addressing::BUFFER_SIZE;
use ember_common::Attribute;
use ember_hal::TextBuffer;

/// One character position: glyph byte followed by attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Cell {
    /// Code page 437 glyph.
    pub glyph: u8,
    /// Color attribute.
    pub attr: Attribute,
}

impl Cell {
    /// A space in the default color.
    pub const BLANK: Cell = Cell::new(b' ', Attribute::DEFAULT);

    /// Creates a cell.
    pub const fn new(glyph: u8, attr: Attribute) -> Self {
        Cell { glyph, attr }
    }

    /// Reads the cell starting at `offset`.
    pub fn read_from<B: TextBuffer + ?Sized>(buffer: &B, offset: usize) -> Self {
        Cell {
            glyph: buffer.read(offset),
            attr: Attribute(buffer.read(offset + 1)),
        }
    }

    /// Writes this cell starting at `offset`.
    pub fn write_to<B: TextBuffer + ?Sized>(self, buffer: &mut B, offset: usize) {
        buffer.write(offset, self.glyph);
        buffer.write(offset + 1, self.attr.as_u8());
    }
}

/// A text buffer held in ordinary memory.
///
/// Used by host tests and anywhere the screen contents need to be staged
/// off-screen. Indexing past the end panics.
#[derive(Clone)]
pub struct MemoryBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl MemoryBuffer {
    /// Creates a zero-filled buffer.
    pub const fn new() -> Self {
        MemoryBuffer {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Raw bytes in hardware layout.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for MemoryBuffer {
    fn len(&self) -> usize {
        BUFFER_SIZE
    }

    fn read(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    fn write(&mut self, offset: usize, value: u8) {
        self.bytes[offset] = value;
    }
}
