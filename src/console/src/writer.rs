//! The console device and its single-character write path.

use crate::addressing::{self, BUFFER_SIZE, CELL_BYTES, COLS, ROWS, ROW_BYTES};
use crate::buffer::Cell;
use crate::cursor::CursorRegister;
use ember_common::Attribute;
use ember_hal::{KernelLog, PortIo, TextBuffer};

/// Glyph written to the last cell when a write targets a cell off the grid.
pub const ERROR_MARKER: u8 = b'E';

/// Where a write lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A fixed cell. Coordinates off the grid are reported, not written.
    At {
        /// Column, `0..COLS` to be valid.
        col: usize,
        /// Row, `0..ROWS` to be valid.
        row: usize,
    },
    /// Wherever the hardware cursor currently is.
    Cursor,
}

impl Target {
    /// The cell containing `offset`.
    pub const fn from_offset(offset: usize) -> Self {
        Target::At {
            col: addressing::col(offset),
            row: addressing::row(offset),
        }
    }
}

/// How a byte affects the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// `\n`: move to the start of the next row.
    Newline,
    /// 0x08: blank the current cell in place.
    Backspace,
    /// Anything else: draw it and advance one cell.
    Printable(u8),
}

impl Glyph {
    /// Control code for backspace.
    pub const BACKSPACE: u8 = 0x08;
}

impl From<u8> for Glyph {
    fn from(byte: u8) -> Self {
        match byte {
            b'\n' => Glyph::Newline,
            Glyph::BACKSPACE => Glyph::Backspace,
            other => Glyph::Printable(other),
        }
    }
}

/// VGA text console.
///
/// Owns handles to the cell memory, the cursor ports and the kernel log.
/// The write position lives only in the hardware cursor.
pub struct Console<B, P, L> {
    buffer: B,
    cursor: CursorRegister<P>,
    log: L,
}

impl<B, P, L> Console<B, P, L>
where
    B: TextBuffer,
    P: PortIo,
    L: KernelLog,
{
    /// Creates a console over the given handles. Nothing is written.
    pub const fn new(buffer: B, ports: P, log: L) -> Self {
        Console {
            buffer,
            cursor: CursorRegister::new(ports),
            log,
        }
    }

    /// Writes one byte and returns the offset of the next write.
    ///
    /// A zero attribute means [`Attribute::DEFAULT`]. If `target` is off
    /// the grid, the last cell of the buffer is overwritten with a red
    /// [`ERROR_MARKER`] and the out-of-range offset is returned untouched;
    /// the cursor does not move. Otherwise the cursor is left at the
    /// returned offset.
    pub fn print_char(&mut self, byte: u8, target: Target, attr: Attribute) -> usize {
        let attr = attr.or_default();

        let mut offset = match target {
            Target::At { col, row } if !addressing::in_grid(col, row) => {
                return self.mark_out_of_range(col, row);
            }
            Target::At { col, row } => addressing::offset(col, row),
            Target::Cursor => self.cursor_offset(),
        };

        match Glyph::from(byte) {
            Glyph::Newline => offset = addressing::offset(0, addressing::row(offset) + 1),
            Glyph::Backspace => Cell::new(b' ', attr).write_to(&mut self.buffer, offset),
            Glyph::Printable(glyph) => {
                Cell::new(glyph, attr).write_to(&mut self.buffer, offset);
                offset += CELL_BYTES;
            }
        }

        if offset >= BUFFER_SIZE {
            offset = self.scroll_and_rebase(offset);
        }

        self.cursor.set(offset);
        offset
    }

    /// Flags a write aimed off the grid in the last cell.
    ///
    /// Returns the offset the coordinates would have had, saturated, so it
    /// is never mistaken for a cell inside the grid when it overflows.
    pub(crate) fn mark_out_of_range(&mut self, col: usize, row: usize) -> usize {
        log::warn!("write at ({}, {}) outside {}x{} grid", col, row, COLS, ROWS);
        Cell::new(ERROR_MARKER, Attribute::ERROR).write_to(&mut self.buffer, BUFFER_SIZE - CELL_BYTES);
        addressing::saturating_offset(col, row)
    }

    /// Scrolls one row and pulls `offset` back by a row to match.
    fn scroll_and_rebase(&mut self, offset: usize) -> usize {
        self.scroll();
        offset - ROW_BYTES
    }

    /// Shifts every row up by one and blanks the last row.
    fn scroll(&mut self) {
        log::trace!("scroll");
        for row in 1..ROWS {
            let src = addressing::offset(0, row);
            let dst = addressing::offset(0, row - 1);
            for i in 0..ROW_BYTES {
                let byte = self.buffer.read(src + i);
                self.buffer.write(dst + i, byte);
            }
        }
        self.fill_row(ROWS - 1, Cell::BLANK);
    }

    fn fill_row(&mut self, row: usize, cell: Cell) {
        debug_assert!(row < ROWS, "row index out of bounds");
        for col in 0..COLS {
            cell.write_to(&mut self.buffer, addressing::offset(col, row));
        }
    }

    /// Blanks the whole grid and homes the cursor.
    pub fn clear_screen(&mut self) {
        log::debug!("clear screen");
        for row in 0..ROWS {
            self.fill_row(row, Cell::BLANK);
        }
        self.cursor.set(addressing::offset(0, 0));
    }

    /// Current cursor position as a byte offset inside the grid.
    ///
    /// The register can hold cell indices past the grid (firmware leaves it
    /// anywhere, and writing there would fault); those read as the start of
    /// the last row.
    pub fn cursor_offset(&mut self) -> usize {
        let offset = self.cursor.get();
        if offset < BUFFER_SIZE {
            offset
        } else {
            log::warn!("cursor offset {:#x} outside grid, rebasing to last row", offset);
            addressing::offset(0, ROWS - 1)
        }
    }

    /// Reads the cell at `offset`.
    pub fn cell(&self, offset: usize) -> Cell {
        Cell::read_from(&self.buffer, offset)
    }

    /// The cell memory.
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// The cursor register.
    pub fn cursor(&mut self) -> &mut CursorRegister<P> {
        &mut self.cursor
    }

    pub(crate) fn log_sink(&mut self) -> &mut L {
        &mut self.log
    }
}
