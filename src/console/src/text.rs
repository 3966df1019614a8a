//! String printing on top of [`Console::print_char`].

use crate::addressing::{self, CELL_BYTES};
use crate::writer::{Console, Glyph, Target};
use core::fmt;
use ember_common::Attribute;
use ember_hal::{KernelLog, PortIo, TextBuffer};

impl<B, P, L> Console<B, P, L>
where
    B: TextBuffer,
    P: PortIo,
    L: KernelLog,
{
    /// Prints `text` starting at `target` in `attr`.
    ///
    /// Returns the offset following the last byte. The position for each
    /// byte is derived again from the offset the previous byte returned,
    /// since a newline or a scroll moves both column and row.
    ///
    /// A start off the grid writes nothing but the error marker, once, and
    /// returns the out-of-range offset.
    pub fn print_at_color(&mut self, text: impl AsRef<[u8]>, target: Target, attr: Attribute) -> usize {
        let text = text.as_ref();
        let (mut col, mut row) = match target {
            Target::At { col, row } if !addressing::in_grid(col, row) => {
                return if text.is_empty() {
                    addressing::saturating_offset(col, row)
                } else {
                    self.mark_out_of_range(col, row)
                };
            }
            Target::At { col, row } => (col, row),
            Target::Cursor => {
                let offset = self.cursor_offset();
                (addressing::col(offset), addressing::row(offset))
            }
        };

        let mut offset = addressing::offset(col, row);
        for &byte in text {
            offset = self.print_char(byte, Target::At { col, row }, attr);
            row = addressing::row(offset);
            col = addressing::col(offset);
        }
        offset
    }

    /// Prints `text` starting at `target` in the default color.
    pub fn print_at(&mut self, text: impl AsRef<[u8]>, target: Target) -> usize {
        self.print_at_color(text, target, Attribute::DEFAULT)
    }

    /// Prints `text` at the cursor in `attr`.
    pub fn print_color(&mut self, text: impl AsRef<[u8]>, attr: Attribute) -> usize {
        self.print_at_color(text, Target::Cursor, attr)
    }

    /// Prints `text` at the cursor in the default color.
    pub fn print(&mut self, text: impl AsRef<[u8]>) -> usize {
        self.print_at(text, Target::Cursor)
    }

    /// Erases the cell before the cursor and moves the cursor onto it.
    ///
    /// At column 0 this reaches back to the last cell of the previous row;
    /// at the top-left corner it erases the corner cell itself.
    pub fn backspace(&mut self) -> usize {
        let offset = self.cursor_offset().saturating_sub(CELL_BYTES);
        self.print_char(Glyph::BACKSPACE, Target::from_offset(offset), Attribute::DEFAULT)
    }

    /// A [`fmt::Write`] adapter that prints at the cursor in `attr`.
    pub fn colored(&mut self, attr: Attribute) -> Colored<'_, B, P, L> {
        Colored { console: self, attr }
    }
}

/// Formatted output in a fixed color. See [`Console::colored`].
pub struct Colored<'a, B, P, L> {
    console: &'a mut Console<B, P, L>,
    attr: Attribute,
}

/// Maps a byte to something the text grid can show.
///
/// Printable ASCII and the control codes the console handles pass through,
/// everything else becomes a filled square.
fn displayable(byte: u8) -> u8 {
    match byte {
        0x20..=0x7e | b'\n' | Glyph::BACKSPACE => byte,
        _ => 0xfe,
    }
}

impl<B, P, L> fmt::Write for Colored<'_, B, P, L>
where
    B: TextBuffer,
    P: PortIo,
    L: KernelLog,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.console.print_char(displayable(byte), Target::Cursor, self.attr);
        }
        Ok(())
    }
}

impl<B, P, L> fmt::Write for Console<B, P, L>
where
    B: TextBuffer,
    P: PortIo,
    L: KernelLog,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(&mut self.colored(Attribute::DEFAULT), s)
    }
}

impl<B, P, L> ember_hal::Console for Console<B, P, L>
where
    B: TextBuffer,
    P: PortIo,
    L: KernelLog,
{
    fn write_str(&mut self, s: &str) {
        let _ = <Self as fmt::Write>::write_str(self, s);
    }

    fn clear(&mut self) {
        self.clear_screen();
    }
}
