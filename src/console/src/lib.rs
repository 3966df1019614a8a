//! Ember OS boot console.
//!
//! A VGA text-mode driver for the earliest phase of boot, before interrupts
//! or tasks exist. It draws into an 80x25 grid of two-byte cells and keeps the
//! write position in the hardware cursor register, so every operation reads
//! the cursor back from the CRT controller instead of caching it.
//!
//! The driver never touches hardware directly. It is generic over a
//! [`TextBuffer`](ember_hal::TextBuffer) for the cell memory, a
//! [`PortIo`](ember_hal::PortIo) for the cursor ports and a
//! [`KernelLog`](ember_hal::KernelLog) sink, which lets the kernel plug in
//! the memory-mapped buffer at 0xB8000 and lets tests plug in plain memory.
//!
//! # Concurrency
//!
//! Nothing here locks. Reading or writing the cursor is a two-step
//! select-then-transfer exchange on shared ports, and two contexts interleaving
//! those steps corrupt the cursor. Callers that share a [`Console`] between
//! contexts must provide mutual exclusion themselves.

#![no_std]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

pub mod addressing;
pub mod buffer;
pub mod cursor;
pub mod number;
mod panic;
mod text;
mod writer;

#[cfg(test)]
mod testutil;

pub use addressing::{BUFFER_SIZE, CELL_BYTES, COLS, ROWS, ROW_BYTES};
pub use buffer::{Cell, MemoryBuffer};
pub use cursor::CursorRegister;
pub use ember_common::{Attribute, Color, ConsoleError};
pub use number::{Destination, Digits};
pub use text::Colored;
pub use writer::{Console, Glyph, Target, ERROR_MARKER};
