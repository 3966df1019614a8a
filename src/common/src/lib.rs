//! Types shared between the Ember OS console driver and the kernel.

#![no_std]

pub mod color;
pub mod error;
pub mod multiboot;

pub use color::{Attribute, Color};
pub use error::ConsoleError;
