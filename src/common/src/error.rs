//! Error types for the console driver.

use core::fmt;

/// Console driver error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConsoleError {
    /// Number base has no digit symbols (only 2 through 36 do).
    UnsupportedBase(u32),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::UnsupportedBase(base) => {
                write!(f, "unsupported number base {} (expected 2..=36)", base)
            }
        }
    }
}
