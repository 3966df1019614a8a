//! VGA text-mode color attributes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light gray color.
    LightGray = 7,
    /// Dark gray color.
    DarkGray = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Pink color.
    Pink = 13,
    /// Yellow color.
    Yellow = 14,
    /// White color.
    White = 15,
}

/// Attribute byte of a screen cell.
///
/// Low nibble is the foreground color, high nibble the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Attribute(pub u8);

impl Attribute {
    /// White on black, used whenever no attribute is given.
    pub const DEFAULT: Attribute = Attribute::new(Color::White, Color::Black);
    /// Red on black, used for panic messages.
    pub const ALERT: Attribute = Attribute::new(Color::Red, Color::Black);
    /// Red on white, used for the out-of-range marker cell.
    pub const ERROR: Attribute = Attribute::new(Color::Red, Color::White);

    /// Creates an attribute from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> Attribute {
        Attribute((background as u8) << 4 | (foreground as u8))
    }

    /// Replaces the zero attribute with [`Attribute::DEFAULT`].
    pub const fn or_default(self) -> Attribute {
        if self.0 == 0 {
            Attribute::DEFAULT
        } else {
            self
        }
    }

    /// Raw attribute byte.
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Attribute::DEFAULT
    }
}

impl From<u8> for Attribute {
    fn from(raw: u8) -> Self {
        Attribute(raw)
    }
}
