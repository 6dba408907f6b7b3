//! Digit values for seven-segment displays
//!
//! A buffered digit is one byte:
//!
//! | Bits | Meaning |
//! |------|---------|
//! | 0-3  | Code-B character or raw segment pattern |
//! | 4    | [`DECODE_FLAG`](crate::register::DECODE_FLAG): let the chip decode bits 0-3 |
//! | 7    | [`DECIMAL_POINT`](crate::register::DECIMAL_POINT) |
//!
//! [`Glyph`] is the single value type accepted by the window writers; a
//! [`Character`] converts into a decoded glyph.
//!
//! ## Example
//!
//! ```
//! use max72xx::{Character, Glyph};
//!
//! assert_eq!(Glyph::from(Character::Dash).encode(), 0x1A);
//! assert_eq!(Glyph::Segments(0x4F).encode(), 0x0F);
//! assert_eq!(Character::from_digit(7), Some(Character::Seven));
//! ```

use crate::register::{DECODE_FLAG, VALUE_MASK};

/// Code-B font of the MAX7219
///
/// Only meaningful for digits in decode mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Character {
    /// 0
    Zero = 0x00,
    /// 1
    One = 0x01,
    /// 2
    Two = 0x02,
    /// 3
    Three = 0x03,
    /// 4
    Four = 0x04,
    /// 5
    Five = 0x05,
    /// 6
    Six = 0x06,
    /// 7
    Seven = 0x07,
    /// 8
    Eight = 0x08,
    /// 9
    Nine = 0x09,
    /// -
    Dash = 0x0A,
    /// E
    E = 0x0B,
    /// H
    H = 0x0C,
    /// L
    L = 0x0D,
    /// P
    P = 0x0E,
    /// All segments off
    Blank = 0x0F,
}

impl Character {
    /// Character for a decimal digit, `None` above 9
    pub const fn from_digit(digit: u8) -> Option<Self> {
        Some(match digit {
            0 => Self::Zero,
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::Six,
            7 => Self::Seven,
            8 => Self::Eight,
            9 => Self::Nine,
            _ => return None,
        })
    }

    /// Code-B value of the character
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<Character> for u8 {
    fn from(character: Character) -> Self {
        character.code()
    }
}

/// A digit value before it is placed in a window buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// Raw segment pattern, written without decode
    ///
    /// Only the low nibble is kept, so segments D through G are reachable;
    /// bit 4 is reserved for the decode flag.
    Segments(u8),
    /// Code-B value, decoded by the chip
    Code(u8),
}

impl Glyph {
    /// Glyph from a value and a decode flag
    pub const fn new(value: u8, decode: bool) -> Self {
        if decode {
            Self::Code(value)
        } else {
            Self::Segments(value)
        }
    }

    /// Whether the chip decodes this glyph
    pub const fn is_decoded(self) -> bool {
        matches!(self, Self::Code(_))
    }

    /// Buffer byte for this glyph, without decimal point
    pub const fn encode(self) -> u8 {
        match self {
            Self::Segments(value) => value & VALUE_MASK,
            Self::Code(value) => value | DECODE_FLAG,
        }
    }
}

impl From<Character> for Glyph {
    fn from(character: Character) -> Self {
        Self::Code(character.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digit() {
        assert_eq!(Character::from_digit(0), Some(Character::Zero));
        assert_eq!(Character::from_digit(9), Some(Character::Nine));
        assert_eq!(Character::from_digit(10), None);
    }

    #[test]
    fn test_character_glyph_is_decoded() {
        let glyph = Glyph::from(Character::H);
        assert!(glyph.is_decoded());
        assert_eq!(glyph.encode(), 0x1C);
    }

    #[test]
    fn test_raw_glyph_masks_low_nibble() {
        assert_eq!(Glyph::new(0xFF, false).encode(), 0x0F);
        assert_eq!(Glyph::new(0x15, false).encode(), 0x05);
        assert!(!Glyph::new(0x15, false).is_decoded());
    }

    #[test]
    fn test_decoded_glyph_sets_flag() {
        assert_eq!(Glyph::new(0x05, true).encode(), 0x15);
        assert_eq!(Glyph::new(0x85, true).encode(), 0x95);
    }
}
