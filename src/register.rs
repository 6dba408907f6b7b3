//! MAX7219/MAX7221 register map
//!
//! Every transfer to a device in the chain is a 16-bit frame: an address
//! byte followed by a value byte, both shifted MSB first. Devices latch the
//! last frame they received on the rising edge of LOAD.
//!
//! ## Frame Structure
//!
//! 1. Pull LOAD low
//! 2. For each device in the chain, shift `[address, value]`
//! 3. Raise LOAD to commit all devices at once
//!
//! Devices that should not change get [`NOOP`] as their address.
//!
//! ## Example
//!
//! ```rust,no_run
//! use max72xx::{register, ChainInterface, BitBangInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = BitBangInterface::new(MockPin, MockPin, MockPin);
//! // Leave shutdown on a single-device chain
//! let _ = interface.write_frame(&[[register::SHUTDOWN, register::SHUTDOWN_NORMAL]]);
//! ```

// Register addresses

/// No-op register (0x00)
///
/// Sent to devices that must pass a frame along without changing state.
pub const NOOP: u8 = 0x00;

/// Digit 0 register (0x01)
///
/// Digit registers are consecutive: digit `n` lives at `DIGIT0 + n`.
pub const DIGIT0: u8 = 0x01;
/// Digit 1 register (0x02)
pub const DIGIT1: u8 = 0x02;
/// Digit 2 register (0x03)
pub const DIGIT2: u8 = 0x03;
/// Digit 3 register (0x04)
pub const DIGIT3: u8 = 0x04;
/// Digit 4 register (0x05)
pub const DIGIT4: u8 = 0x05;
/// Digit 5 register (0x06)
pub const DIGIT5: u8 = 0x06;
/// Digit 6 register (0x07)
pub const DIGIT6: u8 = 0x07;
/// Digit 7 register (0x08)
pub const DIGIT7: u8 = 0x08;

/// Decode mode register (0x09)
///
/// One bit per digit: bit `n` set means digit `n` is Code-B decoded,
/// clear means the value byte drives segments directly.
pub const DECODE: u8 = 0x09;

/// Intensity register (0x0A)
///
/// Low nibble sets the PWM duty cycle, 0x0 (dimmest) to 0xF (brightest).
pub const INTENSITY: u8 = 0x0A;

/// Scan limit register (0x0B)
///
/// Low three bits select how many digits are scanned (value + 1).
pub const SCANLIMIT: u8 = 0x0B;

/// Shutdown register (0x0C)
///
/// [`SHUTDOWN_BLANK`] blanks the display, [`SHUTDOWN_NORMAL`] resumes.
/// Digit registers keep their contents while shut down.
pub const SHUTDOWN: u8 = 0x0C;

/// Display test register (0x0F)
///
/// 1 lights every segment, 0 returns to normal operation.
pub const DISPLAYTEST: u8 = 0x0F;

// Register values

/// Shutdown register value: low-power blanking
pub const SHUTDOWN_BLANK: u8 = 0x00;
/// Shutdown register value: normal operation
pub const SHUTDOWN_NORMAL: u8 = 0x01;

/// Highest intensity value
pub const MAX_INTENSITY: u8 = 0x0F;
/// Highest scan limit (all eight digits)
pub const MAX_SCAN_LIMIT: u8 = 0x07;

/// Digits driven by a single device
pub const DIGITS_PER_DEVICE: usize = 8;

// Digit value layout

/// Decimal point bit, honoured in both decode and raw mode
pub const DECIMAL_POINT: u8 = 0x80;

/// Out-of-band flag marking a buffered digit as Code-B decoded
///
/// Never reaches a digit register; the chain folds it into [`DECODE`].
pub const DECODE_FLAG: u8 = 0x10;

/// Mask for the 4-bit code or raw pattern of a buffered digit
pub const VALUE_MASK: u8 = 0x0F;

/// Value returned when reading a digit outside a window
pub const NO_DIGIT: u8 = 0x20;

/// Segment bits for raw (non-decoded) digits
pub mod segment {
    /// Top
    pub const A: u8 = 0b0100_0000;
    /// Top right
    pub const B: u8 = 0b0010_0000;
    /// Bottom right
    pub const C: u8 = 0b0001_0000;
    /// Bottom
    pub const D: u8 = 0b0000_1000;
    /// Bottom left
    pub const E: u8 = 0b0000_0100;
    /// Top left
    pub const F: u8 = 0b0000_0010;
    /// Middle
    pub const G: u8 = 0b0000_0001;
    /// Decimal point
    pub const DP: u8 = 0b1000_0000;
}

/// Digit register address of a chain digit on its own device
///
/// The device is `digit / DIGITS_PER_DEVICE`; only the offset within it
/// selects the register.
pub const fn digit_register(digit: usize) -> u8 {
    DIGIT0 + (digit % DIGITS_PER_DEVICE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_registers_are_consecutive() {
        assert_eq!(digit_register(0), DIGIT0);
        assert_eq!(digit_register(3), DIGIT3);
        assert_eq!(digit_register(7), DIGIT7);
        assert_eq!(digit_register(8), DIGIT0);
        assert_eq!(digit_register(21), DIGIT5);
    }

    #[test]
    fn test_flags_do_not_overlap_value_mask() {
        assert_eq!(DECODE_FLAG & VALUE_MASK, 0);
        assert_eq!(DECIMAL_POINT & VALUE_MASK, 0);
        assert_eq!(DECIMAL_POINT & DECODE_FLAG, 0);
        assert_eq!(NO_DIGIT & (VALUE_MASK | DECODE_FLAG | DECIMAL_POINT), 0);
    }
}
