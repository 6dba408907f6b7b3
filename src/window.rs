//! Logical displays over a range of chain digits
//!
//! A [`DisplayWindow`] buffers `DIGITS` digit values and flushes them to a
//! contiguous run of digits of a [`ControllerChain`]. Digit 0 of a window is
//! its rightmost (least significant) digit.
//!
//! Windows never hold on to the chain: every flushing call borrows it, so
//! several windows can share one chain. Keeping windows from overlapping is
//! up to the caller.
//!
//! ## Example
//!
//! ```rust,no_run
//! use max72xx::{BitBangInterface, Character, Config, ControllerChain, DisplayWindow};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let interface = BitBangInterface::new(MockPin, MockPin, MockPin);
//! let mut chain: ControllerChain<_, 1> = ControllerChain::new(interface);
//! let _ = chain.init(&Config::default());
//!
//! // Two four-digit displays on one device
//! let mut left = DisplayWindow::<4>::new(4);
//! let mut right = DisplayWindow::<4>::new(0);
//!
//! let _ = left.display_number(&mut chain, -12, Character::Blank, 0);
//! let _ = right.display_float(&mut chain, 2.75, Character::Blank, 2);
//! ```

use crate::chain::ControllerChain;
use crate::character::{Character, Glyph};
use crate::error::{Error, InvalidDigit};
use crate::interface::ChainInterface;
use crate::register::{DECIMAL_POINT, NO_DIGIT};

type WindowResult<I> = core::result::Result<(), Error<I>>;

/// Digit buffer for one logical display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayWindow<const DIGITS: usize> {
    /// First chain digit covered by this window
    start: usize,
    /// Buffered digit values
    vram: [u8; DIGITS],
}

impl<const DIGITS: usize> DisplayWindow<DIGITS> {
    /// Create a window over chain digits `start..start + DIGITS`
    ///
    /// The buffer starts with every segment off. Nothing is sent and the
    /// range is not checked until the window is flushed; call
    /// [`update`](Self::update) once after construction to blank the digits
    /// and their decode bits on the chain.
    pub fn new(start: usize) -> Self {
        Self {
            start,
            vram: [0; DIGITS],
        }
    }

    /// First chain digit covered by this window
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Width of the window in digits
    pub const fn len(&self) -> usize {
        DIGITS
    }

    /// Whether the window has no digits
    pub const fn is_empty(&self) -> bool {
        DIGITS == 0
    }

    /// Buffered digit values
    pub const fn digits(&self) -> &[u8; DIGITS] {
        &self.vram
    }

    /// Send the buffer to the chain
    pub fn update<I, const DEVICES: usize>(
        &self,
        chain: &mut ControllerChain<I, DEVICES>,
    ) -> WindowResult<I>
    where
        I: ChainInterface,
    {
        chain.update(self.start, &self.vram)
    }

    /// Blank the window on the chain (`true`) or restore the buffer (`false`)
    ///
    /// The buffer is left alone either way.
    pub fn shutdown<I, const DEVICES: usize>(
        &self,
        chain: &mut ControllerChain<I, DEVICES>,
        status: bool,
    ) -> WindowResult<I>
    where
        I: ChainInterface,
    {
        if status {
            chain.update(self.start, &[0; DIGITS])
        } else {
            self.update(chain)
        }
    }

    /// Set every digit to `glyph`
    pub fn fill(&mut self, glyph: impl Into<Glyph>) {
        self.vram = [glyph.into().encode(); DIGITS];
    }

    /// Set every digit to a decoded blank
    pub fn clear(&mut self) {
        self.fill(Character::Blank);
    }

    /// Set one digit to `glyph`
    pub fn write_char(
        &mut self,
        digit: usize,
        glyph: impl Into<Glyph>,
    ) -> Result<(), InvalidDigit> {
        *self.slot(digit)? = glyph.into().encode();
        Ok(())
    }

    /// Set one digit from a value and a decode flag
    ///
    /// Without decode only the low nibble of `value` is kept.
    pub fn write_raw(
        &mut self,
        digit: usize,
        value: u8,
        decode: bool,
    ) -> Result<(), InvalidDigit> {
        self.write_char(digit, Glyph::new(value, decode))
    }

    /// Turn on the decimal point of one digit
    ///
    /// Points already set on other digits stay on.
    pub fn set_decimal_point(&mut self, digit: usize) -> Result<(), InvalidDigit> {
        *self.slot(digit)? |= DECIMAL_POINT;
        Ok(())
    }

    /// Buffered value of one digit, [`NO_DIGIT`] outside the window
    pub fn read_char(&self, digit: usize) -> u8 {
        self.vram.get(digit).copied().unwrap_or(NO_DIGIT)
    }

    /// Format an integer into the buffer
    ///
    /// Unused digits are filled with `pad`. At least `decimal_places + 1`
    /// digits are written so a value like 5 with two places reads `0.05`,
    /// and a negative value gets a dash left of its most significant digit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDigit` if the number, its dash or its decimal point
    /// does not fit. The buffer is unchanged in that case.
    pub fn write_number(
        &mut self,
        value: i32,
        pad: impl Into<Glyph>,
        decimal_places: u8,
    ) -> Result<(), InvalidDigit> {
        let mut scratch = self.clone();
        scratch.fill(pad);

        let mut digit = 0;
        let mut magnitude = value.unsigned_abs();
        while magnitude != 0 {
            scratch.write_char(digit, Glyph::Code((magnitude % 10) as u8))?;
            magnitude /= 10;
            digit += 1;
        }

        let places = usize::from(decimal_places);
        while digit <= places {
            scratch.write_char(digit, Character::Zero)?;
            digit += 1;
        }

        if value < 0 {
            scratch.write_char(digit, Character::Dash)?;
        }

        if places > 0 {
            scratch.set_decimal_point(places)?;
        }

        self.vram = scratch.vram;
        Ok(())
    }

    /// Format a float into the buffer as fixed point
    ///
    /// `value` is scaled by `10^decimal_places` and truncated toward zero,
    /// then written like [`write_number`](Self::write_number).
    pub fn write_float(
        &mut self,
        value: f32,
        pad: impl Into<Glyph>,
        decimal_places: u8,
    ) -> Result<(), InvalidDigit> {
        let scale = (0..decimal_places).fold(1.0f32, |acc, _| acc * 10.0);
        self.write_number((value * scale) as i32, pad, decimal_places)
    }

    /// [`write_number`](Self::write_number), then flush to the chain
    pub fn display_number<I, const DEVICES: usize>(
        &mut self,
        chain: &mut ControllerChain<I, DEVICES>,
        value: i32,
        pad: impl Into<Glyph>,
        decimal_places: u8,
    ) -> WindowResult<I>
    where
        I: ChainInterface,
    {
        self.write_number(value, pad, decimal_places)?;
        self.update(chain)
    }

    /// [`write_float`](Self::write_float), then flush to the chain
    pub fn display_float<I, const DEVICES: usize>(
        &mut self,
        chain: &mut ControllerChain<I, DEVICES>,
        value: f32,
        pad: impl Into<Glyph>,
        decimal_places: u8,
    ) -> WindowResult<I>
    where
        I: ChainInterface,
    {
        self.write_float(value, pad, decimal_places)?;
        self.update(chain)
    }

    fn slot(&mut self, digit: usize) -> Result<&mut u8, InvalidDigit> {
        self.vram.get_mut(digit).ok_or(InvalidDigit {
            digit,
            limit: DIGITS,
        })
    }
}
