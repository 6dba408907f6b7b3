//! Register-level driver for a daisy chain of MAX72xx devices
//!
//! All devices share DIN, CLK and LOAD, so every latch pulse carries exactly
//! one frame per device. Writing a register on one device means sending
//! [`NOOP`] frames to all the others.

use crate::config::Config;
use crate::error::Error;
use crate::interface::ChainInterface;
use crate::register::{
    DECODE, DECODE_FLAG, DIGITS_PER_DEVICE, DISPLAYTEST, INTENSITY, MAX_INTENSITY, MAX_SCAN_LIMIT,
    NOOP, SCANLIMIT, SHUTDOWN, SHUTDOWN_BLANK, SHUTDOWN_NORMAL, digit_register,
};

type ChainResult<I> = core::result::Result<(), Error<I>>;

/// Devices addressed by a register write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// A single device, counted in shift order
    Device(usize),
    /// Every device in one latch pulse
    All,
}

impl Selector {
    fn matches(self, device: usize) -> bool {
        match self {
            Self::Device(selected) => selected == device,
            Self::All => true,
        }
    }
}

impl From<usize> for Selector {
    fn from(device: usize) -> Self {
        Self::Device(device)
    }
}

/// Driver for `DEVICES` chained controllers
///
/// Owns the interface and a cache of each device's decode mode register,
/// which is shared by every [`DisplayWindow`](crate::DisplayWindow) flushed
/// through this chain.
///
/// ## Example
///
/// ```rust,no_run
/// use max72xx::{BitBangInterface, Config, ControllerChain, Selector};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let interface = BitBangInterface::new(MockPin, MockPin, MockPin);
/// let mut chain: ControllerChain<_, 2> = ControllerChain::new(interface);
/// let _ = chain.init(&Config::default());
/// let _ = chain.set_intensity(Selector::Device(1), 15);
/// ```
pub struct ControllerChain<I, const DEVICES: usize = 1>
where
    I: ChainInterface,
{
    /// Hardware interface
    interface: I,
    /// Cached decode mode register, one byte per device
    decode: [u8; DEVICES],
}

impl<I, const DEVICES: usize> ControllerChain<I, DEVICES>
where
    I: ChainInterface,
{
    /// Create a new chain
    ///
    /// Nothing is sent until [`init`](Self::init) or the first register write.
    pub fn new(interface: I) -> Self {
        const { assert!(DEVICES > 0, "a chain needs at least one device") };
        Self {
            interface,
            decode: [0; DEVICES],
        }
    }

    /// Bring every device out of power-on state
    ///
    /// Turns display test off (unless configured on), sets scan limit and
    /// intensity, resends the cached decode masks and leaves shutdown.
    pub fn init(&mut self, config: &Config) -> ChainResult<I> {
        log::debug!(
            "max72xx: init {} device(s), intensity {}, scan limit {}",
            DEVICES,
            config.intensity,
            config.scan_limit
        );
        self.set_display_test(Selector::All, config.display_test)?;
        self.set_scan_limit(Selector::All, config.scan_limit)?;
        self.set_intensity(Selector::All, config.intensity)?;
        let decode = self.decode;
        self.write_register_per_device(DECODE, &decode)?;
        self.shutdown(Selector::All, false)
    }

    /// Write `value` to register `address` of the selected devices
    ///
    /// Unselected devices receive a [`NOOP`] frame carrying the same value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDevice` without touching the bus if the
    /// selector names a device outside the chain.
    pub fn write_register(
        &mut self,
        selector: Selector,
        address: u8,
        value: impl Into<u8>,
    ) -> ChainResult<I> {
        match selector {
            Selector::Device(device) if device >= DEVICES => {
                return Err(Error::InvalidDevice {
                    device,
                    devices: DEVICES,
                });
            }
            _ => {}
        }
        let value = value.into();
        let mut frame = [[NOOP, value]; DEVICES];
        for (device, slot) in frame.iter_mut().enumerate() {
            if selector.matches(device) {
                slot[0] = address;
            }
        }
        log::trace!("max72xx: {:?} reg {:#04x} <- {:#04x}", selector, address, value);
        self.interface.write_frame(&frame).map_err(Error::Interface)
    }

    /// Write a different value to register `address` of every device
    pub fn write_register_per_device(
        &mut self,
        address: u8,
        data: &[u8; DEVICES],
    ) -> ChainResult<I> {
        let frame = data.map(|value| [address, value]);
        self.interface.write_frame(&frame).map_err(Error::Interface)
    }

    /// Set brightness (0x0-0xF, higher bits ignored)
    pub fn set_intensity(&mut self, selector: Selector, brightness: u8) -> ChainResult<I> {
        self.write_register(selector, INTENSITY, brightness & MAX_INTENSITY)
    }

    /// Enter (`true`) or leave (`false`) shutdown
    ///
    /// Digit registers keep their contents while shut down.
    pub fn shutdown(&mut self, selector: Selector, status: bool) -> ChainResult<I> {
        let value = if status {
            SHUTDOWN_BLANK
        } else {
            SHUTDOWN_NORMAL
        };
        self.write_register(selector, SHUTDOWN, value)
    }

    /// Set how many digits are scanned (0-7, higher bits ignored)
    pub fn set_scan_limit(&mut self, selector: Selector, limit: u8) -> ChainResult<I> {
        self.write_register(selector, SCANLIMIT, limit & MAX_SCAN_LIMIT)
    }

    /// Light every segment (`true`) or return to normal operation
    pub fn set_display_test(&mut self, selector: Selector, on: bool) -> ChainResult<I> {
        self.write_register(selector, DISPLAYTEST, u8::from(on))
    }

    /// Set or clear decode mode for one digit of the chain
    ///
    /// Only updates the cache; the register is sent by [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDigit` if `digit` is not below [`digits`](Self::digits).
    pub fn set_decode(&mut self, digit: usize, decode: bool) -> ChainResult<I> {
        let limit = self.digits();
        let Some(mask) = self.decode.get_mut(digit / DIGITS_PER_DEVICE) else {
            return Err(Error::InvalidDigit { digit, limit });
        };
        let bit = 1 << (digit % DIGITS_PER_DEVICE);
        if decode {
            *mask |= bit;
        } else {
            *mask &= !bit;
        }
        Ok(())
    }

    /// Flush a run of buffered digits starting at chain digit `start`
    ///
    /// Updates the decode cache from each value's [`DECODE_FLAG`], sends the
    /// full decode register, then writes the digits with the chain blanked so
    /// half-written content never shows.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDigit` for the first digit past the chain. The
    /// range is checked before anything is changed.
    pub fn update(&mut self, start: usize, values: &[u8]) -> ChainResult<I> {
        let limit = self.digits();
        if start.saturating_add(values.len()) > limit {
            return Err(Error::InvalidDigit {
                digit: start.max(limit),
                limit,
            });
        }
        log::trace!("max72xx: update digits {}..{}", start, start + values.len());

        for (digit, value) in (start..).zip(values) {
            self.set_decode(digit, value & DECODE_FLAG != 0)?;
        }
        let decode = self.decode;
        self.write_register_per_device(DECODE, &decode)?;

        self.shutdown(Selector::All, true)?;
        for (digit, value) in (start..).zip(values) {
            let device = digit / DIGITS_PER_DEVICE;
            self.write_register(
                Selector::Device(device),
                digit_register(digit),
                value & !DECODE_FLAG,
            )?;
        }
        self.shutdown(Selector::All, false)
    }

    /// Number of devices in the chain
    pub const fn devices(&self) -> usize {
        DEVICES
    }

    /// Number of digits across the chain
    pub const fn digits(&self) -> usize {
        DEVICES * DIGITS_PER_DEVICE
    }

    /// Cached decode mask of one device
    pub fn decode_mask(&self, device: usize) -> Option<u8> {
        self.decode.get(device).copied()
    }

    /// Whether a chain digit is cached as decoded
    pub fn is_decoded(&self, digit: usize) -> Option<bool> {
        self.decode_mask(digit / DIGITS_PER_DEVICE)
            .map(|mask| mask & (1 << (digit % DIGITS_PER_DEVICE)) != 0)
    }

    /// Release the interface
    pub fn release(self) -> I {
        self.interface
    }
}
