//! Hardware interface abstraction
//!
//! This module provides the [`ChainInterface`] trait plus two implementations
//! for shifting frames into a MAX7219/MAX7221 daisy chain.
//!
//! ## Hardware Requirements
//!
//! The chain needs three lines:
//! - **DIN**: serial data into the first device (output)
//! - **CLK**: serial clock, data sampled on the rising edge (output)
//! - **LOAD**: latch, frames committed on the rising edge (output, CS on MAX7221)
//!
//! Use [`BitBangInterface`] when all three are plain GPIOs and [`SpiInterface`]
//! when DIN and CLK are MOSI and SCK of an SPI peripheral.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use max72xx::{register, BitBangInterface, ChainInterface};
//! # use core::convert::Infallible;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! // Create interface with data, clock and load pins
//! let mut interface = BitBangInterface::new(MockPin, MockPin, MockPin);
//!
//! // One frame for each of two chained devices
//! let _ = interface.write_frame(&[
//!     [register::INTENSITY, 0x08],
//!     [register::NOOP, 0x08],
//! ]);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to a chain of MAX72xx devices
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`ControllerChain`](crate::chain::ControllerChain) to work with any
/// SPI or GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use [`BitBangInterface`] or [`SpiInterface`]. If you need
/// custom behavior (e.g., an inverted LOAD line or a shift register in between),
/// implement this trait on your own type.
pub trait ChainInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Shift one latched frame into the chain
    ///
    /// `frame` holds one `[address, value]` pair per device. The implementation must:
    /// 1. Set LOAD low
    /// 2. Shift every byte of `frame` in order, MSB first
    /// 3. Set LOAD high
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn write_frame(&mut self, frame: &[[u8; 2]]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Bit-banged interface over three GPIO outputs
///
/// Each bit is presented on DIN, then CLK is pulsed high and low.
///
/// ## Type Parameters
///
/// * `DIN` - Data pin implementing [`OutputPin`]
/// * `CLK` - Clock pin implementing [`OutputPin`]
/// * `LOAD` - Latch pin implementing [`OutputPin`]
pub struct BitBangInterface<DIN, CLK, LOAD> {
    /// Serial data line
    din: DIN,
    /// Serial clock line (idles low)
    clk: CLK,
    /// Latch line (idles high)
    load: LOAD,
}

impl<DIN, CLK, LOAD, PinErr> BitBangInterface<DIN, CLK, LOAD>
where
    DIN: OutputPin<Error = PinErr>,
    CLK: OutputPin<Error = PinErr>,
    LOAD: OutputPin<Error = PinErr>,
{
    /// Create a new BitBangInterface
    ///
    /// The pins must already be configured as push-pull outputs.
    pub fn new(din: DIN, clk: CLK, load: LOAD) -> Self {
        Self { din, clk, load }
    }

    /// Release the pins
    pub fn release(self) -> (DIN, CLK, LOAD) {
        (self.din, self.clk, self.load)
    }

    fn shift_out(&mut self, byte: u8) -> InterfaceResult<(), PinErr> {
        for bit in (0..8).rev() {
            self.din.set_state(PinState::from(byte & (1 << bit) != 0))?;
            self.clk.set_high()?;
            self.clk.set_low()?;
        }
        Ok(())
    }
}

impl<DIN, CLK, LOAD, PinErr> ChainInterface for BitBangInterface<DIN, CLK, LOAD>
where
    DIN: OutputPin<Error = PinErr>,
    CLK: OutputPin<Error = PinErr>,
    LOAD: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<Infallible, PinErr>;

    fn write_frame(&mut self, frame: &[[u8; 2]]) -> InterfaceResult<(), Self::Error> {
        self.load.set_low().map_err(InterfaceError::Pin)?;
        for &[address, value] in frame {
            self.shift_out(address).map_err(InterfaceError::Pin)?;
            self.shift_out(value).map_err(InterfaceError::Pin)?;
        }
        self.load.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }
}

/// Interface over an SPI bus plus a LOAD pin
///
/// The bus must be configured for mode 0, MSB first, at most 10 MHz.
/// LOAD is driven here rather than by an `SpiDevice` so the latch edge
/// always follows the last clock of the frame.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `LOAD` - Latch pin implementing [`OutputPin`]
pub struct SpiInterface<SPI, LOAD> {
    /// SPI bus (MOSI to DIN, SCK to CLK)
    spi: SPI,
    /// Latch line (idles high)
    load: LOAD,
}

impl<SPI, LOAD> SpiInterface<SPI, LOAD>
where
    SPI: SpiBus,
    LOAD: OutputPin,
{
    /// Create a new SpiInterface
    pub fn new(spi: SPI, load: LOAD) -> Self {
        Self { spi, load }
    }

    /// Release the bus and pin
    pub fn release(self) -> (SPI, LOAD) {
        (self.spi, self.load)
    }
}

impl<SPI, LOAD> ChainInterface for SpiInterface<SPI, LOAD>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    LOAD: OutputPin,
    LOAD::Error: Debug,
{
    type Error = InterfaceError<SPI::Error, LOAD::Error>;

    fn write_frame(&mut self, frame: &[[u8; 2]]) -> InterfaceResult<(), Self::Error> {
        self.load.set_low().map_err(InterfaceError::Pin)?;
        self.spi
            .write(frame.as_flattened())
            .map_err(InterfaceError::Spi)?;
        self.spi.flush().map_err(InterfaceError::Spi)?;
        self.load.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        Din(bool),
        ClkHigh,
        ClkLow,
        LoadHigh,
        LoadLow,
        Spi(u8),
        Flush,
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug, Clone, Copy)]
    enum Line {
        Din,
        Clk,
        Load,
    }

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    struct MockPin {
        line: Line,
        log: Log,
        fail: bool,
    }

    impl MockPin {
        fn new(line: Line, log: &Log) -> Self {
            Self {
                line,
                log: Rc::clone(log),
                fail: false,
            }
        }

        fn record(&mut self, high: bool) -> Result<(), MockError> {
            if self.fail {
                return Err(MockError);
            }
            let event = match (self.line, high) {
                (Line::Din, level) => Event::Din(level),
                (Line::Clk, true) => Event::ClkHigh,
                (Line::Clk, false) => Event::ClkLow,
                (Line::Load, true) => Event::LoadHigh,
                (Line::Load, false) => Event::LoadLow,
            };
            self.log.borrow_mut().push(event);
            Ok(())
        }
    }

    impl ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.record(false)
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.record(true)
        }
    }

    struct MockSpi {
        log: Log,
    }

    impl SpiErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiBus for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            self.log
                .borrow_mut()
                .extend(words.iter().map(|&byte| Event::Spi(byte)));
            Ok(())
        }
        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn flush(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    fn bitbang(log: &Log) -> BitBangInterface<MockPin, MockPin, MockPin> {
        BitBangInterface::new(
            MockPin::new(Line::Din, log),
            MockPin::new(Line::Clk, log),
            MockPin::new(Line::Load, log),
        )
    }

    /// Bytes sampled on each rising clock edge, MSB first
    fn sampled_bytes(events: &[Event]) -> Vec<u8> {
        let mut din = false;
        let mut bits = Vec::new();
        for event in events {
            match event {
                Event::Din(level) => din = *level,
                Event::ClkHigh => bits.push(din),
                _ => {}
            }
        }
        bits.chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
            .collect()
    }

    #[test]
    fn test_bitbang_frame_is_latched() {
        let log = Log::default();
        let mut interface = bitbang(&log);
        interface.write_frame(&[[0x0A, 0x08]]).unwrap();

        let events = log.borrow();
        assert_eq!(events.first(), Some(&Event::LoadLow));
        assert_eq!(events.last(), Some(&Event::LoadHigh));
        assert_eq!(
            events.iter().filter(|e| **e == Event::LoadHigh).count(),
            1
        );
    }

    #[test]
    fn test_bitbang_shifts_msb_first() {
        let log = Log::default();
        let mut interface = bitbang(&log);
        interface
            .write_frame(&[[0x81, 0x3C], [0x00, 0xA5]])
            .unwrap();

        let events = log.borrow();
        assert_eq!(sampled_bytes(&events), alloc::vec![0x81, 0x3C, 0x00, 0xA5]);
        assert_eq!(
            events.iter().filter(|e| **e == Event::ClkHigh).count(),
            32
        );
    }

    #[test]
    fn test_bitbang_clock_returns_low_after_each_bit() {
        let log = Log::default();
        let mut interface = bitbang(&log);
        interface.write_frame(&[[0xFF, 0xFF]]).unwrap();

        let events = log.borrow();
        let clk: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, Event::ClkHigh | Event::ClkLow))
            .collect();
        assert!(clk.chunks(2).all(|pair| pair == [&Event::ClkHigh, &Event::ClkLow]));
    }

    #[test]
    fn test_bitbang_pin_error_is_reported() {
        let log = Log::default();
        let mut interface = bitbang(&log);
        interface.load.fail = true;
        let result = interface.write_frame(&[[0x0C, 0x01]]);
        assert!(matches!(result, Err(InterfaceError::Pin(MockError))));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_spi_frame_is_flushed_before_latch() {
        let log = Log::default();
        let mut interface = SpiInterface::new(
            MockSpi {
                log: Rc::clone(&log),
            },
            MockPin::new(Line::Load, &log),
        );
        interface
            .write_frame(&[[0x09, 0xFF], [0x00, 0x00]])
            .unwrap();

        assert_eq!(
            *log.borrow(),
            alloc::vec![
                Event::LoadLow,
                Event::Spi(0x09),
                Event::Spi(0xFF),
                Event::Spi(0x00),
                Event::Spi(0x00),
                Event::Flush,
                Event::LoadHigh,
            ]
        );
    }
}
