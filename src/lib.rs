//! MAX7219/MAX7221 Seven-Segment Driver
//!
//! A driver for daisy chains of MAX7219/MAX7221 LED controllers driving
//! seven-segment digits, eight per device.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support (bit-banged GPIO or SPI bus)
//! - Per-device or broadcast register writes
//! - Per-digit Code-B decode or raw segment control
//! - Independent display windows sharing one chain
//! - Integer and fixed-point number formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::digital::OutputPin;
//! use max72xx::{BitBangInterface, Builder, Character, ControllerChain, DisplayWindow};
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let (din, clk, load) = (MockPin, MockPin, MockPin);
//! let interface = BitBangInterface::new(din, clk, load);
//! let config = match Builder::new().intensity(10).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut chain: ControllerChain<_, 1> = ControllerChain::new(interface);
//! let _ = chain.init(&config);
//!
//! let mut display0 = DisplayWindow::<4>::new(0);
//! let mut display1 = DisplayWindow::<4>::new(4);
//! for n in [-10, 0] {
//!     let _ = display0.display_number(&mut chain, n, Character::Blank, 2);
//!     let _ = display1.display_number(&mut chain, n, Character::Blank, 2);
//! }
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Controller chain and register writes
pub mod chain;
/// Code-B characters and digit glyphs
pub mod character;
/// Chain configuration and builder
pub mod config;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// MAX72xx register map
pub mod register;
/// Buffered display windows
pub mod window;

pub use chain::{ControllerChain, Selector};
pub use character::{Character, Glyph};
pub use config::{Builder, Config, DEFAULT_INTENSITY};
pub use error::{BuilderError, Error, InvalidDigit};
pub use interface::{BitBangInterface, ChainInterface, InterfaceError, SpiInterface};
pub use window::DisplayWindow;
