//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! window buffer edits ([`InvalidDigit`]) and chain operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`InvalidDigit`] - A digit index outside a window, returned by buffer-only edits
//! - [`Error`] - Runtime errors during register writes and flushes
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Nothing is rolled back when a chain operation fails half way: register
//! writes already latched stay latched.
//!
//! ## Example
//!
//! ```
//! use max72xx::{Builder, BuilderError};
//!
//! let result = Builder::new().intensity(16).build();
//! assert!(matches!(result, Err(BuilderError::InvalidIntensity(16))));
//! ```

use crate::interface::ChainInterface;
use crate::register::{MAX_INTENSITY, MAX_SCAN_LIMIT};

/// Errors that can occur when driving the chain
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: ChainInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`ChainInterface`] implementation.
    Interface(I::Error),
    /// Device index outside the chain
    InvalidDevice {
        /// Requested device
        device: usize,
        /// Devices in the chain
        devices: usize,
    },
    /// Digit index outside a window or the chain
    InvalidDigit {
        /// Requested digit
        digit: usize,
        /// Number of valid digits
        limit: usize,
    },
}

impl<I: ChainInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InvalidDevice { device, devices } => {
                write!(f, "Invalid device {device} (chain has {devices})")
            }
            Self::InvalidDigit { digit, limit } => {
                write!(f, "Invalid digit {digit} (limit {limit})")
            }
        }
    }
}

impl<I: ChainInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: ChainInterface> From<InvalidDigit> for Error<I> {
    fn from(err: InvalidDigit) -> Self {
        Self::InvalidDigit {
            digit: err.digit,
            limit: err.limit,
        }
    }
}

/// Digit index outside a window
///
/// Returned by edits that only touch a window's buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidDigit {
    /// Requested digit
    pub digit: usize,
    /// Window width
    pub limit: usize,
}

impl core::fmt::Display for InvalidDigit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Invalid digit {} (limit {})", self.digit, self.limit)
    }
}

impl core::error::Error for InvalidDigit {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Intensity above [`MAX_INTENSITY`]
    InvalidIntensity(u8),
    /// Scan limit above [`MAX_SCAN_LIMIT`]
    InvalidScanLimit(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidIntensity(value) => {
                write!(f, "Invalid intensity {value} (max {MAX_INTENSITY})")
            }
            Self::InvalidScanLimit(value) => {
                write!(f, "Invalid scan limit {value} (max {MAX_SCAN_LIMIT})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
