//! Chain configuration types and builder

pub use crate::error::BuilderError;
use crate::register::{MAX_INTENSITY, MAX_SCAN_LIMIT};

/// Default intensity, half of [`MAX_INTENSITY`]
pub const DEFAULT_INTENSITY: u8 = MAX_INTENSITY / 2;

/// Power-on configuration applied by [`ControllerChain::init`](crate::ControllerChain::init)
///
/// Every setting is broadcast to all devices in the chain. Use `Builder`
/// to create a Config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Intensity (0x0-0xF)
    pub intensity: u8,
    /// Scan limit (0-7, digits scanned minus one)
    pub scan_limit: u8,
    /// Whether display test mode (all segments lit) is left on
    pub display_test: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
            scan_limit: MAX_SCAN_LIMIT,
            display_test: false,
        }
    }
}

/// Builder for constructing chain configuration
///
/// # Example
///
/// ```rust,no_run
/// use max72xx::Builder;
///
/// let config = match Builder::new().intensity(10).scan_limit(3).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set intensity
    pub fn intensity(mut self, value: u8) -> Self {
        self.config.intensity = value;
        self
    }

    /// Set scan limit
    pub fn scan_limit(mut self, value: u8) -> Self {
        self.config.scan_limit = value;
        self
    }

    /// Leave display test mode on after init
    pub fn display_test(mut self, value: bool) -> Self {
        self.config.display_test = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidIntensity` or `BuilderError::InvalidScanLimit`
    /// when a value does not fit its register.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.config.intensity > MAX_INTENSITY {
            return Err(BuilderError::InvalidIntensity(self.config.intensity));
        }
        if self.config.scan_limit > MAX_SCAN_LIMIT {
            return Err(BuilderError::InvalidScanLimit(self.config.scan_limit));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_power_on_sequence() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.intensity, 7);
        assert_eq!(config.scan_limit, 7);
        assert!(!config.display_test);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_intensity_out_of_range() {
        let result = Builder::new().intensity(0x10).build();
        assert_eq!(result, Err(BuilderError::InvalidIntensity(0x10)));
    }

    #[test]
    fn test_scan_limit_out_of_range() {
        let result = Builder::new().scan_limit(8).build();
        assert_eq!(result, Err(BuilderError::InvalidScanLimit(8)));
    }

    #[test]
    fn test_builder_sets_values() {
        let config = Builder::new()
            .intensity(15)
            .scan_limit(3)
            .display_test(true)
            .build()
            .unwrap();
        assert_eq!(config.intensity, 15);
        assert_eq!(config.scan_limit, 3);
        assert!(config.display_test);
    }
}
