//! Runtime configuration and calibration constants.
//!
//! The classifier's thresholds were tuned against one console revision's LED
//! timings. They are named and overridable here, but the defaults should only
//! change with new calibration data.

use crate::ANALOG_MAX;
use crate::types::{ConfigError, RainbowStyle};

/// Tuned thresholds used by the error-state classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Analog samples strictly above this read as "on".
    pub on_threshold: u16,

    /// Uptime during which the classifier never reports an error.
    pub boot_grace_ms: u32,

    /// Red counts as still blinking for this long after its last transition.
    pub red_recent_ms: u32,

    /// Green held on for longer than this clears the blink count.
    pub green_sustain_ms: u32,

    /// Green blink counts above this indicate an error.
    pub blink_count_limit: u32,
}

impl Calibration {
    pub const DEFAULT: Self = Self {
        on_threshold: 450,
        boot_grace_ms: 1500,
        red_recent_ms: 1000,
        green_sustain_ms: 500,
        blink_count_limit: 2,
    };
}

impl Default for Calibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Top-level settings for the mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Emit diagnostics on state transitions.
    pub debug_enabled: bool,

    /// Paint the classified ring color in error mode. When false, errors are
    /// shown as solid red.
    pub show_error_colors: bool,

    /// Base frame interval.
    pub frame_delay_ms: u32,

    /// Rainbow animation flavor.
    pub rainbow_style: RainbowStyle,

    pub calibration: Calibration,
}

impl Config {
    pub const DEFAULT: Self = Self {
        debug_enabled: false,
        show_error_colors: true,
        frame_delay_ms: 15,
        rainbow_style: RainbowStyle::HueWheel,
        calibration: Calibration::DEFAULT,
    };

    /// Creates a builder starting from [`Config::DEFAULT`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for validated configurations.
#[derive(Debug)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::DEFAULT,
        }
    }

    pub fn debug_enabled(mut self, enabled: bool) -> Self {
        self.config.debug_enabled = enabled;
        self
    }

    pub fn show_error_colors(mut self, show: bool) -> Self {
        self.config.show_error_colors = show;
        self
    }

    pub fn frame_delay_ms(mut self, millis: u32) -> Self {
        self.config.frame_delay_ms = millis;
        self
    }

    pub fn rainbow_style(mut self, style: RainbowStyle) -> Self {
        self.config.rainbow_style = style;
        self
    }

    pub fn calibration(mut self, calibration: Calibration) -> Self {
        self.config.calibration = calibration;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ThresholdOutOfRange` - No analog sample could exceed the on-threshold
    /// * `ZeroFrameDelay` - Frame delay is zero
    pub fn build(self) -> Result<Config, ConfigError> {
        let threshold = self.config.calibration.on_threshold;
        if threshold >= ANALOG_MAX {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }

        if self.config.frame_delay_ms == 0 {
            return Err(ConfigError::ZeroFrameDelay);
        }

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
