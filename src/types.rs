//! Core types shared by the classifier, renderer and control loop.

use crate::colors::{self, Rgb8};

/// Best-guess color of the console's front LED ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayColor {
    /// Neither indicator line reads on.
    #[default]
    Off,

    /// Only the red line reads on.
    Red,

    /// Only the green line reads on.
    Green,

    /// Both lines read on.
    Orange,
}

impl DisplayColor {
    /// Derives the ring color from the two indicator lines.
    #[inline]
    pub fn from_lines(red_on: bool, green_on: bool) -> Self {
        match (red_on, green_on) {
            (true, true) => DisplayColor::Orange,
            (true, false) => DisplayColor::Red,
            (false, true) => DisplayColor::Green,
            (false, false) => DisplayColor::Off,
        }
    }

    /// RGB value used to paint this ring color onto the sinks.
    #[inline]
    pub fn rgb(self) -> Rgb8 {
        match self {
            DisplayColor::Off => colors::BLACK,
            DisplayColor::Red => colors::RED,
            DisplayColor::Green => colors::GREEN,
            DisplayColor::Orange => colors::ORANGE,
        }
    }
}

/// Which animation the renderer is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderMode {
    /// Continuous hue cycle.
    Rainbow,

    /// Flat fill with the classified ring color.
    Error,
}

/// How the rainbow mode walks the color wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RainbowStyle {
    /// 8-bit hue stepped once per 8-frame linear cross-fade.
    #[default]
    HueWheel,

    /// One-unit-per-frame trade between two RGB components (blue, green, red).
    ChannelCrossFade,
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// On-threshold leaves no analog sample that could read as on.
    ThresholdOutOfRange(u16),

    /// Frame delay of zero would spin the control loop.
    ZeroFrameDelay,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ThresholdOutOfRange(threshold) => {
                write!(
                    f,
                    "on-threshold {} must be below the analog maximum of {}",
                    threshold,
                    crate::ANALOG_MAX
                )
            }
            ConfigError::ZeroFrameDelay => {
                write!(f, "frame delay must be at least 1 ms")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Errors that can occur while wiring up the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RendererError {
    /// The renderer cannot accept more sinks.
    TooManySinks { capacity: usize },
}

impl core::fmt::Display for RendererError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RendererError::TooManySinks { capacity } => {
                write!(f, "renderer is full, capacity is {} sinks", capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RendererError {}
