#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ErrorStateClassifier`**: Infers the console's error state from its green and red indicator lines
//! - **`ColorRenderer`**: Paints rainbow or error frames onto every registered sink
//! - **`RingMirror`**: One control loop tick: classify, pick a mode, render, pace
//! - **`ModeSwitch`**: Detects error-mode entry and exit to force full repaints
//! - **`LedSink`**: Trait to implement for your LED hardware
//! - **`AnalogInput`**: Trait to implement for your ADC channels
//! - **`TimeSource`**: Trait to implement for your millisecond clock
//! - **`Config`** / **`Calibration`**: Runtime switches and the tuned timing thresholds
//!
//! All colors are `Srgb<u8>`, the native format of both PWM LEDs and
//! addressable strips.

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod classifier;
pub mod colors;
pub mod config;
pub mod crossfade;
pub mod mirror;
pub mod renderer;
pub mod sinks;
pub mod time;
pub mod types;

pub use classifier::{AnalogInput, ClassifierState, ErrorStateClassifier};
pub use colors::Rgb8;
pub use config::{Calibration, Config, ConfigBuilder};
pub use crossfade::ChannelCrossFade;
pub use mirror::{Frame, ModeDecision, ModeSwitch, RingMirror, frame_delay_ms};
pub use renderer::{AnimationState, ColorRenderer, LedSink};
pub use sinks::{PwmRgbLed, StripSink};
pub use time::{Millis, TimeSource};
pub use types::{ConfigError, DisplayColor, RainbowStyle, RenderMode, RendererError};

/// Largest value an analog sample can take (10-bit ADC).
pub const ANALOG_MAX: u16 = 1023;
