//! Color renderer driving every registered LED sink.
//!
//! Provides [`ColorRenderer`], which owns the rainbow animation state and the
//! error fill, and the [`LedSink`] trait for hardware abstraction. Both modes
//! skip redundant writes unless a full repaint is forced.

use crate::colors::{self, Rgb8};
use crate::config::Config;
use crate::crossfade::ChannelCrossFade;
use crate::types::{DisplayColor, RainbowStyle, RendererError};
use heapless::Vec;

/// Number of frames in one hue-to-hue cross-fade.
pub const FADE_STEPS: u8 = 8;

/// Blend amount added per fade step.
pub const FADE_SCALE: u8 = u8::MAX / FADE_STEPS;

/// Hue the rainbow starts from after power-on.
pub const START_HUE: u8 = 160;

/// Trait for abstracting one group of LEDs.
///
/// Implement this for your LED hardware (PWM channels, addressable strips,
/// etc.) to let the renderer drive it. Writes cannot fail; handle any
/// hardware errors internally.
pub trait LedSink {
    /// Sets every cell of this sink to `color`.
    fn fill(&mut self, color: Rgb8);

    /// Pushes buffered cells to the hardware. Immediate sinks need not
    /// override this.
    fn flush(&mut self) {}
}

/// Hue-wheel fade progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Color shown by the last rainbow frame.
    pub current: Rgb8,
    /// Color the current fade started from.
    pub last: Rgb8,
    /// Color the current fade is heading to.
    pub target: Rgb8,
    /// Hue of `target`.
    pub hue: u8,
    /// Frames into the current fade, `0..FADE_STEPS`.
    pub step: u8,
}

impl AnimationState {
    /// Holds steady on `hue` until the first fade begins.
    pub fn starting_at(hue: u8) -> Self {
        let color = colors::hue8(hue);
        Self {
            current: color,
            last: color,
            target: color,
            hue,
            step: 0,
        }
    }

    /// Advances one frame and returns the new current color.
    fn advance(&mut self) -> Rgb8 {
        self.step += 1;

        if self.step >= FADE_STEPS {
            self.step = 0;
            self.last = self.target;
            self.hue = self.hue.wrapping_add(1);
            self.target = colors::hue8(self.hue);
            self.current = self.last;
        } else {
            self.current = colors::blend8(self.last, self.target, FADE_SCALE * self.step);
        }

        self.current
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::starting_at(START_HUE)
    }
}

/// Renders rainbow and error frames onto a fixed set of sinks.
///
/// Sinks are borrowed so differently typed hardware (PWM LEDs next to
/// addressable strips) can share one renderer without heap allocation.
///
/// # Type Parameters
/// * `'a` - Lifetime of the sink borrows
/// * `MAX_SINKS` - Maximum number of sinks this renderer can drive
pub struct ColorRenderer<'a, const MAX_SINKS: usize> {
    sinks: Vec<&'a mut dyn LedSink, MAX_SINKS>,
    animation: AnimationState,
    crossfade: ChannelCrossFade,
    style: RainbowStyle,
    show_error_colors: bool,
    debug_enabled: bool,
    last_rainbow: Option<Rgb8>,
    last_error: Option<Rgb8>,
}

impl<'a, const MAX_SINKS: usize> ColorRenderer<'a, MAX_SINKS> {
    /// Creates a renderer with no sinks.
    pub fn new(config: &Config) -> Self {
        Self {
            sinks: Vec::new(),
            animation: AnimationState::default(),
            crossfade: ChannelCrossFade::new(),
            style: config.rainbow_style,
            show_error_colors: config.show_error_colors,
            debug_enabled: config.debug_enabled,
            last_rainbow: None,
            last_error: None,
        }
    }

    /// Registers another sink.
    ///
    /// # Errors
    /// * `TooManySinks` - `MAX_SINKS` sinks are already registered
    pub fn add_sink(&mut self, sink: &'a mut dyn LedSink) -> Result<(), RendererError> {
        self.sinks
            .push(sink)
            .map_err(|_| RendererError::TooManySinks {
                capacity: MAX_SINKS,
            })
    }

    /// Advances the rainbow one frame and paints it.
    ///
    /// The frame is pushed only if it differs from the previous rainbow frame,
    /// or if `force_reset` is set (mode re-entry).
    pub fn render_rainbow_frame(&mut self, force_reset: bool) -> Rgb8 {
        let color = match self.style {
            RainbowStyle::HueWheel => self.animation.advance(),
            RainbowStyle::ChannelCrossFade => self.crossfade.advance(),
        };

        if force_reset || self.last_rainbow != Some(color) {
            self.push(color);
            self.last_rainbow = Some(color);
        }

        color
    }

    /// Paints the error color for `display`.
    ///
    /// Strips are only rewritten when the color changes, unless `force_reset`
    /// is set. Entering error mode must force, since the cached color may be
    /// stale from before the rainbow ran.
    pub fn render_error_frame(&mut self, display: DisplayColor, force_reset: bool) -> Rgb8 {
        let color = self.error_color(display);

        if force_reset || self.last_error != Some(color) {
            self.push(color);
            self.last_error = Some(color);
        }

        color
    }

    /// Color painted in error mode for the given ring color.
    pub fn error_color(&self, display: DisplayColor) -> Rgb8 {
        if self.show_error_colors {
            display.rgb()
        } else {
            colors::RED
        }
    }

    fn push(&mut self, color: Rgb8) {
        for sink in self.sinks.iter_mut() {
            sink.fill(color);
            sink.flush();
        }

        if self.debug_enabled {
            trace!("r: {} g: {} b: {}", color.red, color.green, color.blue);
        }
    }

    /// Returns the hue-wheel fade progress.
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}
