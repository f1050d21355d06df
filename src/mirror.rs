//! Control loop tying the classifier to the renderer.
//!
//! Each tick samples the indicator lines, picks a render mode and paints one
//! frame. Entering or leaving error mode forces a full repaint, so sinks never
//! keep showing a color the change detection considered current.

use crate::classifier::{AnalogInput, ErrorStateClassifier};
use crate::colors::{self, Rgb8};
use crate::config::Config;
use crate::renderer::{ColorRenderer, LedSink};
use crate::time::{Millis, TimeSource};
use crate::types::{RenderMode, RendererError};
use embedded_hal::delay::DelayNs;

/// Mode chosen for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeDecision {
    pub mode: RenderMode,
    /// Set on the first tick of a mode.
    pub force_reset: bool,
}

/// Tracks the previous tick's error flag to detect mode entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSwitch {
    was_error: bool,
}

impl ModeSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks the render mode for this tick and remembers `is_error`.
    pub fn select(&mut self, is_error: bool) -> ModeDecision {
        let mode = if is_error {
            RenderMode::Error
        } else {
            RenderMode::Rainbow
        };
        let force_reset = is_error != self.was_error;
        self.was_error = is_error;

        ModeDecision { mode, force_reset }
    }

    pub fn was_error(&self) -> bool {
        self.was_error
    }
}

/// Result of one control loop iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub mode: RenderMode,
    pub color: Rgb8,
    pub force_reset: bool,
    /// How long to sleep before the next tick.
    pub delay_ms: u32,
}

/// Frame interval for a rendered color.
///
/// Fades appear to rush through saturated colors, so frames with any
/// component at 255 linger for an extra `2 * base_ms`.
#[inline]
pub fn frame_delay_ms(base_ms: u32, color: Rgb8) -> u32 {
    if colors::is_saturated(color) {
        base_ms.saturating_mul(3)
    } else {
        base_ms
    }
}

/// Mirrors the console's LED ring onto the registered sinks.
///
/// # Type Parameters
/// * `'a` - Lifetime of the sink borrows
/// * `G` - Green line input
/// * `R` - Red line input
/// * `MAX_SINKS` - Maximum number of sinks
pub struct RingMirror<'a, G: AnalogInput, R: AnalogInput, const MAX_SINKS: usize> {
    classifier: ErrorStateClassifier<G, R>,
    renderer: ColorRenderer<'a, MAX_SINKS>,
    mode_switch: ModeSwitch,
    config: Config,
}

impl<'a, G: AnalogInput, R: AnalogInput, const MAX_SINKS: usize> RingMirror<'a, G, R, MAX_SINKS> {
    /// Creates a mirror whose boot grace window starts at `boot`.
    pub fn new(green: G, red: R, config: Config, boot: Millis) -> Self {
        Self {
            classifier: ErrorStateClassifier::new(green, red, &config, boot),
            renderer: ColorRenderer::new(&config),
            mode_switch: ModeSwitch::new(),
            config,
        }
    }

    /// Registers an output sink.
    pub fn add_sink(&mut self, sink: &'a mut dyn LedSink) -> Result<(), RendererError> {
        self.renderer.add_sink(sink)
    }

    /// Runs one loop iteration at `now` without sleeping.
    pub fn tick(&mut self, now: Millis) -> Frame {
        self.classifier.update(now);

        let decision = self.mode_switch.select(self.classifier.is_error());
        if decision.force_reset && self.config.debug_enabled {
            info!("entering {} mode", decision.mode);
        }

        let color = match decision.mode {
            RenderMode::Rainbow => self.renderer.render_rainbow_frame(decision.force_reset),
            RenderMode::Error => self
                .renderer
                .render_error_frame(self.classifier.display_color(), decision.force_reset),
        };

        Frame {
            mode: decision.mode,
            color,
            force_reset: decision.force_reset,
            delay_ms: frame_delay_ms(self.config.frame_delay_ms, color),
        }
    }

    /// Runs the control loop forever.
    pub fn run<T: TimeSource, D: DelayNs>(&mut self, clock: &T, delay: &mut D) -> ! {
        info!("ring mirror running");

        loop {
            let frame = self.tick(clock.now());
            delay.delay_ms(frame.delay_ms);
        }
    }

    pub fn classifier(&self) -> &ErrorStateClassifier<G, R> {
        &self.classifier
    }

    pub fn renderer(&self) -> &ColorRenderer<'a, MAX_SINKS> {
        &self.renderer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
