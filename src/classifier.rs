//! Error-state classifier for the console's front LED ring.
//!
//! The ring is observed through two analog taps (green and red indicator
//! lines). The ring blinks faster than the control loop can reliably sample,
//! so the classifier infers an error from blink timing rather than from the
//! instantaneous line levels alone.
//!
//! Each tick, the first matching rule wins:
//!
//! 1. red on: error
//! 2. neither line on: error (mid-blink, sampled between pulses)
//! 3. red changed within [`Calibration::red_recent_ms`]: error (still blinking)
//! 4. green blinked more than [`Calibration::blink_count_limit`] times: error
//! 5. otherwise: no error (solid green)
//!
//! Nothing is reported as an error until [`Calibration::boot_grace_ms`] of
//! uptime has passed, since both lines are unstable while the console boots.

use crate::config::{Calibration, Config};
use crate::time::Millis;
use crate::types::DisplayColor;

/// Trait for abstracting one analog input line.
///
/// Implement this for your ADC channel. Samples are nominally in
/// `0..=`[`ANALOG_MAX`](crate::ANALOG_MAX); reads cannot fail.
pub trait AnalogInput {
    /// Samples the line.
    fn read(&mut self) -> u16;
}

/// Transition history of one indicator line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ChannelHistory {
    on: bool,
    last_change: Option<Millis>,
}

impl ChannelHistory {
    /// Records the new level, returning true on a change.
    fn record(&mut self, on: bool, now: Millis) -> bool {
        if on == self.on {
            return false;
        }
        self.on = on;
        self.last_change = Some(now);
        true
    }

    /// Time spent at the current level.
    fn held_for(&self, now: Millis) -> u32 {
        self.last_change.map_or(0, |at| now.elapsed_since(at))
    }
}

/// Mutable classifier state, reset only by power cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierState {
    green: ChannelHistory,
    red: ChannelHistory,
    blink_count: u32,
    booted: bool,
    is_error: bool,
}

/// Infers the console's error state from its green and red indicator lines.
///
/// # Type Parameters
/// * `G` - Green line input
/// * `R` - Red line input
pub struct ErrorStateClassifier<G: AnalogInput, R: AnalogInput> {
    green_input: G,
    red_input: R,
    calibration: Calibration,
    debug_enabled: bool,
    boot: Millis,
    state: ClassifierState,
}

impl<G: AnalogInput, R: AnalogInput> ErrorStateClassifier<G, R> {
    /// Creates a classifier whose grace window starts at `boot`.
    pub fn new(green_input: G, red_input: R, config: &Config, boot: Millis) -> Self {
        Self {
            green_input,
            red_input,
            calibration: config.calibration,
            debug_enabled: config.debug_enabled,
            boot,
            state: ClassifierState::default(),
        }
    }

    /// Samples both lines and advances the classifier to `now`.
    pub fn update(&mut self, now: Millis) {
        let green = self.green_input.read();
        let red = self.red_input.read();
        self.observe(now, green, red);
    }

    /// Advances the classifier with already-sampled line values.
    pub fn observe(&mut self, now: Millis, green_sample: u16, red_sample: u16) {
        let cal = self.calibration;
        let green_on = is_on(green_sample, cal.on_threshold);
        let red_on = is_on(red_sample, cal.on_threshold);

        if self.state.green.record(green_on, now) {
            if green_on {
                self.state.blink_count = self.state.blink_count.saturating_add(1);
            }
            if self.debug_enabled {
                debug!("green on={} blinks={}", green_on, self.state.blink_count);
            }
        }

        if self.state.red.record(red_on, now) && self.debug_enabled {
            debug!("red on={}", red_on);
        }

        // Forget stale red transitions so a wrapped clock can't make them look recent.
        if let Some(at) = self.state.red.last_change {
            if now.elapsed_since(at) >= cal.red_recent_ms {
                self.state.red.last_change = None;
            }
        }

        // Latched, so a counter wrap can't reopen the grace window.
        if !self.state.booted && now.elapsed_since(self.boot) >= cal.boot_grace_ms {
            self.state.booted = true;
        }

        let is_error = self.state.booted && self.classify(green_on, red_on);
        if is_error != self.state.is_error && self.debug_enabled {
            debug!(
                "error={} green={} red={} blinks={}",
                is_error,
                green_on,
                red_on,
                self.state.blink_count
            );
        }
        self.state.is_error = is_error;

        if green_on && self.state.green.held_for(now) > cal.green_sustain_ms {
            self.state.blink_count = 0;
        }
    }

    fn classify(&self, green_on: bool, red_on: bool) -> bool {
        if red_on {
            return true;
        }
        if !green_on {
            return true;
        }
        if self.state.red.last_change.is_some() {
            return true;
        }
        self.state.blink_count > self.calibration.blink_count_limit
    }

    /// Returns true if the last update classified the console as faulted.
    pub fn is_error(&self) -> bool {
        self.state.is_error
    }

    /// Returns the ring color implied by the last sampled line levels.
    pub fn display_color(&self) -> DisplayColor {
        DisplayColor::from_lines(self.state.red.on, self.state.green.on)
    }

    /// Green rising edges since green was last held on.
    pub fn blink_count(&self) -> u32 {
        self.state.blink_count
    }

    pub fn green_on(&self) -> bool {
        self.state.green.on
    }

    pub fn red_on(&self) -> bool {
        self.state.red.on
    }

    /// Returns true once the boot grace window has elapsed.
    pub fn is_booted(&self) -> bool {
        self.state.booted
    }

    /// Returns a snapshot of the classifier's history.
    pub fn state(&self) -> &ClassifierState {
        &self.state
    }
}

/// Thresholds one analog sample. The threshold itself reads as off.
#[inline]
pub fn is_on(sample: u16, threshold: u16) -> bool {
    sample > threshold
}
