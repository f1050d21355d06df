//! [`LedSink`] adapters for common LED hardware.
//!
//! - [`PwmRgbLed`]: a discrete RGB LED on three `embedded-hal` PWM channels.
//!   Writes take effect immediately.
//! - [`StripSink`]: an addressable strip behind any `smart-leds` driver. Fills
//!   go to a frame buffer that is sent on [`flush`](LedSink::flush).

use crate::colors::Rgb8;
use crate::renderer::LedSink;
use embedded_hal::pwm::SetDutyCycle;
use smart_leds::{RGB8, SmartLedsWrite};

/// RGB LED implementation for PWM-controlled LEDs.
///
/// Handles 8-bit to duty cycle conversion and common anode/cathode logic.
pub struct PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
    common_anode: bool,
}

impl<R, G, B> PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Create a new RGB LED controller
    ///
    /// # Arguments
    /// * `red` - PWM channel for red LED
    /// * `green` - PWM channel for green LED
    /// * `blue` - PWM channel for blue LED
    /// * `common_anode` - true for common anode LED (inverted logic), false for common cathode
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        Self {
            red,
            green,
            blue,
            common_anode,
        }
    }

    fn level(&self, value: u8) -> u16 {
        let value = if self.common_anode { u8::MAX - value } else { value };
        u16::from(value)
    }

    /// Releases the PWM channels.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

impl<R, G, B> LedSink for PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn fill(&mut self, color: Rgb8) {
        let (red, green, blue) = (
            self.level(color.red),
            self.level(color.green),
            self.level(color.blue),
        );
        let max = u16::from(u8::MAX);

        // PWM writes are treated as infallible.
        let _ = self.red.set_duty_cycle_fraction(red, max);
        let _ = self.green.set_duty_cycle_fraction(green, max);
        let _ = self.blue.set_duty_cycle_fraction(blue, max);
    }
}

/// Addressable LED strip with `LEDS` cells, all painted the same color.
pub struct StripSink<W, const LEDS: usize>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    writer: W,
    frame: [RGB8; LEDS],
}

impl<W, const LEDS: usize> StripSink<W, LEDS>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Wraps a strip driver with an all-off frame buffer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [RGB8::default(); LEDS],
        }
    }

    /// Returns the buffered frame.
    pub fn frame(&self) -> &[RGB8] {
        &self.frame
    }

    /// Releases the strip driver.
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W, const LEDS: usize> LedSink for StripSink<W, LEDS>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn fill(&mut self, color: Rgb8) {
        self.frame.fill(RGB8::new(color.red, color.green, color.blue));
    }

    fn flush(&mut self) {
        let _ = self.writer.write(self.frame.iter().copied());
    }
}
