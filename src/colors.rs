//! Color space conversion helpers.
//!
//! The rainbow animation walks an 8-bit hue (0-255, wrapping) around the color
//! wheel. These helpers map that hue onto the full-saturation HSV wheel and
//! provide the integer blend used for cross-fading.
//!
//! All functions work in `Srgb<u8>` since every output sink is 8 bits per
//! component.

use palette::{FromColor, Hsv, Srgb};

/// 8-bit RGB color as pushed to every sink.
pub type Rgb8 = Srgb<u8>;

pub const BLACK: Rgb8 = Srgb::new(0, 0, 0);
pub const RED: Rgb8 = Srgb::new(255, 0, 0);
pub const GREEN: Rgb8 = Srgb::new(0, 255, 0);
pub const BLUE: Rgb8 = Srgb::new(0, 0, 255);
pub const ORANGE: Rgb8 = Srgb::new(255, 165, 0);

/// Creates an RGB color from 8-bit HSV components (each 0-255).
///
/// The 8-bit hue covers the whole wheel, so `hue = 256` would land back on red.
#[inline]
pub fn hsv8(hue: u8, saturation: u8, value: u8) -> Rgb8 {
    let degrees = f32::from(hue) * (360.0 / 256.0);
    let hsv = Hsv::new(
        degrees,
        f32::from(saturation) / 255.0,
        f32::from(value) / 255.0,
    );
    Srgb::<f32>::from_color(hsv).into_format::<u8>()
}

/// Creates an RGB color from an 8-bit hue (full saturation and value).
#[inline]
pub fn hue8(hue: u8) -> Rgb8 {
    hsv8(hue, 255, 255)
}

/// Blends `from` toward `to` by `amount / 255`.
///
/// `amount = 0` returns `from`, `amount = 255` returns `to`.
#[inline]
pub fn blend8(from: Rgb8, to: Rgb8, amount: u8) -> Rgb8 {
    Srgb::new(
        lerp8(from.red, to.red, amount),
        lerp8(from.green, to.green, amount),
        lerp8(from.blue, to.blue, amount),
    )
}

#[inline]
fn lerp8(from: u8, to: u8, amount: u8) -> u8 {
    let amount = u16::from(amount);
    let mixed = (u16::from(from) * (255 - amount) + u16::from(to) * amount + 127) / 255;
    // Weights sum to 255, so the result never exceeds either endpoint.
    mixed as u8
}

/// True if any component sits at full brightness.
#[inline]
pub fn is_saturated(color: Rgb8) -> bool {
    color.red == u8::MAX || color.green == u8::MAX || color.blue == u8::MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp8_hits_both_endpoints() {
        assert_eq!(lerp8(10, 200, 0), 10);
        assert_eq!(lerp8(10, 200, 255), 200);
        assert_eq!(lerp8(200, 10, 255), 10);
    }

    #[test]
    fn lerp8_never_overshoots() {
        for amount in 0..=255u8 {
            let v = lerp8(0, 255, amount);
            assert_eq!(v, amount);
        }
    }
}
