//! Component-trading cross-fade.
//!
//! Starting from pure blue, one component is decremented while the next is
//! incremented, one unit per frame: blue to green, green to red, red back to
//! blue. Every frame therefore sums to 255, and each leg takes 255 frames.

use crate::colors::{self, Rgb8};
use palette::Srgb;

const BLUE: usize = 2;
const LEG_FRAMES: u8 = u8::MAX;

/// Endless blue, green, red cross-fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelCrossFade {
    rgb: [u8; 3],
    falling: usize,
    position: u8,
}

impl ChannelCrossFade {
    /// Starts at pure blue, about to fade toward green.
    pub fn new() -> Self {
        Self {
            rgb: [colors::BLUE.red, colors::BLUE.green, colors::BLUE.blue],
            falling: BLUE,
            position: 0,
        }
    }

    /// The color produced by the last [`advance`](Self::advance).
    pub fn color(&self) -> Rgb8 {
        Srgb::new(self.rgb[0], self.rgb[1], self.rgb[2])
    }

    /// Moves one unit along the current leg and returns the new color.
    pub fn advance(&mut self) -> Rgb8 {
        let rising = if self.falling == 0 { BLUE } else { self.falling - 1 };

        self.rgb[self.falling] = self.rgb[self.falling].saturating_sub(1);
        self.rgb[rising] = self.rgb[rising].saturating_add(1);

        self.position += 1;
        if self.position == LEG_FRAMES {
            self.position = 0;
            self.falling = rising;
        }

        self.color()
    }
}

impl Default for ChannelCrossFade {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for ChannelCrossFade {
    type Item = Rgb8;

    fn next(&mut self) -> Option<Rgb8> {
        Some(self.advance())
    }
}
