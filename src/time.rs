//! Time abstraction for platform-agnostic timing.
//!
//! Embedded millisecond counters wrap (a `u32` overflows after ~49.7 days), so
//! all interval arithmetic goes through [`Millis::elapsed_since`], which uses
//! wrapping subtraction.

/// A point on a monotonic, wrapping millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Clock origin (boot).
    pub const ZERO: Self = Millis(0);

    /// Milliseconds elapsed since `earlier`, correct across one counter wrap.
    #[inline]
    pub fn elapsed_since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Returns this instant advanced by `millis`, wrapping on overflow.
    #[inline]
    pub fn wrapping_add(self, millis: u32) -> Millis {
        Millis(self.0.wrapping_add(millis))
    }

    /// Raw counter value.
    #[inline]
    pub fn as_millis(self) -> u32 {
        self.0
    }
}

impl From<u32> for Millis {
    fn from(millis: u32) -> Self {
        Millis(millis)
    }
}

/// Trait for abstracting time sources.
pub trait TimeSource {
    /// Returns the current time instant.
    fn now(&self) -> Millis;
}
