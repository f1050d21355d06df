//! Shared test infrastructure for ring-mirror integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use ring_mirror::{AnalogInput, LedSink, Millis, Rgb8, TimeSource};
use smart_leds::{RGB8, SmartLedsWrite};

// ============================================================================
// Mock Analog Input
// ============================================================================

/// Analog line whose level is set through a shared cell
pub struct MockAnalog<'c> {
    level: &'c Cell<u16>,
}

impl<'c> MockAnalog<'c> {
    pub fn new(level: &'c Cell<u16>) -> Self {
        Self { level }
    }
}

impl AnalogInput for MockAnalog<'_> {
    fn read(&mut self) -> u16 {
        self.level.get()
    }
}

// ============================================================================
// Mock Sink
// ============================================================================

/// Records everything a sink receives; outlives the renderer borrowing the sink
pub struct SinkLog {
    fills: RefCell<heapless::Vec<Rgb8, 256>>,
    flushes: Cell<usize>,
}

impl SinkLog {
    pub fn new() -> Self {
        Self {
            fills: RefCell::new(heapless::Vec::new()),
            flushes: Cell::new(0),
        }
    }

    pub fn fill_count(&self) -> usize {
        self.fills.borrow().len()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.get()
    }

    pub fn last_fill(&self) -> Option<Rgb8> {
        self.fills.borrow().last().copied()
    }

    pub fn contains(&self, color: Rgb8) -> bool {
        self.fills.borrow().iter().any(|c| *c == color)
    }
}

/// Sink that reports into a [`SinkLog`]
pub struct MockSink<'l> {
    log: &'l SinkLog,
}

impl<'l> MockSink<'l> {
    pub fn new(log: &'l SinkLog) -> Self {
        Self { log }
    }
}

impl LedSink for MockSink<'_> {
    fn fill(&mut self, color: Rgb8) {
        let _ = self.log.fills.borrow_mut().push(color);
    }

    fn flush(&mut self) {
        self.log.flushes.set(self.log.flushes.get() + 1);
    }
}

// ============================================================================
// Mock Hardware
// ============================================================================

/// PWM channel that remembers its duty cycle
pub struct MockPwm {
    pub duty: u16,
    pub max: u16,
}

impl MockPwm {
    pub fn new(max: u16) -> Self {
        Self { duty: 0, max }
    }
}

impl ErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}

/// Addressable strip driver that keeps the last written frame
pub struct MockStrip {
    pub writes: usize,
    pub frame: heapless::Vec<RGB8, 64>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            writes: 0,
            frame: heapless::Vec::new(),
        }
    }
}

impl SmartLedsWrite for MockStrip {
    type Error = ();
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.frame.clear();
        for pixel in iterator {
            self.frame.push(pixel.into()).map_err(|_| ())?;
        }
        self.writes += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockClock {
    now: Cell<Millis>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Millis::ZERO),
        }
    }

    pub fn advance(&self, millis: u32) {
        self.now.set(self.now.get().wrapping_add(millis));
    }
}

impl TimeSource for MockClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Sample level comfortably above the on-threshold
pub const HIGH: u16 = 600;

/// Sample level comfortably below the on-threshold
pub const LOW: u16 = 100;
