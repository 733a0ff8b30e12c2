//! Shared test infrastructure for toy-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use palette::Srgb;
use toy_sequencer::{ButtonInput, RgbLed, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// 32-bit millisecond counter that wraps like a SysTick counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappingInstant(pub u32);

impl TimeInstant for WrappingInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0) as u64)
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records all color changes for testing
pub struct MockLed {
    current_color: Srgb<u8>,
    color_history: heapless::Vec<Srgb<u8>, 64>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            current_color: Srgb::new(0, 0, 0),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn get_last_color(&self) -> Srgb<u8> {
        self.current_color
    }

    pub fn color_history(&self) -> &[Srgb<u8>] {
        &self.color_history
    }
}

impl RgbLed for MockLed {
    fn set_color(&mut self, color: Srgb<u8>) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock Button
// ============================================================================

/// Button whose level the test flips through a shared cell
pub struct MockButton<'a> {
    level: &'a Cell<bool>,
}

impl<'a> MockButton<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl ButtonInput for MockButton<'_> {
    fn is_active(&mut self) -> bool {
        self.level.get()
    }
}

/// Levels of the red, green and blue buttons
pub struct MockPanel {
    levels: [Cell<bool>; 3],
}

impl MockPanel {
    pub fn new() -> Self {
        Self {
            levels: [Cell::new(false), Cell::new(false), Cell::new(false)],
        }
    }

    pub fn buttons(&self) -> [MockButton<'_>; 3] {
        [
            MockButton::new(&self.levels[0]),
            MockButton::new(&self.levels[1]),
            MockButton::new(&self.levels[2]),
        ]
    }

    pub fn set(&self, index: usize, down: bool) {
        self.levels[index].set(down);
    }
}

// ============================================================================
// Mock Time Sources
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

/// Mock 32-bit time source that rolls over
pub struct WrappingTimeSource {
    current_time: Cell<WrappingInstant>,
}

impl WrappingTimeSource {
    pub fn starting_at(millis: u32) -> Self {
        Self {
            current_time: Cell::new(WrappingInstant(millis)),
        }
    }

    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time
            .set(WrappingInstant(current.0.wrapping_add(millis)));
    }
}

impl TimeSource<WrappingInstant> for WrappingTimeSource {
    fn now(&self) -> WrappingInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn ms(millis: u64) -> TestDuration {
    TestDuration(millis)
}

pub fn leds() -> [MockLed; 2] {
    [MockLed::new(), MockLed::new()]
}
