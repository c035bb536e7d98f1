//! Shared test infrastructure for chess-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use chess_clock::{
    BeepPattern, Button, ButtonInput, Buzzer, CharDisplay, ClockEngine, LedState, StatusLeds,
    TimeDuration, TimeInstant, TimeSource,
};
use core::cell::{Cell, RefCell};

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
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
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

// ============================================================================
// Mock Hardware
// ============================================================================

/// Button levels the test can flip while the dispatcher holds a reference
pub struct MockButtons {
    levels: Cell<[bool; 3]>,
}

impl MockButtons {
    pub fn new() -> Self {
        Self {
            levels: Cell::new([false; 3]),
        }
    }

    pub fn set(&self, button: Button, pressed: bool) {
        let mut levels = self.levels.get();
        levels[slot(button)] = pressed;
        self.levels.set(levels);
    }
}

fn slot(button: Button) -> usize {
    match button {
        Button::White => 0,
        Button::Black => 1,
        Button::Control => 2,
    }
}

impl ButtonInput for &MockButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.levels.get()[slot(button)]
    }
}

/// Display that keeps the text of both lines and counts writes
pub struct MockDisplay {
    cursor: Cell<(u8, u8)>,
    lines: RefCell<[String; 2]>,
    writes: Cell<usize>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            cursor: Cell::new((0, 0)),
            lines: RefCell::new([String::new(), String::new()]),
            writes: Cell::new(0),
        }
    }

    pub fn line(&self, row: usize) -> String {
        self.lines.borrow()[row].clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl CharDisplay for &MockDisplay {
    fn set_cursor(&mut self, col: u8, row: u8) {
        self.cursor.set((col, row));
    }

    fn write_str(&mut self, text: &str) {
        let (col, row) = self.cursor.get();
        let mut lines = self.lines.borrow_mut();
        let line = &mut lines[row as usize];
        line.truncate(col as usize);
        line.push_str(text);
        self.writes.set(self.writes.get() + 1);
    }
}

/// Buzzer that records every pattern played
pub struct MockBuzzer {
    history: RefCell<heapless::Vec<BeepPattern, 64>>,
}

impl MockBuzzer {
    pub fn new() -> Self {
        Self {
            history: RefCell::new(heapless::Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<BeepPattern> {
        self.history.borrow().iter().copied().collect()
    }

    pub fn count(&self, pattern: BeepPattern) -> usize {
        self.history.borrow().iter().filter(|p| **p == pattern).count()
    }

    pub fn clear(&self) {
        self.history.borrow_mut().clear();
    }
}

impl Buzzer for &MockBuzzer {
    fn play(&mut self, pattern: BeepPattern) {
        let _ = self.history.borrow_mut().push(pattern);
    }
}

/// LEDs that remember the last state applied
pub struct MockLeds {
    state: Cell<Option<LedState>>,
}

impl MockLeds {
    pub fn new() -> Self {
        Self {
            state: Cell::new(None),
        }
    }

    pub fn state(&self) -> Option<LedState> {
        self.state.get()
    }
}

impl StatusLeds for &MockLeds {
    fn set(&mut self, state: LedState) {
        self.state.set(Some(state));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Engine with the default options, confirmed and started at `at`
pub fn running_engine(at: u64) -> ClockEngine<TestInstant> {
    let mut engine = ClockEngine::new();
    engine.confirm_setup(TestInstant(at)).unwrap();
    engine.toggle_run(TestInstant(at)).unwrap();
    engine
}
