#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ClockEngine`**: The turn/time state machine. Owns both players' remaining time
//! - **`GameMode`**: `Setup`, `Paused`, `Running` or `GameOver`
//! - **`TimeOptions`**: The ordered set of starting times offered during setup
//! - **`ClockEvent`**: What the engine asks the outside world to render
//! - **`ClockAction`**: Commands that can be sent to drive the engine
//! - **`WarningState`**: One-shot tracking for the 1 minute, 30 second and final countdown signals
//! - **`Debouncer`**: Non-blocking press detection for one button
//! - **`EventDispatcher`**: Polls buttons, drives the engine and renders its events
//! - **`ButtonInput`**, **`CharDisplay`**, **`Buzzer`**, **`StatusLeds`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Remaining time is kept in milliseconds as `u64` and is only ever reduced with
//! saturating arithmetic.

pub mod time;
pub mod types;
pub mod options;
pub mod event;
pub mod warning;
pub mod engine;
pub mod debounce;
pub mod hal;
pub mod display;
pub mod dispatcher;

pub use types::{Button, ConfigError, Direction, GameMode, Player, TimeOption};
pub use options::{DEFAULT_OPTIONS, TimeOptions, TimeOptionsBuilder};
pub use event::{ClockAction, ClockEvent, ClockEvents};
pub use warning::WarningState;
pub use engine::{ClockEngine, ClockEngineBuilder, ClockError};
pub use debounce::Debouncer;
pub use hal::{BeepPattern, ButtonInput, Buzzer, CharDisplay, LedState, NoLeds, StatusLeds};
pub use display::{Screen, format_clock};
pub use dispatcher::{DispatcherConfig, EventDispatcher};
pub use time::{TimeDuration, TimeInstant, TimeSource};
