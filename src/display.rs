//! What the two display lines should read.

use crate::engine::ClockEngine;
use crate::time::TimeInstant;
use crate::types::{GameMode, Player, TimeOption};
use core::fmt::Write;
use heapless::String;

/// Columns per display line.
pub const LINE_WIDTH: usize = 16;

/// One display line, always exactly [`LINE_WIDTH`] characters.
pub type Line = String<LINE_WIDTH>;

/// Formats milliseconds as zero-padded "MM:SS".
///
/// Seconds round up, so "00:00" is shown only when no time is left. Minutes
/// are not wrapped into hours; sixty minutes reads "60:00". Anything longer
/// than [`TimeOption::MAX_SECS`] reads "99:59".
pub fn format_clock(millis: u64) -> String<5> {
    let total_secs = millis.div_ceil(1000).min(TimeOption::MAX_SECS as u64);
    let mins = total_secs / 60;
    let secs = total_secs % 60;

    let mut out = String::new();
    let _ = write!(out, "{:02}:{:02}", mins, secs);
    out
}

/// Contents of both display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    lines: [Line; 2],
}

impl Screen {
    /// Renders the screen for the engine's current mode.
    pub fn render<I: TimeInstant, const N: usize>(engine: &ClockEngine<I, N>) -> Self {
        let mut top = Line::new();
        let mut bottom = Line::new();

        match engine.mode() {
            GameMode::Setup => {
                let _ = top.push_str("Select time");
                let option = format_clock(engine.selected_option().as_millis());
                let _ = write!(bottom, "   < {} >", option);
            }
            GameMode::Paused | GameMode::Running => {
                let marker = |player: Player| engine.active() == player;
                let _ = write!(
                    top,
                    "{}White{}Black{}",
                    if marker(Player::White) { '>' } else { ' ' },
                    if engine.is_paused() { " || " } else { "    " },
                    if marker(Player::Black) { '<' } else { ' ' },
                );
                write_times(&mut bottom, engine);
            }
            GameMode::GameOver => {
                if let Some(winner) = engine.winner() {
                    let _ = write!(top, "{} wins!", winner.label());
                }
                write_times(&mut bottom, engine);
            }
        }

        Self {
            lines: [pad(top), pad(bottom)],
        }
    }

    /// Returns line `row` (0 or 1).
    pub fn line(&self, row: usize) -> &str {
        &self.lines[row]
    }

    /// Returns both lines.
    pub fn lines(&self) -> &[Line; 2] {
        &self.lines
    }
}

fn write_times<I: TimeInstant, const N: usize>(line: &mut Line, engine: &ClockEngine<I, N>) {
    let _ = write!(
        line,
        "{}      {}",
        format_clock(engine.remaining(Player::White)),
        format_clock(engine.remaining(Player::Black)),
    );
}

fn pad(mut line: Line) -> Line {
    while line.len() < LINE_WIDTH {
        if line.push(' ').is_err() {
            break;
        }
    }
    line
}
