//! Textual progress bar

use crossterm::{ExecutableCommand, style::Print};
use std::io::{Stdout, Write, stdout};

/// Width of the bar in characters
pub const BAR_WIDTH: usize = 50;

const FILLED: char = '#';
const EMPTY: char = '-';

/// Render `[###---] processed/total`
///
/// The filled width is `processed / total` of `BAR_WIDTH`, rounded down.
pub fn render_progress(processed: usize, total: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (processed.min(total) * BAR_WIDTH) / total
    };

    let bar: String = std::iter::repeat_n(FILLED, filled)
        .chain(std::iter::repeat_n(EMPTY, BAR_WIDTH - filled))
        .collect();
    format!("[{bar}] {processed}/{total}")
}

/// Receives a progress update after every processed file
pub trait ProgressReporter {
    fn report(&mut self, processed: usize, total: usize);
}

/// Redraws the bar in place on a terminal stream, stdout by default
pub struct ConsoleProgress<W: Write = Stdout> {
    out: W,
    drawn: bool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::with_writer(stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, drawn: false }
    }

    /// Move past the bar line once the run is over
    pub fn finish(&mut self) {
        if self.drawn {
            let _ = self.out.execute(Print("\n"));
            self.drawn = false;
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ProgressReporter for ConsoleProgress<W> {
    fn report(&mut self, processed: usize, total: usize) {
        let _ = self
            .out
            .execute(Print(format!("\r{}", render_progress(processed, total))));
        self.drawn = true;
    }
}
