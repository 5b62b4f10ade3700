//! Rate-limited console progress display.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crate::schema::{EnumerationProgress, ProgressConfig};

/// Width of the line cleared by [`ProgressTracker::finish`].
const LINE_WIDTH: usize = 80;

/// Prints a single self-overwriting progress line at most once per interval.
pub struct ProgressTracker<W: Write = Stdout> {
    out: W,
    enabled: bool,
    interval: Duration,
    start: Instant,
    last_update: Instant,
}

impl ProgressTracker<Stdout> {
    /// Tracker printing to stdout.
    pub fn new(config: &ProgressConfig) -> Self {
        Self::with_writer(config, io::stdout())
    }
}

impl<W: Write> ProgressTracker<W> {
    pub fn with_writer(config: &ProgressConfig, out: W) -> Self {
        let now = Instant::now();
        Self {
            out,
            enabled: config.enabled,
            interval: Duration::from_millis(config.interval_ms),
            start: now,
            last_update: now,
        }
    }

    /// Time since the tracker was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Print `progress` if enabled and the interval has passed since the
    /// last printed line.
    pub fn update(&mut self, progress: &EnumerationProgress) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let now = Instant::now();
        if now.duration_since(self.last_update) < self.interval {
            return Ok(());
        }

        write!(
            self.out,
            "\r[Size {}] Unique: {} | Generated: {} | Time: {:.3}s",
            progress.size,
            progress.unique,
            progress.generated,
            now.duration_since(self.start).as_secs_f64()
        )?;
        self.out.flush()?;
        self.last_update = now;
        Ok(())
    }

    /// Clear the progress line and print the final count.
    pub fn finish(&mut self, count: usize) -> io::Result<()> {
        if self.enabled {
            write!(self.out, "\r{}\r", " ".repeat(LINE_WIDTH))?;
        }

        writeln!(
            self.out,
            "✓ Enumeration completed in {:.3} seconds",
            self.elapsed().as_secs_f64()
        )?;
        writeln!(self.out, "✓ Found {} unique polyominoes", count)?;
        self.out.flush()
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
