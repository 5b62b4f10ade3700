//! Level-wise polyomino enumeration.
//!
//! Level k holds every canonical shape of k cells. Level k+1 is built by
//! extending each shape of level k by one frontier cell, canonicalizing
//! the growth and inserting it into an ordered set. A level is only read
//! once it is sealed, so no growth is lost to partial deduplication.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::schema::{
    EnumerationConfig, EnumerationPhase, EnumerationProgress, EnumerationResult, EnumerationStats,
    EquivalenceMode, LevelStats,
};

use super::{Canonicalizer, Shape, extensions};

/// Deduplicated canonical shapes of one size, ordered by canonical key.
pub type LevelSet = BTreeSet<Shape>;

const DEFAULT_REPORT_EVERY: u64 = 100;

/// Size-by-size enumeration engine.
pub struct Enumerator {
    target: usize,
    canonicalizer: Canonicalizer,
    retain_levels: bool,
    report_every: u64,
    phase: EnumerationPhase,
    /// Index k - 1 holds level k, or None once discarded.
    levels: Vec<Option<LevelSet>>,
    stats: Vec<LevelStats>,
    elapsed: Duration,
}

impl Enumerator {
    /// Create an engine for shapes of `target` cells under `mode`.
    pub fn new(target: usize, mode: EquivalenceMode) -> Self {
        log::debug!("Enumerator created: size={}, mode={}", target, mode);

        Self {
            target,
            canonicalizer: Canonicalizer::new(mode),
            retain_levels: true,
            report_every: DEFAULT_REPORT_EVERY,
            phase: EnumerationPhase::Seed,
            levels: Vec::with_capacity(target),
            stats: Vec::with_capacity(target),
            elapsed: Duration::ZERO,
        }
    }

    /// Create an engine from a run configuration.
    pub fn from_config(config: &EnumerationConfig) -> Self {
        Self::new(config.size, config.mode)
            .with_retain_levels(config.retain_levels)
            .with_report_every(config.progress.report_every)
    }

    /// Keep (true) or drop (false) each level once the next one is sealed.
    pub fn with_retain_levels(mut self, retain: bool) -> Self {
        self.retain_levels = retain;
        self
    }

    /// Notify the progress hook once every `every` growths.
    pub fn with_report_every(mut self, every: u64) -> Self {
        self.report_every = every.max(1);
        self
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn mode(&self) -> EquivalenceMode {
        self.canonicalizer.mode()
    }

    pub fn phase(&self) -> EnumerationPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == EnumerationPhase::Done
    }

    /// Sealed level for `size`, if built and still retained.
    pub fn level(&self, size: usize) -> Option<&LevelSet> {
        size.checked_sub(1)
            .and_then(|i| self.levels.get(i))
            .and_then(Option::as_ref)
    }

    /// Statistics of every sealed level, smallest first.
    pub fn level_stats(&self) -> &[LevelStats] {
        &self.stats
    }

    /// Advance the state machine by one transition.
    ///
    /// `Seed` builds level 1, `Growing { size }` builds level `size + 1`,
    /// and `Done` is a no-op. Returns the new phase.
    pub fn step<F>(&mut self, hook: &mut F) -> EnumerationPhase
    where
        F: FnMut(&EnumerationProgress),
    {
        let start = Instant::now();

        match self.phase {
            EnumerationPhase::Seed => {
                let mut level = LevelSet::new();
                level.insert(Shape::monomino());
                self.seal(level, 0, hook);
                self.phase = self.phase_after(1);
            }
            EnumerationPhase::Growing { size } => {
                self.grow(size, hook);
                self.phase = self.phase_after(size + 1);
                if !self.retain_levels
                    && let Some(slot) = self.levels.get_mut(size - 1)
                {
                    log::debug!("Discarding level {}", size);
                    *slot = None;
                }
            }
            EnumerationPhase::Done => {}
        }

        self.elapsed += start.elapsed();
        self.phase
    }

    /// Build and seal level `size + 1` from level `size`.
    fn grow<F>(&mut self, size: usize, hook: &mut F)
    where
        F: FnMut(&EnumerationProgress),
    {
        let next_size = size + 1;
        let mut next = LevelSet::new();
        let mut generated: u64 = 0;

        if let Some(current) = self.level(size) {
            for shape in current {
                for growth in extensions(shape) {
                    generated += 1;
                    next.insert(self.canonicalizer.canonical(&growth));

                    if generated % self.report_every == 0 {
                        let progress = EnumerationProgress {
                            size: next_size,
                            unique: next.len(),
                            generated,
                            sealed: false,
                        };
                        log::trace!(
                            "size {}: {} unique / {} generated",
                            progress.size,
                            progress.unique,
                            progress.generated
                        );
                        hook(&progress);
                    }
                }
            }
        }

        self.seal(next, generated, hook);
    }

    fn seal<F>(&mut self, level: LevelSet, generated: u64, hook: &mut F)
    where
        F: FnMut(&EnumerationProgress),
    {
        let stats = LevelStats {
            size: self.levels.len() + 1,
            unique: level.len(),
            generated,
        };

        log::info!(
            "Level {} sealed: {} unique shapes from {} growths ({:.3}s elapsed)",
            stats.size,
            stats.unique,
            stats.generated,
            self.elapsed.as_secs_f64()
        );

        hook(&EnumerationProgress {
            size: stats.size,
            unique: stats.unique,
            generated: stats.generated,
            sealed: true,
        });

        self.levels.push(Some(level));
        self.stats.push(stats);
    }

    fn phase_after(&self, sealed: usize) -> EnumerationPhase {
        if sealed >= self.target {
            EnumerationPhase::Done
        } else {
            EnumerationPhase::Growing { size: sealed }
        }
    }

    /// Step until the target level is sealed.
    pub fn finish<F>(&mut self, mut hook: F)
    where
        F: FnMut(&EnumerationProgress),
    {
        while !self.is_done() {
            self.step(&mut hook);
        }
    }

    /// Consume the engine and package the target level with run statistics.
    ///
    /// The shape list is empty if the engine has not finished.
    pub fn into_result(mut self) -> EnumerationResult {
        let shapes: Vec<Shape> = if self.is_done() {
            self.target
                .checked_sub(1)
                .and_then(|i| self.levels.get_mut(i))
                .and_then(Option::take)
                .map(|level| level.into_iter().collect())
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        let elapsed_seconds = self.elapsed.as_secs_f64();
        let stats = EnumerationStats {
            size: self.target,
            mode: self.mode(),
            count: shapes.len(),
            total_generated: self.stats.iter().map(|s| s.generated).sum(),
            levels: self.stats,
            elapsed_seconds,
            shapes_per_second: if elapsed_seconds > 0.0 {
                shapes.len() as f64 / elapsed_seconds
            } else {
                0.0
            },
        };

        EnumerationResult { shapes, stats }
    }

    /// Run to completion with a progress hook.
    pub fn run_with_callback<F>(mut self, hook: F) -> EnumerationResult
    where
        F: FnMut(&EnumerationProgress),
    {
        self.finish(hook);
        self.into_result()
    }

    /// Run to completion (blocking).
    pub fn run(self) -> EnumerationResult {
        self.run_with_callback(|_| {})
    }
}

/// All canonical shapes of `size` cells under `mode`.
pub fn enumerate(size: usize, mode: EquivalenceMode) -> Vec<Shape> {
    Enumerator::new(size, mode).run().shapes
}
