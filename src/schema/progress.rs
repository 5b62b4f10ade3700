//! Progress and result types reported by the enumeration engine.

use serde::{Deserialize, Serialize};

use super::EquivalenceMode;
use crate::compute::Shape;

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnumerationPhase {
    /// Nothing built yet.
    Seed,
    /// Level `size` is sealed; the next step builds `size + 1`.
    Growing { size: usize },
    /// The target level is sealed.
    Done,
}

/// Snapshot handed to the progress hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationProgress {
    /// Size of the level being built.
    pub size: usize,
    /// Distinct canonical shapes found so far at this level.
    pub unique: usize,
    /// Growths generated so far at this level, duplicates included.
    pub generated: u64,
    /// True on the final notification for this level.
    pub sealed: bool,
}

/// Summary of one sealed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    pub size: usize,
    /// Distinct canonical shapes of this size.
    pub unique: usize,
    /// Growths generated from the previous level to build this one.
    pub generated: u64,
}

/// Statistics for a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumerationStats {
    pub size: usize,
    pub mode: EquivalenceMode,
    /// Number of shapes in the final level.
    pub count: usize,
    /// Growths generated across all levels.
    pub total_generated: u64,
    /// One entry per level, from size 1 upwards.
    pub levels: Vec<LevelStats>,
    pub elapsed_seconds: f64,
    /// Final-level shapes per second of wall time.
    pub shapes_per_second: f64,
}

/// Final output of an enumeration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumerationResult {
    /// Canonical shapes of the requested size, ordered by canonical key.
    pub shapes: Vec<Shape>,
    pub stats: EnumerationStats,
}

impl EnumerationResult {
    /// Number of shapes found.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
