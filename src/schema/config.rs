//! Configuration types for polyomino enumeration runs.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Largest size accepted by [`EnumerationConfig::validate`].
///
/// The engine itself has no upper bound; past this point memory use
/// makes interactive runs impractical.
pub const MAX_SIZE: usize = 20;

fn default_size() -> usize {
    5
}

fn default_retain_levels() -> bool {
    true
}

/// Top-level enumeration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumerationConfig {
    /// Number of cells in the polyominoes to enumerate.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Which symmetries are folded together.
    #[serde(default)]
    pub mode: EquivalenceMode,
    /// Keep every intermediate level in memory. When false, level k is
    /// dropped as soon as level k+1 is sealed.
    #[serde(default = "default_retain_levels")]
    pub retain_levels: bool,
    /// Console progress settings.
    #[serde(default)]
    pub progress: ProgressConfig,
    /// Result reporting settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            mode: EquivalenceMode::default(),
            retain_levels: default_retain_levels(),
            progress: ProgressConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Equivalence relation used to decide when two shapes are the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EquivalenceMode {
    /// No symmetry reduction: every orientation is distinct.
    #[serde(rename = "fixed")]
    Fixed,
    /// Shapes related by a rotation are the same.
    #[serde(rename = "one-sided")]
    OneSided,
    /// Shapes related by a rotation or a reflection are the same.
    #[default]
    #[serde(rename = "free")]
    Free,
}

impl EquivalenceMode {
    /// All modes, from finest to coarsest.
    pub const ALL: [EquivalenceMode; 3] = [Self::Fixed, Self::OneSided, Self::Free];

    /// Name used on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::OneSided => "one-sided",
            Self::Free => "free",
        }
    }
}

impl fmt::Display for EquivalenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EquivalenceMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" | "none" => Ok(Self::Fixed),
            "one-sided" | "onesided" | "rotation" => Ok(Self::OneSided),
            "free" | "rotation-reflection" => Ok(Self::Free),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

fn default_progress_enabled() -> bool {
    true
}
fn default_interval_ms() -> u64 {
    1000
}
fn default_report_every() -> u64 {
    100
}

/// Progress reporting parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Print progress lines to the console.
    #[serde(default = "default_progress_enabled")]
    pub enabled: bool,
    /// Minimum time between two console updates.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// The engine notifies its hook once every this many growths.
    #[serde(default = "default_report_every")]
    pub report_every: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: default_progress_enabled(),
            interval_ms: default_interval_ms(),
            report_every: default_report_every(),
        }
    }
}

/// Where results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Console,
    File,
    Both,
}

impl OutputTarget {
    /// True if a file should be written.
    pub fn writes_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

/// File export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Numbered ASCII drawings.
    #[default]
    Text,
    /// Serialized [`EnumerationResult`](super::EnumerationResult).
    Json,
}

fn default_max_displayed() -> usize {
    50
}
fn default_output_path() -> PathBuf {
    PathBuf::from("polyominoes.txt")
}

/// Result reporting parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub target: OutputTarget,
    /// Draw each shape on the console.
    #[serde(default)]
    pub show_shapes: bool,
    /// Above this many shapes, console drawings are skipped.
    #[serde(default = "default_max_displayed")]
    pub max_displayed: usize,
    /// Export file path.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub format: ExportFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            target: OutputTarget::default(),
            show_shapes: false,
            max_displayed: default_max_displayed(),
            path: default_output_path(),
            format: ExportFormat::default(),
        }
    }
}

impl EnumerationConfig {
    /// Shorthand for a config with the given size and mode and default
    /// reporting settings.
    pub fn new(size: usize, mode: EquivalenceMode) -> Self {
        Self {
            size,
            mode,
            ..Default::default()
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(ConfigError::SizeOutOfRange {
                size: self.size,
                max: MAX_SIZE,
            });
        }
        if self.progress.report_every == 0 {
            return Err(ConfigError::InvalidReportInterval);
        }
        if self.output.max_displayed == 0 {
            return Err(ConfigError::InvalidDisplayLimit);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Size must be between 1 and {max}, got {size}")]
    SizeOutOfRange { size: usize, max: usize },
    #[error("Unknown enumeration type '{0}' (expected free, one-sided or fixed)")]
    UnknownMode(String),
    #[error("Progress report interval must be non-zero")]
    InvalidReportInterval,
    #[error("Display limit must be non-zero")]
    InvalidDisplayLimit,
}
