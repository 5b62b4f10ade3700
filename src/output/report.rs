//! Result reports for the console and for export files.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::compute::Validation;
use crate::schema::{EnumerationResult, EquivalenceMode, ExportFormat, OutputConfig};

/// Export errors.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Cannot write output file: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the console summary, with drawings when requested and the result
/// is small enough.
pub fn write_summary<W: Write>(
    w: &mut W,
    result: &EnumerationResult,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "=== Results ===")?;
    writeln!(w, "Enumeration type: {}", result.stats.mode)?;
    writeln!(w, "Polyomino size: {}", result.stats.size)?;
    writeln!(w, "Total unique shapes: {}", result.len())?;
    writeln!(w)?;

    if result.len() > config.max_displayed {
        writeln!(
            w,
            "Too many shapes to display. Use file output for complete list."
        )?;
    } else if config.show_shapes {
        writeln!(w, "Shape visualizations:")?;
        write_shapes(w, result)?;
    }
    Ok(())
}

/// Write the plain-text export: a header followed by every shape.
pub fn write_text<W: Write>(w: &mut W, result: &EnumerationResult) -> io::Result<()> {
    writeln!(w, "Polyomino Enumeration Results")?;
    writeln!(w, "============================")?;
    writeln!(w, "Size: {}", result.stats.size)?;
    writeln!(w, "Type: {}", result.stats.mode)?;
    writeln!(w, "Count: {}", result.len())?;
    writeln!(w)?;
    write_shapes(w, result)
}

fn write_shapes<W: Write>(w: &mut W, result: &EnumerationResult) -> io::Result<()> {
    for (i, shape) in result.shapes.iter().enumerate() {
        writeln!(w, "Shape {}:", i + 1)?;
        writeln!(w, "{}", shape)?;
    }
    Ok(())
}

/// Write `result` to `path` in the given format.
pub fn export(
    result: &EnumerationResult,
    path: &Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let mut w = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Text => write_text(&mut w, result)?,
        ExportFormat::Json => serde_json::to_writer_pretty(&mut w, result)?,
    }
    w.flush()?;

    log::info!(
        "Exported {} shapes to {} ({:?})",
        result.len(),
        path.display(),
        format
    );
    Ok(())
}

/// One-line verdict of a known-value check.
pub fn validation_message(validation: Validation, size: usize, mode: EquivalenceMode) -> String {
    match validation {
        Validation::Passed => "✓ Validation passed: matches known value".to_string(),
        Validation::Failed { expected, actual } => {
            format!("✗ Validation failed: expected {}, got {}", expected, actual)
        }
        Validation::Unknown => format!(
            "ℹ No validation data available for N={}, type={}",
            size, mode
        ),
    }
}
