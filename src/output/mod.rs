//! Output module - Rendering, reports and progress display for enumeration results.
//!
//! Shapes are drawn over their bounding box, one text line per row:
//!
//! ```text
//! #
//! #
//! ##
//! ```
//!
//! Text exports carry a short header followed by every shape, numbered
//! from 1. JSON exports serialize the whole
//! [`EnumerationResult`](crate::schema::EnumerationResult).

mod render;
mod report;
mod tracker;

pub use render::{EMPTY, FILLED, render_with};
pub use report::{ExportError, export, validation_message, write_summary, write_text};
pub use tracker::ProgressTracker;
