//! Polyomino enumeration.
//!
//! This crate enumerates every distinct polyomino of N cells on the square
//! grid, under one of three equivalence relations: fixed (no symmetry
//! reduction), one-sided (rotations folded together) or free (rotations
//! and reflections folded together).
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `schema`: Configuration, progress and result types
//! - `compute`: Shapes, canonical forms, frontier growth and the enumerator
//! - `output`: ASCII rendering, reports, export and progress display
//!
//! # Example
//!
//! ```rust
//! use polyomino_enum::{
//!     compute::Enumerator,
//!     schema::EquivalenceMode,
//! };
//!
//! let result = Enumerator::new(5, EquivalenceMode::Free).run_with_callback(|progress| {
//!     if progress.sealed {
//!         println!("size {}: {} shapes", progress.size, progress.unique);
//!     }
//! });
//!
//! assert_eq!(result.shapes.len(), 12);
//! for shape in &result.shapes {
//!     println!("{shape}");
//! }
//! ```

pub mod compute;
pub mod output;
pub mod schema;

// Re-export commonly used types
pub use compute::{Canonicalizer, Cell, Enumerator, Shape, enumerate};
pub use schema::{EnumerationConfig, EnumerationResult, EquivalenceMode};
