//! Compute module - Shapes, symmetry reduction and level-wise enumeration.

mod enumerator;
mod frontier;
mod known;
mod shape;
mod symmetry;

#[cfg(test)]
mod testing;

pub use enumerator::*;
pub use frontier::*;
pub use known::*;
pub use shape::*;
pub use symmetry::*;
