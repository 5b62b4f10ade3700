//! Proptest strategies shared by the compute tests.

use proptest::prelude::*;
use proptest::sample::Index;

use super::{Shape, frontier};

/// Random connected shapes of 1 to `max_size` cells, grown one frontier
/// cell at a time from the monomino.
pub fn arb_shape(max_size: usize) -> impl Strategy<Value = Shape> {
    prop::collection::vec(any::<Index>(), 0..max_size).prop_map(|picks| {
        picks.into_iter().fold(Shape::monomino(), |shape, pick| {
            let candidates: Vec<_> = frontier(&shape).into_iter().collect();
            shape.with_cell(*pick.get(&candidates))
        })
    })
}
