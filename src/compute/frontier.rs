//! Frontier computation and one-cell growth.

use std::collections::BTreeSet;

use super::{Cell, Shape};

/// Unoccupied cells edge-adjacent to at least one cell of `shape`, in
/// (x, y) order.
pub fn frontier(shape: &Shape) -> BTreeSet<Cell> {
    shape
        .cells()
        .iter()
        .flat_map(|c| c.neighbors())
        .filter(|&n| !shape.contains(n))
        .collect()
}

/// Every shape obtained by adding one frontier cell to `shape`.
///
/// One extension per distinct frontier cell, in frontier order. The
/// results are normalized but not canonicalized.
pub fn extensions(shape: &Shape) -> Vec<Shape> {
    frontier(shape)
        .into_iter()
        .map(|cell| shape.with_cell(cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::testing::arb_shape;
    use proptest::prelude::*;

    #[test]
    fn test_monomino_frontier() {
        let f = frontier(&Shape::monomino());
        let expected: BTreeSet<Cell> = [(0, 1), (0, -1), (1, 0), (-1, 0)]
            .into_iter()
            .map(Cell::from)
            .collect();
        assert_eq!(f, expected);
    }

    #[test]
    fn test_domino_frontier_excludes_occupied() {
        let domino = Shape::new([Cell::new(0, 0), Cell::new(1, 0)]);
        let f = frontier(&domino);
        assert_eq!(f.len(), 6);
        assert!(!f.contains(&Cell::new(0, 0)));
        assert!(!f.contains(&Cell::new(1, 0)));
    }

    #[test]
    fn test_frontier_shared_neighbor_counted_once() {
        // (1, 1) touches both arms of the L.
        let l = Shape::new([Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]);
        let f = frontier(&l);
        assert!(f.contains(&Cell::new(1, 1)));
        assert_eq!(f.len(), 7);
    }

    #[test]
    fn test_monomino_extensions() {
        let ext = extensions(&Shape::monomino());
        assert_eq!(ext.len(), 4);
        // Only two distinct normalized dominoes.
        let distinct: BTreeSet<Shape> = ext.into_iter().collect();
        assert_eq!(distinct.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_extensions_grow_by_one_and_stay_connected(s in arb_shape(8)) {
            let ext = extensions(&s);
            prop_assert_eq!(ext.len(), frontier(&s).len());
            for e in &ext {
                prop_assert_eq!(e.size(), s.size() + 1);
                prop_assert!(e.is_connected());
            }
        }

        #[test]
        fn prop_frontier_cells_are_free_and_adjacent(s in arb_shape(8)) {
            for cell in frontier(&s) {
                prop_assert!(!s.contains(cell));
                prop_assert!(cell.neighbors().iter().any(|&n| s.contains(n)));
            }
        }
    }
}
