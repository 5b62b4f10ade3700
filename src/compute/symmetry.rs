//! Symmetry transforms and canonical forms.
//!
//! Each [`EquivalenceMode`] names a subgroup of the dihedral group of the
//! square. The canonical form of a shape is the smallest member of its
//! orbit under that subgroup, using the lexicographic [`Shape`] ordering.

use super::{Cell, Shape};
use crate::schema::EquivalenceMode;

/// An element of the symmetry group of the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Identity,
    /// Clockwise quarter turn, (x, y) -> (y, -x).
    Rotate90,
    Rotate180,
    Rotate270,
    /// Horizontal mirror, (x, y) -> (-x, y).
    Reflect,
    /// Mirror, then quarter turn.
    ReflectRotate90,
    ReflectRotate180,
    ReflectRotate270,
}

const FIXED: [Transform; 1] = [Transform::Identity];

const ROTATIONS: [Transform; 4] = [
    Transform::Identity,
    Transform::Rotate90,
    Transform::Rotate180,
    Transform::Rotate270,
];

const DIHEDRAL: [Transform; 8] = [
    Transform::Identity,
    Transform::Rotate90,
    Transform::Rotate180,
    Transform::Rotate270,
    Transform::Reflect,
    Transform::ReflectRotate90,
    Transform::ReflectRotate180,
    Transform::ReflectRotate270,
];

impl Transform {
    /// Image of a single cell (not normalized).
    #[inline]
    pub fn apply_cell(self, c: Cell) -> Cell {
        let Cell { x, y } = c;
        match self {
            Self::Identity => Cell::new(x, y),
            Self::Rotate90 => Cell::new(y, -x),
            Self::Rotate180 => Cell::new(-x, -y),
            Self::Rotate270 => Cell::new(-y, x),
            Self::Reflect => Cell::new(-x, y),
            Self::ReflectRotate90 => Cell::new(y, x),
            Self::ReflectRotate180 => Cell::new(x, -y),
            Self::ReflectRotate270 => Cell::new(-y, -x),
        }
    }

    /// Image of a shape, re-normalized.
    pub fn apply(self, shape: &Shape) -> Shape {
        match self {
            Self::Identity => shape.clone(),
            _ => shape.map_cells(|c| self.apply_cell(c)),
        }
    }
}

impl EquivalenceMode {
    /// Transforms folded together by this mode. Always starts with
    /// [`Transform::Identity`].
    pub fn transforms(self) -> &'static [Transform] {
        match self {
            Self::Fixed => &FIXED,
            Self::OneSided => &ROTATIONS,
            Self::Free => &DIHEDRAL,
        }
    }
}

/// Maps shapes to the canonical representative of their equivalence class.
#[derive(Debug, Clone, Copy)]
pub struct Canonicalizer {
    mode: EquivalenceMode,
}

impl Canonicalizer {
    pub fn new(mode: EquivalenceMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> EquivalenceMode {
        self.mode
    }

    /// All images of `shape` under the mode's transforms. May contain
    /// repeats when the shape is symmetric.
    pub fn orbit<'a>(&self, shape: &'a Shape) -> impl Iterator<Item = Shape> + 'a {
        self.mode.transforms().iter().map(move |t| t.apply(shape))
    }

    /// Smallest member of the orbit.
    pub fn canonical(&self, shape: &Shape) -> Shape {
        if self.mode == EquivalenceMode::Fixed {
            return shape.clone();
        }

        let mut best = shape.clone();
        for t in &self.mode.transforms()[1..] {
            let image = t.apply(shape);
            if image < best {
                best = image;
            }
        }
        best
    }

    /// Canonical form of `shape` and the transform that produced it.
    pub fn canonical_with_transform(&self, shape: &Shape) -> (Shape, Transform) {
        self.mode
            .transforms()
            .iter()
            .map(|&t| (t.apply(shape), t))
            .min_by(|a, b| a.0.cmp(&b.0))
            .unwrap_or_else(|| (shape.clone(), Transform::Identity))
    }

    /// True if `shape` is already its own canonical form.
    pub fn is_canonical(&self, shape: &Shape) -> bool {
        self.orbit(shape).all(|image| *shape <= image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::testing::arb_shape;
    use proptest::prelude::*;

    fn shape(cells: &[(i32, i32)]) -> Shape {
        Shape::new(cells.iter().map(|&c| Cell::from(c)))
    }

    #[test]
    fn test_transform_list_sizes() {
        assert_eq!(EquivalenceMode::Fixed.transforms().len(), 1);
        assert_eq!(EquivalenceMode::OneSided.transforms().len(), 4);
        assert_eq!(EquivalenceMode::Free.transforms().len(), 8);
        for mode in EquivalenceMode::ALL {
            assert_eq!(mode.transforms()[0], Transform::Identity);
        }
    }

    #[test]
    fn test_transforms_match_shape_operations() {
        let l = shape(&[(0, 0), (0, 1), (0, 2), (1, 2)]);
        assert_eq!(Transform::Rotate90.apply(&l), l.rotate90());
        assert_eq!(Transform::Rotate180.apply(&l), l.rotate90().rotate90());
        assert_eq!(
            Transform::Rotate270.apply(&l),
            l.rotate90().rotate90().rotate90()
        );
        assert_eq!(Transform::Reflect.apply(&l), l.reflect_horizontal());
        assert_eq!(
            Transform::ReflectRotate90.apply(&l),
            l.reflect_horizontal().rotate90()
        );
        assert_eq!(
            Transform::ReflectRotate180.apply(&l),
            l.reflect_horizontal().rotate90().rotate90()
        );
        assert_eq!(
            Transform::ReflectRotate270.apply(&l),
            l.reflect_horizontal().rotate90().rotate90().rotate90()
        );
    }

    #[test]
    fn test_fixed_keeps_orientation() {
        let canon = Canonicalizer::new(EquivalenceMode::Fixed);
        let horizontal = shape(&[(0, 0), (1, 0)]);
        let vertical = shape(&[(0, 0), (0, 1)]);
        assert_eq!(canon.canonical(&horizontal), horizontal);
        assert_ne!(canon.canonical(&horizontal), canon.canonical(&vertical));
    }

    #[test]
    fn test_domino_orientations_fold_under_rotation() {
        let canon = Canonicalizer::new(EquivalenceMode::OneSided);
        let horizontal = shape(&[(0, 0), (1, 0)]);
        let vertical = shape(&[(0, 0), (0, 1)]);
        assert_eq!(canon.canonical(&horizontal), vertical);
        assert_eq!(canon.canonical(&vertical), vertical);
    }

    #[test]
    fn test_mirror_pair_distinct_only_without_reflection() {
        let l = shape(&[(0, 0), (0, 1), (0, 2), (1, 2)]);
        let j = l.reflect_horizontal();

        let one_sided = Canonicalizer::new(EquivalenceMode::OneSided);
        assert_ne!(one_sided.canonical(&l), one_sided.canonical(&j));

        let free = Canonicalizer::new(EquivalenceMode::Free);
        assert_eq!(free.canonical(&l), free.canonical(&j));
    }

    #[test]
    fn test_canonical_with_transform() {
        let canon = Canonicalizer::new(EquivalenceMode::Free);
        let s = shape(&[(0, 0), (1, 0), (2, 0), (2, 1)]);
        let (c, t) = canon.canonical_with_transform(&s);
        assert_eq!(c, canon.canonical(&s));
        assert_eq!(t.apply(&s), c);
    }

    #[test]
    fn test_symmetric_shape_orbit_collapses() {
        // The square tetromino is fixed by every transform.
        let square = shape(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let canon = Canonicalizer::new(EquivalenceMode::Free);
        assert!(canon.orbit(&square).all(|s| s == square));
        assert!(canon.is_canonical(&square));
    }

    proptest! {
        #[test]
        fn prop_canonical_invariant_under_group(s in arb_shape(8)) {
            for mode in EquivalenceMode::ALL {
                let canon = Canonicalizer::new(mode);
                let c = canon.canonical(&s);
                for t in mode.transforms() {
                    prop_assert_eq!(&canon.canonical(&t.apply(&s)), &c);
                }
            }
        }

        #[test]
        fn prop_canonical_idempotent(s in arb_shape(8)) {
            for mode in EquivalenceMode::ALL {
                let canon = Canonicalizer::new(mode);
                let c = canon.canonical(&s);
                prop_assert_eq!(&canon.canonical(&c), &c);
                prop_assert!(canon.is_canonical(&c));
            }
        }

        #[test]
        fn prop_canonical_is_orbit_minimum(s in arb_shape(8)) {
            let canon = Canonicalizer::new(EquivalenceMode::Free);
            let c = canon.canonical(&s);
            prop_assert!(canon.orbit(&s).all(|image| c <= image));
            prop_assert_eq!(c.size(), s.size());
        }
    }
}
