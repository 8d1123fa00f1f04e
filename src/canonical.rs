//! Translation-normalized canonical forms.
//!
//! Two structures have equal canonical forms exactly when one is a pure
//! translation of the other, which reduces congruence-up-to-translation to
//! a sequence equality check.

use crate::voxel::{min_corner, Structure, Voxel};

/// A structure translated so its per-axis minima are zero, as a sequence
/// sorted lexicographically by (x, y, z).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CanonicalForm(Vec<Voxel>);

impl CanonicalForm {
    /// The normalized voxels in sorted order.
    pub fn voxels(&self) -> &[Voxel] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Canonicalizes a structure: translate so the minimum coordinate along each
/// axis is zero, then sort ascending by (x, y, z).
///
/// The result depends only on the structure's contents, never on set
/// iteration order, and is invariant under integer translation of the input.
pub fn canonicalize(structure: &Structure) -> CanonicalForm {
    if structure.is_empty() {
        return CanonicalForm(Vec::new());
    }

    let min = min_corner(structure);
    let mut voxels: Vec<Voxel> = structure
        .iter()
        .map(|&v| v.translated(-min.x, -min.y, -min.z))
        .collect();
    voxels.sort_unstable();
    CanonicalForm(voxels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::structure_from;
    use proptest::prelude::*;

    #[test]
    fn canonical_form_starts_at_origin_and_is_sorted() {
        let s = structure_from(&[(5, 7, 9), (4, 7, 10), (4, 8, 9)]);
        let canon = canonicalize(&s);
        assert_eq!(
            canon.voxels(),
            &[Voxel::new(0, 0, 1), Voxel::new(0, 1, 0), Voxel::new(1, 0, 0)]
        );
    }

    #[test]
    fn empty_structure_canonicalizes_to_empty() {
        assert!(canonicalize(&Structure::default()).is_empty());
    }

    proptest! {
        #[test]
        fn translation_invariant(
            coords in proptest::collection::vec((0i32..10, 0i32..10, 0i32..10), 1..30),
            dx in -50i32..50, dy in -50i32..50, dz in -50i32..50,
        ) {
            let s = structure_from(&coords);
            let translated: Structure = s.iter().map(|v| v.translated(dx, dy, dz)).collect();
            prop_assert_eq!(canonicalize(&s), canonicalize(&translated));
        }

        #[test]
        fn output_is_sorted_and_origin_anchored(
            coords in proptest::collection::vec((-10i32..10, -10i32..10, -10i32..10), 1..30),
        ) {
            let s = structure_from(&coords);
            let canon = canonicalize(&s);
            prop_assert_eq!(canon.len(), s.len());
            prop_assert!(canon.voxels().windows(2).all(|w| w[0] < w[1]));
            let min_x = canon.voxels().iter().map(|v| v.x).min().unwrap();
            let min_y = canon.voxels().iter().map(|v| v.y).min().unwrap();
            let min_z = canon.voxels().iter().map(|v| v.z).min().unwrap();
            prop_assert_eq!((min_x, min_y, min_z), (0, 0, 0));
        }
    }
}
