//! Voxel coordinates and structure sets.
//!
//! A structure is a set of unit cube positions on the integer lattice.
//! Structures are unordered and duplicate-free; two structures are the same
//! shape when one maps onto the other under translation, or under one of the
//! cube's 24 proper rotations followed by translation.

use rustc_hash::FxHashSet;

/// A unit cube position on the integer lattice.
///
/// Ordering is lexicographic by (x, y, z), which is the sort key used by
/// canonical forms.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Voxel {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Voxel {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns this voxel translated by the given per-axis deltas.
    #[inline]
    pub const fn translated(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

/// An unordered, duplicate-free set of voxels.
pub type Structure = FxHashSet<Voxel>;

/// Builds a structure from coordinate triples.
pub fn structure_from(coords: &[(i32, i32, i32)]) -> Structure {
    coords
        .iter()
        .map(|&(x, y, z)| Voxel::new(x, y, z))
        .collect()
}

/// Returns the per-axis minima of a structure's bounding box.
///
/// Only meaningful for non-empty structures; callers validate emptiness
/// before asking for a corner.
pub(crate) fn min_corner(structure: &Structure) -> Voxel {
    let mut min = Voxel::new(i32::MAX, i32::MAX, i32::MAX);
    for v in structure {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        min.z = min.z.min(v.z);
    }
    min
}
