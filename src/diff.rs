//! Cell-level diff between a rotated build and its target.
//!
//! The diff is computed in the target's coordinate frame: the built
//! structure is rotated by the chosen rotation, then translated so its
//! minimum corner lands on the target's minimum corner. That translation is
//! exactly the one canonicalization applies, so an exact match diffs to
//! all-correct and a near miss lines up the shared footprint.

use crate::matcher::MatchError;
use crate::rotation::{rotate_structure, NUM_ROTATIONS, ROTATIONS};
use crate::voxel::{min_corner, Structure};

/// The three disjoint cell sets driving visual feedback.
///
/// `correct` and `extra` partition the aligned build; `correct` and
/// `missing` partition the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSets {
    /// Cells present in both the aligned build and the target.
    pub correct: Structure,
    /// Cells present only in the aligned build.
    pub extra: Structure,
    /// Cells present only in the target.
    pub missing: Structure,
}

impl DiffSets {
    /// Extraneous plus missing cells, the mistake count fed to scoring.
    pub fn mistakes(&self) -> usize {
        self.extra.len() + self.missing.len()
    }
}

/// Diffs `built` against `target` under the rotation selected by a prior
/// [`check_match`](crate::matcher::check_match) on the same pair.
pub fn compute_diff(
    built: &Structure,
    target: &Structure,
    rotation_index: usize,
) -> Result<DiffSets, MatchError> {
    if built.is_empty() || target.is_empty() {
        return Err(MatchError::EmptyStructure);
    }
    if rotation_index >= NUM_ROTATIONS {
        return Err(MatchError::RotationIndexOutOfRange {
            index: rotation_index,
        });
    }

    let rotated = rotate_structure(built, &ROTATIONS[rotation_index]);

    // align minimum corners, the same translation canonicalization applies
    let rotated_min = min_corner(&rotated);
    let target_min = min_corner(target);
    let (dx, dy, dz) = (
        target_min.x - rotated_min.x,
        target_min.y - rotated_min.y,
        target_min.z - rotated_min.z,
    );
    let aligned: Structure = rotated.iter().map(|v| v.translated(dx, dy, dz)).collect();

    Ok(DiffSets {
        correct: aligned.intersection(target).copied().collect(),
        extra: aligned.difference(target).copied().collect(),
        missing: target.difference(&aligned).copied().collect(),
    })
}
