//! Rotational congruence matching.
//!
//! Decides whether a built structure is the same shape as a target under any
//! of the cube's 24 proper rotations. The search canonicalizes the target
//! once, then tries every rotation of the built structure in table order
//! (identity first) and stops at the first exact match. When nothing
//! matches, the rotation with the largest overlap is reported instead so a
//! partial build still gets a meaningful diff.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::canonical::canonicalize;
use crate::rotation::{rotate_structure, NUM_ROTATIONS, ROTATIONS};
use crate::voxel::{Structure, Voxel};

/// Contract violations surfaced to the caller. All failures here are
/// deterministic; nothing is retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The matcher requires at least one voxel on each side. The game UI
    /// must not ask for a check before anything has been placed.
    #[error("cannot match an empty structure")]
    EmptyStructure,

    /// A rotation index not produced by a prior match.
    #[error("rotation index {index} is out of range 0..{NUM_ROTATIONS}")]
    RotationIndexOutOfRange { index: usize },
}

/// Outcome of a congruence check.
///
/// `rotation_index` identifies the matching rotation when `matched`, and
/// otherwise the best-effort rotation (largest overlap, lowest index on
/// ties) to use for diffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: bool,
    pub rotation_index: usize,
    pub correct_count: usize,
    pub extra_count: usize,
    pub missing_count: usize,
}

/// Checks whether `built` matches `target` under some cube rotation.
///
/// Overlap counts are computed on canonically aligned sets (minimum corners
/// translated together), so they agree exactly with the sets
/// [`compute_diff`](crate::diff::compute_diff) returns for the same
/// rotation index.
pub fn check_match(built: &Structure, target: &Structure) -> Result<MatchResult, MatchError> {
    if built.is_empty() || target.is_empty() {
        return Err(MatchError::EmptyStructure);
    }

    let target_canon = canonicalize(target);
    let target_cells: FxHashSet<Voxel> = target_canon.voxels().iter().copied().collect();

    let mut best_index = 0;
    let mut best_correct = 0;

    for (index, rotation) in ROTATIONS.iter().enumerate() {
        let rotated_canon = canonicalize(&rotate_structure(built, rotation));

        if rotated_canon == target_canon {
            return Ok(MatchResult {
                matched: true,
                rotation_index: index,
                correct_count: target.len(),
                extra_count: 0,
                missing_count: 0,
            });
        }

        let correct = rotated_canon
            .voxels()
            .iter()
            .filter(|v| target_cells.contains(v))
            .count();
        if correct > best_correct {
            best_correct = correct;
            best_index = index;
        }
    }

    Ok(MatchResult {
        matched: false,
        rotation_index: best_index,
        correct_count: best_correct,
        extra_count: built.len() - best_correct,
        missing_count: target.len() - best_correct,
    })
}
