//! Voxel Structure Matching Library
//!
//! Core logic for a spatial-reasoning training game: the learner builds a
//! structure out of unit cubes and the game checks whether it is the same
//! shape as a generated target under any of the cube's 24 proper rotations,
//! then reports a cell-level diff (correct, extra, missing) for feedback
//! and scoring.

pub mod canonical;
pub mod diff;
pub mod display;
pub mod generator;
pub mod matcher;
pub mod rotation;
pub mod session;
pub mod voxel;

pub use diff::{compute_diff, DiffSets};
pub use matcher::{check_match, MatchError, MatchResult};
pub use voxel::{Structure, Voxel};
