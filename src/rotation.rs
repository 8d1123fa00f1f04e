//! The 24 proper rotations of the cube.
//!
//! A cube has 24 possible orientations in 3D space (the rotation group of a
//! cube, isomorphic to S4). These are the 6 ways to choose which face points
//! up, times 4 rotations around the vertical axis. Each rotation is an
//! integer 3x3 matrix with determinant +1 and exactly one entry of +-1 per
//! row and column, so applying one keeps every voxel on the lattice.

use crate::voxel::{Structure, Voxel};

/// Number of distinct cube orientations.
pub const NUM_ROTATIONS: usize = 24;

/// An integer 3x3 rotation matrix acting on voxel coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RotationMatrix {
    rows: [[i32; 3]; 3],
}

impl RotationMatrix {
    pub const IDENTITY: Self = Self::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

    const fn new(rows: [[i32; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Applies this rotation to a voxel (matrix-vector product).
    #[inline]
    pub fn apply(&self, v: Voxel) -> Voxel {
        let [rx, ry, rz] = self.rows;
        Voxel::new(
            rx[0] * v.x + rx[1] * v.y + rx[2] * v.z,
            ry[0] * v.x + ry[1] * v.y + ry[2] * v.z,
            rz[0] * v.x + rz[1] * v.y + rz[2] * v.z,
        )
    }

    /// Matrix product `self * other`: applying the result is the same as
    /// applying `other` first and then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let mut rows = [[0i32; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * other.rows[k][j]).sum();
            }
        }
        Self { rows }
    }

    /// The transpose, which for an orthogonal matrix is also the inverse.
    pub fn transpose(&self) -> Self {
        let mut rows = [[0i32; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[j][i];
            }
        }
        Self { rows }
    }

    pub fn determinant(&self) -> i32 {
        let [a, b, c] = self.rows;
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }
}

/// All 24 rotation matrices for a cube.
///
/// Organized as 6 face-up choices x 4 rotations around vertical:
/// - Rotations 0-3: +Z face up
/// - Rotations 4-7: +Y face up
/// - Rotations 8-11: -Z face up
/// - Rotations 12-15: -Y face up
/// - Rotations 16-19: +X face up
/// - Rotations 20-23: -X face up
///
/// Index 0 is the identity, so a rotation index of 0 always means "no
/// rotation needed" and an already-aligned match is found first.
pub const ROTATIONS: [RotationMatrix; NUM_ROTATIONS] = [
    // +Z face up (identity orientation), rotate around Z axis
    RotationMatrix::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]]), // 0 degrees
    RotationMatrix::new([[0, -1, 0], [1, 0, 0], [0, 0, 1]]), // 90 degrees
    RotationMatrix::new([[-1, 0, 0], [0, -1, 0], [0, 0, 1]]), // 180 degrees
    RotationMatrix::new([[0, 1, 0], [-1, 0, 0], [0, 0, 1]]), // 270 degrees
    // +Y face up, rotate around Y axis
    RotationMatrix::new([[1, 0, 0], [0, 0, -1], [0, 1, 0]]),
    RotationMatrix::new([[0, 0, 1], [1, 0, 0], [0, 1, 0]]),
    RotationMatrix::new([[-1, 0, 0], [0, 0, 1], [0, 1, 0]]),
    RotationMatrix::new([[0, 0, -1], [-1, 0, 0], [0, 1, 0]]),
    // -Z face up, rotate around Z axis
    RotationMatrix::new([[1, 0, 0], [0, -1, 0], [0, 0, -1]]),
    RotationMatrix::new([[0, 1, 0], [1, 0, 0], [0, 0, -1]]),
    RotationMatrix::new([[-1, 0, 0], [0, 1, 0], [0, 0, -1]]),
    RotationMatrix::new([[0, -1, 0], [-1, 0, 0], [0, 0, -1]]),
    // -Y face up, rotate around Y axis
    RotationMatrix::new([[1, 0, 0], [0, 0, 1], [0, -1, 0]]),
    RotationMatrix::new([[0, 0, -1], [1, 0, 0], [0, -1, 0]]),
    RotationMatrix::new([[-1, 0, 0], [0, 0, -1], [0, -1, 0]]),
    RotationMatrix::new([[0, 0, 1], [-1, 0, 0], [0, -1, 0]]),
    // +X face up, rotate around X axis
    RotationMatrix::new([[0, 0, 1], [0, 1, 0], [-1, 0, 0]]),
    RotationMatrix::new([[0, -1, 0], [0, 0, 1], [-1, 0, 0]]),
    RotationMatrix::new([[0, 0, -1], [0, -1, 0], [-1, 0, 0]]),
    RotationMatrix::new([[0, 1, 0], [0, 0, -1], [-1, 0, 0]]),
    // -X face up, rotate around X axis
    RotationMatrix::new([[0, 0, -1], [0, 1, 0], [1, 0, 0]]),
    RotationMatrix::new([[0, -1, 0], [0, 0, -1], [1, 0, 0]]),
    RotationMatrix::new([[0, 0, 1], [0, -1, 0], [1, 0, 0]]),
    RotationMatrix::new([[0, 1, 0], [0, 0, 1], [1, 0, 0]]),
];

/// Applies a rotation to every voxel of a structure.
pub fn rotate_structure(structure: &Structure, rotation: &RotationMatrix) -> Structure {
    structure.iter().map(|&v| rotation.apply(v)).collect()
}
