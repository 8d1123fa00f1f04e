//! Random-walk generation of target structures.
//!
//! Targets grow from the origin by repeatedly picking a voxel already in
//! the structure and one of its six face neighbours, so every generated
//! structure is connected and has exactly the requested voxel count.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::voxel::{Structure, Voxel};

/// The six face-neighbour offsets of a voxel.
const FACE_OFFSETS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Generates a connected structure of `size` voxels (at least one).
pub fn generate_structure<R: Rng>(size: usize, rng: &mut R) -> Structure {
    let size = size.max(1);

    let origin = Voxel::new(0, 0, 0);
    let mut structure = Structure::default();
    structure.insert(origin);
    // indexable copy of the set for uniform random growth points
    let mut placed = vec![origin];

    while structure.len() < size {
        let base = placed[rng.gen_range(0..placed.len())];
        let (dx, dy, dz) = FACE_OFFSETS[rng.gen_range(0..FACE_OFFSETS.len())];
        let candidate = base.translated(dx, dy, dz);
        if structure.insert(candidate) {
            placed.push(candidate);
        }
    }

    structure
}

/// Generates a structure from a fixed seed, for reproducible targets.
pub fn generate_structure_seeded(size: usize, seed: u64) -> Structure {
    generate_structure(size, &mut StdRng::seed_from_u64(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Breadth-first walk over face adjacencies.
    fn is_connected(structure: &Structure) -> bool {
        let Some(&start) = structure.iter().next() else {
            return true;
        };
        let mut seen = Structure::default();
        seen.insert(start);
        let mut queue = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            for (dx, dy, dz) in FACE_OFFSETS {
                let neighbour = v.translated(dx, dy, dz);
                if structure.contains(&neighbour) && seen.insert(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }
        seen.len() == structure.len()
    }

    #[test]
    fn generates_exactly_the_requested_size() {
        for size in 1..30 {
            let s = generate_structure_seeded(size, 7);
            assert_eq!(s.len(), size);
        }
    }

    #[test]
    fn zero_size_is_clamped_to_one() {
        assert_eq!(generate_structure_seeded(0, 7).len(), 1);
    }

    #[test]
    fn generated_structures_are_connected() {
        for seed in 0..20 {
            let s = generate_structure_seeded(12, seed);
            assert!(is_connected(&s), "seed {seed} produced a disconnected structure");
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_structure() {
        assert_eq!(
            generate_structure_seeded(15, 42),
            generate_structure_seeded(15, 42)
        );
    }

    #[test]
    fn different_seeds_eventually_differ() {
        let all_equal = (0..10).all(|seed| {
            generate_structure_seeded(10, seed) == generate_structure_seeded(10, seed + 1)
        });
        assert!(!all_equal);
    }
}
