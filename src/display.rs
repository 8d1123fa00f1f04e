//! Text rendering of structures and diffs.
//!
//! Displays z-slices side by side, rows from the top (max y) down to 0.
//! Coordinates are shown relative to the bounding box, so a structure far
//! from the origin renders the same as its translated copy.

use crate::diff::DiffSets;
use crate::voxel::{Structure, Voxel};

/// Formats a structure as z-slices, occupied cells marked `#`.
pub fn format_structure(structure: &Structure) -> String {
    render(&[('#', structure)])
}

/// Formats a diff as z-slices: correct `#`, extra `+`, missing `-`,
/// empty `.`.
pub fn format_diff(diff: &DiffSets) -> String {
    render(&[('#', &diff.correct), ('+', &diff.extra), ('-', &diff.missing)])
}

/// Renders layered voxel sets over their common bounding box. Earlier
/// layers win where sets overlap (diff layers never do).
fn render(layers: &[(char, &Structure)]) -> String {
    let voxels = layers.iter().flat_map(|(_, set)| set.iter());
    let Some(bounds) = Bounds::around(voxels) else {
        return "(empty)\n".to_string();
    };

    let width = (bounds.max.x - bounds.min.x + 1) as usize;
    let mut output = String::new();

    // header: z=0, z=1, ... in slice-relative coordinates
    for z in bounds.min.z..=bounds.max.z {
        if z > bounds.min.z {
            output.push_str("  ");
        }
        let label = format!("z={}", z - bounds.min.z);
        if z < bounds.max.z {
            output.push_str(&format!("{label:<width$}"));
        } else {
            output.push_str(&label);
        }
    }
    output.push('\n');

    // rows from top (max y) to bottom (min y)
    for y in (bounds.min.y..=bounds.max.y).rev() {
        for z in bounds.min.z..=bounds.max.z {
            if z > bounds.min.z {
                output.push_str("  ");
            }
            for x in bounds.min.x..=bounds.max.x {
                let v = Voxel::new(x, y, z);
                let cell = layers
                    .iter()
                    .find(|(_, set)| set.contains(&v))
                    .map_or('.', |&(mark, _)| mark);
                output.push(cell);
            }
        }
        output.push('\n');
    }

    output
}

struct Bounds {
    min: Voxel,
    max: Voxel,
}

impl Bounds {
    fn around<'a>(voxels: impl Iterator<Item = &'a Voxel>) -> Option<Self> {
        let mut bounds: Option<Bounds> = None;
        for &v in voxels {
            let b = bounds.get_or_insert(Bounds { min: v, max: v });
            b.min.x = b.min.x.min(v.x);
            b.min.y = b.min.y.min(v.y);
            b.min.z = b.min.z.min(v.z);
            b.max.x = b.max.x.max(v.x);
            b.max.y = b.max.y.max(v.y);
            b.max.z = b.max.z.max(v.z);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_diff;
    use crate::voxel::structure_from;

    #[test]
    fn single_slice_structure() {
        let s = structure_from(&[(0, 0, 0), (1, 0, 0), (0, 1, 0)]);
        insta::assert_snapshot!(format_structure(&s), @r"
        z=0
        #.
        ##
        ");
    }

    #[test]
    fn multi_slice_structure() {
        let s = structure_from(&[(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1)]);
        insta::assert_snapshot!(format_structure(&s), @r"
        z=0  z=1
        #.  ..
        ##  #.
        ");
    }

    #[test]
    fn translation_does_not_change_rendering() {
        let s = structure_from(&[(0, 0, 0), (1, 0, 0)]);
        let translated = structure_from(&[(7, -3, 2), (8, -3, 2)]);
        assert_eq!(format_structure(&s), format_structure(&translated));
    }

    #[test]
    fn diff_marks_correct_extra_and_missing() {
        let target = structure_from(&[(0, 0, 0), (1, 0, 0), (2, 0, 0)]);
        let built = structure_from(&[(0, 0, 0), (1, 0, 0), (1, 1, 0)]);
        let diff = compute_diff(&built, &target, 0).unwrap();
        insta::assert_snapshot!(format_diff(&diff), @r"
        z=0
        .+.
        ##-
        ");
    }

    #[test]
    fn empty_renders_as_placeholder() {
        assert_eq!(format_structure(&Structure::default()), "(empty)\n");
    }
}
