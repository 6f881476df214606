//! Placement enumerator.
//!
//! For a piece at a fixed index against a target region, enumerates the set
//! of distinct legal placements: subsets of the target congruent (via some
//! rotation + translation) to the piece's shape.

use rustc_hash::FxHashSet;

use crate::pieces::{Coord, Piece};

/// A single legal placement of one piece: the piece's index and the exact
/// set of target cells it would cover, in canonical (sorted) order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub piece_index: usize,
    pub covered: Vec<Coord>,
}

/// Enumerates all distinct legal placements of `piece` (at `piece_index`)
/// against `target`.
///
/// For each unique orientation `O`, the first cell in its canonical order is
/// used as the translation reference (any fixed cell would do; this matches
/// the convention in spec `O[0]`). For each anchor cell in the target, the
/// orientation is translated so the reference cell lands on the anchor; if
/// every translated cell falls inside the target, it is a candidate
/// placement. Distinct (orientation, anchor) pairs can yield the same
/// covered-cell set, so results are deduplicated by the covered set itself,
/// keeping first-seen order so placement ids are stable across runs.
pub fn enumerate_placements(
    piece_index: usize,
    piece: &Piece,
    target: &[Coord],
) -> Vec<Placement> {
    let mut seen: FxHashSet<Vec<Coord>> = FxHashSet::default();
    let mut placements = Vec::new();

    for orientation in piece.orientations() {
        let reference = orientation[0];
        for &anchor in target {
            let offset = (
                anchor.0 - reference.0,
                anchor.1 - reference.1,
                anchor.2 - reference.2,
            );

            let mut covered: Vec<Coord> = orientation
                .iter()
                .map(|&(x, y, z)| (x + offset.0, y + offset.1, z + offset.2))
                .collect();

            if !covered.iter().all(|c| target.contains(c)) {
                continue;
            }

            covered.sort_unstable();

            if seen.insert(covered.clone()) {
                placements.push(Placement {
                    piece_index,
                    covered,
                });
            }
        }
    }

    placements
}
