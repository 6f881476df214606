//! 3D rotation and transformation utilities.
//!
//! A cube has 24 possible orientations in 3D space (the rotation group of a cube).
//! These are the 6 ways to choose which face points up, times 4 rotations around
//! the vertical axis.

use crate::pieces::Coord;

/// Number of proper rotations of the cube (orientation-preserving, no reflections).
pub const NUM_ROTATIONS: usize = 24;

/// All 24 rotation functions for a cube.
///
/// Organized as 6 face-up choices x 4 rotations around vertical:
/// - Rotations 0-3: +Z face up
/// - Rotations 4-7: +Y face up
/// - Rotations 8-11: -Z face up
/// - Rotations 12-15: -Y face up
/// - Rotations 16-19: +X face up
/// - Rotations 20-23: -X face up
///
/// Each entry is one of the 48 signed-axis-permutation matrices with
/// determinant +1; order is arbitrary but stable across a run, which is all
/// determinism downstream (placement enumeration, DLX row order) requires.
pub const ROTATIONS: [fn(Coord) -> Coord; NUM_ROTATIONS] = [
    // +Z face up (identity orientation), rotate around Z axis
    |(x, y, z)| (x, y, z),      // 0 degrees
    |(x, y, z)| (-y, x, z),     // 90 degrees
    |(x, y, z)| (-x, -y, z),    // 180 degrees
    |(x, y, z)| (y, -x, z),     // 270 degrees
    // +Y face up, rotate around Y axis
    |(x, y, z)| (x, -z, y),
    |(x, y, z)| (z, x, y),
    |(x, y, z)| (-x, z, y),
    |(x, y, z)| (-z, -x, y),
    // -Z face up, rotate around Z axis
    |(x, y, z)| (x, -y, -z),
    |(x, y, z)| (y, x, -z),
    |(x, y, z)| (-x, y, -z),
    |(x, y, z)| (-y, -x, -z),
    // -Y face up, rotate around Y axis
    |(x, y, z)| (x, z, -y),
    |(x, y, z)| (-z, x, -y),
    |(x, y, z)| (-x, -z, -y),
    |(x, y, z)| (z, -x, -y),
    // +X face up, rotate around X axis
    |(x, y, z)| (z, y, -x),
    |(x, y, z)| (-y, z, -x),
    |(x, y, z)| (-z, -y, -x),
    |(x, y, z)| (y, -z, -x),
    // -X face up, rotate around X axis
    |(x, y, z)| (-z, y, x),
    |(x, y, z)| (-y, -z, x),
    |(x, y, z)| (z, -y, x),
    |(x, y, z)| (y, z, x),
];

/// Returns the 24 proper rotations of the cube.
#[inline]
pub fn all_rotations() -> [fn(Coord) -> Coord; NUM_ROTATIONS] {
    ROTATIONS
}

/// Applies a rotation to every cell of a cell set, cell by cell.
///
/// Pure integer arithmetic; no floating point involved anywhere in the kit.
pub fn rotate(cells: &[Coord], r: fn(Coord) -> Coord) -> Vec<Coord> {
    cells.iter().map(|&c| r(c)).collect()
}

/// Translates and sorts a cell set into its canonical form: minima along each
/// axis are shifted to zero, then the cells are sorted lexicographically.
///
/// Two cell sets are shape-equivalent iff their canonical forms are equal.
/// The empty input canonicalizes to the empty vector.
pub fn canonicalize(cells: &[Coord]) -> Vec<Coord> {
    if cells.is_empty() {
        return Vec::new();
    }

    let min_x = cells.iter().map(|(x, _, _)| *x).min().unwrap();
    let min_y = cells.iter().map(|(_, y, _)| *y).min().unwrap();
    let min_z = cells.iter().map(|(_, _, z)| *z).min().unwrap();

    let mut out: Vec<Coord> = cells
        .iter()
        .map(|(x, y, z)| (x - min_x, y - min_y, z - min_z))
        .collect();
    out.sort_unstable();
    out
}

/// Generates all unique orientations of a piece.
///
/// Applies all 24 rotations to the piece, canonicalizes each result, then
/// removes duplicates. Symmetric pieces produce fewer than 24 distinct
/// orientations.
pub fn all_orientations(cells: &[Coord]) -> Vec<Vec<Coord>> {
    let mut orientations: Vec<Vec<Coord>> = ROTATIONS
        .iter()
        .map(|rotate_fn| canonicalize(&rotate(cells, *rotate_fn)))
        .collect();

    orientations.sort();
    orientations.dedup();
    orientations
}
