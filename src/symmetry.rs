//! Optional post-hoc dedup of solutions by the target's rotation/reflection
//! symmetries.
//!
//! The exact-cover core deliberately does **not** quotient its solution list
//! by the target's symmetry group (spec §9's "Symmetry-class dedup" note):
//! a caller wanting distinct-up-to-cube-rotation solutions must post-process.
//! This module is that post-processing, generalized from the teacher's
//! const-generic `grid::canonical_key` to a runtime cube dimension, since
//! pieces and targets are no longer known at compile time.
//!
//! Only meaningful for a target that is itself a `dim` x `dim` x `dim` cube:
//! rotating the whole board only makes sense when the board is a cube.

use crate::pieces::Coord;
use crate::solver::Solution;

const NUM_ROTATIONS: usize = 24;

/// Converts a solution into a flat grid of piece numbers (1-based; 0 = empty)
/// over a `dim`^3 cube, x-major (`idx = x*dim*dim + y*dim + z`).
fn solution_to_grid(solution: &Solution, dim: i32) -> Vec<u8> {
    let size = (dim * dim * dim) as usize;
    let mut grid = vec![0u8; size];
    for (&piece_index, cells) in solution {
        let piece_number = (piece_index + 1) as u8;
        for &(x, y, z) in cells {
            let idx = coord_to_idx(x, y, z, dim);
            grid[idx] = piece_number;
        }
    }
    grid
}

#[inline]
fn coord_to_idx(x: i32, y: i32, z: i32, dim: i32) -> usize {
    (x as usize) * (dim * dim) as usize + (y as usize) * dim as usize + z as usize
}

#[inline]
fn idx_to_coord(idx: usize, dim: i32) -> Coord {
    let dim = dim as usize;
    (
        (idx / (dim * dim)) as i32,
        ((idx / dim) % dim) as i32,
        (idx % dim) as i32,
    )
}

/// Builds the rotation lookup table for a cube of side `dim`: for each of the
/// 24 rotations and each cell, the index that cell maps to after rotating the
/// cube about its center. Uses doubled coordinates to avoid half-integer
/// centers for even `dim`.
fn build_rotation_table(dim: i32) -> Vec<[usize; NUM_ROTATIONS]> {
    let size = (dim * dim * dim) as usize;
    let mut table = vec![[0usize; NUM_ROTATIONS]; size];
    let dim_m1 = dim - 1;

    for src in 0..size {
        let (x, y, z) = idx_to_coord(src, dim);
        let cx = 2 * x - dim_m1;
        let cy = 2 * y - dim_m1;
        let cz = 2 * z - dim_m1;

        for (rot, entry) in table_row(cx, cy, cz).into_iter().enumerate() {
            let (rx, ry, rz) = entry;
            let dx = ((rx + dim_m1) / 2) as usize;
            let dy = ((ry + dim_m1) / 2) as usize;
            let dz = ((rz + dim_m1) / 2) as usize;
            let dest = dx * (dim as usize) * (dim as usize) + dy * (dim as usize) + dz;
            table[src][rot] = dest;
        }
    }

    table
}

/// The same 24 rotation formulas as `geometry::ROTATIONS`, applied to the
/// doubled-centered coordinates used for symmetric grid rotation.
fn table_row(cx: i32, cy: i32, cz: i32) -> [(i32, i32, i32); NUM_ROTATIONS] {
    [
        (cx, cy, cz),
        (-cy, cx, cz),
        (-cx, -cy, cz),
        (cy, -cx, cz),
        (cx, -cz, cy),
        (cz, cx, cy),
        (-cx, cz, cy),
        (-cz, -cx, cy),
        (cx, -cy, -cz),
        (cy, cx, -cz),
        (-cx, cy, -cz),
        (-cy, -cx, -cz),
        (cx, cz, -cy),
        (-cz, cx, -cy),
        (-cx, -cz, -cy),
        (cz, -cx, -cy),
        (cz, cy, -cx),
        (-cy, cz, -cx),
        (-cz, -cy, -cx),
        (cy, -cz, -cx),
        (-cz, cy, cx),
        (-cy, -cz, cx),
        (cz, -cy, cx),
        (cy, cz, cx),
    ]
}

fn reflect_key_x(original: &[u8], dim: i32) -> Vec<u8> {
    let dim_u = dim as usize;
    let mut reflected = vec![0u8; original.len()];
    for x in 0..dim_u {
        for y in 0..dim_u {
            for z in 0..dim_u {
                let source = x * dim_u * dim_u + y * dim_u + z;
                let dest = (dim_u - 1 - x) * dim_u * dim_u + y * dim_u + z;
                reflected[dest] = original[source];
            }
        }
    }
    reflected
}

fn swap_chiral_in_key(original: &[u8], chiral_pair: (usize, usize)) -> Vec<u8> {
    let first = (chiral_pair.0 + 1) as u8;
    let second = (chiral_pair.1 + 1) as u8;
    original
        .iter()
        .map(|&cell| {
            if cell == first {
                second
            } else if cell == second {
                first
            } else {
                cell
            }
        })
        .collect()
}

fn find_smallest_rotation(original: &[u8], table: &[[usize; NUM_ROTATIONS]]) -> Vec<u8> {
    let mut smallest = original.to_vec();
    for rot in 1..NUM_ROTATIONS {
        let mut rotated = vec![0u8; original.len()];
        for (src, dests) in table.iter().enumerate() {
            rotated[dests[rot]] = original[src];
        }
        if rotated < smallest {
            smallest = rotated;
        }
    }
    smallest
}

fn find_smallest_rotation_with_reflection(
    original: &[u8],
    dim: i32,
    table: &[[usize; NUM_ROTATIONS]],
    chiral_pair: Option<(usize, usize)>,
) -> Vec<u8> {
    let mut smallest = find_smallest_rotation(original, table);

    let mut reflected = reflect_key_x(original, dim);
    if let Some(pair) = chiral_pair {
        reflected = swap_chiral_in_key(&reflected, pair);
    }
    let reflected_smallest = find_smallest_rotation(&reflected, table);
    if reflected_smallest < smallest {
        smallest = reflected_smallest;
    }

    smallest
}

/// Computes the canonical key of a solution under the cube's full symmetry
/// group (24 rotations x reflection), normalizing a chiral mirror pair of
/// piece indices if one is given.
pub fn canonical_key(solution: &Solution, dim: i32, chiral_pair: Option<(usize, usize)>) -> Vec<u8> {
    let table = build_rotation_table(dim);
    let grid = solution_to_grid(solution, dim);
    find_smallest_rotation_with_reflection(&grid, dim, &table, chiral_pair)
}

/// Filters `solutions` down to one representative per symmetry class, using
/// [`canonical_key`]. Only valid when every solution covers the same `dim` x
/// `dim` x `dim` cube target.
pub fn dedup_by_cube_symmetry(
    solutions: Vec<Solution>,
    dim: i32,
    chiral_pair: Option<(usize, usize)>,
) -> Vec<Solution> {
    let mut seen = rustc_hash::FxHashSet::default();
    let mut out = Vec::new();
    for solution in solutions {
        let key = canonical_key(&solution, dim, chiral_pair);
        if seen.insert(key) {
            out.push(solution);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_rotation_leaves_grid_unchanged() {
        let table = build_rotation_table(3);
        for src in 0..27 {
            assert_eq!(table[src][0], src, "identity rotation moved cell {src}");
        }
    }

    #[test]
    fn rotations_are_permutations() {
        let table = build_rotation_table(3);
        for rot in 0..NUM_ROTATIONS {
            let mut seen = [false; 27];
            for src in 0..27 {
                let dest = table[src][rot];
                assert!(dest < 27);
                assert!(!seen[dest], "rotation {rot} maps two cells to {dest}");
                seen[dest] = true;
            }
        }
    }

    #[test]
    fn coordinate_roundtrip() {
        for idx in 0..27 {
            let (x, y, z) = idx_to_coord(idx, 3);
            assert_eq!(coord_to_idx(x, y, z, 3), idx);
        }
    }
}
