//! Wires the placement enumerator and the DLX matrix builder together into
//! the crate's public solve entry points.

use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::{debug, info};

use crate::dlx::{self, ColumnLabel, Matrix, SearchOptions};
use crate::error::PuzzleError;
use crate::pieces::{Coord, Piece};
use crate::placement::{enumerate_placements, Placement};

/// One solution: for each piece index, the cells it was placed on. The union
/// of all value sets equals the target; every piece index in `0..pieces.len()`
/// appears exactly once.
pub type Solution = BTreeMap<usize, Vec<Coord>>;

/// Options controlling a solve. `max_solutions == 0` means unbounded and is
/// only meaningful when `find_all` is true.
pub struct SolveOptions {
    pub find_all: bool,
    pub max_solutions: usize,
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            find_all: false,
            max_solutions: 0,
            cancel: None,
        }
    }
}

/// Diagnostic counts a caller may log alongside a solve's solutions.
#[derive(Debug, Default)]
pub struct SolveReport {
    pub per_piece_placement_count: Vec<usize>,
    pub total_placement_count: usize,
    pub truncated: bool,
}

/// Builds the DLX matrix for `pieces` against `target` and returns it
/// alongside the placement table (row id -> placement) used to reconstruct
/// solutions, and a diagnostic report.
///
/// Fails with `InternalError` only if a placement's covered cells resolve to
/// a column index the matrix doesn't have — a structural bug in the matrix
/// builder itself, never a consequence of bad caller input.
fn build_matrix(
    pieces: &[Piece],
    target: &[Coord],
) -> Result<(Matrix, Vec<Placement>, SolveReport), PuzzleError> {
    let mut sorted_target = target.to_vec();
    sorted_target.sort_unstable();
    sorted_target.dedup();

    let mut labels: Vec<ColumnLabel> = (0..pieces.len()).map(ColumnLabel::Piece).collect();
    labels.extend(sorted_target.iter().map(|&c| ColumnLabel::Cell(c)));
    let cell_column_of: BTreeMap<Coord, usize> = sorted_target
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, pieces.len() + i))
        .collect();

    let mut matrix = Matrix::new(labels);
    let mut all_placements: Vec<Placement> = Vec::new();
    let mut per_piece_counts = Vec::with_capacity(pieces.len());

    for (piece_index, piece) in pieces.iter().enumerate() {
        let placements = enumerate_placements(piece_index, piece, &sorted_target);
        per_piece_counts.push(placements.len());
        debug!(
            "piece {piece_index} ('{}'): {} legal placements",
            piece.name,
            placements.len()
        );

        for placement in placements {
            let mut cols = Vec::with_capacity(1 + placement.covered.len());
            cols.push(piece_index);
            for cell in &placement.covered {
                cols.push(cell_column_of[cell]);
            }
            matrix.add_row(&cols)?;
            all_placements.push(placement);
        }
    }

    let report = SolveReport {
        total_placement_count: all_placements.len(),
        per_piece_placement_count: per_piece_counts,
        truncated: false,
    };

    Ok((matrix, all_placements, report))
}

/// Solves the packing puzzle described by `pieces` against `target`.
///
/// Returns the list of solutions found and a diagnostic report. An empty
/// result list means no solution exists (not an error). When `opts.find_all`
/// is false, at most one solution is returned. Fails with `InternalError`
/// only if the matrix builder hits a structural inconsistency; that should
/// never happen on valid pieces and targets.
pub fn solve(
    pieces: &[Piece],
    target: &[Coord],
    opts: &SolveOptions,
) -> Result<(Vec<Solution>, SolveReport), PuzzleError> {
    info!(
        "solving: {} pieces, {} target cells, find_all={}",
        pieces.len(),
        target.len(),
        opts.find_all
    );

    let (mut matrix, placements, mut report) = build_matrix(pieces, target)?;

    let search_opts = SearchOptions {
        find_all: opts.find_all,
        max_solutions: opts.max_solutions,
        cancel: opts.cancel.clone(),
    };
    let result = dlx::search(&mut matrix, &search_opts);
    report.truncated = result.truncated;

    let solutions: Vec<Solution> = result
        .solutions
        .into_iter()
        .map(|row_ids| {
            row_ids
                .into_iter()
                .map(|row_id| {
                    let placement = &placements[row_id];
                    (placement.piece_index, placement.covered.clone())
                })
                .collect::<Solution>()
        })
        .collect();

    info!("solve finished: {} solution(s) recorded", solutions.len());
    Ok((solutions, report))
}

/// Convenience wrapper that finds at most one solution.
pub fn solve_one(pieces: &[Piece], target: &[Coord]) -> Result<Option<Solution>, PuzzleError> {
    let (mut solutions, _) = solve(
        pieces,
        target,
        &SolveOptions {
            find_all: false,
            max_solutions: 1,
            cancel: None,
        },
    )?;
    Ok(solutions.pop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceDisplay;

    fn unit(name: &str) -> Piece {
        Piece::new(name, vec![(0, 0, 0)], PieceDisplay::default()).unwrap()
    }

    #[test]
    fn trivial_single_unit_piece() {
        let pieces = vec![unit("u")];
        let target = vec![(0, 0, 0)];

        let one = solve_one(&pieces, &target).unwrap().unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[&0], vec![(0, 0, 0)]);

        let (all, _) = solve(
            &pieces,
            &target,
            &SolveOptions {
                find_all: true,
                max_solutions: 0,
                cancel: None,
            },
        )
        .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn two_unit_cubes_two_target_cells_has_two_solutions() {
        let pieces = vec![unit("a"), unit("b")];
        let target = vec![(0, 0, 0), (1, 0, 0)];

        let (all, _) = solve(
            &pieces,
            &target,
            &SolveOptions {
                find_all: true,
                max_solutions: 0,
                cancel: None,
            },
        )
        .unwrap();
        assert_eq!(all.len(), 2);

        for solution in &all {
            assert_eq!(solution.len(), 2);
            let mut covered: Vec<Coord> = solution.values().flatten().copied().collect();
            covered.sort_unstable();
            assert_eq!(covered, vec![(0, 0, 0), (1, 0, 0)]);
        }
    }

    #[test]
    fn infeasible_cell_count_has_no_solutions() {
        let domino = Piece::new("dom", vec![(0, 0, 0), (1, 0, 0)], PieceDisplay::default()).unwrap();
        let pieces = vec![domino];
        let target = vec![(0, 0, 0), (0, 1, 0), (0, 0, 1)];

        let (all, _) = solve(
            &pieces,
            &target,
            &SolveOptions {
                find_all: true,
                max_solutions: 0,
                cancel: None,
            },
        )
        .unwrap();
        assert!(all.is_empty());
    }

    #[test]
    fn solve_is_reusable_with_identical_output() {
        let pieces = vec![unit("a"), unit("b")];
        let target = vec![(0, 0, 0), (1, 0, 0)];
        let opts = SolveOptions {
            find_all: true,
            max_solutions: 0,
            cancel: None,
        };

        let (first, _) = solve(&pieces, &target, &opts).unwrap();
        let (second, _) = solve(&pieces, &target, &opts).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn max_solutions_bounds_find_all() {
        let pieces = vec![unit("a"), unit("b")];
        let target = vec![(0, 0, 0), (1, 0, 0)];
        let (all, _) = solve(
            &pieces,
            &target,
            &SolveOptions {
                find_all: true,
                max_solutions: 1,
                cancel: None,
            },
        )
        .unwrap();
        assert_eq!(all.len(), 1);
    }
}
