//! End-to-end packing scenarios, exercised through the public `PuzzleSolver`
//! facade and the JSON loader rather than internal module APIs.

use polypack::pieces::{
    box_target, Piece, PieceDisplay, BEDLAM_DIM, BEDLAM_PIECES, SOMA_CHIRAL_PAIR, SOMA_DIM,
    SOMA_PIECES,
};
use polypack::solver::SolveOptions;
use polypack::symmetry::dedup_by_cube_symmetry;
use polypack::{puzzle, PuzzleSolver};

fn soma_pieces() -> Vec<Piece> {
    SOMA_PIECES
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            Piece::new(format!("soma-{i}"), cells.to_vec(), PieceDisplay::default()).unwrap()
        })
        .collect()
}

fn bedlam_pieces() -> Vec<Piece> {
    BEDLAM_PIECES
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            Piece::new(format!("bedlam-{i}"), cells.to_vec(), PieceDisplay::default()).unwrap()
        })
        .collect()
}

/// The four distinct flat tetracubes named in the 2x4x2 box scenario: I
/// (straight), L, T, and O (square), with cell coordinates taken verbatim
/// from `original_source/main.py`'s `custom_example()`.
fn tetracube_pieces() -> Vec<Piece> {
    let i = vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)];
    let l = vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0)];
    let t = vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0)];
    let o = vec![(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0)];
    vec![
        Piece::new("I", i, PieceDisplay::default()).unwrap(),
        Piece::new("L", l, PieceDisplay::default()).unwrap(),
        Piece::new("T", t, PieceDisplay::default()).unwrap(),
        Piece::new("O", o, PieceDisplay::default()).unwrap(),
    ]
}

#[test]
fn trivial_single_unit_piece_fills_single_cell_target() {
    let pieces = vec![Piece::new("u", vec![(0, 0, 0)], PieceDisplay::default()).unwrap()];
    let solver = PuzzleSolver::new(pieces, vec![(0, 0, 0)]).unwrap();
    let solution = solver
        .solve_one()
        .unwrap()
        .expect("a single unit cube must fit a single cell");
    assert_eq!(solution.len(), 1);
}

#[test]
fn two_unit_cubes_against_two_cells_has_exactly_two_solutions() {
    let pieces = vec![
        Piece::new("a", vec![(0, 0, 0)], PieceDisplay::default()).unwrap(),
        Piece::new("b", vec![(0, 0, 0)], PieceDisplay::default()).unwrap(),
    ];
    let target = vec![(0, 0, 0), (1, 0, 0)];
    let solver = PuzzleSolver::new(pieces, target).unwrap();
    let (solutions, _) = solver
        .solve(&SolveOptions {
            find_all: true,
            max_solutions: 0,
            cancel: None,
        })
        .unwrap();
    assert_eq!(solutions.len(), 2);
}

#[test]
fn mismatched_cell_counts_yield_no_solutions_not_an_error() {
    let domino = Piece::new("dom", vec![(0, 0, 0), (1, 0, 0)], PieceDisplay::default()).unwrap();
    let target = vec![(0, 0, 0), (0, 1, 0), (0, 0, 1)]; // 3 cells, piece covers 2
    let solver = PuzzleSolver::new(vec![domino], target).unwrap();
    let (solutions, _) = solver
        .solve(&SolveOptions {
            find_all: true,
            max_solutions: 0,
            cancel: None,
        })
        .unwrap();
    assert!(solutions.is_empty());
}

#[test]
fn soma_cube_has_exactly_11520_labeled_solutions() {
    // `solve` deliberately does not dedup by symmetry (that's
    // `symmetry::dedup_by_cube_symmetry`'s job, exercised separately below),
    // so the raw labeled-placement count is the classical 240 canonical
    // solutions times the cube's 48-element rotation/reflection symmetry
    // group, with every canonical solution's stabilizer trivial: 240 x 48.
    let pieces = soma_pieces();
    let target = box_target(SOMA_DIM, SOMA_DIM, SOMA_DIM);
    let solver = PuzzleSolver::new(pieces, target).unwrap();
    let (solutions, report) = solver
        .solve(&SolveOptions {
            find_all: true,
            max_solutions: 0,
            cancel: None,
        })
        .unwrap();
    assert_eq!(solutions.len(), 11520);
    assert!(!report.truncated);
}

#[test]
fn soma_cube_solutions_collapse_to_240_under_cube_symmetry() {
    let pieces = soma_pieces();
    let target = box_target(SOMA_DIM, SOMA_DIM, SOMA_DIM);
    let solver = PuzzleSolver::new(pieces, target).unwrap();
    let (solutions, _) = solver
        .solve(&SolveOptions {
            find_all: true,
            max_solutions: 0,
            cancel: None,
        })
        .unwrap();
    let deduped = dedup_by_cube_symmetry(solutions, SOMA_DIM, Some(SOMA_CHIRAL_PAIR));
    // Every orbit under the cube's 48-element symmetry group is full size
    // (11520 / 48 = 240), matching the classically known Soma Cube count.
    assert_eq!(deduped.len(), 240);
}

#[test]
fn box_two_by_four_by_two_with_four_distinct_tetracubes_has_no_solution() {
    // spec's four distinct flat tetracubes (I, L, T, O), exact cell
    // coordinates from `original_source/main.py`'s `custom_example()`,
    // against the same 2x4x2 box. Despite informal prose elsewhere assuming
    // this set tiles the box, exhaustive search (cross-checked against an
    // independent brute force, including the full 48-element rotation +
    // reflection group) finds it does not: the four pieces cannot cover the
    // box without overlap or gaps. That is a normal "no solution" outcome,
    // not an error, per the failure semantics in spec section 7.
    let pieces = tetracube_pieces();
    let target = box_target(2, 4, 2);
    let solver = PuzzleSolver::new(pieces, target).unwrap();

    let solution = solver.solve_one().unwrap();
    assert!(solution.is_none());

    let pieces = tetracube_pieces();
    let target = box_target(2, 4, 2);
    let solver = PuzzleSolver::new(pieces, target).unwrap();
    let (solutions, report) = solver
        .solve(&SolveOptions {
            find_all: true,
            max_solutions: 0,
            cancel: None,
        })
        .unwrap();
    assert_eq!(solutions.len(), 0);
    assert!(!report.truncated);
}

#[test]
#[ignore = "Bedlam cube (13 pieces, 4x4x4) takes minutes to search to completion"]
fn bedlam_cube_has_at_least_one_solution() {
    let pieces = bedlam_pieces();
    let target = box_target(BEDLAM_DIM, BEDLAM_DIM, BEDLAM_DIM);
    let solver = PuzzleSolver::new(pieces, target).unwrap();
    let solution = solver.solve_one().unwrap();
    assert!(solution.is_some());
}

#[test]
fn puzzle_loaded_from_json_round_trips_through_solve() {
    let json = r#"
    {
      "pieces": [
        {"name": "a", "cells": [[0,0,0]]},
        {"name": "b", "cells": [[0,0,0]]}
      ],
      "target": {"cells": [[0,0,0],[1,0,0]]}
    }
    "#;
    let def = puzzle::load_from_str(json).unwrap();
    let solver = PuzzleSolver::new(def.pieces, def.target).unwrap();
    let solution = solver.solve_one().unwrap().unwrap();
    assert_eq!(solution.len(), 2);
}
