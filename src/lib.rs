//! 3D Polycube Packing Solver
//!
//! Solves polycube packing puzzles: given a set of rigid pieces and a target
//! region of unit cells, finds one or all ways to place every piece — under
//! rotation and translation, without overlap — so every target cell is
//! covered exactly once.
//!
//! The core is a reduction to exact cover, solved with Knuth's Dancing Links
//! (Algorithm X): [`geometry`] enumerates the 24 proper cube rotations and
//! canonicalizes cell sets, [`pieces`] memoizes each piece's unique
//! orientations, [`placement`] enumerates legal placements of a piece
//! against a target, and [`dlx`] builds the exact-cover matrix and searches
//! it. [`solver`] wires these together into the public `solve` entry points.
//!
//! [`puzzle`] is the JSON-facing loader collaborator; [`persistence`] saves
//! and loads solution sets; [`symmetry`] is an optional post-hoc dedup of
//! solutions by a cube target's rotation/reflection symmetry.

pub mod dlx;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod logging;
pub mod persistence;
pub mod pieces;
pub mod placement;
pub mod puzzle;
pub mod solver;
pub mod symmetry;

use error::PuzzleError;
use pieces::{Coord, Piece};
use solver::{Solution, SolveOptions, SolveReport};

/// A puzzle instance: a set of pieces and the target region to fill.
///
/// Mirrors `original_source/solver.py`'s `PuzzleSolver(pieces, target)`
/// facade: construct once, call `solve` as many times as needed (each call
/// rebuilds a fresh DLX matrix and is independent of any previous call).
pub struct PuzzleSolver {
    pieces: Vec<Piece>,
    target: Vec<Coord>,
}

impl PuzzleSolver {
    /// Builds a solver from already-validated pieces and a target region.
    pub fn new(pieces: Vec<Piece>, target: Vec<Coord>) -> Result<Self, PuzzleError> {
        if target.is_empty() {
            return Err(PuzzleError::InvalidTarget("target has no cells".into()));
        }
        Ok(Self { pieces, target })
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn target(&self) -> &[Coord] {
        &self.target
    }

    /// Finds one or all solutions, per `opts`.
    pub fn solve(&self, opts: &SolveOptions) -> Result<(Vec<Solution>, SolveReport), PuzzleError> {
        solver::solve(&self.pieces, &self.target, opts)
    }

    /// Finds at most one solution.
    pub fn solve_one(&self) -> Result<Option<Solution>, PuzzleError> {
        solver::solve_one(&self.pieces, &self.target)
    }
}
