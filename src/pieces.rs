//! Puzzle piece definitions and coordinate types.
//!
//! Each piece is defined as a set of unit cube positions in 3D space. Unlike
//! the const-generic, compile-time-only pieces this module is descended from,
//! pieces here are constructed at runtime (typically from JSON, see
//! `crate::puzzle`) so a `Piece` owns its cells and memoizes its orientations
//! lazily rather than at compile time.

use std::sync::OnceLock;

use crate::error::PuzzleError;
use crate::geometry::all_orientations;

/// A 3D coordinate representing a unit cube position.
pub type Coord = (i32, i32, i32);

/// Opaque, caller-defined display attributes carried alongside a piece.
///
/// The core never inspects these fields; they are pure passthrough so a
/// caller (e.g. a renderer) can round-trip a piece's color through a solve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceDisplay {
    pub color: Option<String>,
}

/// A named, rigid polycube piece.
///
/// `cells` is immutable after construction. `orientations` is computed on
/// first access and cached for the lifetime of the `Piece` (a one-shot
/// initializer, so concurrent access after the first call is safe; sharing
/// an un-primed `Piece` across threads is not).
#[derive(Debug)]
pub struct Piece {
    pub name: String,
    cells: Vec<Coord>,
    pub display: PieceDisplay,
    orientations: OnceLock<Vec<Vec<Coord>>>,
}

impl Piece {
    /// Constructs a piece, rejecting empty or duplicate-cell input.
    pub fn new(
        name: impl Into<String>,
        cells: Vec<Coord>,
        display: PieceDisplay,
    ) -> Result<Self, PuzzleError> {
        let name = name.into();
        if cells.is_empty() {
            return Err(PuzzleError::InvalidPiece(format!(
                "piece '{name}' has no cells"
            )));
        }

        let mut sorted = cells.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != cells.len() {
            return Err(PuzzleError::InvalidPiece(format!(
                "piece '{name}' has duplicate cells"
            )));
        }

        Ok(Self {
            name,
            cells,
            display,
            orientations: OnceLock::new(),
        })
    }

    /// Constructs a piece like [`Piece::new`], but silently dedupes repeated
    /// cells instead of rejecting them. Implementation-defined lenient mode;
    /// the strict mode above is the default.
    pub fn new_lenient(
        name: impl Into<String>,
        cells: Vec<Coord>,
        display: PieceDisplay,
    ) -> Result<Self, PuzzleError> {
        let name = name.into();
        if cells.is_empty() {
            return Err(PuzzleError::InvalidPiece(format!(
                "piece '{name}' has no cells"
            )));
        }
        let mut uniqued = cells;
        uniqued.sort_unstable();
        uniqued.dedup();
        Ok(Self {
            name,
            cells: uniqued,
            display,
            orientations: OnceLock::new(),
        })
    }

    /// The defining cell set, as given at construction (size = cell count).
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Returns the memoized list of unique canonical orientations.
    ///
    /// Idempotent: repeated calls return the identical sequence. Invariant:
    /// `1 <= orientations().len() <= 24`.
    pub fn orientations(&self) -> &[Vec<Coord>] {
        self.orientations
            .get_or_init(|| all_orientations(&self.cells))
    }
}

/// Maximum number of cubes in any single piece across the bundled example
/// puzzles (Soma and Bedlam); used to size fixed-capacity buffers in
/// `persistence` and the benches.
pub const MAX_CUBES: usize = 5;

/// Indices of the chiral mirror-image pair in [`SOMA_PIECES`], used only by
/// the optional post-hoc symmetry dedup helper in `crate::symmetry`.
pub const SOMA_CHIRAL_PAIR: (usize, usize) = (4, 6);

/// The seven standard Soma cube pieces (three- and four-cell shapes) that
/// must fit into a 3x3x3 cube. Kept as raw coordinate data for fixtures and
/// tests; construct [`Piece`]s from these with [`Piece::new`].
pub const SOMA_PIECES: &[&[Coord]] = &[
    // L-shaped piece (4 cubes)
    &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0)],
    // T-shaped piece (4 cubes)
    &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0)],
    // S-shaped piece (4 cubes)
    &[(0, 0, 0), (1, 0, 0), (1, 1, 0), (2, 1, 0)],
    // small L piece, the "V" (3 cubes)
    &[(0, 0, 0), (1, 0, 0), (0, 1, 0)],
    // 3d corner piece variant A (4 cubes)
    &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 0, 1)],
    // 3d corner piece variant B (4 cubes)
    &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1)],
    // 3d corner piece variant C (4 cubes)
    &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 1, 1)],
];

/// Soma puzzle dimension (3x3x3).
pub const SOMA_DIM: i32 = 3;

/// The thirteen Bedlam cube pieces that must fit into a 4x4x4 cube.
pub const BEDLAM_PIECES: &[&[Coord]] = &[
    // Little Corner (4 cubes)
    &[(0, 0, 0), (0, 1, 0), (1, 0, 0), (0, 0, 1)],
    // Long Stick (5 cubes)
    &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0), (3, 1, 0)],
    // Hat (5 cubes)
    &[(0, 0, 0), (0, 1, 0), (1, 1, 0), (1, 2, 0), (2, 2, 0)],
    // Bucket (5 cubes)
    &[(0, 0, 0), (0, 1, 0), (1, 1, 0), (1, 2, 0), (1, 1, 1)],
    // Screw (5 cubes)
    &[(0, 0, 0), (1, 0, 0), (1, 0, 1), (1, 1, 1), (2, 1, 1)],
    // Twist (5 cubes)
    &[(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 1, 1), (2, 1, 1)],
    // Signpost (5 cubes)
    &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0), (1, 0, 1)],
    // Ducktail (5 cubes)
    &[(0, 0, 0), (1, 0, 0), (1, 1, 0), (2, 1, 0), (1, 0, 1)],
    // Plane (5 cubes)
    &[(0, 0, 0), (0, 1, 0), (1, 1, 0), (2, 1, 0), (1, 2, 0)],
    // Bridge (5 cubes)
    &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0), (2, 1, 0)],
    // Staircase (5 cubes)
    &[(0, 0, 0), (1, 0, 0), (1, 1, 0), (2, 1, 0), (2, 2, 0)],
    // Spikey Zag (5 cubes)
    &[(0, 0, 1), (0, 1, 0), (0, 1, 1), (1, 1, 0), (1, 2, 0)],
    // Middle Zig (5 cubes)
    &[(0, 0, 0), (0, 1, 0), (0, 1, 1), (1, 1, 0), (1, 2, 0)],
];

/// Bedlam puzzle dimension (4x4x4).
pub const BEDLAM_DIM: i32 = 4;

/// Builds a box-shaped target region `sx` x `sy` x `sz`, matching
/// `original_source/pieces.py`'s `create_box_target`.
pub fn box_target(sx: i32, sy: i32, sz: i32) -> Vec<Coord> {
    let mut cells = Vec::with_capacity((sx * sy * sz).max(0) as usize);
    for x in 0..sx {
        for y in 0..sy {
            for z in 0..sz {
                cells.push((x, y, z));
            }
        }
    }
    cells
}

/// Builds a target region from per-layer 2D grids (`layers[z][y][x]`, 1 =
/// filled, 0 = empty), matching `original_source/pieces.py`'s
/// `create_target_from_layers`.
pub fn target_from_layers(layers: &[Vec<Vec<u8>>]) -> Vec<Coord> {
    let mut cells = Vec::new();
    for (z, layer) in layers.iter().enumerate() {
        for (y, row) in layer.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    cells.push((x as i32, y as i32, z as i32));
                }
            }
        }
    }
    cells
}
