//! JSON-facing puzzle definitions and loader.
//!
//! This module is the ambient loader collaborator described in spec §6: it
//! is not part of the exact-cover core, but it is the thing that turns a
//! puzzle file into the `Piece`/`Coord` data the core consumes. Schema:
//!
//! ```json
//! { "pieces":[{"name":str,"cells":[[x,y,z],...],"color":str?}...],
//!   "target":{"cells":[[x,y,z],...]} }
//! ```
//!
//! Piece cells are translated so per-axis minima are zero before being
//! handed to `Piece::new`, per spec.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::pieces::{Coord, Piece, PieceDisplay};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieceJson {
    pub name: String,
    pub cells: Vec<[i32; 3]>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetJson {
    pub cells: Vec<[i32; 3]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDocument {
    pub pieces: Vec<PieceJson>,
    pub target: TargetJson,
}

/// A loaded puzzle: constructed pieces plus the target region.
pub struct PuzzleDef {
    pub pieces: Vec<Piece>,
    pub target: Vec<Coord>,
}

fn normalize_to_zero_min(cells: &[Coord]) -> Vec<Coord> {
    if cells.is_empty() {
        return Vec::new();
    }
    let min_x = cells.iter().map(|c| c.0).min().unwrap();
    let min_y = cells.iter().map(|c| c.1).min().unwrap();
    let min_z = cells.iter().map(|c| c.2).min().unwrap();
    cells
        .iter()
        .map(|&(x, y, z)| (x - min_x, y - min_y, z - min_z))
        .collect()
}

impl PuzzleDocument {
    /// Converts the parsed JSON document into core-ready `Piece`s and a
    /// target cell set, normalizing each piece's cells to a zero minimum.
    pub fn into_puzzle(self) -> Result<PuzzleDef, PuzzleError> {
        let mut pieces = Vec::with_capacity(self.pieces.len());
        for (i, pd) in self.pieces.into_iter().enumerate() {
            let cells: Vec<Coord> = pd.cells.iter().map(|c| (c[0], c[1], c[2])).collect();
            if cells.is_empty() {
                return Err(PuzzleError::InvalidPiece(format!(
                    "piece {i} ('{}') has no cells",
                    pd.name
                )));
            }
            let normalized = normalize_to_zero_min(&cells);
            let display = PieceDisplay { color: pd.color };
            pieces.push(Piece::new(pd.name, normalized, display)?);
        }

        let target: Vec<Coord> = self
            .target
            .cells
            .iter()
            .map(|c| (c[0], c[1], c[2]))
            .collect();
        if target.is_empty() {
            return Err(PuzzleError::InvalidTarget("target has no cells".into()));
        }

        Ok(PuzzleDef { pieces, target })
    }
}

/// Loads and parses a puzzle document from a JSON file at `path`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<PuzzleDef, PuzzleError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let document: PuzzleDocument = serde_json::from_reader(reader)?;
    document.into_puzzle()
}

/// Parses a puzzle document from an in-memory JSON string.
pub fn load_from_str(json: &str) -> Result<PuzzleDef, PuzzleError> {
    let document: PuzzleDocument = serde_json::from_str(json)?;
    document.into_puzzle()
}
