//! Error kinds surfaced by this crate.
//!
//! Construction-time input errors (`InvalidPiece`, `InvalidTarget`) are
//! returned immediately to the caller. `NoSolution` is deliberately not a
//! variant here: the absence of a solution is a normal outcome, expressed as
//! an empty solution list, never as an `Err`. `InternalError` indicates a
//! dancing-links link invariant was violated; it should never occur on valid
//! inputs and is not meant to be matched on by callers, only logged and
//! reported upstream.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("invalid piece: {0}")]
    InvalidPiece(String),

    #[error("invalid target: {0}")]
    InvalidTarget(String),

    #[error("internal dancing-links invariant violated: {0}")]
    InternalError(String),

    #[error("failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),
}
