//! Exact-cover search engine: Knuth's Dancing Links (DLX) with Algorithm X.
//!
//! The matrix is a toroidal doubly linked list implemented as an arena of
//! nodes (`Vec<Node>`), with "pointers" as indices into the arena. `cover`
//! and `uncover` mutate integer fields in place; undo is bit-exact because
//! the link fields being restored were never deallocated. This keeps the
//! whole search allocation-free after the matrix is built and sidesteps any
//! cyclic-ownership concerns a linked-list-of-boxes design would run into.

use log::debug;

use crate::error::PuzzleError;

/// Sentinel index for the root header, matching the pack's convention
/// (`other_examples/.../queuedq-exact-cover-rs/src/dlx/dlx.rs`) of reserving
/// slot 0 for the root.
const ROOT: usize = 0;

#[derive(Clone, Copy, Debug, Default)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    /// Index of the column header this node belongs to (itself, for headers).
    column: usize,
    /// Dense row id this node belongs to; unused for header nodes.
    row_id: usize,
}

/// A column header: its node lives in `Matrix::nodes[..=col_count]`, indexed
/// 1-based (0 is the root). `size` is the number of data nodes currently
/// reachable by walking the column's vertical cycle.
#[derive(Clone, Debug)]
struct ColumnMeta {
    label: ColumnLabel,
    size: usize,
}

/// What a column represents: one piece, or one target cell. Carried purely
/// for diagnostics and for reconstructing solutions from selected rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnLabel {
    Piece(usize),
    Cell(crate::pieces::Coord),
}

/// The DLX matrix: piece columns first (in input order), then cell columns
/// (in sorted coordinate order), then one row per placement.
pub struct Matrix {
    nodes: Vec<Node>,
    columns: Vec<ColumnMeta>,
    /// Maps a dense row id to the arena index of one of its nodes (an
    /// arbitrary representative; row membership is recovered by walking
    /// `right` from there).
    row_repr: Vec<usize>,
    col_count: usize,
}

impl Matrix {
    /// Builds an empty matrix with `col_count` columns, labeled in order.
    pub fn new(labels: Vec<ColumnLabel>) -> Self {
        let col_count = labels.len();
        let mut nodes = Vec::with_capacity(col_count + 1);
        // root
        nodes.push(Node {
            left: 0,
            right: 0,
            up: 0,
            down: 0,
            column: 0,
            row_id: usize::MAX,
        });

        let mut columns = Vec::with_capacity(col_count);
        for (i, label) in labels.into_iter().enumerate() {
            let idx = i + 1;
            nodes.push(Node {
                left: idx - 1,
                right: 0, // patched below
                up: idx,
                down: idx,
                column: idx,
                row_id: usize::MAX,
            });
            nodes[idx - 1].right = idx;
            columns.push(ColumnMeta { label, size: 0 });
        }
        // close the header cycle: last column's right -> root, root's left -> last column
        let last = col_count;
        nodes[last].right = ROOT;
        nodes[ROOT].left = last;

        Self {
            nodes,
            columns,
            row_repr: Vec::new(),
            col_count,
        }
    }

    /// Adds a row covering the given 0-based column indices, returning its
    /// dense row id.
    ///
    /// Every `col0` must address one of this matrix's columns; a caller
    /// passing an out-of-range index is a structural bug in the matrix
    /// builder, not a bad user input, and is reported as `InternalError`
    /// rather than silently corrupting the link structure.
    pub fn add_row(&mut self, cols: &[usize]) -> Result<usize, PuzzleError> {
        let row_id = self.row_repr.len();
        let mut first_in_row: Option<usize> = None;
        let mut prev: Option<usize> = None;

        for &col0 in cols {
            let col = col0 + 1;
            if col < 1 || col > self.col_count {
                return Err(PuzzleError::InternalError(format!(
                    "row {row_id}: column index {col0} out of bounds (0..{})",
                    self.col_count
                )));
            }

            let idx = self.nodes.len();
            let up = self.nodes[col].up;
            self.nodes.push(Node {
                left: idx,
                right: idx,
                up,
                down: col,
                column: col,
                row_id,
            });
            self.nodes[up].down = idx;
            self.nodes[col].up = idx;
            self.columns[col - 1].size += 1;

            if let Some(p) = prev {
                self.nodes[p].right = idx;
                self.nodes[idx].left = p;
            }
            prev = Some(idx);
            first_in_row.get_or_insert(idx);
        }

        if let (Some(first), Some(last)) = (first_in_row, prev) {
            self.nodes[last].right = first;
            self.nodes[first].left = last;
            self.row_repr.push(first);
        } else {
            // a row with no columns cannot happen for valid placements, but
            // is handled so row ids stay dense
            self.row_repr.push(ROOT);
        }

        Ok(row_id)
    }

    #[inline]
    fn cover(&mut self, col: usize) {
        let (left, right) = (self.nodes[col].left, self.nodes[col].right);
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut i = self.nodes[col].down;
        while i != col {
            let mut j = self.nodes[i].right;
            while j != i {
                let (up, down, c) = (self.nodes[j].up, self.nodes[j].down, self.nodes[j].column);
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.columns[c - 1].size -= 1;
                j = self.nodes[j].right;
            }
            i = self.nodes[i].down;
        }
    }

    #[inline]
    fn uncover(&mut self, col: usize) {
        let mut i = self.nodes[col].up;
        while i != col {
            let mut j = self.nodes[i].left;
            while j != i {
                let (up, down, c) = (self.nodes[j].up, self.nodes[j].down, self.nodes[j].column);
                self.nodes[up].down = j;
                self.nodes[down].up = j;
                self.columns[c - 1].size += 1;
                j = self.nodes[j].left;
            }
            i = self.nodes[i].up;
        }

        let (left, right) = (self.nodes[col].left, self.nodes[col].right);
        self.nodes[left].right = col;
        self.nodes[right].left = col;
    }

    /// S-heuristic: the remaining column with smallest size, ties broken by
    /// first occurrence in the header list; early-exits as soon as a
    /// size-0 or size-1 column is seen, since neither can be improved on.
    fn choose_column(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut best_size = usize::MAX;

        let mut c = self.nodes[ROOT].right;
        while c != ROOT {
            let size = self.columns[c - 1].size;
            if size < best_size {
                best = Some(c);
                best_size = size;
                if size <= 1 {
                    break;
                }
            }
            c = self.nodes[c].right;
        }
        best
    }

    fn has_remaining_columns(&self) -> bool {
        self.nodes[ROOT].right != ROOT
    }

    fn row_of(&self, node: usize) -> usize {
        self.nodes[node].row_id
    }

    /// Covers every column a row's nodes touch besides the column `except`
    /// is expected to already be covered by the caller (used for the column
    /// chosen at this recursion level).
    fn cover_row_other_columns(&mut self, row_node: usize) {
        let mut j = self.nodes[row_node].right;
        while j != row_node {
            self.cover(self.nodes[j].column);
            j = self.nodes[j].right;
        }
    }

    fn uncover_row_other_columns(&mut self, row_node: usize) {
        let mut j = self.nodes[row_node].left;
        while j != row_node {
            self.uncover(self.nodes[j].column);
            j = self.nodes[j].left;
        }
    }

    pub fn column_label(&self, col0: usize) -> ColumnLabel {
        self.columns[col0].label
    }
}

/// Controls whether [`search`] stops at the first solution or exhausts the
/// whole search tree (optionally bounded by `max_solutions`), plus an
/// optional cooperative cancellation flag checked at each recursion entry.
pub struct SearchOptions {
    pub find_all: bool,
    pub max_solutions: usize,
    pub cancel: Option<std::sync::Arc<std::sync::atomic::AtomicBool>>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            find_all: false,
            max_solutions: 0,
            cancel: None,
        }
    }
}

/// Outcome of a search: the recorded solutions (each a list of dense row
/// ids) and whether the search was cut short by cancellation.
pub struct SearchResult {
    pub solutions: Vec<Vec<usize>>,
    pub truncated: bool,
}

/// Explicit-stack iterative Algorithm X, as specified: a frame is pushed per
/// recursion level rather than using the native call stack, so search depth
/// is bounded by the number of pieces rather than the host's default stack
/// size.
///
/// After this function returns, `matrix`'s link state is restored to
/// whatever it was before the call: every top-level `cover` has a matching
/// `uncover`.
pub fn search(matrix: &mut Matrix, opts: &SearchOptions) -> SearchResult {
    struct Frame {
        col: usize,
        row_node: usize,
    }

    let mut solutions: Vec<Vec<usize>> = Vec::new();
    let mut partial: Vec<usize> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut truncated = false;

    'outer: loop {
        if is_cancelled(opts) {
            truncated = true;
            break;
        }

        if !matrix.has_remaining_columns() {
            solutions.push(partial.clone());
            debug!("dlx: recorded solution #{}", solutions.len());
            if !opts.find_all || (opts.max_solutions != 0 && solutions.len() >= opts.max_solutions)
            {
                break;
            }
            // fall through to backtrack and keep searching
        } else if let Some(col) = matrix.choose_column() {
            if matrix.columns[col - 1].size > 0 {
                matrix.cover(col);
                let row_node = matrix.nodes[col].down;
                if row_node != col {
                    matrix.cover_row_other_columns(row_node);
                    partial.push(matrix.row_of(row_node));
                    stack.push(Frame { col, row_node });
                    continue;
                }
                // size was 0 after all (shouldn't happen given the check
                // above, kept for defense-in-depth): undo and backtrack
                matrix.uncover(col);
            }
            // size 0: infeasible branch, backtrack below
        }

        // backtrack: advance the most recent frame to the next row in its
        // column, or pop it and continue unwinding
        loop {
            let Some(frame) = stack.last_mut() else {
                break 'outer;
            };

            matrix.uncover_row_other_columns(frame.row_node);
            partial.pop();

            let next = matrix.nodes[frame.row_node].down;
            if next != frame.col {
                frame.row_node = next;
                matrix.cover_row_other_columns(next);
                partial.push(matrix.row_of(next));
                break;
            }

            let col = frame.col;
            matrix.uncover(col);
            stack.pop();
        }
    }

    // unwind any still-open frames (cancellation path)
    while let Some(frame) = stack.pop() {
        matrix.uncover_row_other_columns(frame.row_node);
        partial.pop();
        matrix.uncover(frame.col);
    }

    SearchResult {
        solutions,
        truncated,
    }
}

fn is_cancelled(opts: &SearchOptions) -> bool {
    opts.cancel
        .as_ref()
        .map(|flag| flag.load(std::sync::atomic::Ordering::Relaxed))
        .unwrap_or(false)
}
