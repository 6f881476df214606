//! Solution formatting.
//!
//! Renders a solution as a human-readable grid of piece numbers. Works for
//! any target shape that fits in an axis-aligned bounding box; cells outside
//! the target (holes in a non-box target) are shown empty just like unfilled
//! cells.

use crate::pieces::Coord;
use crate::solver::Solution;

/// Axis-aligned bounding box of a cell set: `(min, max)` inclusive per axis.
fn bounding_box(cells: impl Iterator<Item = Coord>) -> Option<((i32, i32, i32), (i32, i32, i32))> {
    let mut iter = cells.peekable();
    let &first = iter.peek()?;
    let mut min = first;
    let mut max = first;
    for (x, y, z) in iter {
        min = (min.0.min(x), min.1.min(y), min.2.min(z));
        max = (max.0.max(x), max.1.max(y), max.2.max(z));
    }
    Some((min, max))
}

/// Formats a solution as a human-readable string: one header line, then
/// rows from top (max y) to bottom (min y), with z-slices side by side and
/// piece numbers as single characters ('.' for empty, hex digits beyond 9).
pub fn format_solution(solution: &Solution) -> String {
    let all_cells = solution.values().flatten().copied();
    let Some((min, max)) = bounding_box(all_cells) else {
        return String::new();
    };

    let mut owner: std::collections::HashMap<Coord, u8> = std::collections::HashMap::new();
    for (&piece_index, cells) in solution {
        let piece_number = (piece_index + 1) as u8;
        for &cell in cells {
            owner.insert(cell, piece_number);
        }
    }

    let mut output = String::new();
    for z in min.2..=max.2 {
        if z > min.2 {
            output.push_str("  ");
        }
        output.push_str(&format!("z={z}"));
    }
    output.push('\n');

    for y in (min.1..=max.1).rev() {
        for z in min.2..=max.2 {
            if z > min.2 {
                output.push_str("  ");
            }
            for x in min.0..=max.0 {
                let display_char = match owner.get(&(x, y, z)) {
                    None => '.',
                    Some(&n) if n < 10 => char::from(b'0' + n),
                    Some(&n) => char::from(b'A' + n - 10),
                };
                output.push(display_char);
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_single_cell_solution() {
        let mut solution = Solution::new();
        solution.insert(0, vec![(0, 0, 0)]);
        let text = format_solution(&solution);
        assert!(text.contains('1'));
    }

    #[test]
    fn empty_solution_formats_to_empty_string() {
        let solution = Solution::new();
        assert_eq!(format_solution(&solution), "");
    }
}
