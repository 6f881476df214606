//! File I/O for saving and loading puzzle solutions.
//!
//! Binary format for `solutions.bin` (little endian):
//! - 4 bytes: magic (`PLPK`)
//! - u8: format version
//! - u32: solution count
//! - repeat per solution:
//!   - u32: piece count
//!   - repeat per piece:
//!     - u32: piece index (0-based)
//!     - u32: cube count
//!     - repeat per cube: 3 x i32 (x, y, z), little endian

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::grid::format_solution;
use crate::solver::Solution;

const SOLUTIONS_BIN: &str = "solutions.bin";
const SOLUTIONS_TXT: &str = "solutions.txt";
const FILE_MAGIC: [u8; 4] = *b"PLPK";
const FILE_VERSION: u8 = 1;

/// Saves solutions to both binary and text files in the current directory.
pub fn save(solutions: &[Solution]) -> std::io::Result<()> {
    save_to(solutions, SOLUTIONS_TXT, SOLUTIONS_BIN)
}

/// Saves solutions to the given text and binary paths.
pub fn save_to(
    solutions: &[Solution],
    text_path: impl AsRef<Path>,
    binary_path: impl AsRef<Path>,
) -> std::io::Result<()> {
    save_text(solutions, text_path)?;
    save_binary(solutions, binary_path)?;
    Ok(())
}

fn save_text(solutions: &[Solution], path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Found {} solutions:\n", solutions.len())?;
    for (i, solution) in solutions.iter().enumerate() {
        writeln!(file, "Solution {}:", i + 1)?;
        write!(file, "{}", format_solution(solution))?;
        writeln!(file)?;
    }
    Ok(())
}

fn save_binary(solutions: &[Solution], path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(&FILE_MAGIC)?;
    file.write_all(&[FILE_VERSION])?;
    file.write_all(&(solutions.len() as u32).to_le_bytes())?;

    for solution in solutions {
        file.write_all(&(solution.len() as u32).to_le_bytes())?;
        for (&piece_index, cells) in solution {
            file.write_all(&(piece_index as u32).to_le_bytes())?;
            file.write_all(&(cells.len() as u32).to_le_bytes())?;
            for &(x, y, z) in cells {
                file.write_all(&x.to_le_bytes())?;
                file.write_all(&y.to_le_bytes())?;
                file.write_all(&z.to_le_bytes())?;
            }
        }
    }

    Ok(())
}

#[inline]
fn read_u32<R: Read>(reader: &mut R) -> Option<u32> {
    let mut buffer = [0u8; 4];
    reader.read_exact(&mut buffer).ok()?;
    Some(u32::from_le_bytes(buffer))
}

#[inline]
fn read_i32<R: Read>(reader: &mut R) -> Option<i32> {
    let mut buffer = [0u8; 4];
    reader.read_exact(&mut buffer).ok()?;
    Some(i32::from_le_bytes(buffer))
}

fn parse_solutions<R: Read>(reader: &mut R, solution_count: usize) -> Option<Vec<Solution>> {
    let mut solutions = Vec::with_capacity(solution_count);

    for _ in 0..solution_count {
        let piece_count = read_u32(reader)? as usize;
        let mut seen_pieces = std::collections::HashSet::with_capacity(piece_count);
        let mut solution = Solution::new();

        for _ in 0..piece_count {
            let piece_index = read_u32(reader)? as usize;
            if !seen_pieces.insert(piece_index) {
                // reject duplicated piece ids in one solution
                return None;
            }

            let cube_count = read_u32(reader)? as usize;
            if cube_count == 0 {
                return None;
            }

            let mut positions = Vec::with_capacity(cube_count);
            for _ in 0..cube_count {
                let x = read_i32(reader)?;
                let y = read_i32(reader)?;
                let z = read_i32(reader)?;
                positions.push((x, y, z));
            }

            solution.insert(piece_index, positions);
        }

        solutions.push(solution);
    }

    Some(solutions)
}

/// Loads all solutions from the binary file in the current directory.
pub fn load_all() -> Option<Vec<Solution>> {
    load_from(SOLUTIONS_BIN)
}

/// Loads all solutions from the binary file at `path`.
pub fn load_from(path: impl AsRef<Path>) -> Option<Vec<Solution>> {
    let mut file = File::open(path).ok()?;
    let mut magic = [0u8; 4];
    file.read_exact(&mut magic).ok()?;
    if magic != FILE_MAGIC {
        return None;
    }

    let mut version = [0u8; 1];
    file.read_exact(&mut version).ok()?;
    if version[0] != FILE_VERSION {
        return None;
    }

    let solution_count = read_u32(&mut file)? as usize;
    parse_solutions(&mut file, solution_count)
}

/// Returns the number of saved solutions without materializing them all.
pub fn count() -> Option<usize> {
    count_from(SOLUTIONS_BIN)
}

/// Returns the number of saved solutions in the binary file at `path`.
pub fn count_from(path: impl AsRef<Path>) -> Option<usize> {
    let mut file = File::open(path).ok()?;
    let mut magic = [0u8; 4];
    file.read_exact(&mut magic).ok()?;
    if magic != FILE_MAGIC {
        return None;
    }
    let mut version = [0u8; 1];
    file.read_exact(&mut version).ok()?;
    if version[0] != FILE_VERSION {
        return None;
    }
    Some(read_u32(&mut file)? as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_paths(tag: &str) -> (std::path::PathBuf, std::path::PathBuf) {
        let dir = env::temp_dir();
        (
            dir.join(format!("polypack_test_{tag}.txt")),
            dir.join(format!("polypack_test_{tag}.bin")),
        )
    }

    #[test]
    fn round_trips_solutions_through_binary_format() {
        let (text_path, bin_path) = temp_paths("roundtrip");

        let mut solution = Solution::new();
        solution.insert(0, vec![(0, 0, 0), (1, 0, 0)]);
        solution.insert(1, vec![(0, 1, 0)]);
        let solutions = vec![solution];

        save_to(&solutions, &text_path, &bin_path).unwrap();
        let loaded = load_from(&bin_path).unwrap();
        assert_eq!(loaded, solutions);
        assert_eq!(count_from(&bin_path), Some(1));

        let _ = std::fs::remove_file(&text_path);
        let _ = std::fs::remove_file(&bin_path);
    }

    #[test]
    fn missing_file_returns_none() {
        assert_eq!(load_from("/nonexistent/solutions.bin"), None);
        assert_eq!(count_from("/nonexistent/solutions.bin"), None);
    }
}
