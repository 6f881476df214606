//! Polycube Packing Solver CLI
//!
//! Solves polycube packing puzzles described by a JSON file (see
//! `polypack::puzzle` for the schema) and reports or persists the
//! solution(s) found.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;

use polypack::pieces::{Piece, PieceDisplay};
use polypack::solver::SolveOptions;
use polypack::{puzzle, PuzzleSolver};

#[derive(Parser)]
#[command(name = "polypack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle loaded from a JSON file and save solutions to disk.
    Solve {
        /// Path to a puzzle JSON file.
        puzzle: String,
        /// Find all solutions instead of stopping at the first.
        #[arg(long)]
        all: bool,
        /// Cap the number of solutions recorded (0 = unbounded, only used with --all).
        #[arg(long, default_value_t = 0)]
        max: usize,
    },
    /// Show the solutions previously saved to `solutions.bin`.
    Show,
    /// Print the number of solutions previously saved to `solutions.bin`.
    Count,
    /// Solve the built-in Soma Cube puzzle (7 pieces into a 3x3x3 cube).
    Soma {
        #[arg(long)]
        all: bool,
    },
}

fn main() -> ExitCode {
    polypack::logging::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { puzzle, all, max } => run_solve(&puzzle, all, max),
        Command::Show => run_show(),
        Command::Count => run_count(),
        Command::Soma { all } => run_soma(all),
    }
}

fn run_solve(path: &str, all: bool, max: usize) -> ExitCode {
    let def = match puzzle::load_from_path(path) {
        Ok(def) => def,
        Err(e) => {
            error!("failed to load puzzle '{path}': {e}");
            eprintln!("Failed to load puzzle: {e}");
            return ExitCode::from(2);
        }
    };

    let solver = match PuzzleSolver::new(def.pieces, def.target) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid puzzle: {e}");
            return ExitCode::from(2);
        }
    };

    let opts = SolveOptions {
        find_all: all,
        max_solutions: max,
        cancel: None,
    };
    let (solutions, report) = match solver.solve(&opts) {
        Ok(result) => result,
        Err(e) => {
            error!("solve failed: {e}");
            eprintln!("Internal solver error: {e}");
            return ExitCode::from(2);
        }
    };

    println!(
        "Explored {} placements across {} pieces",
        report.total_placement_count,
        report.per_piece_placement_count.len()
    );

    if solutions.is_empty() {
        println!("No solution found.");
        return ExitCode::from(1);
    }

    println!("Found {} solution(s)", solutions.len());
    if report.truncated {
        println!("(search was cancelled before completion)");
    }

    if let Err(e) = polypack::persistence::save(&solutions) {
        eprintln!("Failed to save solutions: {e}");
    } else {
        println!("Wrote solutions.txt and solutions.bin");
    }

    ExitCode::SUCCESS
}

fn run_show() -> ExitCode {
    match polypack::persistence::load_all() {
        Some(solutions) => {
            for (i, solution) in solutions.iter().enumerate() {
                println!("Solution {}:", i + 1);
                print!("{}", polypack::grid::format_solution(solution));
                println!();
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No solutions.bin found. Run 'polypack solve' first.");
            ExitCode::from(2)
        }
    }
}

fn run_count() -> ExitCode {
    match polypack::persistence::count() {
        Some(count) => {
            println!("{count} solutions");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No solutions.bin found. Run 'polypack solve' first.");
            ExitCode::from(2)
        }
    }
}

fn run_soma(all: bool) -> ExitCode {
    let pieces: Vec<Piece> = polypack::pieces::SOMA_PIECES
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            Piece::new(format!("soma-{i}"), cells.to_vec(), PieceDisplay::default()).unwrap()
        })
        .collect();
    let target = polypack::pieces::box_target(
        polypack::pieces::SOMA_DIM,
        polypack::pieces::SOMA_DIM,
        polypack::pieces::SOMA_DIM,
    );
    let solver = PuzzleSolver::new(pieces, target).unwrap();

    let opts = SolveOptions {
        find_all: all,
        max_solutions: 0,
        cancel: None,
    };
    let (solutions, report) = match solver.solve(&opts) {
        Ok(result) => result,
        Err(e) => {
            error!("solve failed: {e}");
            eprintln!("Internal solver error: {e}");
            return ExitCode::from(2);
        }
    };
    println!("Found {} solution(s)", solutions.len());
    println!(
        "Explored {} placements across {} pieces",
        report.total_placement_count,
        report.per_piece_placement_count.len()
    );

    if solutions.is_empty() {
        return ExitCode::from(1);
    }
    print!("{}", polypack::grid::format_solution(&solutions[0]));
    ExitCode::SUCCESS
}
