//! Benchmarks for the polycube packing solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use polypack::geometry::all_orientations;
use polypack::grid::format_solution;
use polypack::pieces::{box_target, Piece, PieceDisplay, SOMA_DIM, SOMA_PIECES};
use polypack::solver::{solve, SolveOptions};
use polypack::symmetry::dedup_by_cube_symmetry;

fn soma_pieces() -> Vec<Piece> {
    SOMA_PIECES
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            Piece::new(format!("soma-{i}"), cells.to_vec(), PieceDisplay::default()).unwrap()
        })
        .collect()
}

/// Benchmark the complete puzzle solving process (find all solutions).
fn bench_solve(c: &mut Criterion) {
    let pieces = soma_pieces();
    let target = box_target(SOMA_DIM, SOMA_DIM, SOMA_DIM);
    let opts = SolveOptions {
        find_all: true,
        max_solutions: 0,
        cancel: None,
    };

    c.bench_function("solve_soma_cube", |b| {
        b.iter(|| solve(black_box(&pieces), black_box(&target), black_box(&opts)).unwrap())
    });
}

/// Benchmark computing all orientations for a single piece.
fn bench_orientations(c: &mut Criterion) {
    let piece = SOMA_PIECES[0]; // L-shaped piece (4 cubes)

    c.bench_function("all_orientations", |b| {
        b.iter(|| all_orientations(black_box(piece)))
    });
}

/// Benchmark the post-hoc symmetry dedup over the full Soma solution set.
fn bench_symmetry_dedup(c: &mut Criterion) {
    let pieces = soma_pieces();
    let target = box_target(SOMA_DIM, SOMA_DIM, SOMA_DIM);
    let opts = SolveOptions {
        find_all: true,
        max_solutions: 0,
        cancel: None,
    };
    let (solutions, _) = solve(&pieces, &target, &opts).unwrap();

    c.bench_function("dedup_by_cube_symmetry", |b| {
        b.iter(|| dedup_by_cube_symmetry(black_box(solutions.clone()), SOMA_DIM, None))
    });
}

/// Benchmark formatting a solution for display.
fn bench_format_solution(c: &mut Criterion) {
    let pieces = soma_pieces();
    let target = box_target(SOMA_DIM, SOMA_DIM, SOMA_DIM);
    let opts = SolveOptions::default();
    let (solutions, _) = solve(&pieces, &target, &opts).unwrap();
    let solution = &solutions[0];

    c.bench_function("format_solution", |b| {
        b.iter(|| format_solution(black_box(solution)))
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_orientations,
    bench_symmetry_dedup,
    bench_format_solution
);
criterion_main!(benches);
