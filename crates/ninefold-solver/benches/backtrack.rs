//! Benchmarks for the randomized backtracking solver.
//!
//! Measures a complete fill of an empty 9x9 board for a handful of fixed
//! seeds, so runs are comparable across machines and commits.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::{hint, sync::Arc, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use ninefold_core::Board;
use ninefold_solver::BacktrackingSolver;

const SEEDS: [u64; 3] = [0xc1d4_4bd6, 0xa2b3_c4d5, 0x1234_5678];

fn bench_solve_empty(c: &mut Criterion) {
    for seed in SEEDS {
        let solver = Arc::new(BacktrackingSolver::with_seed(seed));
        c.bench_with_input(
            BenchmarkId::new("solve_empty", format!("seed_{seed:x}")),
            &solver,
            |b, solver| {
                b.iter_batched(
                    || hint::black_box(Board::new(Arc::clone(solver))),
                    |mut board| {
                        let solved = board.solve_game();
                        assert!(solved);
                        board
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets = bench_solve_empty
);
criterion_main!(benches);
