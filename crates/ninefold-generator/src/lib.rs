//! Puzzle generation for the Ninefold Sudoku application.
//!
//! Composes the full "new game" flow: an empty board is solved by the
//! backtracking solver, the solution is deep-copied, and the difficulty
//! level's removal policy erases cells from the copy to produce the
//! playable problem grid.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::Level;
//! use ninefold_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new(Level::Medium).generate();
//! assert!(puzzle.solution.check_board());
//! assert!(puzzle.problem.is_valid());
//! ```

use std::sync::Arc;

use ninefold_core::{Board, Level};
use ninefold_solver::BacktrackingSolver;
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// A generated puzzle: the playable problem grid, its solution, and the
/// seed that produced both.
///
/// Feeding the seed back into [`PuzzleGenerator::generate_seeded`]
/// reproduces the puzzle exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid, with the level's cell count removed.
    pub problem: Board,
    /// The fully solved grid the problem was cut from.
    pub solution: Board,
    /// Seed that reproduces this puzzle.
    pub seed: u64,
}

/// Generates puzzles at a fixed difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    level: Level,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty level.
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    /// The difficulty level this generator removes cells for.
    #[must_use]
    pub const fn level(self) -> Level {
        self.level
    }

    /// Generates a puzzle from a random seed.
    #[must_use]
    pub fn generate(self) -> GeneratedPuzzle {
        self.generate_seeded(rand::rng().random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The seed drives both the solver's candidate shuffles and the removal
    /// coordinates, so equal seeds yield identical problem and solution
    /// grids.
    #[must_use]
    pub fn generate_seeded(self, seed: u64) -> GeneratedPuzzle {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);

        let solver = Arc::new(BacktrackingSolver::with_seed(rng.random()));
        let mut solution = Board::new(solver);
        let solved = solution.solve_game();
        debug_assert!(solved, "an empty 9x9 grid is always solvable");

        let mut problem = solution.clone();
        self.level.apply_with(&mut problem, &mut rng);

        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}
