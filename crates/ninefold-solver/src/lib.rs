//! Backtracking solver for the Ninefold Sudoku application.
//!
//! Implements the [`ninefold_core::Solver`] trait with a randomized
//! depth-first backtracking search. See [`BacktrackingSolver`] for the
//! algorithm and [`solve_with`] for the injectable-randomness entry point.

pub use self::backtracking::{BacktrackingSolver, solve_with};

mod backtracking;
