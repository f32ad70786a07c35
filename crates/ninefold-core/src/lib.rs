//! Core board model for the Ninefold Sudoku application.
//!
//! This crate holds the puzzle-domain types shared by the solver, the
//! generator, the persistence gateway, and the desktop client:
//!
//! - [`field`]: a single cell holding 1-9 or the empty sentinel 0
//! - [`group`]: the 9-cell constraint sets (rows, columns, 3x3 boxes) with
//!   both the strict solved-grid check and the zero-exempt in-progress check
//! - [`board`]: the 9x9 grid owning its cells and an injected [`Solver`]
//! - [`level`]: difficulty tiers and their cell-removal policy
//! - [`solver`]: the solver abstraction (implemented by `ninefold-solver`)
//!
//! The crate never formats user-facing text and never logs; it raises the
//! structured errors in [`error`] and leaves presentation to outer layers.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use ninefold_core::{Board, Solver};
//!
//! #[derive(Debug)]
//! struct NoopSolver;
//!
//! impl Solver for NoopSolver {
//!     fn solve(&self, _board: &mut Board) -> bool {
//!         false
//!     }
//! }
//!
//! let mut board = Board::new(Arc::new(NoopSolver));
//! board.set(0, 0, 5)?;
//! assert!(board.is_valid());
//! assert!(!board.check_board()); // the grid is not complete
//! # Ok::<(), ninefold_core::FieldError>(())
//! ```

pub mod board;
pub mod error;
pub mod field;
pub mod group;
pub mod level;
pub mod solver;

pub use self::{
    board::Board,
    error::{FieldError, GroupError},
    field::Field,
    group::FieldGroup,
    level::Level,
    solver::Solver,
};
