//! The solver abstraction a board is constructed with.

use std::fmt::Debug;

use crate::board::Board;

/// Fills the remaining empty cells of a board.
///
/// A board requires a solver at construction and delegates
/// [`Board::solve_game`](crate::Board::solve_game) to it. Implementations
/// must be stateless with respect to the board: the same solver instance may
/// be shared (via `Arc`) by any number of boards, including clones of each
/// other.
///
/// The only implementation shipped today is the randomized backtracking
/// solver in `ninefold-solver`; the trait keeps the seam open for
/// substitutes such as a deterministic or uniqueness-checking solver.
pub trait Solver: Debug + Send + Sync {
    /// Attempts to fill every empty cell of `board` so that all rows,
    /// columns, and boxes hold distinct digits.
    ///
    /// Returns `true` on success. On failure the board's previously filled
    /// cells are left untouched.
    fn solve(&self, board: &mut Board) -> bool;
}
