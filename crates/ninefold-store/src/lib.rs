//! Persistence gateway for the Ninefold Sudoku application.
//!
//! Boards are saved to and restored from named slots through the
//! [`BoardStore`] trait, with two interchangeable backends:
//!
//! - [`FileBoardStore`]: one JSON file per board inside a directory
//! - [`DbBoardStore`]: embedded SQLite with one header row per board and 81
//!   cell rows, written transactionally
//!
//! Only the 81 cell values are persisted; a board read back is owned by a
//! fresh backtracking solver. [`StoreBackend`] selects a backend at
//! runtime.

use ninefold_core::Board;
use std::path::PathBuf;

pub use self::{db::DbBoardStore, error::StoreError, file::FileBoardStore};

mod db;
mod error;
mod file;

/// A named-slot save/load facility for boards.
///
/// Implementations must make `write` atomic from the reader's perspective:
/// after a failed write, `read` and `names` behave as if the write had
/// never been attempted.
pub trait BoardStore: std::fmt::Debug {
    /// Persists `board` under `name`, replacing or rejecting an existing
    /// slot depending on the backend.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyName`] if `name` is empty, or a backend
    /// error if the medium rejects the write.
    fn write(&mut self, board: &Board, name: &str) -> Result<(), StoreError>;

    /// Restores the board stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no slot exists under `name`, or
    /// a backend error if the payload cannot be read back.
    fn read(&self, name: &str) -> Result<Board, StoreError>;

    /// Enumerates all stored board names, sorted; an empty store yields an
    /// empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the medium cannot be enumerated.
    fn names(&self) -> Result<Vec<String>, StoreError>;
}

/// Selects and opens a persistence backend.
///
/// # Examples
///
/// ```no_run
/// use ninefold_store::StoreBackend;
///
/// let store = StoreBackend::File("saves".into()).open()?;
/// # Ok::<(), ninefold_store::StoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// File store rooted at the given directory.
    File(PathBuf),
    /// SQLite store at the given database path.
    Database(PathBuf),
}

impl StoreBackend {
    /// Opens the selected backend.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file store's directory cannot be
    /// created, or [`StoreError::Database`] if the database cannot be
    /// opened.
    pub fn open(&self) -> Result<Box<dyn BoardStore>, StoreError> {
        match self {
            Self::File(dir) => Ok(Box::new(FileBoardStore::new(dir.clone())?)),
            Self::Database(path) => Ok(Box::new(DbBoardStore::open(path)?)),
        }
    }
}

#[cfg(test)]
mod testing {
    use std::sync::Arc;

    use ninefold_core::{Board, Level};
    use ninefold_solver::BacktrackingSolver;

    /// A mid-game board with both filled and empty cells.
    pub(crate) fn sample_board() -> Board {
        let mut board = Board::new(Arc::new(BacktrackingSolver::with_seed(11)));
        let solved = board.solve_game();
        assert!(solved);
        board.apply_level(Level::Medium);
        board
    }
}
