//! The 9x9 board.

use std::{
    fmt::{self, Display},
    sync::Arc,
};

use crate::{
    error::FieldError, field::Field, group::FieldGroup, level::Level, solver::Solver,
};

/// A 9x9 Sudoku grid with an attached solver.
///
/// The board exclusively owns its 81 [`Field`]s in a flat row-major array.
/// Row, column, and box views are derived on demand as [`FieldGroup`]
/// snapshots; they never alias the grid. The solver is injected at
/// construction (it is required by the type, so there is no "missing
/// solver" runtime error) and shared between clones, as it is stateless.
///
/// Equality is structural over the 81 cell values and deliberately ignores
/// solver identity. Cloning deep-copies every cell, so mutating a clone
/// never affects the original.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use ninefold_core::{Board, Solver};
///
/// #[derive(Debug)]
/// struct NoopSolver;
///
/// impl Solver for NoopSolver {
///     fn solve(&self, _board: &mut Board) -> bool {
///         false
///     }
/// }
///
/// let mut board = Board::new(Arc::new(NoopSolver));
/// board.set(0, 0, 5)?;
/// assert_eq!(board.get(0, 0), 5);
///
/// let clone = board.clone();
/// board.clear_cell(0, 0);
/// assert_eq!(clone.get(0, 0), 5);
/// assert_ne!(board, clone);
/// # Ok::<(), ninefold_core::FieldError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Field; 81],
    solver: Arc<dyn Solver>,
}

impl Board {
    /// Side length of the grid.
    pub const SIZE: usize = 9;

    /// Side length of a box.
    pub const BOX_SIZE: usize = 3;

    /// Creates an empty board (all 81 cells unset) owned by `solver`.
    #[must_use]
    pub fn new(solver: Arc<dyn Solver>) -> Self {
        Self {
            cells: [Field::EMPTY; 81],
            solver,
        }
    }

    /// Reconstructs a board from a persisted 9x9 value grid.
    ///
    /// Value 0 is an explicitly empty cell, not a missing one.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ValueOutOfRange`] if any value exceeds 9.
    pub fn from_values(
        solver: Arc<dyn Solver>,
        values: [[u8; 9]; 9],
    ) -> Result<Self, FieldError> {
        let mut board = Self::new(solver);
        for (row, row_values) in values.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                board.cells[Self::index(row, col)] = Field::from_stored(value)?;
            }
        }
        Ok(board)
    }

    /// Returns the 9x9 grid of cell values, the persisted payload of a
    /// board.
    #[must_use]
    pub fn values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for (row, row_values) in values.iter_mut().enumerate() {
            for (col, value) in row_values.iter_mut().enumerate() {
                *value = self.get(row, col);
            }
        }
        values
    }

    fn index(row: usize, col: usize) -> usize {
        assert!(row < Self::SIZE, "row index out of range: {row}");
        assert!(col < Self::SIZE, "column index out of range: {col}");
        row * Self::SIZE + col
    }

    /// Returns the value of the cell at (`row`, `col`), 0 when empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in 0-8.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[Self::index(row, col)].value()
    }

    /// Returns the cell at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in 0-8.
    #[must_use]
    pub fn field(&self, row: usize, col: usize) -> Field {
        self.cells[Self::index(row, col)]
    }

    /// Assigns `value` to the cell at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ValueOutOfRange`] if `value` is not in 1-9;
    /// clearing a cell goes through [`Board::clear_cell`].
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in 0-8.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<(), FieldError> {
        self.cells[Self::index(row, col)].set(value)
    }

    /// Resets the cell at (`row`, `col`) to unset.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in 0-8.
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        self.cells[Self::index(row, col)].clear();
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|field| !field.is_empty())
    }

    /// Derives the group view for row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in 0-8.
    #[must_use]
    pub fn row(&self, row: usize) -> FieldGroup {
        FieldGroup::from(std::array::from_fn(|col| self.field(row, col)))
    }

    /// Derives the group view for column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in 0-8.
    #[must_use]
    pub fn column(&self, col: usize) -> FieldGroup {
        FieldGroup::from(std::array::from_fn(|row| self.field(row, col)))
    }

    /// Derives the group view for the 3x3 box containing (`row`, `col`).
    ///
    /// The box is selected by any coordinate inside it, not by a box index.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in 0-8.
    #[must_use]
    pub fn box_containing(&self, row: usize, col: usize) -> FieldGroup {
        let start_row = row / Self::BOX_SIZE * Self::BOX_SIZE;
        let start_col = col / Self::BOX_SIZE * Self::BOX_SIZE;
        FieldGroup::from(std::array::from_fn(|i| {
            self.field(
                start_row + i / Self::BOX_SIZE,
                start_col + i % Self::BOX_SIZE,
            )
        }))
    }

    /// Checks a board believed to be fully solved: every row, column, and
    /// box must pass the strict [`FieldGroup::verify`] predicate.
    ///
    /// The nine disjoint boxes are each visited exactly once.
    #[must_use]
    pub fn check_board(&self) -> bool {
        for i in 0..Self::SIZE {
            if !self.row(i).verify() || !self.column(i).verify() {
                return false;
            }
        }
        self.for_each_box(FieldGroup::verify)
    }

    /// Checks an in-progress board: nonzero values must not conflict within
    /// any row, column, or box, while empty cells are exempt
    /// ([`FieldGroup::is_valid`]).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        for i in 0..Self::SIZE {
            if !self.row(i).is_valid() || !self.column(i).is_valid() {
                return false;
            }
        }
        self.for_each_box(FieldGroup::is_valid)
    }

    fn for_each_box(&self, predicate: impl Fn(&FieldGroup) -> bool) -> bool {
        for row in (0..Self::SIZE).step_by(Self::BOX_SIZE) {
            for col in (0..Self::SIZE).step_by(Self::BOX_SIZE) {
                if !predicate(&self.box_containing(row, col)) {
                    return false;
                }
            }
        }
        true
    }

    /// Fills the remaining empty cells by delegating to the injected solver.
    ///
    /// Returns the solver's success flag. On failure the grid is left as it
    /// was.
    pub fn solve_game(&mut self) -> bool {
        let solver = Arc::clone(&self.solver);
        solver.solve(self)
    }

    /// Erases cells from a (typically solved) board according to the
    /// difficulty level's removal policy.
    pub fn apply_level(&mut self, level: Level) {
        level.apply(self);
    }

    /// Returns the solver this board delegates to.
    #[must_use]
    pub fn solver(&self) -> &Arc<dyn Solver> {
        &self.solver
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        // Structural equality over the grid; solver identity is irrelevant.
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Self::SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            Display::fmt(&self.row(row), f)?;
        }
        Ok(())
    }
}
