//! Single-cell representation.

use std::fmt::{self, Display};

use crate::error::FieldError;

/// A single Sudoku cell holding a value in the range 1-9, or 0 for "empty".
///
/// The range invariant is enforced at every mutation: [`Field::set`] rejects
/// anything outside 1-9, and 0 is only reachable through [`Field::clear`].
/// Fields order and compare by their numeric value.
///
/// # Examples
///
/// ```
/// use ninefold_core::Field;
///
/// let mut field = Field::EMPTY;
/// assert!(field.is_empty());
///
/// field.set(7)?;
/// assert_eq!(field.value(), 7);
///
/// field.clear();
/// assert_eq!(field.value(), 0);
/// # Ok::<(), ninefold_core::FieldError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Field {
    value: u8,
}

impl Field {
    /// An unset cell (value 0).
    pub const EMPTY: Self = Self { value: 0 };

    /// Creates a field directly from a stored value, accepting the empty
    /// sentinel 0 as well as 1-9.
    ///
    /// This is the reconstruction path for persisted boards, where 0 is a
    /// legitimate "explicitly empty" payload value.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ValueOutOfRange`] if `value` is greater than 9.
    pub const fn from_stored(value: u8) -> Result<Self, FieldError> {
        if value > 9 {
            return Err(FieldError::ValueOutOfRange { value });
        }
        Ok(Self { value })
    }

    /// Returns the numeric value of this cell (0 when empty).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Returns `true` if this cell is unset.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.value == 0
    }

    /// Assigns a value to this cell.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ValueOutOfRange`] if `value` is not in 1-9.
    /// Clearing a cell goes through [`Field::clear`], never through `set(0)`.
    pub const fn set(&mut self, value: u8) -> Result<(), FieldError> {
        if value == 0 || value > 9 {
            return Err(FieldError::ValueOutOfRange { value });
        }
        self.value = value;
        Ok(())
    }

    /// Resets this cell to unset (value 0) unconditionally.
    ///
    /// Used both by the solver's backtracking rollback and by difficulty
    /// removal.
    pub const fn clear(&mut self) {
        self.value = 0;
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl From<Field> for u8 {
    fn from(field: Field) -> u8 {
        field.value()
    }
}
