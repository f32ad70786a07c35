//! Constraint groups: rows, columns, and 3x3 boxes.

use std::fmt::{self, Display};

use crate::{error::GroupError, field::Field};

/// A view over exactly 9 cells forming one Sudoku constraint set.
///
/// Rows, columns, and 3x3 boxes are all represented by the same type; the
/// board derives a fresh group for the requested coordinate on every query.
/// A group captures the cell values at construction time ([`Field`] is
/// `Copy`), is queried immediately, and is then discarded. Groups are never
/// persisted.
///
/// Two distinct predicates are provided on purpose:
///
/// - [`FieldGroup::verify`] assumes a fully solved grid and treats *any*
///   duplicate, including duplicate empties, as invalid.
/// - [`FieldGroup::is_valid`] tolerates in-progress entry: empty cells never
///   conflict with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    fields: [Field; 9],
}

impl FieldGroup {
    /// Number of cells in every group.
    pub const SIZE: usize = 9;

    /// Creates a group from a slice of exactly 9 fields.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::WrongSize`] if `fields` does not contain
    /// exactly 9 elements.
    pub fn new(fields: &[Field]) -> Result<Self, GroupError> {
        let fields: [Field; 9] = fields
            .try_into()
            .map_err(|_| GroupError::WrongSize { len: fields.len() })?;
        Ok(Self { fields })
    }

    /// Returns the cells of this group in positional order.
    #[must_use]
    pub const fn fields(&self) -> &[Field; 9] {
        &self.fields
    }

    /// Checks a group of a *complete* grid: every pair of members must hold
    /// distinct values.
    ///
    /// Duplicate zeros fail too: a solved grid has no empty cells, so any
    /// repeat is a rule violation.
    #[must_use]
    pub fn verify(&self) -> bool {
        self.scan_pairs(|a, b| a != b)
    }

    /// Checks a group of an *in-progress* grid: nonzero values must be
    /// pairwise distinct, while any number of empty cells is acceptable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scan_pairs(|a, b| a == 0 || b == 0 || a != b)
    }

    fn scan_pairs(&self, ok: impl Fn(u8, u8) -> bool) -> bool {
        for i in 0..Self::SIZE - 1 {
            for j in i + 1..Self::SIZE {
                if !ok(self.fields[i].value(), self.fields[j].value()) {
                    return false;
                }
            }
        }
        true
    }
}

impl From<[Field; 9]> for FieldGroup {
    fn from(fields: [Field; 9]) -> Self {
        Self { fields }
    }
}

impl Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            Display::fmt(field, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(values: [u8; 9]) -> FieldGroup {
        FieldGroup::from(values.map(|v| Field::from_stored(v).unwrap()))
    }

    #[test]
    fn new_requires_exactly_nine_fields() {
        let fields = vec![Field::EMPTY; 9];
        assert!(FieldGroup::new(&fields).is_ok());

        for len in [0, 8, 10] {
            let fields = vec![Field::EMPTY; len];
            assert_eq!(
                FieldGroup::new(&fields),
                Err(GroupError::WrongSize { len })
            );
        }
    }

    #[test]
    fn verify_accepts_a_full_permutation() {
        assert!(group([1, 2, 3, 4, 5, 6, 7, 8, 9]).verify());
        assert!(group([9, 8, 7, 6, 5, 4, 3, 2, 1]).verify());
    }

    #[test]
    fn verify_rejects_repeated_nonzero_values() {
        assert!(!group([1, 2, 3, 4, 5, 6, 7, 8, 2]).verify());
    }

    #[test]
    fn verify_rejects_repeated_empties() {
        // A complete grid has no empty cells, so two zeros are a repeat.
        assert!(!group([0, 0, 3, 4, 5, 6, 7, 8, 9]).verify());
    }

    #[test]
    fn is_valid_exempts_empty_cells() {
        assert!(group([0, 0, 0, 0, 0, 0, 0, 0, 0]).is_valid());
        assert!(group([1, 0, 3, 0, 5, 0, 7, 0, 9]).is_valid());
        assert!(!group([1, 0, 3, 0, 5, 0, 7, 0, 1]).is_valid());
    }

    #[test]
    fn display_lists_values_in_order() {
        assert_eq!(
            group([1, 2, 3, 4, 5, 6, 7, 8, 9]).to_string(),
            "1 2 3 4 5 6 7 8 9"
        );
    }
}
