//! Error types raised by the core board model.

use derive_more::{Display, Error};

/// Error raised when a cell is assigned an out-of-range value.
///
/// The only values a [`Field`](crate::Field) accepts through its setter are
/// 1-9. The empty sentinel 0 is reachable exclusively through the dedicated
/// clear operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum FieldError {
    /// The assigned value lies outside the range 1-9.
    #[display("cell value {value} is outside the range 1-9")]
    ValueOutOfRange {
        /// The rejected value.
        #[error(not(source))]
        value: u8,
    },
}

/// Error raised when a [`FieldGroup`](crate::FieldGroup) is constructed from
/// a slice that does not contain exactly 9 fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GroupError {
    /// The group was constructed with the wrong number of members.
    #[display("a field group requires exactly 9 members, got {len}")]
    WrongSize {
        /// Number of fields actually supplied.
        #[error(not(source))]
        len: usize,
    },
}
