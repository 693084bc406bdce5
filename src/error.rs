//! The error and result types shared by every table.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A table cannot be built with zero slots.
    #[error("capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
    /// Every probe of an open-address table hit a slot holding another key.
    #[error("no free slot for a new key in a table of {capacity} slots")]
    Overflow { capacity: usize },
}

pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            "capacity must be at least 1, got 0",
            format!("{}", TableError::InvalidCapacity(0))
        );
        assert_eq!(
            "no free slot for a new key in a table of 8 slots",
            format!("{}", TableError::Overflow { capacity: 8 })
        );
    }
}
