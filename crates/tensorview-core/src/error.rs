//! View error types.

use std::error::Error;
use std::fmt;

/// Errors raised by the view accessors.
///
/// Only [`View::get`](crate::View::get) and [`View::set`](crate::View::set)
/// fail. Construction and the size queries are infallible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The 1-based index fell outside `[1, len]`.
    IndexOutOfRange {
        /// The external index supplied by the caller.
        index: i64,
        /// Element count of the view.
        len: usize,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len: 0 } => {
                write!(f, "view index {index} out of range: view is empty")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "view index {index} out of range [1, {len}]")
            }
        }
    }
}

impl Error for ViewError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_index_and_bounds() {
        let e = ViewError::IndexOutOfRange { index: 6, len: 5 };
        assert_eq!(e.to_string(), "view index 6 out of range [1, 5]");
    }

    #[test]
    fn display_for_empty_view() {
        let e = ViewError::IndexOutOfRange { index: 1, len: 0 };
        assert_eq!(e.to_string(), "view index 1 out of range: view is empty");
    }
}
