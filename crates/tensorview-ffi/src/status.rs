//! C-compatible status codes.
//!
//! [`TensorViewStatus`] is a `repr(i32)` enum returned by every fallible
//! entry point. `Ok` is zero; errors are negative and ABI-stable.

use std::ffi::CStr;

use tensorview_core::ViewError;

/// Status code returned by the C accessor functions.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TensorViewStatus {
    /// Success.
    Ok = 0,
    /// Handle is stale, destroyed, or was never issued.
    InvalidHandle = -1,
    /// The 1-based index fell outside `[1, length]`.
    IndexOutOfRange = -2,
    /// A required pointer is null or an argument is otherwise unusable.
    InvalidArgument = -3,
    /// Internal error (e.g. a handle table poisoned by an earlier panic).
    InternalError = -4,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&ViewError> for TensorViewStatus {
    fn from(e: &ViewError) -> Self {
        match e {
            ViewError::IndexOutOfRange { .. } => TensorViewStatus::IndexOutOfRange,
        }
    }
}

impl TensorViewStatus {
    /// Short human-readable description, for host error messages.
    pub fn message(self) -> &'static CStr {
        match self {
            Self::Ok => c"ok",
            Self::InvalidHandle => c"invalid view handle (already destroyed?)",
            Self::IndexOutOfRange => c"view index out of range",
            Self::InvalidArgument => c"invalid argument",
            Self::InternalError => c"internal error",
            Self::Panicked => c"panic caught at FFI boundary",
        }
    }

    /// The status for a raw code, if it is one of ours.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Ok,
            -1 => Self::InvalidHandle,
            -2 => Self::IndexOutOfRange,
            -3 => Self::InvalidArgument,
            -4 => Self::InternalError,
            -128 => Self::Panicked,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_values_are_stable() {
        assert_eq!(TensorViewStatus::Ok as i32, 0);
        assert_eq!(TensorViewStatus::InvalidHandle as i32, -1);
        assert_eq!(TensorViewStatus::IndexOutOfRange as i32, -2);
        assert_eq!(TensorViewStatus::InvalidArgument as i32, -3);
        assert_eq!(TensorViewStatus::InternalError as i32, -4);
        assert_eq!(TensorViewStatus::Panicked as i32, -128);
    }

    #[test]
    fn view_error_maps_to_index_out_of_range() {
        let e = ViewError::IndexOutOfRange { index: 0, len: 3 };
        assert_eq!(
            TensorViewStatus::from(&e),
            TensorViewStatus::IndexOutOfRange
        );
    }

    #[test]
    fn from_code_inverts_discriminant() {
        for status in [
            TensorViewStatus::Ok,
            TensorViewStatus::InvalidHandle,
            TensorViewStatus::IndexOutOfRange,
            TensorViewStatus::InvalidArgument,
            TensorViewStatus::InternalError,
            TensorViewStatus::Panicked,
        ] {
            assert_eq!(TensorViewStatus::from_code(status as i32), Some(status));
            assert!(!status.message().is_empty());
        }
        assert_eq!(TensorViewStatus::from_code(-999), None);
    }
}
