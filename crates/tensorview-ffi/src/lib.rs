//! C accessor surface for tensorview views.
//!
//! Exposes [`View`](tensorview_core::View) get/set/length operations as plain
//! `extern "C"` functions over opaque `u64` handles, for a host binding layer
//! to wrap. Every function is named `tensorview_<type>_<op>` for the element
//! types `f32`, `f64`, `i32`, `i64` and `u8`.
//!
//! Indices are 1-based. A failed `set` writes nothing. Stale handles return
//! [`TensorViewStatus::InvalidHandle`] instead of touching freed memory.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an entry-point body, converting a panic into a return value instead
/// of unwinding into the caller. Without a fallback the body returns a
/// status code and a panic becomes `Panicked`.
macro_rules! ffi_guard {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("panic caught at FFI boundary");
                $fallback
            }
        }
    };
    ($body:block) => {
        ffi_guard!($crate::status::TensorViewStatus::Panicked as i32, $body)
    };
}

/// Lock a handle table, returning early from the enclosing guard body if a
/// previous panic poisoned it.
macro_rules! ffi_lock {
    ($table:expr, $fallback:expr) => {
        match $table.lock() {
            Ok(guard) => guard,
            Err(_) => {
                tracing::warn!("view table poisoned by an earlier panic");
                return $fallback;
            }
        }
    };
    ($table:expr) => {
        ffi_lock!(
            $table,
            $crate::status::TensorViewStatus::InternalError as i32
        )
    };
}

mod element;
pub mod exports;
mod handle;
mod ops;
mod release;
pub mod status;

pub use exports::*;
pub use status::TensorViewStatus;
