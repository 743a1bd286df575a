//! tensorview: zero-copy array views for foreign callers.
//!
//! This is the facade crate re-exporting the public API of
//! `tensorview-core`. The C accessor surface lives in `tensorview-ffi`.
//!
//! # Quick start
//!
//! ```rust
//! use tensorview::prelude::*;
//!
//! // Native side: a large buffer, shared rather than copied.
//! let pixels = vec![0.0f32; 640 * 640 * 3];
//! let mut view = View::from_vec(pixels);
//!
//! // Foreign side: 1-based accessors and a signed length.
//! view.set(1, 0.5).unwrap();
//! assert_eq!(view.get(1), Ok(0.5));
//! assert_eq!(view.length(), 640 * 640 * 3);
//! assert!(matches!(view.get(0), Err(ViewError::IndexOutOfRange { .. })));
//!
//! // Copies share the buffer and its owner.
//! let copy = view.clone();
//! drop(view);
//! assert_eq!(copy.get(1), Ok(0.5));
//! assert_eq!(copy.owner().map(Owner::share_count), Some(1));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use tensorview_core::{config, error, index, owner, view};
pub use tensorview_core::{LengthPolicy, OwnedBuffer, Owner, View, ViewConfig, ViewError};

/// Convenience re-exports for the common case.
pub mod prelude {
    pub use tensorview_core::{LengthPolicy, Owner, View, ViewConfig, ViewError};
}
