//! Zero-copy, bounds-checked views over externally owned buffers.
//!
//! A [`View<T>`] exposes a contiguous run of `T` owned by somebody else to a
//! foreign caller without copying it. Elements are addressed with 1-based
//! external indices, translated to 0-based offsets in exactly one place
//! ([`index::to_offset`]).
//!
//! # Ownership
//!
//! ```text
//! View<T> ── ptr ──▶ [T; len]  (backing buffer, owned elsewhere)
//!    │
//!    └── Option<Owner> ──▶ Arc<dyn Any + Send + Sync>
//!                          (keeps the backing buffer alive)
//! ```
//!
//! - **With an owner:** cloning a view shares the token; the buffer is freed
//!   when the last holder drops.
//! - **Without an owner:** the caller keeps the buffer alive. The view never
//!   checks liveness.
//!
//! # Thread safety
//!
//! Views perform no synchronization and are neither `Send` nor `Sync`.
//! Concurrent access to one buffer through several views is a data race
//! unless the caller serializes it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod index;
pub mod owner;
mod raw;
pub mod view;

pub use config::{LengthPolicy, ViewConfig};
pub use error::ViewError;
pub use owner::Owner;
pub use raw::OwnedBuffer;
pub use view::View;
