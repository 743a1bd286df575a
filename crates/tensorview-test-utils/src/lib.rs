//! Test fixtures for tensorview development.
//!
//! Provides a drop-counting [`DropProbe`] for observing when an owner token
//! releases its buffer, and helpers for building pre-filled views.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{probed_view, sequence_view, DropCounter, DropProbe};
