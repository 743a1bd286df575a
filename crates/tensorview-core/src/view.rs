//! The zero-copy [`View`] adapter.

#![allow(unsafe_code)]

use std::fmt;

use tracing::{trace, warn};

use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::index;
use crate::owner::Owner;
use crate::raw::OwnedBuffer;

/// A fixed-length, 1-based, read/write window onto memory owned elsewhere.
///
/// A view is the triple `(data, len, owner)` plus a [`ViewConfig`]. It never
/// copies, resizes, or reallocates the backing buffer. Cloning a view
/// duplicates the triple and adds a share to the owner token, so every clone
/// observes every other clone's writes.
///
/// Views are neither `Send` nor `Sync`: they perform no synchronization.
///
/// # Example
///
/// ```
/// use tensorview_core::View;
///
/// let mut view = View::<f32>::zeroed(5);
/// view.set(1, 2.5).unwrap();
/// assert_eq!(view.get(1), Ok(2.5));
/// assert_eq!(view.get(5), Ok(0.0));
/// assert!(view.get(6).is_err());
/// assert_eq!(view.length(), 5);
/// ```
pub struct View<T> {
    data: *mut T,
    len: usize,
    owner: Option<Owner>,
    config: ViewConfig,
}

static_assertions::assert_not_impl_any!(View<f32>: Send, Sync);

impl<T> View<T> {
    /// An empty view: null address, zero length, no owner.
    pub const fn new() -> Self {
        Self {
            data: std::ptr::null_mut(),
            len: 0,
            owner: None,
            config: ViewConfig::new(),
        }
    }

    /// Bind a view to `len` elements starting at `data`.
    ///
    /// `owner`, if given, is held for the lifetime of this view and of every
    /// clone of it. Nothing about `data` or `len` is validated.
    ///
    /// # Safety
    ///
    /// If `len > 0`, `data` must point to `len` initialized, properly aligned
    /// elements of `T` that stay valid, and are not accessed through any Rust
    /// reference, for as long as this view or any clone of it exists. Holding
    /// an `owner` that keeps the buffer alive satisfies the liveness half of
    /// this contract; without one it is entirely the caller's obligation.
    pub unsafe fn from_raw_parts(data: *mut T, len: usize, owner: Option<Owner>) -> Self {
        trace!(len, owned = owner.is_some(), "view bound to raw extent");
        Self {
            data,
            len,
            owner,
            config: ViewConfig::new(),
        }
    }

    /// The same binding with a different configuration.
    pub fn with_config(mut self, config: ViewConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration this view was built with.
    pub fn config(&self) -> ViewConfig {
        self.config
    }

    /// Element count as a signed 32-bit integer, for foreign callers.
    ///
    /// Counts above `i32::MAX` follow the configured
    /// [`LengthPolicy`](crate::LengthPolicy). Use [`size`](Self::size) for
    /// the full range.
    pub fn length(&self) -> i32 {
        let policy = self.config.length_policy;
        if self.len > i32::MAX as usize {
            warn!(len = self.len, ?policy, "view count exceeds i32 range");
        }
        policy.apply(self.len)
    }

    /// Element count.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Raw address of the first element.
    ///
    /// No bounds are enforced through this pointer, and it carries the same
    /// liveness contract as [`from_raw_parts`](Self::from_raw_parts).
    pub fn data(&self) -> *mut T {
        self.data
    }

    /// Whether the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the address is non-null.
    ///
    /// This is a sanity check, not a liveness check: an unowned view can be
    /// valid and still point at released memory.
    pub fn is_valid(&self) -> bool {
        !self.data.is_null()
    }

    /// The ownership token, if the view holds one.
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    /// Borrow the extent as a slice.
    ///
    /// # Safety
    ///
    /// The [`from_raw_parts`](Self::from_raw_parts) contract must hold, and no
    /// view over the same buffer may write while the slice is alive.
    pub unsafe fn as_slice(&self) -> &[T] {
        if self.data.is_null() {
            return &[];
        }
        // SAFETY: non-null, and the caller upholds the construction contract.
        unsafe { std::slice::from_raw_parts(self.data, self.len) }
    }

    /// Borrow the extent as a mutable slice.
    ///
    /// # Safety
    ///
    /// The [`from_raw_parts`](Self::from_raw_parts) contract must hold, and no
    /// other view over the same buffer may be used while the slice is alive.
    pub unsafe fn as_mut_slice(&mut self) -> &mut [T] {
        if self.data.is_null() {
            return &mut [];
        }
        // SAFETY: non-null, and the caller upholds the construction contract.
        unsafe { std::slice::from_raw_parts_mut(self.data, self.len) }
    }
}

impl<T: Send + 'static> View<T> {
    /// A view over the elements of `vec`, which the view's owner token takes
    /// over and frees when the last clone drops.
    pub fn from_vec(vec: Vec<T>) -> Self {
        let buffer = OwnedBuffer::from_vec(vec);
        let data = buffer.as_mut_ptr();
        let len = buffer.len();
        // SAFETY: the buffer is owned by the token, which the view holds, and
        // OwnedBuffer never hands out references to its elements.
        unsafe { Self::from_raw_parts(data, len, Some(Owner::new(buffer))) }
    }
}

impl<T: Copy + Send + 'static> View<T> {
    /// A view over a new owned buffer of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self::from_vec(vec![value; len])
    }
}

impl<T: Copy + Default + Send + 'static> View<T> {
    /// A view over a new owned buffer of `len` default (zero) elements.
    pub fn zeroed(len: usize) -> Self {
        Self::filled(len, T::default())
    }
}

impl<T: Copy> View<T> {
    /// The element at 1-based `index`.
    pub fn get(&self, index: i64) -> Result<T, ViewError> {
        let offset = index::to_offset(index, self.len)?;
        // SAFETY: offset < len, and the construction contract guarantees len
        // live elements at `data`.
        Ok(unsafe { self.data.add(offset).read() })
    }

    /// Write `value` at 1-based `index`.
    ///
    /// The write lands in the backing buffer and is visible to every view over
    /// it. On error nothing is written.
    pub fn set(&mut self, index: i64, value: T) -> Result<(), ViewError> {
        let offset = index::to_offset(index, self.len)?;
        // SAFETY: as in `get`.
        unsafe { self.data.add(offset).write(value) };
        Ok(())
    }

    /// Copy the elements out into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        // SAFETY: the slice does not outlive this call, and `&self` rules out
        // a write through this view meanwhile.
        unsafe { self.as_slice() }.to_vec()
    }
}

impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            len: self.len,
            owner: self.owner.clone(),
            config: self.config,
        }
    }
}

impl<T> Default for View<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for View<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("data", &self.data)
            .field("len", &self.len)
            .field("owner", &self.owner)
            .field("config", &self.config)
            .finish()
    }
}
