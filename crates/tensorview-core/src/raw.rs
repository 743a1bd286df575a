//! Heap buffers owned by a view token.
//!
//! Every `unsafe` block here carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::fmt;

/// A heap buffer released when the last [`Owner`](crate::Owner) share drops.
///
/// The buffer is held as a raw pointer and never accessed through a Rust
/// reference, so views may write into it through their own raw pointers.
pub struct OwnedBuffer<T> {
    raw: *mut [T],
}

// SAFETY: OwnedBuffer never reads or writes its elements; it only frees them
// on drop, which moves `T` values to whichever thread drops the last share.
unsafe impl<T: Send> Send for OwnedBuffer<T> {}
// SAFETY: `&OwnedBuffer` exposes only the pointer and length, never the elements.
unsafe impl<T: Send> Sync for OwnedBuffer<T> {}

impl<T> OwnedBuffer<T> {
    /// Take ownership of the elements of `vec`. Excess capacity is released.
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self {
            raw: Box::into_raw(vec.into_boxed_slice()),
        }
    }

    /// Pointer to the first element. Dangling (but non-null) when empty.
    pub fn as_mut_ptr(&self) -> *mut T {
        self.raw.cast::<T>()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Drop for OwnedBuffer<T> {
    fn drop(&mut self) {
        // SAFETY: `raw` came from `Box::into_raw` in `from_vec` and is freed
        // exactly once, here.
        drop(unsafe { Box::from_raw(self.raw) });
    }
}

impl<T> fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("ptr", &self.as_mut_ptr())
            .field("len", &self.len())
            .finish()
    }
}
