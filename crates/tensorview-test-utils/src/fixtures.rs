//! Owner probes and pre-filled views.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tensorview_core::{OwnedBuffer, Owner, View};

/// Shared count of how many [`DropProbe`]s have been dropped.
#[derive(Clone, Debug, Default)]
pub struct DropCounter(Arc<AtomicUsize>);

impl DropCounter {
    /// A counter with no drops recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of probes dropped so far.
    pub fn drops(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// A new probe reporting to this counter.
    pub fn probe<T: Send + 'static>(&self, buffer: OwnedBuffer<T>) -> DropProbe<T> {
        DropProbe {
            buffer,
            counter: self.clone(),
        }
    }
}

/// An owner that holds a buffer and bumps a [`DropCounter`] when released.
///
/// Wrap it in an [`Owner`] to observe exactly when the last view share goes
/// away.
#[derive(Debug)]
pub struct DropProbe<T> {
    buffer: OwnedBuffer<T>,
    counter: DropCounter,
}

impl<T> DropProbe<T> {
    /// The buffer this probe keeps alive.
    pub fn buffer(&self) -> &OwnedBuffer<T> {
        &self.buffer
    }
}

impl<T> Drop for DropProbe<T> {
    fn drop(&mut self) {
        self.counter.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// A view over `data`, owned by a [`DropProbe`] reporting to the returned
/// counter.
#[allow(unsafe_code)]
pub fn probed_view<T: Send + 'static>(data: Vec<T>) -> (View<T>, DropCounter) {
    let counter = DropCounter::new();
    let probe = counter.probe(OwnedBuffer::from_vec(data));
    let ptr = probe.buffer().as_mut_ptr();
    let len = probe.buffer().len();
    // SAFETY: the probe owns the buffer and the view holds the probe.
    let view = unsafe { View::from_raw_parts(ptr, len, Some(Owner::new(probe))) };
    (view, counter)
}

/// A view over `1, 2, ..., len` converted into `T`.
pub fn sequence_view<T>(len: usize) -> View<T>
where
    T: Copy + Send + 'static + From<u8>,
{
    View::from_vec((0..len).map(|i| T::from((i % 251) as u8 + 1)).collect())
}
