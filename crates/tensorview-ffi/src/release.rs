//! Owner tokens for host buffers released through a callback.

use std::ffi::c_void;

use crate::exports::TensorViewRelease;

/// Runs the host's release callback once, when the last view sharing it is
/// destroyed.
pub(crate) struct HostRelease {
    ctx: *mut c_void,
    release: TensorViewRelease,
}

impl HostRelease {
    pub(crate) fn new(ctx: *mut c_void, release: TensorViewRelease) -> Self {
        Self { ctx, release }
    }
}

// SAFETY: the context pointer is never dereferenced here. It is handed back
// to the host's callback, which the host promised may run on any thread.
#[allow(unsafe_code)]
unsafe impl Send for HostRelease {}
#[allow(unsafe_code)]
unsafe impl Sync for HostRelease {}

impl Drop for HostRelease {
    fn drop(&mut self) {
        tracing::trace!(ctx = ?self.ctx, "releasing host buffer");
        (self.release)(self.ctx);
    }
}
