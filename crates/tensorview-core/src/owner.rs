//! Shared ownership tokens.
//!
//! An [`Owner`] is a type-erased, atomically reference-counted handle whose
//! only job is to keep a backing buffer alive. Views never look inside it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A shared, reference-counted token that keeps a backing buffer alive.
///
/// Cloning increments the share count; dropping decrements it. Whatever the
/// token wraps is dropped when the last share goes away.
#[derive(Clone)]
pub struct Owner(Arc<dyn Any + Send + Sync>);

impl Owner {
    /// Wrap `value` in a new token with a share count of one.
    pub fn new<O: Any + Send + Sync>(value: O) -> Self {
        Self(Arc::new(value))
    }

    /// Share an existing `Arc` as a token without reallocating.
    pub fn from_arc<O: Any + Send + Sync>(value: Arc<O>) -> Self {
        Self(value)
    }

    /// Number of live holders of this token, including `self`.
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// The wrapped value, if it is an `O`.
    pub fn downcast_ref<O: Any>(&self) -> Option<&O> {
        self.0.downcast_ref::<O>()
    }

    /// Whether `a` and `b` are shares of the same token.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owner")
            .field("shares", &self.share_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_increments_and_drop_decrements() {
        let a = Owner::new(vec![0u8; 4]);
        assert_eq!(a.share_count(), 1);
        let b = a.clone();
        assert_eq!(a.share_count(), 2);
        drop(b);
        assert_eq!(a.share_count(), 1);
    }

    #[test]
    fn from_arc_shares_existing_count() {
        let data = Arc::new(vec![1.0f32, 2.0]);
        let owner = Owner::from_arc(Arc::clone(&data));
        assert_eq!(Arc::strong_count(&data), 2);
        assert_eq!(owner.share_count(), 2);
        drop(owner);
        assert_eq!(Arc::strong_count(&data), 1);
    }

    #[test]
    fn downcast_recovers_concrete_type() {
        let owner = Owner::new(String::from("buffer"));
        assert_eq!(owner.downcast_ref::<String>().map(String::as_str), Some("buffer"));
        assert!(owner.downcast_ref::<Vec<u8>>().is_none());
    }

    #[test]
    fn ptr_eq_distinguishes_tokens() {
        let a = Owner::new(1u32);
        let b = a.clone();
        let c = Owner::new(1u32);
        assert!(Owner::ptr_eq(&a, &b));
        assert!(!Owner::ptr_eq(&a, &c));
    }
}
