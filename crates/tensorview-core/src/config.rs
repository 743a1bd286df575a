//! View configuration parameters.

/// How [`View::length`](crate::View::length) reports a count that does not
/// fit in an `i32`.
///
/// [`View::size`](crate::View::size) always reports the full count; this
/// policy only affects the signed accessor used by foreign callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Clamp to `i32::MAX`. The reported length stays positive, and every
    /// index up to it is reachable.
    #[default]
    Saturate,
    /// Two's-complement truncation (`count as i32`). Matches hosts built
    /// against the historical behaviour, including its negative lengths.
    Wrap,
}

impl LengthPolicy {
    /// Convert an element count into the signed length reported to callers.
    pub fn apply(self, len: usize) -> i32 {
        match self {
            Self::Saturate => i32::try_from(len).unwrap_or(i32::MAX),
            Self::Wrap => len as i32,
        }
    }
}

/// Configuration for a view.
///
/// Views built without an explicit config use [`ViewConfig::default`].
/// A config is copied into each view; changing it never touches the
/// binding (address, count, owner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    /// Policy for counts beyond `i32::MAX` in [`View::length`](crate::View::length).
    ///
    /// Default: [`LengthPolicy::Saturate`].
    pub length_policy: LengthPolicy,
}

impl ViewConfig {
    /// Default length policy.
    pub const DEFAULT_LENGTH_POLICY: LengthPolicy = LengthPolicy::Saturate;

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self {
            length_policy: Self::DEFAULT_LENGTH_POLICY,
        }
    }

    /// Replace the length policy.
    pub const fn with_length_policy(mut self, length_policy: LengthPolicy) -> Self {
        self.length_policy = length_policy;
        self
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_saturates() {
        assert_eq!(ViewConfig::default().length_policy, LengthPolicy::Saturate);
    }

    #[test]
    fn in_range_counts_identical_under_both_policies() {
        for len in [0usize, 1, 5, i32::MAX as usize] {
            assert_eq!(LengthPolicy::Saturate.apply(len), len as i32);
            assert_eq!(LengthPolicy::Wrap.apply(len), len as i32);
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn over_range_count_saturates_or_wraps() {
        let len = i32::MAX as usize + 1;
        assert_eq!(LengthPolicy::Saturate.apply(len), i32::MAX);
        assert_eq!(LengthPolicy::Wrap.apply(len), i32::MIN);
    }

    #[test]
    fn with_length_policy_replaces_field() {
        let config = ViewConfig::new().with_length_policy(LengthPolicy::Wrap);
        assert_eq!(config.length_policy, LengthPolicy::Wrap);
    }
}
