//! External index translation.
//!
//! Callers address elements with 1-based indices. Storage is always 0-based.
//! [`to_offset`] is the only conversion from the first to the second; nothing
//! else in the crate adds or subtracts the base.

use crate::error::ViewError;

/// The external index of the first element.
pub const INDEX_BASE: i64 = 1;

/// Translate a 1-based external `index` into a 0-based offset into a buffer
/// of `len` elements.
///
/// Returns [`ViewError::IndexOutOfRange`] unless `1 <= index <= len`.
#[inline]
pub fn to_offset(index: i64, len: usize) -> Result<usize, ViewError> {
    if index < INDEX_BASE {
        return Err(ViewError::IndexOutOfRange { index, len });
    }
    // index >= 1, so this cannot underflow.
    let offset = (index - INDEX_BASE) as u64;
    match usize::try_from(offset) {
        Ok(offset) if offset < len => Ok(offset),
        _ => Err(ViewError::IndexOutOfRange { index, len }),
    }
}

/// Translate a 0-based `offset` back into its external index.
///
/// Returns `None` if the index is not representable as an `i64`.
#[cfg(test)]
pub(crate) fn to_index(offset: usize) -> Option<i64> {
    i64::try_from(offset).ok()?.checked_add(INDEX_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_index_map_to_extent_ends() {
        assert_eq!(to_offset(1, 5), Ok(0));
        assert_eq!(to_offset(5, 5), Ok(4));
    }

    #[test]
    fn zero_and_negative_indices_rejected() {
        assert_eq!(
            to_offset(0, 5),
            Err(ViewError::IndexOutOfRange { index: 0, len: 5 })
        );
        assert!(to_offset(-1, 5).is_err());
        assert!(to_offset(i64::MIN, 5).is_err());
    }

    #[test]
    fn past_the_end_rejected() {
        assert_eq!(
            to_offset(6, 5),
            Err(ViewError::IndexOutOfRange { index: 6, len: 5 })
        );
        assert!(to_offset(i64::MAX, 5).is_err());
    }

    #[test]
    fn empty_extent_has_no_valid_index() {
        assert!(to_offset(1, 0).is_err());
        assert!(to_offset(0, 0).is_err());
    }

    #[test]
    fn to_index_inverts_offset() {
        assert_eq!(to_index(0), Some(1));
        assert_eq!(to_index(41), Some(42));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn valid_indices_round_trip(len in 1usize..10_000, pick in any::<prop::sample::Index>()) {
                let index = pick.index(len) as i64 + 1;
                let offset = to_offset(index, len).unwrap();
                prop_assert!(offset < len);
                prop_assert_eq!(to_index(offset), Some(index));
            }

            #[test]
            fn out_of_domain_always_rejected(len in 0usize..10_000, index in any::<i64>()) {
                let in_domain = index >= 1 && (index as u64) <= len as u64;
                prop_assert_eq!(to_offset(index, len).is_ok(), in_domain);
            }
        }
    }
}
