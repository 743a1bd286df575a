//! Shared workloads for the tensorview benchmarks.
//!
//! A 640×640×3 `f32` image is the reference payload: large enough that a
//! copy per hand-off would dominate, small enough to stay in memory.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use tensorview_core::View;

/// Element count of the reference image payload.
pub const IMAGE_LEN: usize = 640 * 640 * 3;

/// A view over a zero-filled reference image.
pub fn image_view() -> View<f32> {
    View::zeroed(IMAGE_LEN)
}

/// Sum every element through the bounds-checked 1-based accessor.
pub fn sum_via_get(view: &View<f32>) -> f32 {
    let mut acc = 0.0;
    for i in 1..=view.size() as i64 {
        if let Ok(v) = view.get(i) {
            acc += v;
        }
    }
    acc
}

/// Write `value` to every element through the accessor.
pub fn fill_via_set(view: &mut View<f32>, value: f32) {
    for i in 1..=view.size() as i64 {
        let _ = view.set(i, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_then_sum_covers_every_element() {
        let mut view = View::zeroed(100);
        fill_via_set(&mut view, 0.5);
        assert_eq!(sum_via_get(&view), 50.0);
    }

    #[test]
    fn image_view_has_reference_size() {
        assert_eq!(image_view().size(), IMAGE_LEN);
    }
}
