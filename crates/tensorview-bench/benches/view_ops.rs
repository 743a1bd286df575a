//! Criterion micro-benchmarks for view accessors against plain slices.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tensorview_bench::{fill_via_set, image_view, sum_via_get, IMAGE_LEN};
use tensorview_core::View;
use tensorview_test_utils::probed_view;

#[allow(clippy::needless_range_loop)]
fn bench_get(c: &mut Criterion) {
    let view = image_view();
    c.bench_function("view_get_image", |b| {
        b.iter(|| black_box(sum_via_get(black_box(&view))));
    });

    let slice = vec![0.0f32; IMAGE_LEN];
    c.bench_function("slice_index_image", |b| {
        b.iter(|| {
            let s = black_box(&slice);
            let mut acc = 0.0f32;
            for i in 0..s.len() {
                acc += s[i];
            }
            black_box(acc)
        });
    });
}

fn bench_set(c: &mut Criterion) {
    let mut view = image_view();
    c.bench_function("view_set_image", |b| {
        b.iter(|| fill_via_set(black_box(&mut view), black_box(1.0)));
    });
}

fn bench_share(c: &mut Criterion) {
    let (view, _counter) = probed_view(vec![0.0f32; IMAGE_LEN]);
    c.bench_function("view_clone_drop", |b| {
        b.iter(|| {
            let copy = black_box(&view).clone();
            black_box(copy.size())
        });
    });

    let payload = vec![0.0f32; IMAGE_LEN];
    c.bench_function("vec_copy_handoff", |b| {
        b.iter(|| {
            let copy = View::from_vec(black_box(&payload).clone());
            black_box(copy.size())
        });
    });
}

criterion_group!(benches, bench_get, bench_set, bench_share);
criterion_main!(benches);
