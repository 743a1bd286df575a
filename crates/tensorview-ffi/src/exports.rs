//! `extern "C"` entry points, one family per element type.
//!
//! Each family shares the same contract:
//!
//! - `wrap` binds an unowned view. The caller keeps the buffer alive until
//!   every handle over it is destroyed.
//! - `wrap_owned` binds a view over a host buffer together with a release
//!   callback. The callback runs exactly once, after the last handle sharing
//!   the buffer is destroyed, and never while a table lock is held.
//! - `alloc` binds a view over a new zero-filled buffer that lives as long
//!   as the last handle sharing it.
//! - `get`/`set` take 1-based indices and return
//!   [`TensorViewStatus::IndexOutOfRange`] outside `[1, length]`.
//! - The query functions return a neutral value for stale handles: `-1`
//!   from `length`, `0` from `size`, null from `data`, `true` from `empty`,
//!   `false` from `is_valid`.

use std::ffi::{c_char, c_void};

use crate::ops;
use crate::status::TensorViewStatus;

/// Host callback releasing the buffer behind a `wrap_owned` view. Receives
/// the `ctx` pointer given at wrap time.
pub type TensorViewRelease = extern "C" fn(ctx: *mut c_void);

/// Static, NUL-terminated description of a status code.
///
/// Unknown codes yield a generic message. The pointer is never null and
/// must not be freed.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_status_message(code: i32) -> *const c_char {
    match TensorViewStatus::from_code(code) {
        Some(status) => status.message().as_ptr(),
        None => c"unknown tensorview status".as_ptr(),
    }
}

// ── f32 ───────────────────────────────────────────────────────

/// Wrap `len` caller-owned `f32` elements at `data` in a new view handle.
///
/// `data` may be null only when `len` is 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_wrap(data: *mut f32, len: usize, out: *mut u64) -> i32 {
    ops::wrap(data, len, out)
}

/// Wrap `len` host-owned `f32` elements at `data`, handing their release to
/// `release(ctx)`.
///
/// A null `release` is `InvalidArgument`. On `InvalidArgument` the host keeps
/// the buffer and `release` is not called.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_wrap_owned(
    data: *mut f32,
    len: usize,
    ctx: *mut c_void,
    release: Option<TensorViewRelease>,
    out: *mut u64,
) -> i32 {
    ops::wrap_owned(data, len, ctx, release, out)
}

/// Allocate a zero-filled `f32` buffer of `len` elements and return a view over it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_alloc(len: usize, out: *mut u64) -> i32 {
    ops::alloc::<f32>(len, out)
}

/// Create a second handle sharing the same buffer and owner.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_clone(handle: u64, out: *mut u64) -> i32 {
    ops::clone::<f32>(handle, out)
}

/// Destroy a handle, releasing its share of the owner.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_destroy(handle: u64) -> i32 {
    ops::destroy::<f32>(handle)
}

/// Read the element at 1-based `index` into `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_get(handle: u64, index: i64, out: *mut f32) -> i32 {
    ops::get(handle, index, out)
}

/// Write `value` at 1-based `index`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_set(handle: u64, index: i64, value: f32) -> i32 {
    ops::set(handle, index, value)
}

/// Element count as `i32`, saturated at `INT32_MAX`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_length(handle: u64) -> i32 {
    ops::length::<f32>(handle)
}

/// Element count.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_size(handle: u64) -> usize {
    ops::size::<f32>(handle)
}

/// Raw address of the first element. No bounds are enforced through it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_data(handle: u64) -> *mut f32 {
    ops::data::<f32>(handle)
}

/// Whether the view has no elements.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_empty(handle: u64) -> bool {
    ops::empty::<f32>(handle)
}

/// Whether the handle is live and its address non-null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f32_is_valid(handle: u64) -> bool {
    ops::is_valid::<f32>(handle)
}

// ── f64 ───────────────────────────────────────────────────────

/// Wrap `len` caller-owned `f64` elements at `data` in a new view handle.
///
/// `data` may be null only when `len` is 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_wrap(data: *mut f64, len: usize, out: *mut u64) -> i32 {
    ops::wrap(data, len, out)
}

/// Wrap `len` host-owned `f64` elements at `data`, handing their release to
/// `release(ctx)`.
///
/// A null `release` is `InvalidArgument`. On `InvalidArgument` the host keeps
/// the buffer and `release` is not called.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_wrap_owned(
    data: *mut f64,
    len: usize,
    ctx: *mut c_void,
    release: Option<TensorViewRelease>,
    out: *mut u64,
) -> i32 {
    ops::wrap_owned(data, len, ctx, release, out)
}

/// Allocate a zero-filled `f64` buffer of `len` elements and return a view over it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_alloc(len: usize, out: *mut u64) -> i32 {
    ops::alloc::<f64>(len, out)
}

/// Create a second handle sharing the same buffer and owner.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_clone(handle: u64, out: *mut u64) -> i32 {
    ops::clone::<f64>(handle, out)
}

/// Destroy a handle, releasing its share of the owner.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_destroy(handle: u64) -> i32 {
    ops::destroy::<f64>(handle)
}

/// Read the element at 1-based `index` into `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_get(handle: u64, index: i64, out: *mut f64) -> i32 {
    ops::get(handle, index, out)
}

/// Write `value` at 1-based `index`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_set(handle: u64, index: i64, value: f64) -> i32 {
    ops::set(handle, index, value)
}

/// Element count as `i32`, saturated at `INT32_MAX`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_length(handle: u64) -> i32 {
    ops::length::<f64>(handle)
}

/// Element count.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_size(handle: u64) -> usize {
    ops::size::<f64>(handle)
}

/// Raw address of the first element. No bounds are enforced through it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_data(handle: u64) -> *mut f64 {
    ops::data::<f64>(handle)
}

/// Whether the view has no elements.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_empty(handle: u64) -> bool {
    ops::empty::<f64>(handle)
}

/// Whether the handle is live and its address non-null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_f64_is_valid(handle: u64) -> bool {
    ops::is_valid::<f64>(handle)
}

// ── i32 ───────────────────────────────────────────────────────

/// Wrap `len` caller-owned `i32` elements at `data` in a new view handle.
///
/// `data` may be null only when `len` is 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_wrap(data: *mut i32, len: usize, out: *mut u64) -> i32 {
    ops::wrap(data, len, out)
}

/// Wrap `len` host-owned `i32` elements at `data`, handing their release to
/// `release(ctx)`.
///
/// A null `release` is `InvalidArgument`. On `InvalidArgument` the host keeps
/// the buffer and `release` is not called.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_wrap_owned(
    data: *mut i32,
    len: usize,
    ctx: *mut c_void,
    release: Option<TensorViewRelease>,
    out: *mut u64,
) -> i32 {
    ops::wrap_owned(data, len, ctx, release, out)
}

/// Allocate a zero-filled `i32` buffer of `len` elements and return a view over it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_alloc(len: usize, out: *mut u64) -> i32 {
    ops::alloc::<i32>(len, out)
}

/// Create a second handle sharing the same buffer and owner.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_clone(handle: u64, out: *mut u64) -> i32 {
    ops::clone::<i32>(handle, out)
}

/// Destroy a handle, releasing its share of the owner.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_destroy(handle: u64) -> i32 {
    ops::destroy::<i32>(handle)
}

/// Read the element at 1-based `index` into `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_get(handle: u64, index: i64, out: *mut i32) -> i32 {
    ops::get(handle, index, out)
}

/// Write `value` at 1-based `index`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_set(handle: u64, index: i64, value: i32) -> i32 {
    ops::set(handle, index, value)
}

/// Element count as `i32`, saturated at `INT32_MAX`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_length(handle: u64) -> i32 {
    ops::length::<i32>(handle)
}

/// Element count.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_size(handle: u64) -> usize {
    ops::size::<i32>(handle)
}

/// Raw address of the first element. No bounds are enforced through it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_data(handle: u64) -> *mut i32 {
    ops::data::<i32>(handle)
}

/// Whether the view has no elements.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_empty(handle: u64) -> bool {
    ops::empty::<i32>(handle)
}

/// Whether the handle is live and its address non-null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i32_is_valid(handle: u64) -> bool {
    ops::is_valid::<i32>(handle)
}

// ── i64 ───────────────────────────────────────────────────────

/// Wrap `len` caller-owned `i64` elements at `data` in a new view handle.
///
/// `data` may be null only when `len` is 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_wrap(data: *mut i64, len: usize, out: *mut u64) -> i32 {
    ops::wrap(data, len, out)
}

/// Wrap `len` host-owned `i64` elements at `data`, handing their release to
/// `release(ctx)`.
///
/// A null `release` is `InvalidArgument`. On `InvalidArgument` the host keeps
/// the buffer and `release` is not called.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_wrap_owned(
    data: *mut i64,
    len: usize,
    ctx: *mut c_void,
    release: Option<TensorViewRelease>,
    out: *mut u64,
) -> i32 {
    ops::wrap_owned(data, len, ctx, release, out)
}

/// Allocate a zero-filled `i64` buffer of `len` elements and return a view over it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_alloc(len: usize, out: *mut u64) -> i32 {
    ops::alloc::<i64>(len, out)
}

/// Create a second handle sharing the same buffer and owner.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_clone(handle: u64, out: *mut u64) -> i32 {
    ops::clone::<i64>(handle, out)
}

/// Destroy a handle, releasing its share of the owner.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_destroy(handle: u64) -> i32 {
    ops::destroy::<i64>(handle)
}

/// Read the element at 1-based `index` into `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_get(handle: u64, index: i64, out: *mut i64) -> i32 {
    ops::get(handle, index, out)
}

/// Write `value` at 1-based `index`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_set(handle: u64, index: i64, value: i64) -> i32 {
    ops::set(handle, index, value)
}

/// Element count as `i32`, saturated at `INT32_MAX`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_length(handle: u64) -> i32 {
    ops::length::<i64>(handle)
}

/// Element count.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_size(handle: u64) -> usize {
    ops::size::<i64>(handle)
}

/// Raw address of the first element. No bounds are enforced through it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_data(handle: u64) -> *mut i64 {
    ops::data::<i64>(handle)
}

/// Whether the view has no elements.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_empty(handle: u64) -> bool {
    ops::empty::<i64>(handle)
}

/// Whether the handle is live and its address non-null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_i64_is_valid(handle: u64) -> bool {
    ops::is_valid::<i64>(handle)
}

// ── u8 ───────────────────────────────────────────────────────

/// Wrap `len` caller-owned `u8` elements at `data` in a new view handle.
///
/// `data` may be null only when `len` is 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_wrap(data: *mut u8, len: usize, out: *mut u64) -> i32 {
    ops::wrap(data, len, out)
}

/// Wrap `len` host-owned `u8` elements at `data`, handing their release to
/// `release(ctx)`.
///
/// A null `release` is `InvalidArgument`. On `InvalidArgument` the host keeps
/// the buffer and `release` is not called.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_wrap_owned(
    data: *mut u8,
    len: usize,
    ctx: *mut c_void,
    release: Option<TensorViewRelease>,
    out: *mut u64,
) -> i32 {
    ops::wrap_owned(data, len, ctx, release, out)
}

/// Allocate a zero-filled `u8` buffer of `len` elements and return a view over it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_alloc(len: usize, out: *mut u64) -> i32 {
    ops::alloc::<u8>(len, out)
}

/// Create a second handle sharing the same buffer and owner.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_clone(handle: u64, out: *mut u64) -> i32 {
    ops::clone::<u8>(handle, out)
}

/// Destroy a handle, releasing its share of the owner.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_destroy(handle: u64) -> i32 {
    ops::destroy::<u8>(handle)
}

/// Read the element at 1-based `index` into `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_get(handle: u64, index: i64, out: *mut u8) -> i32 {
    ops::get(handle, index, out)
}

/// Write `value` at 1-based `index`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_set(handle: u64, index: i64, value: u8) -> i32 {
    ops::set(handle, index, value)
}

/// Element count as `i32`, saturated at `INT32_MAX`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_length(handle: u64) -> i32 {
    ops::length::<u8>(handle)
}

/// Element count.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_size(handle: u64) -> usize {
    ops::size::<u8>(handle)
}

/// Raw address of the first element. No bounds are enforced through it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_data(handle: u64) -> *mut u8 {
    ops::data::<u8>(handle)
}

/// Whether the view has no elements.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_empty(handle: u64) -> bool {
    ops::empty::<u8>(handle)
}

/// Whether the handle is live and its address non-null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensorview_u8_is_valid(handle: u64) -> bool {
    ops::is_valid::<u8>(handle)
}
