//! Element-generic bodies of the C entry points.
//!
//! `exports` instantiates each function once per element type.

#![allow(unsafe_code)]

use std::ffi::c_void;

use tracing::{debug, warn};

use tensorview_core::{Owner, View, ViewError};

use crate::element::Element;
use crate::exports::TensorViewRelease;
use crate::release::HostRelease;
use crate::status::TensorViewStatus;

fn stale(op: &'static str, ty: &'static str, handle: u64) -> i32 {
    warn!(op, ty, handle, "stale or unknown view handle");
    TensorViewStatus::InvalidHandle as i32
}

/// `stale` for the liveness queries, where a dead handle is an expected answer.
fn unresolved(op: &'static str, ty: &'static str, handle: u64) -> i32 {
    debug!(op, ty, handle, "handle does not address a live view");
    TensorViewStatus::InvalidHandle as i32
}

fn rejected(op: &'static str, ty: &'static str, err: &ViewError) -> i32 {
    debug!(op, ty, %err, "view access rejected");
    TensorViewStatus::from(err) as i32
}

fn invalid_argument(op: &'static str, ty: &'static str) -> i32 {
    debug!(op, ty, "null pointer argument");
    TensorViewStatus::InvalidArgument as i32
}

fn publish<T: Element>(view: View<T>, out: *mut u64) -> i32 {
    let handle = ffi_lock!(T::views()).insert(view);
    // SAFETY: callers check `out` for null before building the view.
    unsafe { *out = handle };
    TensorViewStatus::Ok as i32
}

pub(crate) fn wrap<T: Element>(data: *mut T, len: usize, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() || (data.is_null() && len > 0) {
            return invalid_argument("wrap", T::NAME);
        }
        // SAFETY: the caller keeps `len` elements at `data` alive until every
        // handle over them is destroyed.
        let view = unsafe { View::from_raw_parts(data, len, None) };
        publish(view, out)
    })
}

pub(crate) fn wrap_owned<T: Element>(
    data: *mut T,
    len: usize,
    ctx: *mut c_void,
    release: Option<TensorViewRelease>,
    out: *mut u64,
) -> i32 {
    ffi_guard!({
        let Some(release) = release else {
            return invalid_argument("wrap_owned", T::NAME);
        };
        if out.is_null() || (data.is_null() && len > 0) {
            return invalid_argument("wrap_owned", T::NAME);
        }
        let owner = Owner::new(HostRelease::new(ctx, release));
        // SAFETY: the host keeps `len` elements at `data` alive until
        // `release` runs, which is after the last share of `owner` drops.
        let view = unsafe { View::from_raw_parts(data, len, Some(owner)) };
        publish(view, out)
    })
}

pub(crate) fn alloc<T: Element>(len: usize, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return invalid_argument("alloc", T::NAME);
        }
        publish(View::<T>::zeroed(len), out)
    })
}

pub(crate) fn clone<T: Element>(handle: u64, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return invalid_argument("clone", T::NAME);
        }
        let mut table = ffi_lock!(T::views());
        let Some(view) = table.view(handle).cloned() else {
            return stale("clone", T::NAME, handle);
        };
        let copy = table.insert(view);
        // SAFETY: checked non-null above.
        unsafe { *out = copy };
        TensorViewStatus::Ok as i32
    })
}

pub(crate) fn destroy<T: Element>(handle: u64) -> i32 {
    ffi_guard!({
        let (removed, live) = {
            let mut table = ffi_lock!(T::views());
            (table.remove(handle), table.live())
        };
        // The view, and any host release it triggers, drops after the lock
        // is released.
        match removed {
            Some(_) => {
                debug!(ty = T::NAME, handle, live, "view destroyed");
                TensorViewStatus::Ok as i32
            }
            None => stale("destroy", T::NAME, handle),
        }
    })
}

pub(crate) fn get<T: Element>(handle: u64, index: i64, out: *mut T) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return invalid_argument("get", T::NAME);
        }
        let table = ffi_lock!(T::views());
        let Some(view) = table.view(handle) else {
            return stale("get", T::NAME, handle);
        };
        match view.get(index) {
            Ok(value) => {
                // SAFETY: checked non-null above.
                unsafe { *out = value };
                TensorViewStatus::Ok as i32
            }
            Err(e) => rejected("get", T::NAME, &e),
        }
    })
}

pub(crate) fn set<T: Element>(handle: u64, index: i64, value: T) -> i32 {
    ffi_guard!({
        let mut table = ffi_lock!(T::views());
        let Some(view) = table.view_mut(handle) else {
            return stale("set", T::NAME, handle);
        };
        match view.set(index, value) {
            Ok(()) => TensorViewStatus::Ok as i32,
            Err(e) => rejected("set", T::NAME, &e),
        }
    })
}

type StaleLog = fn(&'static str, &'static str, u64) -> i32;

/// Apply `f` to the view behind `handle`, or report it with `on_stale` and
/// return `missing`.
fn query<T, R, F>(op: &'static str, handle: u64, missing: R, on_stale: StaleLog, f: F) -> R
where
    T: Element,
    R: Copy,
    F: FnOnce(&View<T>) -> R,
{
    ffi_guard!(missing, {
        let table = ffi_lock!(T::views(), missing);
        match table.view(handle) {
            Some(view) => f(view),
            None => {
                on_stale(op, T::NAME, handle);
                missing
            }
        }
    })
}

pub(crate) fn length<T: Element>(handle: u64) -> i32 {
    query::<T, _, _>("length", handle, -1, stale, View::<T>::length)
}

pub(crate) fn size<T: Element>(handle: u64) -> usize {
    query::<T, _, _>("size", handle, 0, stale, View::<T>::size)
}

pub(crate) fn data<T: Element>(handle: u64) -> *mut T {
    query::<T, _, _>("data", handle, std::ptr::null_mut(), stale, View::<T>::data)
}

pub(crate) fn empty<T: Element>(handle: u64) -> bool {
    query::<T, _, _>("empty", handle, true, unresolved, View::<T>::is_empty)
}

pub(crate) fn is_valid<T: Element>(handle: u64) -> bool {
    query::<T, _, _>("is_valid", handle, false, unresolved, View::<T>::is_valid)
}
