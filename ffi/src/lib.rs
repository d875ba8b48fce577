//! C-ABI wrapper around `taskboard-core`.
//!
//! # Overview
//! Exposes the task-list gateway through `extern "C"` functions so a host
//! written in any language (a browser shell, a native UI) can hold the list,
//! drive mutations and read derived stats while doing the HTTP itself.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A mutation is `taskboard_begin_*` (returns an `FfiBeginResult` holding
//!   an opaque `FfiPendingOp`), then the host executes the request from
//!   `taskboard_pending_request`, then `taskboard_complete` applies the
//!   response and returns the notification to show.
//! - The C caller owns all returned pointers and must call the matching
//!   `taskboard_free_*` function to release them.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::catch_unwind;
use std::str::Utf8Error;

use taskboard_core::{next_status, ApiError, ClientConfig, Gateway, HttpResponse, Status, TodoClient, TodoPatch};

use types::*;

/// Read an optional C string argument. Invalid UTF-8 reads as empty.
fn opt_str<'a>(s: *const c_char) -> Option<&'a str> {
    checked_str(s).unwrap_or(Some(""))
}

/// Read an optional C string argument that is stored as-is, so invalid
/// UTF-8 is an error rather than an empty string.
fn checked_str<'a>(s: *const c_char) -> Result<Option<&'a str>, Utf8Error> {
    if s.is_null() {
        Ok(None)
    } else {
        unsafe { CStr::from_ptr(s) }.to_str().map(Some)
    }
}

// ---------------------------------------------------------------------------
// Gateway lifecycle
// ---------------------------------------------------------------------------

/// Create a gateway seeded with the startup items.
///
/// A null `base_url` reads the base URL from `TODO_API_BASE` (falling back
/// to `http://localhost:8000`). Returns null if an internal panic occurs.
/// The caller must free the returned pointer with `taskboard_gateway_free`.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_gateway_new(base_url: *const c_char) -> *mut FfiGateway {
    catch_unwind(|| {
        let client = match opt_str(base_url) {
            Some(url) => TodoClient::new(url),
            None => TodoClient::from_config(&ClientConfig::from_env()),
        };
        Box::into_raw(Box::new(FfiGateway {
            inner: Gateway::new(client),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a gateway created by `taskboard_gateway_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_gateway_free(gateway: *mut FfiGateway) {
    if !gateway.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(gateway) });
        });
    }
}

// ---------------------------------------------------------------------------
// Read-side
// ---------------------------------------------------------------------------

/// Whether any operation is in flight. Advisory only. False for null.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_is_loading(gateway: *const FfiGateway) -> bool {
    if gateway.is_null() {
        return false;
    }
    catch_unwind(|| unsafe { &*gateway }.inner.is_loading()).unwrap_or(false)
}

/// Counts by status for the current list. All zero for null.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_stats(gateway: *const FfiGateway) -> FfiStats {
    if gateway.is_null() {
        return FfiStats::default();
    }
    catch_unwind(|| FfiStats::from(unsafe { &*gateway }.inner.stats())).unwrap_or_default()
}

/// Snapshot of the current list in display order.
///
/// Returns null if `gateway` is null. Free with `taskboard_free_items`.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_items(gateway: *const FfiGateway) -> *mut FfiTodoList {
    catch_unwind(|| {
        if gateway.is_null() {
            return std::ptr::null_mut();
        }
        FfiTodoList::from_items(unsafe { &*gateway }.inner.items())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// The status label that follows `current` in the cycle. Unrecognized or
/// null input yields `"Pending"`. Free with `taskboard_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_next_status(current: *const c_char) -> *mut c_char {
    catch_unwind(|| to_c_string(next_status(opt_str(current).unwrap_or("")).label()))
        .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Begin functions
// ---------------------------------------------------------------------------

/// Start adding a todo. `status` must be one of the three canonical labels
/// (any case). A blank `message` is rejected with `EmptyMessage` and nothing
/// is sent.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_begin_add(
    gateway: *mut FfiGateway,
    message: *const c_char,
    status: *const c_char,
) -> *mut FfiBeginResult {
    catch_unwind(|| {
        if gateway.is_null() {
            return FfiBeginResult::null_arg("gateway");
        }
        let message = match checked_str(message) {
            Ok(Some(message)) => message,
            Ok(None) => return FfiBeginResult::null_arg("message"),
            Err(_) => return FfiBeginResult::invalid_arg("message"),
        };
        let label = match checked_str(status) {
            Ok(Some(label)) => label,
            Ok(None) => return FfiBeginResult::null_arg("status"),
            Err(_) => return FfiBeginResult::invalid_arg("status"),
        };
        let Some(status) = Status::from_label(label) else {
            return FfiBeginResult::invalid_status(label);
        };
        let gateway = unsafe { &mut *gateway };
        match gateway.inner.begin_add(message, status) {
            Ok((op, req)) => FfiBeginResult::ok(op, req),
            Err(e) => FfiBeginResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiBeginResult::panic("panic in taskboard_begin_add"))
}

/// Start a partial update. `message` and `status` may each be null to leave
/// that field out of the patch. Either one holding invalid UTF-8 is rejected
/// with `InvalidArg` and nothing is sent.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_begin_update(
    gateway: *mut FfiGateway,
    id: u64,
    message: *const c_char,
    status: *const c_char,
) -> *mut FfiBeginResult {
    catch_unwind(|| {
        if gateway.is_null() {
            return FfiBeginResult::null_arg("gateway");
        }
        let Ok(message) = checked_str(message) else {
            return FfiBeginResult::invalid_arg("message");
        };
        let Ok(status) = checked_str(status) else {
            return FfiBeginResult::invalid_arg("status");
        };
        let patch = TodoPatch {
            message: message.map(str::to_string),
            status: status.map(str::to_string),
        };
        let gateway = unsafe { &mut *gateway };
        match gateway.inner.begin_update(id, patch) {
            Ok((op, req)) => FfiBeginResult::ok(op, req),
            Err(e) => FfiBeginResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiBeginResult::panic("panic in taskboard_begin_update"))
}

/// Start moving `id` to the next status in the cycle.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_begin_cycle_status(gateway: *mut FfiGateway, id: u64) -> *mut FfiBeginResult {
    catch_unwind(|| {
        if gateway.is_null() {
            return FfiBeginResult::null_arg("gateway");
        }
        let gateway = unsafe { &mut *gateway };
        match gateway.inner.begin_cycle_status(id) {
            Ok((op, req)) => FfiBeginResult::ok(op, req),
            Err(e) => FfiBeginResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiBeginResult::panic("panic in taskboard_begin_cycle_status"))
}

#[unsafe(no_mangle)]
pub extern "C" fn taskboard_begin_delete(gateway: *mut FfiGateway, id: u64) -> *mut FfiBeginResult {
    catch_unwind(|| {
        if gateway.is_null() {
            return FfiBeginResult::null_arg("gateway");
        }
        let gateway = unsafe { &mut *gateway };
        let (op, req) = gateway.inner.begin_delete(id);
        FfiBeginResult::ok(op, req)
    })
    .unwrap_or_else(|_| FfiBeginResult::panic("panic in taskboard_begin_delete"))
}

/// The request the host must execute for `op`. Borrowed: valid until `op`
/// is completed or freed. Null if `op` is null.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_pending_request(op: *const FfiPendingOp) -> *const FfiHttpRequest {
    catch_unwind(|| {
        if op.is_null() {
            return std::ptr::null();
        }
        let pending = unsafe { &*op };
        pending.request.cast_const()
    })
    .unwrap_or(std::ptr::null())
}

// ---------------------------------------------------------------------------
// Complete
// ---------------------------------------------------------------------------

fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    HttpResponse::new(resp.status, opt_str(resp.body).unwrap_or(""))
}

/// Finish `op` with the host's response and return the notification to show.
///
/// Pass a null `response` when no response could be obtained (network
/// failure). `op` is consumed and must not be used afterwards. Returns null
/// if `gateway` or `op` is null (in which case `op` is left untouched).
/// Free the result with `taskboard_free_notification`.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_complete(
    gateway: *mut FfiGateway,
    op: *mut FfiPendingOp,
    response: *const FfiHttpResponse,
) -> *mut FfiNotification {
    catch_unwind(|| {
        if gateway.is_null() || op.is_null() {
            return std::ptr::null_mut();
        }
        let gateway = unsafe { &mut *gateway };
        let pending = unsafe { Box::from_raw(op) };
        let outcome = if response.is_null() {
            Err(ApiError::Transport("host reported no response".to_string()))
        } else {
            Ok(ffi_response_to_core(unsafe { &*response }))
        };
        let note = gateway.inner.complete(pending.op.clone(), outcome);
        FfiNotification::from_core(note)
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Abandon a pending op without completing it. The gateway's loading flag
/// is left as it is. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_pending_free(op: *mut FfiPendingOp) {
    if !op.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(op) });
        });
    }
}

/// Free an `FfiBeginResult`, but not the `op` it carries. Safe with null.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_free_begin_result(result: *mut FfiBeginResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
    });
}

/// Free an `FfiNotification` returned by `taskboard_complete`. Safe with null.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_free_notification(note: *mut FfiNotification) {
    if note.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let note = unsafe { Box::from_raw(note) };
        free_c_string(note.title);
        free_c_string(note.description);
    });
}

/// Free an `FfiTodoList` returned by `taskboard_items`. Safe with null.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_free_items(list: *mut FfiTodoList) {
    if list.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let list = unsafe { Box::from_raw(list) };
        if !list.items.is_null() && list.len > 0 {
            let items = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(list.items, list.len as usize))
            };
            for item in items.iter() {
                free_c_string(item.message);
                free_c_string(item.status);
            }
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn taskboard_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| free_c_string(s));
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
