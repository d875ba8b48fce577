//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use taskboard_core::error::ApiError;
use taskboard_core::http::HttpMethod;
use taskboard_core::notify::{Notification, NotificationKind};
use taskboard_core::{Gateway, PendingOp, Stats, TodoItem};

/// Copy `s` into a heap C string owned by the caller. Interior NULs are
/// dropped rather than failing the whole call.
pub(crate) fn to_c_string(s: &str) -> *mut c_char {
    CString::new(s.replace('\0', "")).unwrap_or_default().into_raw()
}

pub(crate) fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Opaque handle to a `Gateway` and the item list it owns.
pub struct FfiGateway {
    pub(crate) inner: Gateway,
}

/// Opaque handle to an operation whose request is waiting on the host.
/// Consumed by `taskboard_complete` or released by `taskboard_pending_free`.
pub struct FfiPendingOp {
    pub(crate) op: PendingOp,
    pub(crate) request: *mut FfiHttpRequest,
}

impl Drop for FfiPendingOp {
    fn drop(&mut self) {
        if !self.request.is_null() {
            free_request(self.request);
            self.request = std::ptr::null_mut();
        }
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Post = 0,
    Patch = 1,
    Delete = 2,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Patch => FfiHttpMethod::Patch,
            HttpMethod::Delete => FfiHttpMethod::Delete,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Owned by its `FfiPendingOp`; the C caller reads it through
/// `taskboard_pending_request` and never frees it directly.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: taskboard_core::HttpRequest) -> *mut Self {
        let path = to_c_string(&req.path);
        let body = match req.body {
            Some(b) => to_c_string(&b),
            None => std::ptr::null_mut(),
        };

        let headers_len = saturating_u32(req.headers.len());
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .iter()
                .map(|(k, v)| FfiHeader {
                    key: to_c_string(k),
                    value: to_c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path,
            headers,
            headers_len,
            body,
        }))
    }
}

/// Release an `FfiHttpRequest` built by `from_core`.
pub(crate) fn free_request(req: *mut FfiHttpRequest) {
    let req = unsafe { Box::from_raw(req) };
    free_c_string(req.path);
    free_c_string(req.body);
    if !req.headers.is_null() && req.headers_len > 0 {
        let headers = unsafe {
            Box::from_raw(std::ptr::slice_from_raw_parts_mut(req.headers, req.headers_len as usize))
        };
        for h in headers.iter() {
            free_c_string(h.key);
            free_c_string(h.value);
        }
    }
}

pub(crate) fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to `taskboard_complete`. The FFI layer reads but
/// does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Begin result envelope
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiBeginResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    EmptyMessage = 1,
    InvalidStatus = 2,
    Serialization = 3,
    Panic = 4,
    NullArg = 5,
    InvalidArg = 6,
    IdsExhausted = 7,
}

/// Result envelope for every `taskboard_begin_*` call.
///
/// On success `error_code` is `Ok`, `error_message` is null and `op` holds
/// the pending operation. Ownership of `op` passes to the caller: it must be
/// handed to `taskboard_complete` or `taskboard_pending_free`, and is NOT
/// released by `taskboard_free_begin_result`.
#[repr(C)]
pub struct FfiBeginResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub op: *mut FfiPendingOp,
}

impl FfiBeginResult {
    pub(crate) fn ok(op: PendingOp, request: taskboard_core::HttpRequest) -> *mut Self {
        let pending = Box::new(FfiPendingOp {
            op,
            request: FfiHttpRequest::from_core(request),
        });
        Box::into_raw(Box::new(FfiBeginResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            op: Box::into_raw(pending),
        }))
    }

    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let code = match &err {
            ApiError::EmptyMessage => FfiErrorCode::EmptyMessage,
            ApiError::IdsExhausted => FfiErrorCode::IdsExhausted,
            _ => FfiErrorCode::Serialization,
        };
        Self::error(code, &err.to_string())
    }

    pub(crate) fn invalid_status(label: &str) -> *mut Self {
        Self::error(FfiErrorCode::InvalidStatus, &format!("unrecognized status: {label}"))
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::error(FfiErrorCode::NullArg, &format!("null argument: {name}"))
    }

    pub(crate) fn invalid_arg(name: &str) -> *mut Self {
        Self::error(FfiErrorCode::InvalidArg, &format!("argument is not valid UTF-8: {name}"))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::error(FfiErrorCode::Panic, msg)
    }

    fn error(error_code: FfiErrorCode, msg: &str) -> *mut Self {
        Box::into_raw(Box::new(FfiBeginResult {
            error_code,
            error_message: to_c_string(msg),
            op: std::ptr::null_mut(),
        }))
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiNotificationKind {
    Success = 0,
    Failure = 1,
}

/// A transient message for the host to show for `duration_ms`.
#[repr(C)]
pub struct FfiNotification {
    pub kind: FfiNotificationKind,
    pub title: *mut c_char,
    pub description: *mut c_char,
    pub duration_ms: u32,
}

impl FfiNotification {
    pub(crate) fn from_core(note: Notification) -> *mut Self {
        let kind = match note.kind {
            NotificationKind::Success => FfiNotificationKind::Success,
            NotificationKind::Failure => FfiNotificationKind::Failure,
        };
        Box::into_raw(Box::new(FfiNotification {
            kind,
            title: to_c_string(note.title),
            description: to_c_string(note.description),
            duration_ms: u32::try_from(note.duration.as_millis()).unwrap_or(u32::MAX),
        }))
    }
}

/// A single todo item exposed to C.
#[repr(C)]
pub struct FfiTodo {
    pub id: u64,
    pub message: *mut c_char,
    pub status: *mut c_char,
}

/// A snapshot of the item list, in display order.
#[repr(C)]
pub struct FfiTodoList {
    pub items: *mut FfiTodo,
    pub len: u32,
}

impl FfiTodoList {
    pub(crate) fn from_items(items: &[TodoItem]) -> *mut Self {
        // Longer lists are cut to what `len` can describe.
        let items = &items[..items.len().min(u32::MAX as usize)];
        let len = saturating_u32(items.len());
        let items = if items.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_items: Box<[FfiTodo]> = items
                .iter()
                .map(|t| FfiTodo {
                    id: t.id,
                    message: to_c_string(&t.message),
                    status: to_c_string(&t.status),
                })
                .collect();
            Box::into_raw(ffi_items) as *mut FfiTodo
        };
        Box::into_raw(Box::new(FfiTodoList { items, len }))
    }
}

/// Derived counts, returned by value.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FfiStats {
    pub total: u32,
    pub pending: u32,
    pub in_progress: u32,
    pub completed: u32,
}

impl From<Stats> for FfiStats {
    fn from(s: Stats) -> Self {
        Self {
            total: saturating_u32(s.total),
            pending: saturating_u32(s.pending),
            in_progress: saturating_u32(s.in_progress),
            completed: saturating_u32(s.completed),
        }
    }
}
