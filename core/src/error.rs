//! Error types for the task-list core.
//!
//! # Design
//! Users only ever see one generic failure per operation, so the variants
//! here exist for logging and for the FFI envelope. There is no `NotFound`:
//! a 404 is just another `HttpError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The message was empty after trimming; nothing was sent.
    #[error("todo message must not be empty")]
    EmptyMessage,

    /// The store already holds `u64::MAX`, so there is no `max + 1` to send.
    #[error("no todo id left after {}", u64::MAX)]
    IdsExhausted,

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// No response was obtained (connection refused, DNS, reset...).
    #[error("transport failed: {0}")]
    Transport(String),
}
