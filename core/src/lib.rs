//! Presentation core for a task list backed by a remote CRUD API.
//!
//! # Overview
//! Holds the in-memory list of todo items, turns user intents into HTTP
//! requests, applies acknowledged results back to the list and derives the
//! summary counts. The core never touches the network itself
//! (host-does-IO pattern): the host executes each `HttpRequest` and passes
//! the `HttpResponse` back.
//!
//! # Design
//! - `TodoClient` is stateless; it builds requests and parses responses.
//! - `Gateway` owns the `ItemStore` and the advisory `loading` flag. Each
//!   mutation is `begin_*` (produces the request) then `complete` (applies
//!   the outcome, returns a `Notification`).
//! - Store mutation happens only after the server acknowledged; a failure
//!   never reaches the store.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod gateway;
pub mod http;
pub mod notify;
pub mod stats;
pub mod status;
pub mod store;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use form::{AddForm, EditDraft};
pub use gateway::{Gateway, PendingOp};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use notify::{Notification, NotificationKind, Operation};
pub use stats::Stats;
pub use status::{next_status, Status};
pub use store::{startup_items, ItemStore};
pub use types::{TodoItem, TodoPatch};
pub use view::ListView;
