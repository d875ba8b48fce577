//! Sequences remote calls with local store mutation and user feedback.
//!
//! # Design
//! Every mutation is split at its suspension point. `begin_*` validates the
//! intent, builds the `HttpRequest` and raises `loading`; the host executes
//! the request; `complete` applies the outcome to the store, lowers
//! `loading` and returns the notification to show. The store is only ever
//! touched inside `complete`, strictly after the server acknowledged.
//!
//! `loading` is one flag shared by all operations and is advisory: nothing
//! stops a host from beginning a second operation while one is in flight,
//! and the first completion lowers the flag for both.

use tracing::{debug, info, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::notify::{Notification, Operation};
use crate::stats::Stats;
use crate::status::{next_status, Status};
use crate::store::ItemStore;
use crate::types::{TodoItem, TodoPatch};

/// An operation whose request has been handed to the host. Passed back to
/// [`Gateway::complete`] together with the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOp {
    Add,
    Update { id: u64, patch: TodoPatch },
    Delete { id: u64 },
}

impl PendingOp {
    pub fn operation(&self) -> Operation {
        match self {
            PendingOp::Add => Operation::Add,
            PendingOp::Update { .. } => Operation::Update,
            PendingOp::Delete { .. } => Operation::Delete,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Gateway {
    client: TodoClient,
    store: ItemStore,
    loading: bool,
}

impl Gateway {
    /// A gateway whose store is seeded with the startup items.
    pub fn new(client: TodoClient) -> Self {
        Self::with_store(client, ItemStore::seeded())
    }

    pub fn with_store(client: TodoClient, store: ItemStore) -> Self {
        Self {
            client,
            store,
            loading: false,
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn items(&self) -> &[TodoItem] {
        self.store.items()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn stats(&self) -> Stats {
        Stats::compute(self.store.items())
    }

    pub fn begin_add(&mut self, message: &str, status: Status) -> Result<(PendingOp, HttpRequest), ApiError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ApiError::EmptyMessage);
        }
        let id = self.store.next_id().ok_or(ApiError::IdsExhausted)?;
        let item = TodoItem::new(id, message, status.label());
        let request = self.client.build_create_todo(&item)?;
        self.loading = true;
        debug!(id = item.id, status = %status, "add todo started");
        Ok((PendingOp::Add, request))
    }

    pub fn begin_update(&mut self, id: u64, patch: TodoPatch) -> Result<(PendingOp, HttpRequest), ApiError> {
        let request = self.client.build_update_todo(id, &patch)?;
        self.loading = true;
        debug!(id, ?patch, "update todo started");
        Ok((PendingOp::Update { id, patch }, request))
    }

    /// Update `id` to the status after its current one. An id not in the
    /// store has no status, so it cycles to `Pending` like any unrecognized
    /// value.
    pub fn begin_cycle_status(&mut self, id: u64) -> Result<(PendingOp, HttpRequest), ApiError> {
        let current = self.store.get(id).map(|item| item.status.as_str()).unwrap_or("");
        let next = next_status(current);
        self.begin_update(id, TodoPatch::status(next.label()))
    }

    pub fn begin_delete(&mut self, id: u64) -> (PendingOp, HttpRequest) {
        let request = self.client.build_delete_todo(id);
        self.loading = true;
        debug!(id, "delete todo started");
        (PendingOp::Delete { id }, request)
    }

    /// Apply the outcome of a pending operation. `Err` covers failures to
    /// obtain any response; non-2xx responses arrive as `Ok`.
    pub fn complete(&mut self, op: PendingOp, outcome: Result<HttpResponse, ApiError>) -> Notification {
        let operation = op.operation();
        let result = outcome.and_then(|response| self.apply(op, response));
        self.loading = false;
        match result {
            Ok(()) => {
                info!(?operation, "todo mutation acknowledged");
                Notification::success(operation)
            }
            Err(e) => {
                warn!(?operation, error = %e, "todo mutation failed");
                Notification::failure(operation)
            }
        }
    }

    fn apply(&mut self, op: PendingOp, response: HttpResponse) -> Result<(), ApiError> {
        match op {
            PendingOp::Add => {
                let created = self.client.parse_create_todo(response)?;
                self.store.append(created);
            }
            PendingOp::Update { id, patch } => {
                self.client.parse_update_todo(response)?;
                self.store.patch(id, &patch);
            }
            PendingOp::Delete { id } => {
                self.client.parse_delete_todo(response)?;
                self.store.remove(id);
            }
        }
        Ok(())
    }

    /// Run a full add round-trip. `Err` means nothing was sent.
    pub fn add<T: Transport + ?Sized>(
        &mut self,
        transport: &T,
        message: &str,
        status: Status,
    ) -> Result<Notification, ApiError> {
        let (op, request) = self.begin_add(message, status)?;
        Ok(self.complete(op, transport.execute(request)))
    }

    pub fn update<T: Transport + ?Sized>(
        &mut self,
        transport: &T,
        id: u64,
        patch: TodoPatch,
    ) -> Result<Notification, ApiError> {
        let (op, request) = self.begin_update(id, patch)?;
        Ok(self.complete(op, transport.execute(request)))
    }

    pub fn cycle_status<T: Transport + ?Sized>(&mut self, transport: &T, id: u64) -> Result<Notification, ApiError> {
        let (op, request) = self.begin_cycle_status(id)?;
        Ok(self.complete(op, transport.execute(request)))
    }

    pub fn delete<T: Transport + ?Sized>(&mut self, transport: &T, id: u64) -> Notification {
        let (op, request) = self.begin_delete(id);
        self.complete(op, transport.execute(request))
    }
}
