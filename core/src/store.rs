//! In-memory ordered list of todo items.
//!
//! # Design
//! Insertion order is display order; nothing re-sorts. The store trusts its
//! callers: `append` performs no duplicate check, and `patch`/`remove` on an
//! unknown id are silent no-ops (logged at debug level only).

use tracing::debug;

use crate::types::{TodoItem, TodoPatch};

/// The items shown on startup, before any remote call has been made.
pub fn startup_items() -> Vec<TodoItem> {
    vec![
        TodoItem::new(1, "Implement new feature", "In-progress"),
        TodoItem::new(2, "Connect Database", "In-progress"),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<TodoItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding [`startup_items`].
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.replace_all(startup_items());
        store
    }

    pub fn replace_all(&mut self, items: Vec<TodoItem>) {
        self.items = items;
    }

    pub fn append(&mut self, item: TodoItem) {
        self.items.push(item);
    }

    pub fn patch(&mut self, id: u64, patch: &TodoPatch) {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => patch.apply_to(item),
            None => debug!(id, "patch on unknown todo ignored"),
        }
    }

    pub fn remove(&mut self, id: u64) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!(id, "remove on unknown todo ignored");
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Candidate id for the next create: `max(ids, 0) + 1`. `None` once the
    /// largest id is `u64::MAX`.
    pub fn next_id(&self) -> Option<u64> {
        self.items.iter().map(|item| item.id).max().unwrap_or(0).checked_add(1)
    }
}
