//! Render-ready snapshot of the list: stats header, count badge and rows.

use crate::stats::Stats;
use crate::status::Status;
use crate::store::ItemStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: u64,
    pub message: String,
    /// Status exactly as stored.
    pub status: String,
    /// Canonical state for icon and colour choice; `None` for unrecognized
    /// values, which get the neutral style.
    pub badge: Option<Status>,
    pub struck_through: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub stats: Stats,
    pub count_label: String,
    pub is_empty: bool,
    pub rows: Vec<TodoRow>,
}

impl ListView {
    pub fn build(store: &ItemStore) -> Self {
        let rows = store
            .items()
            .iter()
            .map(|item| TodoRow {
                id: item.id,
                message: item.message.clone(),
                status: item.status.clone(),
                badge: Status::from_label(&item.status),
                struck_through: Status::Completed.matches(&item.status),
            })
            .collect();
        Self {
            stats: Stats::compute(store.items()),
            count_label: count_label(store.len()),
            is_empty: store.is_empty(),
            rows,
        }
    }
}

/// "1 task", "3 tasks".
pub fn count_label(n: usize) -> String {
    if n == 1 {
        "1 task".to_string()
    } else {
        format!("{n} tasks")
    }
}
