//! Aggregate counts derived from the current item list.

use crate::status::Status;
use crate::types::TodoItem;

/// Counts by status. Items with a non-canonical status count toward
/// `total` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl Stats {
    pub fn compute(items: &[TodoItem]) -> Self {
        let mut stats = Stats {
            total: items.len(),
            ..Stats::default()
        };
        for item in items {
            match Status::from_label(&item.status) {
                Some(Status::Pending) => stats.pending += 1,
                Some(Status::InProgress) => stats.in_progress += 1,
                Some(Status::Completed) => stats.completed += 1,
                None => {}
            }
        }
        stats
    }
}
