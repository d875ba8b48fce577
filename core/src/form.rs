//! Input state for the add form and the inline edit row.

use crate::status::Status;
use crate::types::{TodoItem, TodoPatch};

/// The "add new todo" form. Starts empty with status `Pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub message: String,
    pub status: Status,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            message: String::new(),
            status: Status::Pending,
        }
    }
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the trimmed message and status to hand to the gateway, and
    /// resets the form. A blank message yields `None` and leaves the form
    /// as typed.
    pub fn submit(&mut self) -> Option<(String, Status)> {
        let message = self.message.trim();
        if message.is_empty() {
            return None;
        }
        let submitted = (message.to_string(), self.status);
        *self = Self::default();
        Some(submitted)
    }
}

/// Edits in progress for one item. Dropping the draft (or calling
/// [`EditDraft::cancel`]) discards them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    id: u64,
    pub message: String,
    pub status: String,
}

impl EditDraft {
    pub fn begin(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            message: item.message.clone(),
            status: item.status.clone(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Both fields are always sent. The message is not checked for
    /// emptiness.
    pub fn save(self) -> (u64, TodoPatch) {
        let patch = TodoPatch {
            message: Some(self.message),
            status: Some(self.status),
        };
        (self.id, patch)
    }

    pub fn cancel(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_trims_and_resets() {
        let mut form = AddForm {
            message: "  Buy milk ".to_string(),
            status: Status::Completed,
        };
        assert_eq!(form.submit(), Some(("Buy milk".to_string(), Status::Completed)));
        assert_eq!(form, AddForm::new());
    }

    #[test]
    fn blank_submit_is_rejected_and_keeps_input() {
        let mut form = AddForm {
            message: "   ".to_string(),
            status: Status::InProgress,
        };
        assert_eq!(form.submit(), None);
        assert_eq!(form.message, "   ");
        assert_eq!(form.status, Status::InProgress);
    }

    #[test]
    fn edit_save_sends_both_fields() {
        let item = TodoItem::new(2, "Connect Database", "In-progress");
        let mut draft = EditDraft::begin(&item);
        draft.message = "Connect Postgres".to_string();

        let (id, patch) = draft.save();
        assert_eq!(id, 2);
        assert_eq!(patch.message.as_deref(), Some("Connect Postgres"));
        assert_eq!(patch.status.as_deref(), Some("In-progress"));
    }

    #[test]
    fn edit_allows_empty_message() {
        let item = TodoItem::new(1, "Implement new feature", "Pending");
        let mut draft = EditDraft::begin(&item);
        draft.message.clear();
        let (_, patch) = draft.save();
        assert_eq!(patch.message.as_deref(), Some(""));
    }
}
