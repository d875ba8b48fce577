//! Domain DTOs for the task-list API.
//!
//! # Design
//! `status` stays a `String` on the wire and in the store: the server may
//! echo any casing (or an unrecognized value), and the list shows it exactly
//! as received. Logic that cares about the canonical states goes through
//! [`crate::status::Status`], which compares case-insensitively.

use serde::{Deserialize, Serialize};

/// A single todo item as held in the store and sent to the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub message: String,
    pub status: String,
}

impl TodoItem {
    pub fn new(id: u64, message: &str, status: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
            status: status.to_string(),
        }
    }
}

/// Partial update for an existing item. Only the fields present are sent and
/// merged; omitted fields remain unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TodoPatch {
    pub fn status(status: &str) -> Self {
        Self {
            message: None,
            status: Some(status.to_string()),
        }
    }

    pub fn message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            status: None,
        }
    }

    /// Merge the present fields into `item`.
    pub fn apply_to(&self, item: &mut TodoItem) {
        if let Some(message) = &self.message {
            item.message = message.clone();
        }
        if let Some(status) = &self.status {
            item.status = status.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_integer_id() {
        let item = TodoItem::new(3, "Buy milk", "Pending");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["message"], "Buy milk");
        assert_eq!(json["status"], "Pending");
    }

    #[test]
    fn patch_omits_absent_fields() {
        let json = serde_json::to_value(TodoPatch::status("Completed")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "Completed"}));
    }

    #[test]
    fn patch_apply_only_touches_present_fields() {
        let mut item = TodoItem::new(1, "Implement new feature", "In-progress");
        TodoPatch::message("Ship it").apply_to(&mut item);
        assert_eq!(item.message, "Ship it");
        assert_eq!(item.status, "In-progress");
    }

    #[test]
    fn item_rejects_missing_message() {
        let result: Result<TodoItem, _> = serde_json::from_str(r#"{"id":1,"status":"Pending"}"#);
        assert!(result.is_err());
    }
}
