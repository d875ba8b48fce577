//! The three canonical item states and the cycle between them.

use std::fmt;

/// Canonical status of a todo item.
///
/// Cycles `Pending -> InProgress -> Completed -> Pending`. There is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Status {
    /// All states in cycle order.
    pub const CYCLE: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    /// Display label, also the value sent over the wire.
    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In-progress",
            Status::Completed => "Completed",
        }
    }

    /// Case-insensitive lookup. Returns `None` for anything outside the
    /// three canonical labels.
    pub fn from_label(label: &str) -> Option<Status> {
        Self::CYCLE
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(label))
    }

    /// Whether `label` names this state, ignoring case.
    pub fn matches(self, label: &str) -> bool {
        self.label().eq_ignore_ascii_case(label)
    }

    pub fn next(self) -> Status {
        match self {
            Status::Pending => Status::InProgress,
            Status::InProgress => Status::Completed,
            Status::Completed => Status::Pending,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Successor of a raw status string. Unrecognized values restart the cycle
/// at `Pending`.
pub fn next_status(current: &str) -> Status {
    match Status::from_label(current) {
        Some(status) => status.next(),
        None => Status::Pending,
    }
}
