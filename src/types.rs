//! Core data types for the taskbook store.

use serde::{Deserialize, Serialize};

/// Status assigned to every newly created task.
pub const DEFAULT_STATUS: &str = "Pending";

/// One unit of tracked work.
///
/// All six fields are required in the persisted form; a stored record
/// missing any of them is rejected at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Positive integer id, assigned by the store. Unique among
    /// currently stored tasks; never renumbered on delete.
    pub task_id: u64,

    /// Short description of the work
    pub title: String,

    /// Longer description, may be empty
    pub description: String,

    /// Who the task is assigned to
    pub assignee: String,

    /// Due date as text in YYYY-MM-DD form. Kept as text; the store
    /// does not validate it as a real calendar date.
    pub deadline: String,

    /// Free-form status text. No enumerated set is enforced.
    pub status: String,
}

impl Task {
    /// Construct a task from one element of the persisted array.
    ///
    /// Fails if a required key is absent or of the wrong shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Task(ID: {}, Title: {}, Assignee: {}, Deadline: {}, Status: {})",
            self.task_id, self.title, self.assignee, self.deadline, self.status
        )
    }
}

/// A set of optional field updates for [`crate::TaskStore::update_task`].
///
/// A field is changed only if its value here is present and non-empty;
/// `None` and `Some("")` both mean "leave unchanged". There is no way to
/// blank an existing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub deadline: Option<String>,
    pub status: Option<String>,
}

impl TaskUpdate {
    /// True if no field would change anything.
    pub fn is_noop(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().is_none_or(str::is_empty)
        }
        blank(&self.title)
            && blank(&self.description)
            && blank(&self.assignee)
            && blank(&self.deadline)
            && blank(&self.status)
    }
}
