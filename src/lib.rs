//! Taskbook: a single-user task bookkeeping library.
//!
//! Taskbook records tasks (title, description, assignee, deadline, status)
//! in an in-memory sequence backed by a flat JSON file. Every mutating
//! operation rewrites the whole file, so the file always mirrors the last
//! successful mutation.
//!
//! # Example
//!
//! ```no_run
//! use taskbook::{TaskStore, TaskUpdate};
//! use std::path::Path;
//!
//! // Load (or start) a store backed by tasks.json
//! let mut store = TaskStore::load(Path::new("tasks.json")).unwrap();
//!
//! // Create a task
//! let task = store.add_task("Deploy service", "v2 rollout", "alice", "2025-07-01").unwrap();
//! assert_eq!(task.status, "Pending");
//!
//! // Update its status
//! store.update_task(task.task_id, TaskUpdate {
//!     status: Some("Done".to_string()),
//!     ..Default::default()
//! }).unwrap();
//!
//! // Search by title or status, case-insensitively
//! let found = store.search_tasks("deploy");
//! assert_eq!(found.len(), 1);
//! ```

mod store;
mod types;

// Re-export public API
pub use store::{StoreError, TaskStore};
pub use types::{DEFAULT_STATUS, Task, TaskUpdate};
