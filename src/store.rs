//! High-level store API for taskbook.

use crate::types::{DEFAULT_STATUS, Task, TaskUpdate};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur during store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Backing file exists but is not parseable as a JSON array.
    StorageUnreadable { path: PathBuf, detail: String },
    /// A stored record is missing required fields or has the wrong shape.
    MalformedRecord { index: usize, detail: String },
    /// I/O failure while rewriting the backing file.
    StorageWriteFailed { path: PathBuf, source: std::io::Error },
    /// Update/delete referenced an unknown task id.
    TaskNotFound(u64),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::StorageUnreadable { path, detail } => {
                write!(f, "cannot read task file {}: {}", path.display(), detail)
            }
            StoreError::MalformedRecord { index, detail } => {
                write!(f, "malformed task record at index {}: {}", index, detail)
            }
            StoreError::StorageWriteFailed { path, source } => {
                write!(f, "failed to write task file {}: {}", path.display(), source)
            }
            StoreError::TaskNotFound(id) => write!(f, "task not found: {}", id),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::StorageWriteFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// The main taskbook store.
///
/// Owns the in-memory task sequence (insertion order, never re-sorted)
/// and the path of the backing JSON file. Every mutating operation
/// rewrites the whole file before returning.
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
    next_id: u64,
}

impl TaskStore {
    /// Load a store from the given file path.
    ///
    /// A missing file yields an empty store; an existing file must be a
    /// JSON array where every element carries all six task keys, and the
    /// array order becomes the in-memory order. The next-id counter
    /// starts at one past the highest stored id, so ids are not reused
    /// after a deletion within the life of this store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let tasks = if path.exists() {
            let raw = fs::read_to_string(path).map_err(|e| StoreError::StorageUnreadable {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;

            let value: serde_json::Value =
                serde_json::from_str(&raw).map_err(|e| StoreError::StorageUnreadable {
                    path: path.to_path_buf(),
                    detail: e.to_string(),
                })?;

            let serde_json::Value::Array(records) = value else {
                return Err(StoreError::StorageUnreadable {
                    path: path.to_path_buf(),
                    detail: "expected a top-level JSON array".to_string(),
                });
            };

            // Any bad record fails the whole load; no partial loads.
            records
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    Task::from_value(record).map_err(|e| StoreError::MalformedRecord {
                        index,
                        detail: e.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        let next_id = tasks.iter().map(|t| t.task_id).max().unwrap_or(0) + 1;
        debug!("Loaded {} task(s) from {}", tasks.len(), path.display());

        Ok(Self {
            tasks,
            path: path.to_path_buf(),
            next_id,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file with the current in-memory sequence.
    ///
    /// Writes to a temp file next to the target and renames it into
    /// place. On failure the in-memory state is left untouched, but may
    /// now diverge from disk until the next successful persist.
    pub fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.tasks).map_err(|e| {
            StoreError::StorageWriteFailed {
                path: self.path.clone(),
                source: std::io::Error::other(e),
            }
        })?;

        let tmp = self.path.with_extension("json.tmp");
        let write_err = |source| StoreError::StorageWriteFailed {
            path: self.path.clone(),
            source,
        };

        fs::write(&tmp, json + "\n").map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;

        debug!("Persisted {} task(s) to {}", self.tasks.len(), self.path.display());
        Ok(())
    }

    /// Add a new task with status "Pending" and the next free id.
    pub fn add_task(
        &mut self,
        title: &str,
        description: &str,
        assignee: &str,
        deadline: &str,
    ) -> Result<Task, StoreError> {
        let task = Task {
            task_id: self.next_id,
            title: title.to_string(),
            description: description.to_string(),
            assignee: assignee.to_string(),
            deadline: deadline.to_string(),
            status: DEFAULT_STATUS.to_string(),
        };

        self.next_id += 1;
        self.tasks.push(task.clone());
        self.persist()?;

        Ok(task)
    }

    /// All tasks in creation order.
    pub fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// First task whose id matches, if any.
    pub fn get_task_by_id(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.task_id == id)
    }

    /// Apply the present, non-empty fields of `update` to the task with
    /// the given id. Blank update values leave the field untouched.
    pub fn update_task(&mut self, id: u64, update: TaskUpdate) -> Result<Task, StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.task_id == id)
            .ok_or(StoreError::TaskNotFound(id))?;

        fn apply(field: &mut String, value: Option<String>) {
            if let Some(v) = value
                && !v.is_empty()
            {
                *field = v;
            }
        }

        let task = &mut self.tasks[index];
        apply(&mut task.title, update.title);
        apply(&mut task.description, update.description);
        apply(&mut task.assignee, update.assignee);
        apply(&mut task.deadline, update.deadline);
        apply(&mut task.status, update.status);

        self.persist()?;
        Ok(self.tasks[index].clone())
    }

    /// Remove the task with the given id; all other tasks keep their id
    /// and relative order.
    pub fn delete_task(&mut self, id: u64) -> Result<Task, StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.task_id == id)
            .ok_or(StoreError::TaskNotFound(id))?;

        let removed = self.tasks.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Case-insensitive substring search against title or status, in
    /// sequence order.
    pub fn search_tasks(&self, term: &str) -> Vec<&Task> {
        let term = term.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&term) || t.status.to_lowercase().contains(&term)
            })
            .collect()
    }
}
