//! Shared test infrastructure for taskbook integration tests.
//!
//! Provides TestEnv helper for consistent test setup/teardown.

#![allow(dead_code)]

use std::path::PathBuf;
use taskbook::{Task, TaskStore, TaskUpdate};
use tempfile::TempDir;

/// Test environment with automatic cleanup.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub store: TaskStore,
}

impl TestEnv {
    /// Create a new test environment with an empty store.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store =
            TaskStore::load(&temp_dir.path().join("tasks.json")).expect("Failed to load store");
        Self { temp_dir, store }
    }

    /// Path of the backing task file.
    pub fn file_path(&self) -> PathBuf {
        self.temp_dir.path().join("tasks.json")
    }

    /// Add a task with placeholder fields.
    pub fn add(&mut self, title: &str) -> Task {
        self.store
            .add_task(title, "a description", "alice", "2025-06-01")
            .expect("Failed to add task")
    }

    /// Add a task with all fields given.
    pub fn add_full(&mut self, title: &str, description: &str, assignee: &str, deadline: &str) -> Task {
        self.store
            .add_task(title, description, assignee, deadline)
            .expect("Failed to add task")
    }

    /// Set a task's status through the update path.
    pub fn set_status(&mut self, id: u64, status: &str) -> Task {
        self.store
            .update_task(
                id,
                TaskUpdate {
                    status: Some(status.to_string()),
                    ..Default::default()
                },
            )
            .expect("Failed to update status")
    }

    /// Reload a fresh store from the same backing file.
    pub fn reload(&self) -> TaskStore {
        TaskStore::load(&self.file_path()).expect("Failed to reload store")
    }

    /// Raw bytes of the backing file.
    pub fn file_bytes(&self) -> Vec<u8> {
        std::fs::read(self.file_path()).expect("Failed to read task file")
    }

    /// Number of stored tasks.
    pub fn total_count(&self) -> usize {
        self.store.list_tasks().len()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
