use std::cell::RefCell;

use anyhow::Result;

use crate::model::task::Task;
use crate::repository::traits::TaskStore;

/// In-memory store for tests and embedding without a filesystem.
#[derive(Default)]
pub struct MemoryTaskStore {
    entries: RefCell<Vec<Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            entries: RefCell::new(tasks),
        }
    }

    /// Last saved snapshot.
    pub fn snapshot(&self) -> Vec<Task> {
        self.entries.borrow().clone()
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> Vec<Task> {
        self.entries.borrow().clone()
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        *self.entries.borrow_mut() = tasks.to_vec();
        Ok(())
    }
}
