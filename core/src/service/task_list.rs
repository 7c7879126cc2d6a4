use log::{debug, warn};
use uuid::Uuid;

use crate::model::filter::Filter;
use crate::model::task::Task;
use crate::repository::TaskStore;

/// Owns the in-memory task list and mirrors every mutation to the store.
///
/// The store copy is a derived mirror: read once at construction, replaced
/// wholesale after each mutation, never consulted again while running.
pub struct TaskListService<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
    filter: Filter,
}

impl<S: TaskStore> TaskListService<S> {
    pub fn new(store: S) -> Self {
        let tasks = store.load();
        debug!("loaded {} task(s) from store", tasks.len());
        Self {
            store,
            tasks,
            filter: Filter::default(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Adds a task with the trimmed text, newest first.
    ///
    /// Whitespace-only input is a no-op and returns `None`.
    pub fn add_task(&mut self, text: &str) -> Option<Task> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let task = Task::new(trimmed.to_string());
        self.tasks.insert(0, task.clone());
        self.persist();
        Some(task)
    }

    /// Flips `completed` on the matching task; no-op when the id is absent.
    pub fn toggle_task(&mut self, id: &Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == *id) {
            task.toggle();
        }
        self.persist();
    }

    /// Removes the matching task; no-op when the id is absent.
    pub fn delete_task(&mut self, id: &Uuid) {
        self.tasks.retain(|t| t.id != *id);
        self.persist();
    }

    /// Removes every completed task, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        self.persist();
        before - self.tasks.len()
    }

    /// View state only, nothing is persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Tasks visible under the current filter, computed fresh on every call.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.active_count()
    }

    fn persist(&self) {
        // Write failures are logged, never propagated.
        if let Err(e) = self.store.save(&self.tasks) {
            warn!("failed to persist {} task(s): {e:#}", self.tasks.len());
        }
    }
}
