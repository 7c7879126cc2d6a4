use crate::model::task::Task;
use anyhow::Result;

/// Durable medium for the task list.
///
/// `load` fails soft: a missing, unreadable, or malformed store yields an
/// empty list instead of an error. `save` replaces the whole list.
pub trait TaskStore {
    fn load(&self) -> Vec<Task>;
    fn save(&self, tasks: &[Task]) -> Result<()>;
}
