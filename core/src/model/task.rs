use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user-entered item with completion state.
///
/// Serialized as camelCase JSON with a millisecond `createdAt`, the v1
/// on-disk layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,

    // Inert metadata. List order is insertion order, never derived from this.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Buy milk".to_string());
        assert!(!task.completed);
        assert_eq!(task.text, "Buy milk");
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut task = Task::new("Buy milk".to_string());
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("a".to_string());
        let b = Task::new("a".to_string());
        assert_ne!(a.id, b.id);
    }
}
