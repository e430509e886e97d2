use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry of a task list.
///
/// Tasks are never changed in place: operations that "modify" a task build a
/// new record and put it where the old one was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    fn marker(&self) -> char {
        if self.completed { 'X' } else { ' ' }
    }
}

/// Renders `[X] ID: 1 - Buy bread` (or `[ ] ...` when pending).
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ID: {} - {}", self.marker(), self.id, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_pending() {
        let task = Task::new(7, "Write tests");
        assert_eq!(task.id, 7);
        assert_eq!(task.description, "Write tests");
        assert!(!task.completed);
    }

    #[test]
    fn display_pending_uses_blank_marker() {
        let task = Task::new(1, "Comprar pão");
        assert_eq!(task.to_string(), "[ ] ID: 1 - Comprar pão");
    }

    #[test]
    fn display_completed_uses_x_marker() {
        let task = Task {
            completed: true,
            ..Task::new(12, "Done thing")
        };
        assert_eq!(task.to_string(), "[X] ID: 12 - Done thing");
    }

    #[test]
    fn serializes_with_field_names() {
        let task = Task::new(3, "x");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "description": "x", "completed": false})
        );
    }
}
