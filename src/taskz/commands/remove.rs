use crate::error::{Result, TaskError};
use crate::model::Task;
use tracing::debug;

/// Returns the list without the task carrying `id`.
///
/// Only the first task with that id is dropped; the rest keep their relative
/// order.
pub fn remove_task(tasks: &[Task], id: u64) -> Result<Vec<Task>> {
    let position = tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or(TaskError::NotFound(id))?;

    debug!(id, "task removed");

    Ok(tasks
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != position)
        .map(|(_, t)| t.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add::add_task;
    use crate::id::IdGenerator;

    fn sample() -> Vec<Task> {
        let mut ids = IdGenerator::new();
        let tasks = add_task(&[], "Task 1", &mut ids).unwrap();
        let tasks = add_task(&tasks, "Task 2", &mut ids).unwrap();
        add_task(&tasks, "Task 3", &mut ids).unwrap()
    }

    #[test]
    fn removes_matching_task() {
        let tasks = sample();

        let remaining = remove_task(&tasks, 1).unwrap();

        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|t| t.id != 1));
    }

    #[test]
    fn preserves_order_of_remaining_tasks() {
        let tasks = sample();
        let remaining = remove_task(&tasks, 2).unwrap();
        let ids: Vec<_> = remaining.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let tasks = sample();
        let snapshot = tasks.clone();

        let err = remove_task(&tasks, 99).unwrap_err();

        assert!(matches!(err, TaskError::NotFound(99)));
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn empty_list_is_not_found() {
        assert!(matches!(remove_task(&[], 1), Err(TaskError::NotFound(1))));
    }

    #[test]
    fn drops_only_one_of_duplicated_ids() {
        let tasks = vec![Task::new(5, "a"), Task::new(5, "b"), Task::new(6, "c")];

        let remaining = remove_task(&tasks, 5).unwrap();

        assert_eq!(remaining, vec![Task::new(5, "b"), Task::new(6, "c")]);
    }
}
