use crate::error::{Result, TaskError};
use crate::model::Task;
use tracing::debug;

/// Replaces the task carrying `id` with whatever `updater` builds from it.
///
/// The updater's return value becomes the whole new record, so it must carry
/// over any field it does not mean to change. Every task matching `id` is
/// replaced, should the list ever hold more than one.
pub fn update_task<F>(tasks: &[Task], id: u64, updater: F) -> Result<Vec<Task>>
where
    F: Fn(&Task) -> Task,
{
    if !tasks.iter().any(|t| t.id == id) {
        return Err(TaskError::NotFound(id));
    }

    debug!(id, "task updated");

    Ok(tasks
        .iter()
        .map(|t| if t.id == id { updater(t) } else { t.clone() })
        .collect())
}

/// Updater that flags a task as done.
pub fn mark_complete(task: &Task) -> Task {
    Task {
        completed: true,
        ..task.clone()
    }
}

/// Updater that flags a task as not done.
pub fn mark_pending(task: &Task) -> Task {
    Task {
        completed: false,
        ..task.clone()
    }
}

/// Builds an updater that swaps in a new description.
pub fn rename(description: impl Into<String>) -> impl Fn(&Task) -> Task {
    let description = description.into();
    move |task: &Task| Task {
        description: description.clone(),
        ..task.clone()
    }
}
