use crate::error::{Result, TaskError};
use crate::id::IdSource;
use crate::model::Task;
use tracing::debug;

/// Appends a new pending task and returns the extended list.
///
/// The description is kept exactly as given, surrounding whitespace included,
/// but it must contain something other than whitespace. A rejected
/// description does not consume an id.
pub fn add_task<I: IdSource + ?Sized>(
    tasks: &[Task],
    description: &str,
    ids: &mut I,
) -> Result<Vec<Task>> {
    validate_description(description)?;

    let task = Task::new(ids.next_id(), description);
    debug!(id = task.id, "task added");

    Ok(tasks.iter().cloned().chain(std::iter::once(task)).collect())
}

pub(crate) fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(TaskError::InvalidInput(
            "task description cannot be empty".to_string(),
        ));
    }
    Ok(())
}
