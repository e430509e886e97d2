use crate::model::Task;

/// One display line per task, produced on demand.
pub fn format_tasks(tasks: &[Task]) -> impl Iterator<Item = String> + '_ {
    tasks.iter().map(Task::to_string)
}

pub fn format_for_display(tasks: &[Task]) -> Vec<String> {
    format_tasks(tasks).collect()
}
