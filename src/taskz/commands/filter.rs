use crate::model::Task;

/// Keeps, in order, the tasks for which `predicate` holds.
pub fn filter_tasks<P>(tasks: &[Task], predicate: P) -> Vec<Task>
where
    P: Fn(&Task) -> bool,
{
    tasks.iter().filter(|t| predicate(*t)).cloned().collect()
}

pub fn is_completed(task: &Task) -> bool {
    task.completed
}

pub fn is_pending(task: &Task) -> bool {
    !task.completed
}

/// Case-insensitive substring match on the description.
pub fn description_contains(term: &str) -> impl Fn(&Task) -> bool {
    let needle = term.to_lowercase();
    move |task: &Task| task.description.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::update::mark_complete;

    fn sample() -> Vec<Task> {
        vec![
            mark_complete(&Task::new(1, "Study functional programming")),
            Task::new(2, "Finish the assignment"),
            Task::new(3, "Buy bread"),
        ]
    }

    #[test]
    fn keeps_completed_tasks() {
        let done = filter_tasks(&sample(), is_completed);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, 1);
    }

    #[test]
    fn keeps_pending_tasks_in_order() {
        let pending = filter_tasks(&sample(), is_pending);
        let ids: Vec<_> = pending.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn always_true_returns_everything() {
        let tasks = sample();
        assert_eq!(filter_tasks(&tasks, |_| true), tasks);
    }

    #[test]
    fn always_false_returns_nothing() {
        assert!(filter_tasks(&sample(), |_| false).is_empty());
    }

    #[test]
    fn matches_description_ignoring_case() {
        let found = filter_tasks(&sample(), description_contains("BREAD"));
        assert_eq!(found, vec![Task::new(3, "Buy bread")]);
    }
}
