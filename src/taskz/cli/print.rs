use colored::Colorize;
use taskz::api::{CmdMessage, MessageLevel};
use taskz::model::Task;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_heading(title: &str) {
    println!("\n{}", format!("--- {} ---", title).bold());
}

pub(super) fn print_tasks(tasks: &[Task]) {
    for line in task_lines(tasks) {
        println!("{}", line);
    }
}

/// Display lines with completed tasks dimmed. With colors off these are
/// exactly the plain display lines.
fn task_lines(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .zip(taskz::format_tasks(tasks))
        .map(|(task, line)| {
            if task.completed {
                line.dimmed().to_string()
            } else {
                line
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_without_color() {
        colored::control::set_override(false);
        let tasks = vec![
            taskz::mark_complete(&Task::new(1, "done")),
            Task::new(2, "todo"),
        ];
        assert_eq!(
            task_lines(&tasks),
            vec!["[X] ID: 1 - done", "[ ] ID: 2 - todo"]
        );
    }
}
