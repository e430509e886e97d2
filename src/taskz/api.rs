//! # API Facade
//!
//! The command functions are pure: they take a task list and hand back a new
//! one. Something still has to remember which list is "current" and which id
//! generator belongs to it. [`TaskApi`] is that caller, packaged so every UI
//! client threads state the same way.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session state**: the current task list and its id source
//! - **Dispatches** to the command functions, swapping in the returned list
//!   only when the command succeeds
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file access
//! - **Presentation concerns**: Returns tasks and messages, not terminal lines
//!
//! ## Generic Over IdSource
//!
//! `TaskApi<G: IdSource>` defaults to [`IdGenerator`], but any id source works,
//! which lets tests pin ids to known values.

use crate::commands;
use crate::error::Result;
use crate::id::{IdGenerator, IdSource};
use crate::model::Task;
use tracing::warn;

/// Which tasks a listing should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
    Matching(String),
}

pub struct TaskApi<G: IdSource = IdGenerator> {
    tasks: Vec<Task>,
    ids: G,
}

impl TaskApi<IdGenerator> {
    pub fn new() -> Self {
        Self::with_id_source(IdGenerator::new())
    }
}

impl Default for TaskApi<IdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdSource> TaskApi<G> {
    pub fn with_id_source(ids: G) -> Self {
        Self {
            tasks: Vec::new(),
            ids,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn add(&mut self, description: &str) -> Result<CmdResult> {
        let next = commands::add::add_task(&self.tasks, description, &mut self.ids)
            .inspect_err(|e| warn!(error = %e, "add rejected"))?;
        let created = next.last().cloned();
        self.tasks = next;

        let mut result = CmdResult::default().with_affected_tasks(created.into_iter().collect());
        for task in &result.affected_tasks {
            result.messages.push(CmdMessage::success(format!(
                "Task added ({}): {}",
                task.id, task.description
            )));
        }
        Ok(result)
    }

    pub fn remove(&mut self, id: u64) -> Result<CmdResult> {
        let removed = self.tasks.iter().find(|t| t.id == id).cloned();
        self.tasks = commands::remove::remove_task(&self.tasks, id)
            .inspect_err(|e| warn!(error = %e, "remove rejected"))?;

        let mut result = CmdResult::default();
        if let Some(task) = removed {
            result.add_message(CmdMessage::success(format!(
                "Task removed ({}): {}",
                task.id, task.description
            )));
            result.affected_tasks.push(task);
        }
        Ok(result)
    }

    /// Applies an arbitrary updater to the task with `id`.
    pub fn update<F>(&mut self, id: u64, updater: F) -> Result<CmdResult>
    where
        F: Fn(&Task) -> Task,
    {
        self.apply_update(id, updater, "Task updated")
    }

    pub fn complete(&mut self, id: u64) -> Result<CmdResult> {
        if self.is_already(id, true) {
            return Ok(already(id, "Task is already completed"));
        }
        self.apply_update(id, commands::update::mark_complete, "Task completed")
    }

    pub fn reopen(&mut self, id: u64) -> Result<CmdResult> {
        if self.is_already(id, false) {
            return Ok(already(id, "Task is already pending"));
        }
        self.apply_update(id, commands::update::mark_pending, "Task reopened")
    }

    /// Replaces the description, held to the same rules as a new task.
    pub fn rename(&mut self, id: u64, description: &str) -> Result<CmdResult> {
        commands::add::validate_description(description)
            .inspect_err(|e| warn!(error = %e, "rename rejected"))?;
        self.apply_update(id, commands::update::rename(description), "Task renamed")
    }

    pub fn list(&self, filter: &TaskFilter) -> CmdResult {
        use commands::filter::{description_contains, filter_tasks, is_completed, is_pending};

        let listed = match filter {
            TaskFilter::All => self.tasks.clone(),
            TaskFilter::Completed => filter_tasks(&self.tasks, is_completed),
            TaskFilter::Pending => filter_tasks(&self.tasks, is_pending),
            TaskFilter::Matching(term) => filter_tasks(&self.tasks, description_contains(term)),
        };

        let mut result = CmdResult::default();
        if listed.is_empty() {
            result.add_message(CmdMessage::info("No tasks found."));
        }
        result.with_listed_tasks(listed)
    }

    fn apply_update<F>(&mut self, id: u64, updater: F, verb: &str) -> Result<CmdResult>
    where
        F: Fn(&Task) -> Task,
    {
        self.tasks = commands::update::update_task(&self.tasks, id, updater)
            .inspect_err(|e| warn!(error = %e, "update rejected"))?;

        let changed: Vec<Task> = self.tasks.iter().filter(|t| t.id == id).cloned().collect();
        let mut result = CmdResult::default();
        for task in &changed {
            result.add_message(CmdMessage::success(format!(
                "{} ({}): {}",
                verb, task.id, task.description
            )));
        }
        Ok(result.with_affected_tasks(changed))
    }

    fn is_already(&self, id: u64, completed: bool) -> bool {
        let mut matching = self.tasks.iter().filter(|t| t.id == id).peekable();
        matching.peek().is_some() && matching.all(|t| t.completed == completed)
    }
}

fn already(id: u64, text: &str) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning(format!("{} ({})", text, id)));
    result
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
