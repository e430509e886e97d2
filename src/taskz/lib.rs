//! # Taskz Architecture
//!
//! Taskz is a small **in-memory task list** written as a set of pure list
//! transformations. There is no storage: a caller holds the current list and an
//! id generator and threads them through successive calls, each of which hands
//! back a brand-new list.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session facade holding the current list and id source    │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure functions: &[Task] in, Vec<Task> out                │
//! │  - Higher-order: updaters and predicates are plain closures │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Inputs Are Never Mutated
//!
//! Every command borrows the list it is given and allocates the result. If a
//! command fails, nothing has changed, and the caller simply keeps using the
//! list it already had. The id generator is the single piece of mutable state,
//! and it only advances when a task is actually created.
//!
//! ## Example
//!
//! ```
//! use taskz::{add_task, format_for_display, mark_complete, update_task, IdGenerator};
//!
//! let mut ids = IdGenerator::new();
//! let tasks = add_task(&[], "Buy bread", &mut ids)?;
//! let tasks = update_task(&tasks, 1, mark_complete)?;
//! assert_eq!(format_for_display(&tasks), vec!["[X] ID: 1 - Buy bread"]);
//! # Ok::<(), taskz::error::TaskError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`commands`]: The list transformations (add, remove, update, filter, display)
//! - [`api`]: The session facade used by UI clients
//! - [`id`]: Id generation
//! - [`model`]: The `Task` record
//! - [`script`]: Line-oriented task scripts replayed against a session
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod script;

pub use commands::add::add_task;
pub use commands::display::{format_for_display, format_tasks};
pub use commands::filter::{description_contains, filter_tasks, is_completed, is_pending};
pub use commands::remove::remove_task;
pub use commands::update::{mark_complete, mark_pending, rename, update_task};
pub use id::{IdGenerator, IdSource};
pub use model::Task;
