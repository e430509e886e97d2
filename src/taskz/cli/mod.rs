//! # CLI Layer
//!
//! This module is **one possible UI client** for taskz. It is the only place
//! that knows about terminal I/O, `std::process::exit`, argument parsing and
//! logging setup.
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()` dispatch, context setup and per-command handlers
//! - `print`: turning `CmdResult` pieces into terminal output

mod commands;
mod print;
mod setup;

pub use commands::run;
