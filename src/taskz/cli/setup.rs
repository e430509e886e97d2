use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskz", bin_name = "taskz", version)]
#[command(about = "In-memory task list built from pure list transformations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through adding, completing, filtering and removing tasks
    Demo,

    /// Run a task script, one command per line (reads stdin without FILE)
    Run {
        /// Script file
        file: Option<PathBuf>,

        /// Stop at the first failing command
        #[arg(long)]
        strict: bool,
    },

    /// Write the default config.json to the config directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
