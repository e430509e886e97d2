use super::print::{print_heading, print_messages, print_tasks};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;
use taskz::api::{CmdMessage, TaskApi, TaskFilter};
use taskz::config::TaskzConfig;
use taskz::error::{Result, TaskError};
use taskz::script::parse_line;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "TASKZ_LOG";
const CONFIG_DIR_ENV: &str = "TASKZ_CONFIG_DIR";

struct AppContext {
    api: TaskApi,
    config: TaskzConfig,
    config_dir: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Demo) | None => handle_demo(&mut ctx),
        Some(Commands::Run { file, strict }) => handle_run(&mut ctx, file, strict),
        Some(Commands::Init { force }) => handle_init(&ctx, force),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir(cli);
    let config = match &config_dir {
        Some(dir) => TaskzConfig::load(dir)?,
        None => TaskzConfig::default(),
    };

    init_logging(cli.verbose, &config);

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }
    debug!(?config, "configuration loaded");

    Ok(AppContext {
        api: TaskApi::new(),
        config,
        config_dir,
    })
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    if let Some(dir) = &cli.config {
        return Some(dir.clone());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "taskz", "taskz").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Logs go to stderr so they never mix with task output.
fn init_logging(verbose: bool, config: &TaskzConfig) {
    let fallback = if verbose {
        "debug"
    } else {
        config.log_filter.as_str()
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn handle_demo(ctx: &mut AppContext) -> Result<()> {
    info!(tasks = ctx.config.demo_tasks.len(), "starting demo");
    println!("Welcome to taskz!");

    let mut first = None;
    let mut last = None;
    for description in &ctx.config.demo_tasks {
        let result = ctx.api.add(description)?;
        for task in &result.affected_tasks {
            first.get_or_insert(task.id);
            last = Some(task.id);
        }
    }

    print_heading("All tasks");
    print_tasks(ctx.api.tasks());

    if let Some(id) = first {
        println!("\nMarking task ID {} as completed...", id);
        ctx.api.complete(id)?;
    }

    print_heading("All tasks (updated)");
    print_tasks(ctx.api.tasks());

    print_heading("Completed tasks only");
    print_tasks(&ctx.api.list(&TaskFilter::Completed).listed_tasks);

    print_heading("Pending tasks only");
    print_tasks(&ctx.api.list(&TaskFilter::Pending).listed_tasks);

    if let Some(id) = last {
        println!("\nRemoving task ID {}...", id);
        ctx.api.remove(id)?;
    }

    print_heading("Final task list");
    print_tasks(ctx.api.tasks());
    Ok(())
}

fn handle_run(ctx: &mut AppContext, file: Option<PathBuf>, strict: bool) -> Result<()> {
    let script = match &file {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };
    info!(?file, strict, "running task script");

    let mut failures = 0usize;
    for (index, line) in script.lines().enumerate() {
        let line_number = index + 1;
        let outcome = parse_line(line_number, line)
            .and_then(|command| command.map(|c| c.apply(&mut ctx.api)).transpose());

        match outcome {
            Ok(Some(result)) => {
                print_tasks(&result.listed_tasks);
                print_messages(&result.messages);
            }
            Ok(None) => {}
            Err(e) if strict => return Err(with_line(line_number, e)),
            Err(e) => {
                failures += 1;
                print_messages(&[CmdMessage::error(with_line(line_number, e).to_string())]);
            }
        }
    }

    if failures > 0 {
        print_messages(&[CmdMessage::warning(format!(
            "{} command(s) failed",
            failures
        ))]);
    }
    Ok(())
}

fn handle_init(ctx: &AppContext, force: bool) -> Result<()> {
    let dir = ctx
        .config_dir
        .as_ref()
        .ok_or_else(|| io::Error::other("no config directory available"))?;

    let path = TaskzConfig::file_path(dir);
    if path.exists() && !force {
        print_messages(&[CmdMessage::info(format!(
            "Config already exists: {}",
            path.display()
        ))]);
        return Ok(());
    }

    let written = TaskzConfig::default().save(dir)?;
    info!(path = %written.display(), "default config written");
    print_messages(&[CmdMessage::success(format!(
        "Config written: {}",
        written.display()
    ))]);
    Ok(())
}

/// Parse errors already know their line; anything else gets wrapped.
fn with_line(line: usize, error: TaskError) -> TaskError {
    match error {
        TaskError::Parse { .. } => error,
        other => TaskError::Parse {
            line,
            message: other.to_string(),
        },
    }
}
