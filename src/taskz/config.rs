use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for the taskz CLI, stored as `config.json` in the config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskzConfig {
    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,

    /// tracing filter used when TASKZ_LOG is unset (e.g. "warn", "taskz=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Descriptions the demo walkthrough adds, in order
    #[serde(default = "default_demo_tasks")]
    pub demo_tasks: Vec<String>,
}

fn default_color() -> bool {
    true
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_demo_tasks() -> Vec<String> {
    vec![
        "Estudar Programação Funcional".to_string(),
        "Fazer o trabalho da faculdade".to_string(),
        "Comprar pão".to_string(),
    ]
}

impl Default for TaskzConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            log_filter: default_log_filter(),
            demo_tasks: default_demo_tasks(),
        }
    }
}

impl TaskzConfig {
    pub fn file_path<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }

    /// Reads `config.json` from `config_dir`. A missing file means defaults;
    /// any other read or parse failure is an error.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        match fs::read_to_string(Self::file_path(config_dir)) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes this config as pretty JSON, creating `config_dir` if needed.
    /// Returns the file written.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<PathBuf> {
        fs::create_dir_all(config_dir.as_ref())?;
        let path = Self::file_path(config_dir);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}
