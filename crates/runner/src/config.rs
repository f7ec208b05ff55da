/// Configuration for the PointerHelper runner.
///
/// Settings are read once at startup from a `config.json` file in the
/// platform-specific application data directory
/// (%APPDATA%/PointerHelper/ on Windows). The file is optional and never
/// written; a missing or unreadable file means defaults.
///
/// ```json
/// {
///   "log_filter": "pointer_helper_engine=debug,info",
///   "cycle_queue_depth": 4,
///   "engine": { "scroll_step": 120, "force_num_lock_on_start": true }
/// }
/// ```
use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use pointer_helper_engine::cycle_worker::DEFAULT_QUEUE_DEPTH;
use pointer_helper_engine::EngineConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RunnerConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Pending window-cycle requests kept before new ones are dropped
    pub cycle_queue_depth: usize,
    pub engine: EngineConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            log_filter: "info".to_string(),
            cycle_queue_depth: DEFAULT_QUEUE_DEPTH,
            engine: EngineConfig::default(),
        }
    }
}

/// Get the application's data directory
/// Returns %APPDATA%/PointerHelper/ on Windows
pub fn get_data_directory() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "PointerHelper")
        .ok_or_else(|| anyhow!("Failed to determine user data directory"))?;

    Ok(project_dirs.data_dir().to_path_buf())
}

/// Load configuration from config.json in the data directory
/// Returns default config if file doesn't exist or on error
pub fn load_config() -> RunnerConfig {
    let Ok(data_dir) = get_data_directory() else {
        return RunnerConfig::default();
    };

    load_config_from(&data_dir.join("config.json"))
}

fn load_config_from(path: &Path) -> RunnerConfig {
    let Ok(contents) = fs::read_to_string(path) else {
        return RunnerConfig::default();
    };

    serde_json::from_str(&contents).unwrap_or_default()
}
