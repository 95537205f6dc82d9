use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::tui::theme::ThemeConfig;

pub const DEFAULT_DATA_FILE: &str = "./data.txt";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path of the task file. Default: `./data.txt`
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: default_data_file(),
            input: InputConfig::default(),
            list: ListConfig::default(),
            log: LogConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    /// Maximum number of characters in a title. Default: 32
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,

    /// Text shown while the input is empty.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Visible width of the input, in columns. Default: 32
    #[serde(default = "default_input_width")]
    pub width: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            char_limit: default_char_limit(),
            placeholder: default_placeholder(),
            width: default_input_width(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListConfig {
    /// Rows of the check screen, title and pagination included. Default: 14
    #[serde(default = "default_list_height")]
    pub height: u16,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            height: default_list_height(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log file path. Default: `~/.todoit/todoit.log`
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// One of trace, debug, info, warn, error. Default: info
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            enabled: true,
            file: None,
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_char_limit() -> usize {
    32
}

fn default_placeholder() -> String {
    "Buy milk".to_string()
}

fn default_input_width() -> u16 {
    32
}

fn default_list_height() -> u16 {
    14
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LogConfig {
    /// Resolved log file path, falling back to the base directory.
    pub fn path(&self) -> Result<PathBuf> {
        match self.file {
            Some(ref p) => Ok(p.clone()),
            None => Ok(base_dir()?.join("todoit.log")),
        }
    }

    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

/// Returns the base todoit config directory: ~/.todoit/
pub fn base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".todoit"))
}

/// Returns the default config file path: ~/.todoit/config.toml
pub fn config_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("config.toml"))
}

/// Ensure the config directory exists
pub fn ensure_dirs() -> Result<()> {
    let base = base_dir()?;
    fs::create_dir_all(&base).context("failed to create ~/.todoit/")?;
    Ok(())
}

/// Load config from `path`, or from ~/.todoit/config.toml when `None`.
/// A missing file yields defaults.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    load_from(&path)
}

fn load_from(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    } else {
        Ok(Config::default())
    }
}

/// Install a file-backed `tracing` subscriber. The TUI owns the terminal, so
/// logs never go to stdout/stderr. Errors here only disable logging.
///
/// Directories are never created here; until `todoit init` has made
/// `~/.todoit/`, logging stays off.
pub fn init_logging(log: &LogConfig) {
    if !log.enabled {
        return;
    }
    let Ok(path) = log.path() else {
        return;
    };
    if !path.parent().is_some_and(|parent| parent.as_os_str().is_empty() || parent.is_dir()) {
        return;
    }
    let Ok(file) = fs::OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_max_level(log.max_level())
        .with_ansi(false)
        .try_init();
}
