use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{Dialect, ScanOptions};

pub const CONFIG_FILE_NAME: &str = ".textscoutrc.json";

/// Directory names never descended into during a scan.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", "build", "public", "uploads"];

/// File extensions handed to the parser.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub dialect: Dialect,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_detect_timeout_secs")]
    pub detect_timeout_secs: u64,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_output() -> String {
    "ArabicContent.json".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_detect_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            excluded_dirs: default_excluded_dirs(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            output: default_output(),
            dialect: Dialect::default(),
            static_dir: default_static_dir(),
            detect_timeout_secs: default_detect_timeout_secs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// extension list is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.is_empty() {
            anyhow::bail!("'extensions' must list at least one file extension");
        }

        if self.detect_timeout_secs == 0 {
            anyhow::bail!("'detectTimeoutSecs' must be greater than zero");
        }

        Ok(())
    }

    /// Walk options derived from this configuration.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            excluded_dirs: self.excluded_dirs.iter().cloned().collect(),
            extensions: self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            ignores: self.ignores.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
