use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::OutputFormat;
use crate::core::source::NAMESPACE_SEPARATOR;

pub const CONFIG_FILE_NAME: &str = ".langjsrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root", alias = "source")]
    pub source_root: String,
    #[serde(default = "default_target")]
    pub target: String,
    /// Groups to bundle; empty means all.
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub no_lib: bool,
    #[serde(default = "default_sort")]
    pub sort: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_source_root() -> String {
    "./lang".to_string()
}

fn default_target() -> String {
    "./public/js/messages.js".to_string()
}

fn default_sort() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            target: default_target(),
            messages: Vec::new(),
            no_lib: false,
            sort: default_sort(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a `messages` entry is blank or names more than one namespace.
    pub fn validate(&self) -> Result<()> {
        for group in &self.messages {
            validate_group(group).context("Invalid entry in 'messages'")?;
        }
        Ok(())
    }
}

/// Check a group filter entry (`messages`, `forum/thread`, `acme::messages`).
pub fn validate_group(group: &str) -> Result<()> {
    if group.trim().is_empty() {
        bail!("group name must not be empty");
    }
    let parts: Vec<&str> = group.split(NAMESPACE_SEPARATOR).collect();
    if parts.len() > 2 {
        bail!("\"{}\" contains '{}' more than once", group, NAMESPACE_SEPARATOR);
    }
    if parts.iter().any(|p| p.trim().trim_matches('/').is_empty()) {
        bail!("\"{}\" has an empty namespace or group", group);
    }
    Ok(())
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
    /// Directory holding the config file, `None` when using defaults.
    /// Relative paths in the file are resolved against it.
    pub config_dir: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                config_dir: path.parent().map(Path::to_path_buf),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            config_dir: None,
        }),
    }
}
