//! User configuration file (`~/.terrawrap/config.yaml`)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = ".terrawrap";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Settings read from the config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    pub author: Option<String>,
    pub output: Option<PathBuf>,
    pub license: Option<String>,
    pub stand_alone: Option<bool>,
    /// Root holding extracted provider doc bundles
    pub docs_dir: Option<PathBuf>,
    /// Root holding provider schema JSON files
    pub schema_dir: Option<PathBuf>,
}

/// A config together with the directory it was loaded from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub dir: PathBuf,
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Directory containing extracted docs for a provider release
    pub fn docs_root(&self, provider: &str, version: &str) -> PathBuf {
        self.config
            .docs_dir
            .clone()
            .unwrap_or_else(|| self.dir.join("provider_docs"))
            .join(provider)
            .join(version)
    }

    /// Schema JSON file for a provider release
    pub fn schema_path(&self, provider: &str, version: &str) -> PathBuf {
        self.config
            .schema_dir
            .clone()
            .unwrap_or_else(|| self.dir.join("provider_schemas"))
            .join(provider)
            .join(format!("{}.json", version))
    }
}

/// Default config file location: `$HOME/.terrawrap/config.yaml`
pub fn default_config_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Load the config file.
///
/// An explicitly requested file must exist; a missing default file just
/// yields the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);
    let dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    if explicit.is_none() && !path.exists() {
        return Ok(LoadedConfig {
            config: Config::default(),
            dir,
            source: None,
        });
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    Ok(LoadedConfig {
        config,
        dir,
        source: Some(path),
    })
}

fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(content)?)
}
