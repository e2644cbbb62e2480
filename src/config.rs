//! Configuration management
//!
//! Server bind address and default CLI output format, stored as TOML in the
//! platform config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// CLI output settings
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// How single-goal mode prints its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The numbered outline only
    #[default]
    Text,
    /// The full result record as JSON
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from the default location, writing defaults if absent
    pub fn load() -> Result<Self> {
        let config_path = config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load configuration if a file exists, otherwise defaults. Never writes.
    pub fn load_or_default() -> Self {
        match config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(_) => Config::default(),
        }
    }

    /// Read `path` when present; a missing or unreadable file yields defaults
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file: {:#}", e);
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent()
            .context("Config path has no parent")?;

        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;

        std::fs::write(path, self.to_toml()?)
            .context("Failed to write config file")?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "bloom-objectives", "bloom-objectives")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

/// Show current configuration
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Configuration ({})", config_path()?.display());
    println!("  server.host:    {}", config.server.host);
    println!("  server.port:    {}", config.server.port);
    println!(
        "  output.format:  {}",
        match config.output.format {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    );

    Ok(())
}

/// Reset configuration to defaults
pub fn reset_config() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults.");
    Ok(())
}
