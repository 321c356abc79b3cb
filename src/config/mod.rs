use crate::constants::{LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Roster document to load. If not specified, the built-in roster is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster_path: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Whether the menu clears the terminal before drawing. Defaults to true.
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn default_clear_screen() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            roster_path: None,
            log_file_path: None,
            clear_screen: default_clear_screen(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the defaults; nothing is written.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `TEAM_STATS_ROSTER` - Override roster file path
    /// - `TEAM_STATS_LOG_FILE` - Override log file path
    /// - `TEAM_STATS_CLEAR_SCREEN` - `0` or `false` turns screen clearing off
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - The file exists but cannot be read, parsed or validated
    pub fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path)?
        } else {
            tracing::debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides looked up by environment variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(roster_path) = lookup(env_vars::ROSTER) {
            self.roster_path = Some(roster_path);
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(clear) = lookup(env_vars::CLEAR_SCREEN) {
            let value = clear.trim().to_ascii_lowercase();
            self.clear_screen = !matches!(value.as_str(), "0" | "false");
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.roster_path, &self.log_file_path)
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub fn display() -> Result<(), AppError> {
        let config_path = get_config_path();

        if Path::new(&config_path).exists() {
            let config = Config::load()?;
            print!("{}", config.describe(&config_path, &get_log_dir_path()));
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Human-readable summary used by [`Config::display`].
    pub fn describe(&self, config_path: &str, log_dir: &str) -> String {
        let separator = "────────────────────────────────────";
        let mut lines = vec![
            String::new(),
            "Current Configuration".to_string(),
            separator.to_string(),
            "Config Location:".to_string(),
            config_path.to_string(),
            separator.to_string(),
            "Roster File:".to_string(),
        ];
        match &self.roster_path {
            Some(path) => lines.push(path.clone()),
            None => lines.push("(Built-in roster)".to_string()),
        }
        lines.push(separator.to_string());
        lines.push("Clear Screen:".to_string());
        lines.push(if self.clear_screen { "yes" } else { "no" }.to_string());
        lines.push(separator.to_string());
        lines.push("Log File Location:".to_string());
        match &self.log_file_path {
            Some(path) => lines.push(path.clone()),
            None => {
                lines.push(format!("{log_dir}/{LOG_FILE_NAME}"));
                lines.push("(Default location)".to_string());
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Saves configuration to a custom file path.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        tracing::info!("Saved configuration to {path}");
        Ok(())
    }

    /// Loads configuration from a custom file path, without overrides.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
