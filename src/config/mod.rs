use crate::constants::{self, env_vars};
use crate::data_fetcher::api::date_logic::{DateRange, parse_date};
use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Every field has a built-in default, so a config file only needs the
/// keys it wants to change.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the racing-info API, without trailing slash.
    pub api_base_url: String,
    /// Game types to export (e.g. V75). Matched case-insensitively.
    pub game_types: Vec<String>,
    /// First date to export, inclusive.
    pub start_date: NaiveDate,
    /// Last date to export, inclusive.
    pub end_date: NaiveDate,
    /// Directory the startlist files are written to.
    pub output_dir: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
    /// Leave scratched horses out of the exported rows.
    pub skip_scratched: bool,
}

fn default_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, constants::DATE_FORMAT).unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: constants::DEFAULT_API_BASE_URL.to_string(),
            game_types: constants::DEFAULT_GAME_TYPES
                .iter()
                .map(|game_type| game_type.to_string())
                .collect(),
            start_date: default_date(constants::DEFAULT_START_DATE),
            end_date: default_date(constants::DEFAULT_END_DATE),
            output_dir: constants::DEFAULT_OUTPUT_DIR.to_string(),
            log_file_path: None,
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
            skip_scratched: false,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to the built-in defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// The result is not validated: command line flags may still replace
    /// any value, so callers run [`Config::validate`] once their own
    /// overrides are applied.
    ///
    /// # Environment Variables
    /// - `ATG_API_BASE_URL` - Override API base URL
    /// - `ATG_GAME_TYPES` - Comma separated list of game types
    /// - `ATG_START_DATE` / `ATG_END_DATE` - Date range in YYYY-MM-DD format
    /// - `ATG_OUTPUT_DIR` - Override output directory
    /// - `ATG_LOG_FILE` - Override log file path
    /// - `ATG_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable or malformed, or a malformed env date
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;
        config.normalize();

        Ok(config)
    }

    /// Loads configuration from a custom file path without applying
    /// environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let mut config: Config = toml::from_str(&content)?;
        config.normalize();
        Ok(config)
    }

    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup. Keys are the
    /// `ATG_*` environment variable names.
    ///
    /// Malformed dates are rejected; a malformed timeout is ignored and the
    /// current value kept.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_base_url) = lookup(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
        }

        if let Some(game_types) = lookup(env_vars::GAME_TYPES) {
            self.game_types = game_types
                .split(',')
                .map(str::trim)
                .filter(|game_type| !game_type.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(start_date) = lookup(env_vars::START_DATE) {
            self.start_date = parse_date(&start_date)?;
        }

        if let Some(end_date) = lookup(env_vars::END_DATE) {
            self.end_date = parse_date(&end_date)?;
        }

        if let Some(output_dir) = lookup(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }

        Ok(())
    }

    /// Uppercases game types and strips a trailing slash from the base URL.
    pub fn normalize(&mut self) {
        for game_type in &mut self.game_types {
            *game_type = game_type.trim().to_uppercase();
        }
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// The inclusive date range this configuration exports.
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays the effective configuration settings to stdout.
    pub fn display(&self) {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not found, using built-in defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", self.api_base_url);
        println!("────────────────────────────────────");
        println!("Game Types:");
        println!("{}", self.game_types.join(", "));
        println!("────────────────────────────────────");
        println!("Date Range:");
        println!(
            "{} - {} ({} days)",
            self.start_date.format(constants::DATE_FORMAT),
            self.end_date.format(constants::DATE_FORMAT),
            self.date_range().len()
        );
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", self.output_dir);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Skip Scratched Horses:");
        println!("{}", if self.skip_scratched { "yes" } else { "no" });
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}.log", constants::APP_NAME);
            println!("(Default location)");
        }
    }
}
