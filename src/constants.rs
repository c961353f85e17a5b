//! Application-wide constants and configuration defaults
//!
//! The built-in run parameters live here so a plain `atg_startlista` run
//! without any config file, environment variables or flags behaves the
//! same every time.

/// Base URL of the ATG racing-info API
pub const DEFAULT_API_BASE_URL: &str = "https://www.atg.se/services/racinginfo/v1/api";

/// Game types exported when nothing else is configured
pub const DEFAULT_GAME_TYPES: &[&str] = &["V75", "V86", "GS75"];

/// First date of the default export range (inclusive)
pub const DEFAULT_START_DATE: &str = "2025-05-10";

/// Last date of the default export range (inclusive)
pub const DEFAULT_END_DATE: &str = "2025-05-22";

/// Directory the startlist files are written to by default
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Date format used in URLs, file names and config values
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Name used for the config directory and the default log file
pub const APP_NAME: &str = "atg_startlista";

/// Startlist file layout
pub mod startlist {
    /// Field separator of the exported files
    pub const DELIMITER: u8 = b';';

    /// Header row written at the top of every startlist file
    pub const HEADER: [&str; 5] = ["Startnummer", "Horse", "Odds", "Driver", "Trainer"];

    /// Prefix of every exported file name
    pub const FILE_PREFIX: &str = "startlista";

    /// Extension of every exported file name
    pub const FILE_EXTENSION: &str = "csv";
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const API_BASE_URL: &str = "ATG_API_BASE_URL";
    pub const GAME_TYPES: &str = "ATG_GAME_TYPES";
    pub const START_DATE: &str = "ATG_START_DATE";
    pub const END_DATE: &str = "ATG_END_DATE";
    pub const OUTPUT_DIR: &str = "ATG_OUTPUT_DIR";
    pub const LOG_FILE: &str = "ATG_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "ATG_HTTP_TIMEOUT";
}
