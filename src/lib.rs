//! ATG startlist exporter library
//!
//! Walks a date range, looks up each day's ATG racing calendar, keeps the
//! games of the requested game types and writes one semicolon-delimited
//! startlist file per race with a start list.
//!
//! # Examples
//!
//! ```rust,no_run
//! use atg_startlista::app::run_export;
//! use atg_startlista::config::Config;
//! use atg_startlista::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let mut config = Config::load().await?;
//!     config.game_types = vec!["V75".to_string()];
//!     config.output_dir = "startlists".to_string();
//!
//!     let summary = run_export(&config).await?;
//!     println!("{summary}");
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;

// Re-export commonly used types for convenience
pub use app::{RunSummary, run_export, run_export_with_client};
pub use config::Config;
pub use data_fetcher::api::{DateRange, fetch_calendar, fetch_game};
pub use data_fetcher::models::{CalendarResponse, GameDetail, GameGroups, StartEntry};
pub use error::AppError;
pub use export::{RaceExport, export_race};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
