pub mod calendar_api;
pub mod date_logic;
mod fetch_utils;
pub mod game_api;
pub mod http_client;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export fetchers and date helpers
pub use calendar_api::fetch_calendar;
pub use date_logic::{DateRange, DateRangeIter, format_date, parse_date};
pub use game_api::fetch_game;
