pub mod api;
pub mod models;
pub mod processors;

pub use api::{fetch_calendar, fetch_game};
pub use models::{GameDetail, GameGroups, GameSummary, Race, StartEntry, StartlistRow};
pub use processors::{TaggedGame, filter_games_by_type};
