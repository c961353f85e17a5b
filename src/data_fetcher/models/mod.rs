pub mod calendar;
pub mod common;
pub mod game;

pub use calendar::{CalendarResponse, GameGroups, GameSummary};
pub use common::{GameId, Person};
pub use game::{GameDetail, Horse, Race, StartEntry, StartlistRow};
