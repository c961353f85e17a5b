pub mod game_filter;

pub use game_filter::{TaggedGame, filter_games_by_type, is_allowed_game_type};
