//! URL building utilities for API endpoints

/// Builds the calendar URL listing every game of one day.
///
/// # Example
/// ```
/// use atg_startlista::data_fetcher::api::build_calendar_url;
///
/// let url = build_calendar_url("https://api.example.com", "2025-05-10");
/// assert_eq!(url, "https://api.example.com/calendar/day/2025-05-10");
/// ```
pub fn build_calendar_url(api_base_url: &str, date: &str) -> String {
    format!("{api_base_url}/calendar/day/{date}")
}

/// Builds the URL for one game's full race list.
///
/// # Example
/// ```
/// use atg_startlista::data_fetcher::api::build_game_url;
///
/// let url = build_game_url("https://api.example.com", "V75_2025-05-10_5_5");
/// assert_eq!(url, "https://api.example.com/games/V75_2025-05-10_5_5");
/// ```
pub fn build_game_url(api_base_url: &str, game_id: &str) -> String {
    format!("{api_base_url}/games/{game_id}")
}
