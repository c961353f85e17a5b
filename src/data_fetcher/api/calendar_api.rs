//! Day calendar lookups

use crate::config::Config;
use crate::data_fetcher::models::{CalendarResponse, GameGroups};
use crate::error::AppError;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, instrument};

use super::date_logic::format_date;
use super::fetch_utils::fetch;
use super::urls::build_calendar_url;

/// Fetches the games scheduled on `date`, grouped by game-type label in
/// the order the API lists them.
///
/// Any HTTP or network failure is returned as-is; the caller decides to
/// abort the run.
#[instrument(skip(client, config))]
pub async fn fetch_calendar(
    client: &Client,
    config: &Config,
    date: NaiveDate,
) -> Result<GameGroups, AppError> {
    let url = build_calendar_url(&config.api_base_url, &format_date(date));
    let calendar: CalendarResponse = fetch(client, &url).await?;

    debug!(
        "Calendar for {} lists {} game types: {:?}",
        date,
        calendar.games.len(),
        calendar.games.labels()
    );

    Ok(calendar.games)
}
