//! Game detail lookups

use crate::config::Config;
use crate::data_fetcher::models::{GameDetail, GameId};
use crate::error::AppError;
use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::fetch;
use super::urls::build_game_url;

/// Fetches the full race list of one game.
#[instrument(skip(client, config))]
pub async fn fetch_game(
    client: &Client,
    config: &Config,
    game_id: &GameId,
) -> Result<GameDetail, AppError> {
    let url = build_game_url(&config.api_base_url, game_id.as_str());
    let detail: GameDetail = fetch(client, &url).await?;

    debug!("Game {} returned {} races", game_id, detail.races.len());

    Ok(detail)
}
