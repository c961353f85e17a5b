//! The export run: date loop, calendar lookup, game-type filter, game
//! lookup and per-race export, strictly one step after another.

use crate::config::Config;
use crate::data_fetcher::api::{
    create_http_client_with_timeout, fetch_calendar, fetch_game, format_date,
};
use crate::data_fetcher::processors::filter_games_by_type;
use crate::error::AppError;
use crate::export::export_race;
use reqwest::Client;
use std::fmt;
use std::path::Path;
use tracing::{info, instrument};

/// Counters for one finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub dates: usize,
    pub games: usize,
    pub races: usize,
    pub files_written: usize,
    pub races_skipped: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} dates, {} games, {} races: {} files written, {} races without starts",
            self.dates, self.games, self.races, self.files_written, self.races_skipped
        )
    }
}

/// Runs a full export with a client built from `config`.
pub async fn run_export(config: &Config) -> Result<RunSummary, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    run_export_with_client(&client, config).await
}

/// Runs a full export over `config.date_range()`.
///
/// The first failed request ends the run with its error. Files written
/// before the failure stay on disk.
#[instrument(skip_all, fields(start = %config.start_date, end = %config.end_date))]
pub async fn run_export_with_client(
    client: &Client,
    config: &Config,
) -> Result<RunSummary, AppError> {
    let output_dir = Path::new(&config.output_dir);
    let mut summary = RunSummary::default();

    for date in config.date_range() {
        let date_str = format_date(date);
        info!("Fetching games for date: {date_str}");
        summary.dates += 1;

        let groups = fetch_calendar(client, config, date).await?;
        let games = filter_games_by_type(&groups, &config.game_types);
        info!("Found {} games for {}", games.len(), date_str);

        for game in &games {
            let detail = fetch_game(client, config, &game.summary.id).await?;
            summary.games += 1;
            info!(
                "Game {} ({}) has {} races",
                game.summary.id,
                game.game_type,
                detail.races.len()
            );

            for race in &detail.races {
                summary.races += 1;
                info!("Race {} has {} horses", race.number, race.starts.len());

                let export = export_race(
                    output_dir,
                    date,
                    &game.game_type,
                    race,
                    config.skip_scratched,
                )?;
                if export.is_written() {
                    summary.files_written += 1;
                } else {
                    summary.races_skipped += 1;
                }
            }
        }
    }

    info!("Export finished: {summary}");
    Ok(summary)
}
