use crate::constants::startlist::{DELIMITER, FILE_EXTENSION, FILE_PREFIX, HEADER};
use crate::data_fetcher::api::format_date;
use crate::data_fetcher::models::{Race, StartEntry, StartlistRow};
use crate::error::AppError;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What happened to one race during export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceExport {
    /// File written with this many data rows
    Written { path: PathBuf, rows: usize },
    /// No entries to write, no file created
    Skipped,
}

impl RaceExport {
    pub fn is_written(&self) -> bool {
        matches!(self, RaceExport::Written { .. })
    }
}

/// `startlista_{date}_{gameType}_{raceNumber}.csv`
pub fn startlist_filename(date: NaiveDate, game_type: &str, race_number: u32) -> String {
    format!(
        "{FILE_PREFIX}_{}_{game_type}_{race_number}.{FILE_EXTENSION}",
        format_date(date)
    )
}

/// Renders the entries that go into a startlist, dropping scratched ones
/// first when `skip_scratched` is set.
fn startlist_rows(entries: &[StartEntry], skip_scratched: bool) -> Vec<StartlistRow> {
    entries
        .iter()
        .filter(|entry| !(skip_scratched && entry.scratched))
        .map(StartEntry::to_row)
        .collect()
}

fn write_rows(path: &Path, rows: &[StartlistRow]) -> Result<RaceExport, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;

    Ok(RaceExport::Written {
        path: path.to_path_buf(),
        rows: rows.len(),
    })
}

/// Writes `entries` to `path` as a `;`-delimited startlist with header.
///
/// Nothing is created when there is no entry to write. An existing file
/// at `path` is replaced. Scratched entries are dropped first when
/// `skip_scratched` is set.
pub fn write_startlist(
    path: &Path,
    entries: &[StartEntry],
    skip_scratched: bool,
) -> Result<RaceExport, AppError> {
    let rows = startlist_rows(entries, skip_scratched);
    if rows.is_empty() {
        debug!("No entries for {}, skipping", path.display());
        return Ok(RaceExport::Skipped);
    }
    write_rows(path, &rows)
}

/// Exports one race of a game into `output_dir`. The directory is only
/// created when the race has rows to write.
pub fn export_race(
    output_dir: &Path,
    date: NaiveDate,
    game_type: &str,
    race: &Race,
    skip_scratched: bool,
) -> Result<RaceExport, AppError> {
    let rows = startlist_rows(&race.starts, skip_scratched);
    if rows.is_empty() {
        debug!("Race {} of {} has no starts to write", race.number, game_type);
        return Ok(RaceExport::Skipped);
    }

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(startlist_filename(date, game_type, race.number));
    let export = write_rows(&path, &rows)?;

    if let RaceExport::Written { path, rows } = &export {
        info!("Saved {} ({} horses)", path.display(), rows);
    }

    Ok(export)
}
