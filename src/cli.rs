use crate::config::Config;
use crate::data_fetcher::api::parse_date;
use crate::error::AppError;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// ATG startlist exporter
///
/// Fetches the racing calendar for every day in a date range, keeps the
/// games of the selected game types and writes one semicolon-delimited
/// startlist file per race:
///
///   startlista_{date}_{gameType}_{raceNumber}.csv
///
/// Defaults come from the config file, then ATG_* environment variables,
/// then these flags.
#[derive(Parser, Debug, Default)]
#[command(author = "Niko Salonen", version, about, long_about)]
#[command(styles = get_styles())]
pub struct Args {
    /// First date to export in YYYY-MM-DD format (inclusive).
    #[arg(long = "start", short = 's', help_heading = "Export Options")]
    pub start_date: Option<String>,

    /// Last date to export in YYYY-MM-DD format (inclusive).
    /// An end date before the start date exports nothing.
    #[arg(long = "end", short = 'e', help_heading = "Export Options")]
    pub end_date: Option<String>,

    /// Game type to export, e.g. V75. Repeat or comma-separate for several.
    /// Replaces the configured list.
    #[arg(
        long = "game-type",
        short = 'g',
        value_delimiter = ',',
        help_heading = "Export Options"
    )]
    pub game_types: Vec<String>,

    /// Directory the startlist files are written to.
    #[arg(long = "output-dir", short = 'o', help_heading = "Export Options")]
    pub output_dir: Option<String>,

    /// Leave scratched horses out of the startlists.
    #[arg(long = "skip-scratched", help_heading = "Export Options")]
    pub skip_scratched: bool,

    /// List the effective configuration and exit.
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Save the effective configuration (including these flags) to the
    /// config file and exit.
    #[arg(long = "save-config", help_heading = "Configuration")]
    pub save_config: bool,

    /// Log at debug level, including request URLs and response sizes.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Applies the flags that were given on top of `config`.
    pub fn apply_to_config(&self, config: &mut Config) -> Result<(), AppError> {
        if let Some(start_date) = &self.start_date {
            config.start_date = parse_date(start_date)?;
        }

        if let Some(end_date) = &self.end_date {
            config.end_date = parse_date(end_date)?;
        }

        if !self.game_types.is_empty() {
            config.game_types = self.game_types.clone();
        }

        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }

        if self.skip_scratched {
            config.skip_scratched = true;
        }

        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }

        config.normalize();
        config.validate()
    }
}
