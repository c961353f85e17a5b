// src/main.rs
mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod data_fetcher;
mod error;
mod export;
mod logging;

use clap::Parser;
use cli::Args;
use commands::{handle_export_command, handle_list_config_command, handle_save_config_command};
use config::Config;
use error::AppError;
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config file, then ATG_* environment variables, then flags
    let mut config = Config::load().await?;
    args.apply_to_config(&mut config)?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, &config)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command(&config);
    }

    if args.save_config {
        return handle_save_config_command(&config).await;
    }

    handle_export_command(&config).await
}
