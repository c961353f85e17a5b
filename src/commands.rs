use crate::app::run_export;
use crate::config::Config;
use crate::error::AppError;
use tracing::info;

/// Handles the --list-config command.
///
/// Prints the effective settings after config file, environment and flags
/// have been merged.
pub fn handle_list_config_command(config: &Config) -> Result<(), AppError> {
    config.display();
    Ok(())
}

/// Handles the --save-config command.
pub async fn handle_save_config_command(config: &Config) -> Result<(), AppError> {
    config.save().await?;
    println!("Config saved to {}", Config::get_config_path());
    Ok(())
}

/// Runs the export and prints a one-line summary when it succeeds.
pub async fn handle_export_command(config: &Config) -> Result<(), AppError> {
    let summary = run_export(config).await?;
    println!("{summary}");
    info!("Startlists written to: {}", config.output_dir);
    Ok(())
}
