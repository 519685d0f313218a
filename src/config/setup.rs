//! Interactive setup wizard
//!
//! Prompts for the watchlist location and default output format, then saves
//! the result as the user's configuration.

use super::{DEFAULT_WATCHLIST, OutputFormat, WatchrollConfig};
use config::ConfigError;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup
///
/// 1. Prompts for the watchlist path (default: the current value or
///    `data/input/watchlist.csv`)
/// 2. Prompts for the default output format
/// 3. Saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup(current: &WatchrollConfig) -> Result<WatchrollConfig, ConfigError> {
    println!("Let's set up watchroll.\n");

    let theme = ColorfulTheme::default();
    let default_path = current
        .watchlist
        .as_ref()
        .map_or_else(|| DEFAULT_WATCHLIST.to_string(), |p| p.display().to_string());

    let watchlist: String = Input::with_theme(&theme)
        .with_prompt("Watchlist CSV location")
        .default(default_path)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let formats = [OutputFormat::Text, OutputFormat::Json];
    let labels: Vec<String> = formats.iter().map(ToString::to_string).collect();
    let default_index = formats.iter().position(|f| *f == current.format).unwrap_or(0);
    let format_index = Select::with_theme(&theme)
        .with_prompt("Default output format")
        .items(labels.as_slice())
        .default(default_index)
        .interact()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = WatchrollConfig {
        watchlist: Some(PathBuf::from(watchlist)),
        quiet: current.quiet,
        format: formats[format_index],
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
