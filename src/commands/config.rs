//! Config command - read and write settings

use crate::{
    WatchrollError,
    cli::ConfigCommands,
    config::{self, WatchrollConfig},
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, WatchrollError>;

/// Execute a configuration subcommand
///
/// # Errors
/// Returns an error for malformed `KEY=VALUE` input, unknown keys, invalid
/// values, or when the configuration cannot be saved.
pub fn execute(
    mut settings: WatchrollConfig,
    command: &ConfigCommands,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            settings.set(key, value)?;
            settings.save()?;
            if !quiet {
                out.info(&format!("Set {key} = {}", settings.get(key)?));
            }
        }
        ConfigCommands::Get { key } => {
            out.write(&settings.get(key)?);
        }
        ConfigCommands::Path => {
            out.write(&WatchrollConfig::config_path()?.display().to_string());
        }
        ConfigCommands::Init => {
            config::first_time_setup(&settings)?;
        }
    }
    Ok(())
}

/// Split `key=value`, trimming both sides
///
/// # Errors
/// Returns `WatchrollError::InvalidInput` when there is no `=`.
pub fn parse_setting(setting: &str) -> Result<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| WatchrollError::InvalidInput("Invalid format. Use: watchroll config set key=value".into()))
}
