//! Watchroll CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Prompt for filters and pick (default command)
//! watchroll
//!
//! # One-shot pick
//! watchroll pick --type Movie --watched FALSE -t Horror
//!
//! # Reproducible pick from a specific file
//! watchroll -f ~/watchlist.csv --seed 42 pick
//!
//! # Show the values each filter accepts
//! watchroll options
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/watchroll/config.toml` on Linux) and can be overridden with
//! `WATCHROLL_*` environment variables. Set `WATCHROLL_LOG=debug` for logs.

use clap::CommandFactory;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use watchroll::{
    WatchrollError,
    cli::{Cli, Commands},
    commands,
    config::WatchrollConfig,
    ui::{DialoguerInput, OutputWriter, StdoutWriter},
    watchlist::Watchlist,
};

type Result<T> = std::result::Result<T, WatchrollError>;

/// Install the stderr log formatter, filtered by `WATCHROLL_LOG`
fn init_logging() {
    let filter = EnvFilter::try_from_env("WATCHROLL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Random source: seeded when `--seed` is given, OS entropy otherwise
fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    }
}

/// Load the watchlist named by `--file`, the config, or the default path
fn load_watchlist(cli: &Cli, settings: &WatchrollConfig) -> Result<Watchlist> {
    let path = settings.watchlist_path(cli.file.as_deref());
    Ok(Watchlist::load(&path)?)
}

/// Dispatch the parsed command
///
/// # Errors
///
/// Returns `WatchrollError` if configuration or the watchlist cannot be
/// loaded, or if a command handler fails.
fn run(cli: &Cli, out: &dyn OutputWriter) -> Result<()> {
    let settings = WatchrollConfig::load()?;
    let quiet = cli.quiet || settings.quiet;
    let mut rng = make_rng(cli.seed);

    match cli.get_command() {
        Commands::Interactive => {
            let watchlist = load_watchlist(cli, &settings)?;
            let input = DialoguerInput::new();
            let summary = commands::interactive(&watchlist, &input, out, settings.format, &mut *rng)?;
            tracing::info!(picked = summary.picked, no_match = summary.no_match, "session ended");
        }
        Commands::Pick { filters, format } => {
            let watchlist = load_watchlist(cli, &settings)?;
            let format = format.unwrap_or(settings.format);
            commands::pick(&watchlist, &filters.to_selection(), format, &mut *rng, out)?;
        }
        Commands::List { filters } => {
            let watchlist = load_watchlist(cli, &settings)?;
            commands::list(&watchlist, &filters.to_selection(), quiet, out)?;
        }
        Commands::Options { list } => {
            let watchlist = load_watchlist(cli, &settings)?;
            commands::options(&watchlist, list, quiet, out);
        }
        Commands::Config { command } => commands::config(settings, &command, quiet, out)?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "watchroll", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Main entry point for the watchroll application
///
/// Errors are printed before exit; a watchlist that fails to load stops the
/// program before any prompt is shown.
fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse_args();
    let out = StdoutWriter::new();

    match run(&cli, &out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;
    use watchroll::ui::{BufferedWriter, MessageLevel};
    use watchroll::watchlist::LoadError;

    #[test]
    fn test_completions_do_not_need_a_watchlist() {
        let cli = Cli::try_parse_from(["watchroll", "-f", "/nonexistent/list.csv", "completions", "bash"]).unwrap();
        let out = BufferedWriter::new();
        assert!(run(&cli, &out).is_ok());
    }

    #[test]
    fn test_pick_reads_the_file_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.csv");
        std::fs::write(
            &path,
            "Name,Type of Media,Total Time Commitment,Medium,Watched?,Tags\nDune,Book,21,Kindle,FALSE\n",
        )
        .unwrap();

        let file = path.to_str().unwrap();
        let cli = Cli::try_parse_from(["watchroll", "-f", file, "--seed", "3", "pick", "--format", "text"]).unwrap();
        let out = BufferedWriter::new();
        run(&cli, &out).unwrap();
        assert!(out.messages_at(MessageLevel::Normal).iter().any(|m| m.contains("Name: Dune")));
    }

    #[test]
    fn test_missing_watchlist_fails_before_dispatch() {
        let cli = Cli::try_parse_from(["watchroll", "-f", "/nonexistent/list.csv", "options"]).unwrap();
        let out = BufferedWriter::new();
        let err = run(&cli, &out).unwrap_err();
        assert!(matches!(err, WatchrollError::Load(LoadError::NotFound(_))));
        assert!(out.messages().is_empty());
    }
}
