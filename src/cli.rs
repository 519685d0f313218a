//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for watchroll using the `clap` crate.
//!
//! # Commands
//!
//! - **interactive**: Prompt for every filter, then pick (default)
//! - **pick**: Pick one random item matching the filter flags
//! - **list**: Show every item matching the filter flags
//! - **options**: Show the values each filter accepts
//! - **config**: Read and write configuration settings
//! - **completions**: Print a shell completion script
//!
//! # Examples
//!
//! ```bash
//! watchroll pick --type Movie --watched FALSE -t Horror -t Comedy
//! watchroll --seed 7 pick --medium Streaming --format json
//! watchroll options tags
//! watchroll -f ~/lists/watchlist.csv
//! ```

use crate::config::OutputFormat;
use crate::select::{Choice, FilterSelection};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Pick a random entry from your watchlist
#[derive(Parser, Debug)]
#[command(name = "watchroll", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Watchlist CSV to read (overrides config)
    #[arg(short = 'f', long = "file", value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// Seed for the random source, for reproducible picks
    #[arg(long = "seed", value_name = "N", global = true)]
    pub seed: Option<u64>,
}

/// Filter flags shared by `pick` and `list`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Type of media to match exactly ("Any" for no constraint)
    #[arg(long = "type", value_name = "TYPE", default_value = "Any")]
    pub media_type: String,

    /// Medium to match exactly ("Any" for no constraint)
    #[arg(short = 'm', long = "medium", value_name = "MEDIUM", default_value = "Any")]
    pub medium: String,

    /// Watched status, e.g. TRUE or FALSE ("Any" for no constraint)
    #[arg(short = 'w', long = "watched", value_name = "VALUE", default_value = "Any")]
    pub watched: String,

    /// Tags to look for; an item matches if it has any of them
    #[arg(short = 't', long = "tag", value_name = "TAG", num_args = 1..)]
    pub tags: Vec<String>,
}

impl FilterArgs {
    /// Convert the flags into a filter selection
    #[must_use]
    pub fn to_selection(&self) -> FilterSelection {
        FilterSelection::new()
            .media_type(Choice::parse(&self.media_type))
            .medium(Choice::parse(&self.medium))
            .watched(Choice::parse(&self.watched))
            .tags(self.tags.clone())
    }
}

/// Which filter values the `options` command prints
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsList {
    /// Type of media values
    Types,
    /// Medium values
    Mediums,
    /// Watched values
    Watched,
    /// Individual tags
    Tags,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., watchlist=~/watchlist.csv)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (watchlist, quiet, format)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file location
    Path,

    /// Walk through the settings interactively
    Init,
}

/// Top-level commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Choose filters from prompts, then pick (default)
    #[command(visible_alias = "i")]
    Interactive,

    /// Pick one random item matching the filters
    #[command(visible_alias = "p")]
    Pick {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output format (overrides config)
        #[arg(long = "format", value_enum)]
        format: Option<OutputFormat>,
    },

    /// List every item matching the filters
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show the values each filter accepts
    #[command(visible_alias = "o")]
    Options {
        /// Only show one list
        #[arg(value_enum)]
        list: Option<OptionsList>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to the interactive session
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }
}
