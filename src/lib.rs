//! Watchroll - pick a random entry from a tagged watchlist
//!
//! Loads a CSV watchlist once, offers the distinct values of each filterable
//! column, and draws one item uniformly at random from the rows matching the
//! current filters.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod select;
pub mod ui;
pub mod watchlist;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum WatchrollError {
    /// The watchlist could not be loaded
    #[error("Failed to load watchlist: {0}")]
    Load(#[from] watchlist::LoadError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// A prompt failed
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
