//! Load-time error types
//!
//! Every failure here is fatal: a watchlist that cannot be loaded never
//! reaches the filter or interactive stages.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a watchlist table
#[derive(Debug, Error)]
pub enum LoadError {
    /// The watchlist file does not exist
    #[error("Watchlist not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be opened or read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed CSV (ragged rows, bad quoting, invalid UTF-8)
    #[error("Malformed watchlist: {0}")]
    Csv(#[from] csv::Error),

    /// One or more required headers are absent
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A row could not be turned into an item
    #[error("Invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_every_column() {
        let err = LoadError::MissingColumns(vec!["Medium".into(), "Tags".into()]);
        assert_eq!(err.to_string(), "Missing required column(s): Medium, Tags");
    }

    #[test]
    fn test_not_found_message_includes_path() {
        let err = LoadError::NotFound(PathBuf::from("data/watchlist.csv"));
        assert!(err.to_string().contains("data/watchlist.csv"));
    }
}
