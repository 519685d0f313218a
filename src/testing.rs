//! Testing utilities for watchroll
//!
//! Provides a `WatchlistFixture` builder that writes a CSV watchlist into a
//! temporary directory which is removed when the fixture is dropped.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::watchlist::REQUIRED_COLUMNS;

/// Builder for a watchlist CSV file on disk
#[derive(Debug, Clone)]
pub struct WatchlistFixture {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl WatchlistFixture {
    /// Fixture with the six standard columns and no rows
    #[must_use]
    pub fn new() -> Self {
        Self::with_headers(&REQUIRED_COLUMNS)
    }

    /// Fixture with a custom header row
    #[must_use]
    pub fn with_headers(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row in the standard column order
    #[must_use]
    pub fn row(
        mut self,
        name: &str,
        media_type: &str,
        time: &str,
        medium: &str,
        watched: &str,
        tags: &str,
    ) -> Self {
        self.rows.push(
            [name, media_type, time, medium, watched, tags]
                .iter()
                .map(ToString::to_string)
                .collect(),
        );
        self
    }

    /// Render the fixture as CSV text
    ///
    /// # Panics
    /// Panics if the CSV writer fails, which only happens on I/O errors.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(Vec::new());
        writer.write_record(&self.headers).expect("write headers");
        for row in &self.rows {
            writer.write_record(row).expect("write row");
        }
        let bytes = writer.into_inner().unwrap_or_else(|_| panic!("flush csv"));
        String::from_utf8(bytes).expect("csv is utf-8")
    }

    /// Write the fixture into a fresh temporary directory
    ///
    /// # Panics
    /// Panics if the temporary directory or file cannot be created.
    #[must_use]
    pub fn write(&self) -> WrittenWatchlist {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("watchlist.csv");
        fs::write(&path, self.to_csv()).expect("write watchlist fixture");
        WrittenWatchlist { _dir: dir, path }
    }
}

impl Default for WatchlistFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A watchlist file that lives as long as this value
pub struct WrittenWatchlist {
    _dir: TempDir,
    path: PathBuf,
}

impl WrittenWatchlist {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_quotes_commas_in_tags() {
        let csv = WatchlistFixture::new()
            .row("Alien", "Movie", "2", "Streaming", "TRUE", "Horror, Sci-Fi")
            .to_csv();
        assert!(csv.starts_with("Name,Type of Media,Total Time Commitment,Medium,Watched?,Tags\n"));
        assert!(csv.contains("\"Horror, Sci-Fi\""));
    }

    #[test]
    fn test_written_fixture_is_removed_on_drop() {
        let path = {
            let written = WatchlistFixture::new().write();
            assert!(written.path().exists());
            written.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
