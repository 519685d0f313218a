//! Watchlist loading
//!
//! Reads the watchlist table once at startup into typed [`Item`] rows and
//! derives the values each filter control offers. The result is read-only:
//! nothing is ever written back to the source file.
//!
//! # Table format
//!
//! A CSV file with a header row containing at least:
//!
//! | Column                  | Meaning                                  |
//! |-------------------------|------------------------------------------|
//! | `Name`                  | Title of the entry                       |
//! | `Type of Media`         | Movie, Show, Book, ...                   |
//! | `Total Time Commitment` | Hours, shown verbatim                    |
//! | `Medium`                | Where it is consumed                     |
//! | `Watched?`              | `TRUE`/`FALSE` in any casing, or text    |
//! | `Tags`                  | Comma-separated, may be empty            |
//!
//! # Examples
//!
//! ```no_run
//! use watchroll::watchlist::Watchlist;
//! use std::path::Path;
//!
//! let watchlist = Watchlist::load(Path::new("data/input/watchlist.csv")).unwrap();
//! println!("{} items, {} tags", watchlist.len(), watchlist.options().tags.len());
//! ```

pub mod error;
pub mod loader;
pub mod options;
pub mod types;

pub use error::LoadError;
pub use loader::REQUIRED_COLUMNS;
pub use options::FilterOptions;
pub use types::{Item, TimeCommitment, WatchedStatus, normalize_watched};

use std::io::Read;
use std::path::{Path, PathBuf};

/// A loaded watchlist and the filter values derived from it
#[derive(Debug, Clone)]
pub struct Watchlist {
    source: Option<PathBuf>,
    items: Vec<Item>,
    options: FilterOptions,
}

impl Watchlist {
    /// Load a watchlist from a CSV file
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file is missing, unreadable, malformed, or
    /// lacks a required column.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let items = loader::read_items_from_path(path)?;
        let mut watchlist = Self::from_items(items);
        watchlist.source = Some(path.to_path_buf());
        Ok(watchlist)
    }

    /// Load a watchlist from any CSV reader
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the data is malformed or lacks a required column.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        loader::read_items(reader).map(Self::from_items)
    }

    /// Build a watchlist from already-parsed items
    #[must_use]
    pub fn from_items(items: Vec<Item>) -> Self {
        let options = FilterOptions::from_items(&items);
        tracing::debug!(
            rows = items.len(),
            tags = options.tags.len(),
            "derived filter options"
        );
        Self {
            source: None,
            items,
            options,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub const fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// File the watchlist was read from, if any
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
