//! CSV loading and header validation

use super::error::LoadError;
use super::types::{Item, RawRow};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Columns every watchlist must carry, in display order
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Name",
    "Type of Media",
    "Total Time Commitment",
    "Medium",
    "Watched?",
    "Tags",
];

/// Read every item from a watchlist file on disk
///
/// # Errors
///
/// Returns `LoadError::NotFound` when the file is absent, `LoadError::Io` when
/// it cannot be opened, and the errors of [`read_items`] otherwise.
pub fn read_items_from_path(path: &Path) -> Result<Vec<Item>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "opening watchlist");
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = read_items(file)?;
    info!(path = %path.display(), rows = items.len(), "watchlist loaded");
    Ok(items)
}

/// Read every item from CSV data with a header row
///
/// Extra columns are ignored and column order is free. A row may stop short
/// of the header; its missing trailing cells read as empty.
///
/// # Errors
///
/// Returns `LoadError::MissingColumns` naming each absent header,
/// `LoadError::Csv` for malformed input, and `LoadError::InvalidRow` for a
/// row with a blank name or with more fields than the header.
pub fn read_items<R: Read>(reader: R) -> Result<Vec<Item>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(ToString::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut items = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        if record.len() > headers.len() {
            return Err(LoadError::InvalidRow {
                line,
                reason: format!("found {} fields, but the header has {}", record.len(), headers.len()),
            });
        }
        let raw: RawRow = record.deserialize(Some(&headers))?;
        let item = Item::try_from(raw).map_err(|reason| LoadError::InvalidRow { line, reason })?;
        items.push(item);
    }

    Ok(items)
}
