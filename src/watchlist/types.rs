//! Watchlist row types
//!
//! Rows are read into a fixed struct at load time. Cells whose display must
//! stay verbatim (time commitment, watched flag) keep their raw text and
//! expose typed views on top of it.

use serde::{Deserialize, Serialize};

/// Hours needed to finish an item, kept as the text found in the table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TimeCommitment(String);

impl TimeCommitment {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw cell text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value in hours, if the cell holds a number
    #[must_use]
    pub fn hours(&self) -> Option<f64> {
        self.0.trim().parse().ok()
    }
}

impl std::fmt::Display for TimeCommitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Watched flag, stored either as a boolean literal or free text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct WatchedStatus(String);

impl WatchedStatus {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw cell text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Textual `True`/`False` form of the stored value
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize_watched(&self.0)
    }
}

impl std::fmt::Display for WatchedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map any casing of `true`/`false` to `True`/`False`.
///
/// Other values are trimmed and returned unchanged, so a column holding
/// `yes`/`no` still compares exactly.
#[must_use]
pub fn normalize_watched(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        "True".to_string()
    } else if trimmed.eq_ignore_ascii_case("false") {
        "False".to_string()
    } else {
        trimmed.to_string()
    }
}

/// One entry of the watchlist
///
/// Serializes with the table's own column names so JSON output lines up
/// with the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Type of Media")]
    pub media_type: String,

    #[serde(rename = "Total Time Commitment")]
    pub time_commitment: TimeCommitment,

    #[serde(rename = "Medium")]
    pub medium: String,

    #[serde(rename = "Watched?")]
    pub watched: WatchedStatus,

    /// Comma-separated tag text; `None` when the cell is blank
    #[serde(rename = "Tags")]
    pub tags: Option<String>,
}

impl Item {
    /// Create an item with empty time, watched and tag cells
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        medium: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            time_commitment: TimeCommitment::default(),
            medium: medium.into(),
            watched: WatchedStatus::default(),
            tags: None,
        }
    }

    #[must_use]
    pub fn with_time_commitment(mut self, raw: impl Into<String>) -> Self {
        self.time_commitment = TimeCommitment::new(raw);
        self
    }

    #[must_use]
    pub fn with_watched(mut self, raw: impl Into<String>) -> Self {
        self.watched = WatchedStatus::new(raw);
        self
    }

    /// Set the tag text; blank text clears it
    #[must_use]
    pub fn with_tags(mut self, raw: impl Into<String>) -> Self {
        self.tags = non_blank(raw.into());
        self
    }

    /// Raw tag text, empty when the row has none
    #[must_use]
    pub fn tags_text(&self) -> &str {
        self.tags.as_deref().unwrap_or("")
    }

    /// Individual tags: comma-split, trimmed, empty pieces dropped
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags_text()
            .split(',')
            .map(str::trim)
            // "a,,b" and a trailing comma leave empty pieces; those are not tags
            .filter(|tag| !tag.is_empty())
    }
}

/// Row shape as it appears in the CSV file
#[derive(Debug, Deserialize)]
pub(crate) struct RawRow {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Type of Media")]
    pub media_type: String,

    #[serde(rename = "Total Time Commitment")]
    pub time_commitment: String,

    #[serde(rename = "Medium")]
    pub medium: String,

    #[serde(rename = "Watched?")]
    pub watched: String,

    #[serde(rename = "Tags", default)]
    pub tags: Option<String>,
}

impl TryFrom<RawRow> for Item {
    type Error = String;

    fn try_from(row: RawRow) -> Result<Self, Self::Error> {
        if row.name.trim().is_empty() {
            return Err("empty Name".to_string());
        }

        Ok(Self {
            name: row.name,
            media_type: row.media_type,
            time_commitment: TimeCommitment::new(row.time_commitment),
            medium: row.medium,
            watched: WatchedStatus::new(row.watched),
            tags: row.tags.and_then(non_blank),
        })
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}
