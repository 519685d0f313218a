//! Filter values derived from a loaded watchlist

use super::types::Item;
use crate::select::ANY;
use std::collections::BTreeSet;

/// Distinct values offered by each filter control
///
/// Every list is sorted and holds each value once. The synthetic `Any`
/// entry is not stored; use the `*_with_any` accessors for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub media_types: Vec<String>,
    pub mediums: Vec<String>,
    /// Watched values in their normalized `True`/`False` form
    pub watched: Vec<String>,
    pub tags: Vec<String>,
}

impl FilterOptions {
    /// Collect the distinct values of every filterable column
    #[must_use]
    pub fn from_items(items: &[Item]) -> Self {
        let mut media_types = BTreeSet::new();
        let mut mediums = BTreeSet::new();
        let mut watched = BTreeSet::new();
        let mut tags = BTreeSet::new();

        for item in items {
            media_types.insert(item.media_type.clone());
            mediums.insert(item.medium.clone());
            watched.insert(item.watched.normalized());
            tags.extend(item.tag_list().map(ToString::to_string));
        }

        Self {
            media_types: media_types.into_iter().collect(),
            mediums: mediums.into_iter().collect(),
            watched: watched.into_iter().collect(),
            tags: tags.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn media_types_with_any(&self) -> Vec<String> {
        with_any(&self.media_types)
    }

    #[must_use]
    pub fn mediums_with_any(&self) -> Vec<String> {
        with_any(&self.mediums)
    }

    #[must_use]
    pub fn watched_with_any(&self) -> Vec<String> {
        with_any(&self.watched)
    }
}

fn with_any(values: &[String]) -> Vec<String> {
    std::iter::once(ANY.to_string())
        .chain(values.iter().cloned())
        .collect()
}
