//! Filtering and random selection
//!
//! Narrows the loaded rows by the current [`FilterSelection`] and draws one
//! of the remaining rows uniformly at random. The random source is passed in
//! so picks are reproducible under a fixed seed.
//!
//! # Matching rules
//!
//! - Type of media and medium: exact match, skipped when `Any`.
//! - Watched: both sides normalized to `True`/`False` before comparing.
//! - Tags: a row matches when its raw tag text contains any selected tag as
//!   a substring, so `Horror` also matches `Horror-Comedy`.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use watchroll::select::{self, Choice, FilterSelection, Selection};
//! use watchroll::watchlist::Item;
//!
//! let items = vec![
//!     Item::new("A", "Movie", "Streaming").with_watched("TRUE").with_tags("Horror"),
//!     Item::new("B", "Book", "Paper").with_watched("FALSE").with_tags("Comedy"),
//! ];
//! let selection = FilterSelection::new().media_type(Choice::parse("Movie"));
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! match select::pick(&items, &selection, &mut rng) {
//!     Selection::Picked(item) => assert_eq!(item.name, "A"),
//!     Selection::NoMatch => unreachable!(),
//! }
//! ```

pub mod types;

pub use types::{ANY, Choice, FilterSelection, Selection};

use crate::watchlist::{Item, normalize_watched};
use rand::Rng;
use rand::seq::SliceRandom;

/// Whether a single row passes every active filter
#[must_use]
pub fn matches(item: &Item, selection: &FilterSelection) -> bool {
    if let Some(media_type) = selection.media_type.value()
        && item.media_type != media_type
    {
        return false;
    }

    if let Some(medium) = selection.medium.value()
        && item.medium != medium
    {
        return false;
    }

    if let Some(watched) = selection.watched.value()
        && item.watched.normalized() != normalize_watched(watched)
    {
        return false;
    }

    if !selection.tags.is_empty() {
        let Some(tags) = item.tags.as_deref() else {
            return false;
        };
        if !selection.tags.iter().any(|tag| tags.contains(tag.as_str())) {
            return false;
        }
    }

    true
}

/// Rows remaining after all active filters, in table order
#[must_use]
pub fn candidates<'a>(items: &'a [Item], selection: &FilterSelection) -> Vec<&'a Item> {
    let found: Vec<&Item> = items.iter().filter(|item| matches(item, selection)).collect();
    tracing::debug!(total = items.len(), candidates = found.len(), "applied filters");
    found
}

/// Draw one matching row uniformly at random
///
/// Returns [`Selection::NoMatch`] when the filters exclude every row.
pub fn pick<'a, R>(items: &'a [Item], selection: &FilterSelection, rng: &mut R) -> Selection<'a>
where
    R: Rng + ?Sized,
{
    let found = candidates(items, selection);
    match found.choose(rng) {
        Some(&item) => Selection::Picked(item),
        None => Selection::NoMatch,
    }
}
