//! List command - every item matching the filters

use crate::{
    WatchrollError,
    output,
    select::{self, FilterSelection},
    ui::OutputWriter,
    watchlist::Watchlist,
};

type Result<T> = std::result::Result<T, WatchrollError>;

/// Execute the list command, returning the number of matches
///
/// # Errors
/// Currently infallible; the signature matches the other commands.
pub fn execute(
    watchlist: &Watchlist,
    selection: &FilterSelection,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<usize> {
    let found = select::candidates(watchlist.items(), selection);

    if found.is_empty() {
        out.info(output::NO_MATCH_NOTICE);
        return Ok(0);
    }

    if !quiet {
        out.info(&format!("{} matching item(s):", found.len()));
    }
    for item in &found {
        if quiet {
            out.write(&item.name);
        } else {
            out.write(&format!("  {} ({}, {})", item.name, item.media_type, item.medium));
        }
    }

    Ok(found.len())
}
