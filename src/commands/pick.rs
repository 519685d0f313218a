//! Pick command - one random item matching the filters

use crate::{
    WatchrollError,
    config::OutputFormat,
    output,
    select::{self, FilterSelection, Selection},
    ui::OutputWriter,
    watchlist::Watchlist,
};
use rand::Rng;

type Result<T> = std::result::Result<T, WatchrollError>;

/// Execute the pick command
///
/// A selection that matches nothing prints the no-match notice and succeeds.
///
/// # Errors
/// Returns an error if the picked item cannot be rendered as JSON.
pub fn execute<'a, R: Rng + ?Sized>(
    watchlist: &'a Watchlist,
    selection: &FilterSelection,
    format: OutputFormat,
    rng: &mut R,
    out: &dyn OutputWriter,
) -> Result<Selection<'a>> {
    let outcome = select::pick(watchlist.items(), selection, rng);
    report(outcome, format, out)?;
    Ok(outcome)
}

/// Print a pick outcome
///
/// # Errors
/// Returns an error if the item cannot be rendered as JSON.
pub fn report(outcome: Selection<'_>, format: OutputFormat, out: &dyn OutputWriter) -> Result<()> {
    match outcome {
        Selection::Picked(item) => out.write(&output::render_item(item, format)?),
        Selection::NoMatch => out.info(output::NO_MATCH_NOTICE),
    }
    Ok(())
}
