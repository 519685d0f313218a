//! Interactive command - prompt for each filter, pick, repeat
//!
//! One round asks for type of media, medium and watched status (each list
//! starts with `Any`), then the tags to look for, then prints a pick. The
//! single-choice prompts default to the previous round's answer. Cancelling
//! any prompt ends the session.

use crate::{
    WatchrollError,
    config::OutputFormat,
    select::{Choice, FilterSelection},
    ui::{OutputWriter, UserInput},
    watchlist::Watchlist,
};
use rand::Rng;

use super::pick;

type Result<T> = std::result::Result<T, WatchrollError>;

/// Summary of a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds that produced an item
    pub picked: usize,
    /// Rounds whose filters matched nothing
    pub no_match: usize,
}

/// Which entry each single-choice prompt should start on
#[derive(Debug, Clone, Copy, Default)]
struct Defaults {
    media_type: usize,
    medium: usize,
    watched: usize,
}

/// Run the interactive session until the user stops or cancels
///
/// # Errors
/// Returns an error if a prompt fails or a pick cannot be rendered.
pub fn run<R: Rng + ?Sized>(
    watchlist: &Watchlist,
    input: &dyn UserInput,
    out: &dyn OutputWriter,
    format: OutputFormat,
    rng: &mut R,
) -> Result<SessionSummary> {
    let options = watchlist.options();
    let media_types = options.media_types_with_any();
    let mediums = options.mediums_with_any();
    let watched = options.watched_with_any();

    let mut defaults = Defaults::default();
    let mut summary = SessionSummary::default();

    loop {
        let Some(media_type) = input.prompt_select("Type of Media", &media_types, Some(defaults.media_type))? else {
            break;
        };
        let Some(medium) = input.prompt_select("Medium", &mediums, Some(defaults.medium))? else {
            break;
        };
        let Some(watched_index) = input.prompt_select("Watched?", &watched, Some(defaults.watched))? else {
            break;
        };

        let tags = if options.tags.is_empty() {
            Vec::new()
        } else {
            let Some(indices) = input.prompt_multi_select("Tags (space to toggle)", &options.tags)? else {
                break;
            };
            indices.into_iter().filter_map(|i| options.tags.get(i).cloned()).collect()
        };

        defaults = Defaults {
            media_type,
            medium,
            watched: watched_index,
        };

        let selection = FilterSelection::new()
            .media_type(choice_at(&media_types, media_type))
            .medium(choice_at(&mediums, medium))
            .watched(choice_at(&watched, watched_index))
            .tags(tags);
        tracing::debug!(?selection, "interactive round");

        let outcome = pick::execute(watchlist, &selection, format, &mut *rng, out)?;
        if outcome.is_no_match() {
            summary.no_match += 1;
        } else {
            summary.picked += 1;
        }

        if input.prompt_confirm("Generate another?", true)? != Some(true) {
            break;
        }
    }

    Ok(summary)
}

fn choice_at(values: &[String], index: usize) -> Choice {
    values.get(index).map_or(Choice::Any, |value| Choice::parse(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::NO_MATCH_NOTICE;
    use crate::ui::{BufferedWriter, MessageLevel, ScriptedInput, ScriptedResponse};
    use crate::watchlist::Item;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn watchlist() -> Watchlist {
        Watchlist::from_items(vec![
            Item::new("Alien", "Movie", "Streaming").with_watched("TRUE").with_tags("Horror, Sci-Fi"),
            Item::new("Dune", "Book", "Kindle").with_watched("FALSE").with_tags("Sci-Fi"),
            Item::new("Airplane!", "Movie", "DVD").with_watched("FALSE").with_tags("Comedy"),
        ])
    }

    fn select(label: &str) -> ScriptedResponse {
        ScriptedResponse::Select(label.to_string())
    }

    fn tags(labels: &[&str]) -> ScriptedResponse {
        ScriptedResponse::MultiSelect(labels.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_single_round_picks_matching_item() {
        let input = ScriptedInput::new(vec![
            select("Movie"),
            select("Any"),
            select("False"),
            tags(&[]),
            ScriptedResponse::Confirm(false),
        ]);
        let out = BufferedWriter::new();

        let summary = run(&watchlist(), &input, &out, OutputFormat::Text, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(summary, SessionSummary { picked: 1, no_match: 0 });
        let written = out.messages_at(MessageLevel::Normal);
        assert_eq!(written.len(), 1);
        assert!(written[0].starts_with("Name: Airplane!"));
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_no_match_round_continues_session() {
        let input = ScriptedInput::new(vec![
            select("Book"),
            select("Any"),
            select("Any"),
            tags(&["Comedy"]),
            ScriptedResponse::Confirm(true),
            select("Any"),
            select("Any"),
            select("Any"),
            tags(&["Horror"]),
            ScriptedResponse::Confirm(false),
        ]);
        let out = BufferedWriter::new();

        let summary = run(&watchlist(), &input, &out, OutputFormat::Text, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(summary, SessionSummary { picked: 1, no_match: 1 });
        assert_eq!(out.messages_at(MessageLevel::Info), vec![NO_MATCH_NOTICE]);
        assert!(out.messages_at(MessageLevel::Normal)[0].starts_with("Name: Alien"));
    }

    #[test]
    fn test_cancel_ends_session_without_picking() {
        let input = ScriptedInput::new(vec![select("Movie"), ScriptedResponse::Cancel]);
        let out = BufferedWriter::new();

        let summary = run(&watchlist(), &input, &out, OutputFormat::Text, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(summary, SessionSummary::default());
        assert!(out.messages().is_empty());
        assert_eq!(input.prompts(), vec!["Type of Media", "Medium"]);
    }

    #[test]
    fn test_tag_prompt_skipped_when_table_has_no_tags() {
        let watchlist = Watchlist::from_items(vec![Item::new("Heat", "Movie", "Blu-ray").with_watched("TRUE")]);
        let input = ScriptedInput::new(vec![
            select("Any"),
            select("Any"),
            select("True"),
            ScriptedResponse::Confirm(false),
        ]);
        let out = BufferedWriter::new();

        let summary = run(&watchlist, &input, &out, OutputFormat::Text, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(summary.picked, 1);
        assert!(!input.prompts().iter().any(|p| p.starts_with("Tags")));
    }

    #[test]
    fn test_prompt_error_propagates() {
        let input = ScriptedInput::new(vec![ScriptedResponse::Confirm(true)]);
        let out = BufferedWriter::new();

        let result = run(&watchlist(), &input, &out, OutputFormat::Text, &mut StdRng::seed_from_u64(5));
        assert!(matches!(result, Err(WatchrollError::Input(_))));
    }
}
