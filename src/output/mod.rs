//! Output formatting for CLI display
//!
//! Renders a picked item as six labelled lines or as JSON, and lays out the
//! filter values for the `options` command.

use crate::config::OutputFormat;
use crate::watchlist::{FilterOptions, Item};
use colored::Colorize;

/// Notice shown when the filters exclude every row
pub const NO_MATCH_NOTICE: &str = "No items match your filter criteria.";

/// Format an item as six labelled lines, values verbatim
#[must_use]
pub fn format_item(item: &Item) -> String {
    format!(
        "Name: {}\nType of Media: {}\nTotal Time Commitment: {} hours\nMedium: {}\nWatched?: {}\nTags: {}",
        item.name,
        item.media_type,
        item.time_commitment,
        item.medium,
        item.watched,
        item.tags_text(),
    )
}

/// Render an item in the requested format
///
/// # Errors
///
/// Returns `serde_json::Error` if JSON serialization fails.
pub fn render_item(item: &Item, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format_item(item)),
        OutputFormat::Json => serde_json::to_string_pretty(item),
    }
}

/// Render a labelled block of values; quiet mode prints bare values
#[must_use]
pub fn option_block(label: &str, values: &[String], quiet: bool) -> String {
    if quiet {
        return values.join("\n");
    }

    let mut block = format!("{}", format!("{label}:").bold());
    if values.is_empty() {
        block.push_str(&format!("\n  {}", "(none)".dimmed()));
    }
    for value in values {
        block.push_str(&format!("\n  {value}"));
    }
    block
}

/// Render every filter control with its values, `Any` first
#[must_use]
pub fn all_options(options: &FilterOptions, quiet: bool) -> String {
    [
        option_block("Type of Media", &options.media_types_with_any(), quiet),
        option_block("Medium", &options.mediums_with_any(), quiet),
        option_block("Watched?", &options.watched_with_any(), quiet),
        option_block("Tags", &options.tags, quiet),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alien() -> Item {
        Item::new("Alien", "Movie", "Streaming")
            .with_time_commitment("2")
            .with_watched("TRUE")
            .with_tags("Horror, Sci-Fi")
    }

    #[test]
    fn test_format_item_six_labelled_lines() {
        let text = format_item(&alien());
        assert_eq!(
            text,
            "Name: Alien\nType of Media: Movie\nTotal Time Commitment: 2 hours\nMedium: Streaming\nWatched?: TRUE\nTags: Horror, Sci-Fi"
        );
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_format_item_without_tags() {
        let item = Item::new("Dune", "Book", "Kindle").with_time_commitment("20").with_watched("FALSE");
        assert!(format_item(&item).ends_with("Tags: "));
    }

    #[test]
    fn test_render_json_uses_column_names() {
        let json = render_item(&alien(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Name"], "Alien");
        assert_eq!(value["Type of Media"], "Movie");
        assert_eq!(value["Total Time Commitment"], "2");
        assert_eq!(value["Watched?"], "TRUE");
        assert_eq!(value["Tags"], "Horror, Sci-Fi");
    }

    #[test]
    fn test_render_text_matches_format_item() {
        assert_eq!(render_item(&alien(), OutputFormat::Text).unwrap(), format_item(&alien()));
    }

    #[test]
    fn test_option_block_quiet_is_bare() {
        let values = vec!["Any".to_string(), "Movie".to_string()];
        assert_eq!(option_block("Type of Media", &values, true), "Any\nMovie");
    }

    #[test]
    fn test_option_block_lists_values() {
        colored::control::set_override(false);
        let values = vec!["Horror".to_string()];
        assert_eq!(option_block("Tags", &values, false), "Tags:\n  Horror");
        assert_eq!(option_block("Tags", &[], false), "Tags:\n  (none)");
    }

    #[test]
    fn test_all_options_includes_any_for_single_choice_controls() {
        let options = FilterOptions::from_items(&[alien()]);
        let text = all_options(&options, true);
        assert_eq!(text, "Any\nMovie\n\nAny\nStreaming\n\nAny\nTrue\n\nHorror\nSci-Fi");
    }
}
