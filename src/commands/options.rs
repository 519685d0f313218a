//! Options command - the values each filter accepts

use crate::{cli::OptionsList, output, ui::OutputWriter, watchlist::Watchlist};

/// Execute the options command
pub fn execute(watchlist: &Watchlist, list: Option<OptionsList>, quiet: bool, out: &dyn OutputWriter) {
    let options = watchlist.options();

    let text = match list {
        None => output::all_options(options, quiet),
        Some(OptionsList::Types) => output::option_block("Type of Media", &options.media_types_with_any(), quiet),
        Some(OptionsList::Mediums) => output::option_block("Medium", &options.mediums_with_any(), quiet),
        Some(OptionsList::Watched) => output::option_block("Watched?", &options.watched_with_any(), quiet),
        Some(OptionsList::Tags) => output::option_block("Tags", &options.tags, quiet),
    };

    out.write(&text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{BufferedWriter, MessageLevel};
    use crate::watchlist::Item;

    #[test]
    fn test_options_single_list_quiet() {
        let watchlist = Watchlist::from_items(vec![
            Item::new("Alien", "Movie", "Streaming").with_tags("Sci-Fi, Horror"),
            Item::new("Dune", "Book", "Kindle").with_tags("Sci-Fi"),
        ]);
        let out = BufferedWriter::new();

        execute(&watchlist, Some(OptionsList::Tags), true, &out);
        assert_eq!(out.messages_at(MessageLevel::Normal), vec!["Horror\nSci-Fi"]);

        execute(&watchlist, Some(OptionsList::Types), true, &out);
        assert_eq!(out.messages_at(MessageLevel::Normal)[1], "Any\nBook\nMovie");
    }
}
