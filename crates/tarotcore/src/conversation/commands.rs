//! Replies for the informational commands

use indoc::indoc;

use super::menu::start_menu;
use super::reply::Reply;
use crate::catalog::info::{catalog_messages, describe, escape_html};
use crate::catalog::{lookup_by_display_name, lookup_by_key, lookup_suit_name};

pub fn welcome() -> Reply {
    start_menu(indoc! {"
        Welcome to the Kirby CMS Uploader Bot! 👋

        Send me a photo, video, audio or text message to start an upload.
        I will ask for its tarot card, orientation and house, then save it to the site.

        Use /menu for instructions and /reset at any time to start over."})
}

/// `/tarot` without an argument lists the whole catalog; with one it
/// describes the card or suit matching the display name or key.
pub fn tarot_info(query: &str) -> Vec<Reply> {
    let query = query.trim();
    if query.is_empty() {
        return catalog_messages().into_iter().map(Reply::html).collect();
    }

    let entry = lookup_by_display_name(query)
        .or_else(|| lookup_by_key(&query.to_lowercase()))
        .or_else(|| lookup_suit_name(query));
    match entry {
        Some(entry) => vec![Reply::html(describe(entry))],
        None => vec![Reply::html(format!(
            "No tarot card named <b>{}</b>. Try /tarot without arguments for the full list.",
            escape_html(query)
        ))],
    }
}
