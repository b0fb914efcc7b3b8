//! Prompts for each step and the answers they accept

use indoc::formatdoc;

use super::reply::Reply;
use crate::catalog::info::{describe, escape_html};
use crate::catalog::{all_entries, lookup_by_display_name, lookup_suit_name, CardEntry, Category};
use crate::core::config::options::{HOUSES, ORIENTATIONS};
use crate::session::Upload;

pub const BACK_TO_CATEGORIES: &str = "← Back to Categories";
pub const CONFIRM_YES: &str = "Yes, use this card";
pub const CONFIRM_NO: &str = "No, choose another";

const CATEGORY_LABELS: [(Category, &str); 5] = [
    (Category::Major, "✨ Major Arcana ✨"),
    (Category::Cups, "🌊 Cups 🌊"),
    (Category::Wands, "🔥 Wands 🔥"),
    (Category::Swords, "⚔️ Swords ⚔️"),
    (Category::Pentacles, "💎 Pentacles 💎"),
];

fn category_label(category: Category) -> &'static str {
    CATEGORY_LABELS
        .iter()
        .find(|(c, _)| *c == category)
        .map_or("", |(_, label)| *label)
}

/// Category for a button label or a bare name ("cups", "Major Arcana", "major").
pub fn parse_category(text: &str) -> Option<Category> {
    let wanted = text.trim();
    CATEGORY_LABELS.iter().find_map(|(category, label)| {
        let matches = *label == wanted
            || category.title().eq_ignore_ascii_case(wanted)
            || category.to_string().eq_ignore_ascii_case(wanted);
        matches.then_some(*category)
    })
}

/// A card or suit named by the user: any display name, or a bare suit name.
pub fn parse_card(text: &str) -> Option<&'static CardEntry> {
    lookup_by_display_name(text).or_else(|| lookup_suit_name(text))
}

pub fn is_back(text: &str) -> bool {
    let text = text.trim();
    text == BACK_TO_CATEGORIES || text.eq_ignore_ascii_case("back")
}

/// Yes/no answer to the confirmation question, matched on the first word.
pub fn parse_confirmation(text: &str) -> Option<bool> {
    let first = text
        .split(|c: char| !c.is_alphanumeric())
        .find(|word| !word.is_empty())?;
    if first.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if first.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

/// One of the fixed orientations, case-insensitive.
pub fn parse_orientation(text: &str) -> Option<&'static str> {
    let wanted = text.trim();
    ORIENTATIONS.into_iter().find(|o| o.eq_ignore_ascii_case(wanted))
}

/// One of the fixed houses, case-insensitive.
pub fn parse_house(text: &str) -> Option<&'static str> {
    let wanted = text.trim();
    HOUSES.into_iter().find(|h| h.eq_ignore_ascii_case(wanted))
}

pub fn category_prompt() -> Reply {
    Reply::plain("Choose your path:").with_options([
        vec![category_label(Category::Major)],
        vec![category_label(Category::Cups), category_label(Category::Wands)],
        vec![category_label(Category::Swords), category_label(Category::Pentacles)],
    ])
}

/// Cards of one category two per row, the suit itself for minor arcana,
/// and the way back.
pub fn card_prompt(category: Category) -> Reply {
    let names: Vec<&str> = all_entries(Some(category)).iter().map(|e| e.display).collect();
    let mut rows: Vec<Vec<String>> = names
        .chunks(2)
        .map(|pair| pair.iter().map(|s| s.to_string()).collect())
        .collect();
    if let Some(suit) = category.suit_key().and_then(crate::catalog::lookup_by_key) {
        rows.push(vec![suit.display.to_string()]);
    }
    rows.push(vec![BACK_TO_CATEGORIES.to_string()]);

    Reply::plain(format!("Select a {} card:", category.title())).with_options(rows)
}

pub fn confirmation_prompt(card: &CardEntry) -> Reply {
    let text = format!(
        "{}\nShall we weave this card into our destiny? 🏛️",
        describe(card)
    );
    Reply::html(text).with_options([[CONFIRM_YES, CONFIRM_NO]])
}

pub fn orientation_prompt() -> Reply {
    Reply::plain("Please select the orientation:").with_options(ORIENTATIONS.map(|o| [o]))
}

pub fn house_prompt() -> Reply {
    Reply::plain("Please select a house:").with_options(HOUSES.map(|h| [h]))
}

pub fn summary(upload: &Upload, card: &CardEntry, orientation: &str, house: &str) -> Reply {
    let description = if upload.description.is_empty() {
        "(none)".to_string()
    } else {
        escape_html(&upload.description)
    };
    Reply::html(formatdoc! {"
        📝 <b>Summary of your upload</b>

        Type: {file_type}
        Description: {description}
        Orientation: {orientation}
        Tarot Card: {card}
        House: {house}

        Saving to Kirby CMS...",
        file_type = upload.file_type,
        description = description,
        orientation = escape_html(orientation),
        card = escape_html(card.display),
        house = escape_html(house),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::lookup_by_key;
    use crate::session::FileType;
    use uuid::Uuid;

    #[test]
    fn test_parse_category_accepts_labels_and_names() {
        assert_eq!(parse_category("✨ Major Arcana ✨"), Some(Category::Major));
        assert_eq!(parse_category("major arcana"), Some(Category::Major));
        assert_eq!(parse_category("  CUPS "), Some(Category::Cups));
        assert_eq!(parse_category("⚔️ Swords ⚔️"), Some(Category::Swords));
        assert_eq!(parse_category("suit"), None);
        assert_eq!(parse_category("The Fool"), None);
    }

    #[test]
    fn test_parse_card() {
        assert_eq!(parse_card("the fool").map(|c| c.key), Some("fool"));
        assert_eq!(parse_card("Cups (Water)").map(|c| c.key), Some("cups"));
        assert_eq!(parse_card("Wands").map(|c| c.key), Some("wands"));
        assert!(parse_card("The Jester").is_none());
    }

    #[test]
    fn test_parse_confirmation() {
        assert_eq!(parse_confirmation(CONFIRM_YES), Some(true));
        assert_eq!(parse_confirmation("no, choose another"), Some(false));
        assert_eq!(parse_confirmation("YES"), Some(true));
        assert_eq!(parse_confirmation("maybe"), None);
    }

    #[test]
    fn test_parse_confirmation_needs_a_whole_word() {
        for text in ["nothing, wait", "yesterday I meant", "notyet", "now", "nonsense", "", "  "] {
            assert_eq!(parse_confirmation(text), None, "{text:?}");
        }
        assert_eq!(parse_confirmation("no!"), Some(false));
        assert_eq!(parse_confirmation("  yes please"), Some(true));
    }

    #[test]
    fn test_parse_orientation_and_house() {
        assert_eq!(parse_orientation(" PorTrait "), Some("portrait"));
        assert_eq!(parse_orientation("sideways"), None);
        assert_eq!(parse_house("House3"), Some("house3"));
        assert_eq!(parse_house("house5"), None);
        assert_eq!(parse_house("my own house"), None);
    }

    #[test]
    fn test_card_prompt_layout() {
        let major = card_prompt(Category::Major);
        assert_eq!(major.text, "Select a Major Arcana card:");
        let options = major.options();
        assert_eq!(options.len(), 23);
        assert_eq!(options[0], "The Fool");
        assert_eq!(*options.last().unwrap(), BACK_TO_CATEGORIES);

        let cups = card_prompt(Category::Cups);
        let options = cups.options();
        assert_eq!(options.len(), 16);
        assert_eq!(options[14], "Cups (Water)");
    }

    #[test]
    fn test_category_prompt_rows() {
        let reply = category_prompt();
        assert_eq!(reply.options().len(), 5);
        for label in reply.options() {
            assert!(parse_category(label).is_some(), "{label}");
        }
    }

    #[test]
    fn test_summary_escapes_user_text() {
        let upload = Upload {
            file_type: FileType::Photo,
            uuid: Uuid::new_v4(),
            file_id: None,
            description: "a <b>bold</b> move".to_string(),
        };
        let card = lookup_by_key("fool").unwrap();
        let reply = summary(&upload, card, "landscape", "house2");
        assert!(reply.text.contains("Description: a &lt;b&gt;bold&lt;/b&gt; move"));
        assert!(reply.text.contains("Type: photo"));
        assert!(reply.text.contains("Tarot Card: The Fool"));
        assert!(reply.text.contains("House: house2"));
    }
}
