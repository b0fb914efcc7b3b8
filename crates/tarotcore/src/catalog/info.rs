//! HTML renderings of catalog entries for chat messages

use std::fmt::Write;

use super::{all_entries, suit_of, CardEntry, Category, Meaning};

/// Escapes the three characters Telegram's HTML mode cares about.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Full description of one entry: meanings for a card, plus the suit
/// descriptor for minor arcana; themes and friends for a suit.
pub fn describe(entry: &CardEntry) -> String {
    let mut text = format!("🔮 <b>{}</b> 🔮\n\n", escape_html(entry.display));
    match entry.meaning {
        Meaning::Suit { .. } => push_suit_lines(&mut text, entry, ""),
        Meaning::Arcana { upright, reverse } => {
            let _ = writeln!(text, "<b>Upright:</b> {}", escape_html(upright));
            let _ = writeln!(text, "<b>Reversed:</b> {}", escape_html(reverse));
            if entry.category != Category::Major {
                if let Some(suit) = suit_of(entry.key) {
                    text.push('\n');
                    let _ = writeln!(text, "<b>Suit:</b> {}", escape_html(suit.display));
                    push_suit_lines(&mut text, suit, "Suit ");
                }
            }
        }
    }
    text
}

fn push_suit_lines(text: &mut String, suit: &CardEntry, label_prefix: &str) {
    if let Meaning::Suit {
        themes,
        focus,
        strengths,
        challenges,
    } = suit.meaning
    {
        let _ = writeln!(text, "<b>{label_prefix}Themes:</b> {}", escape_html(themes));
        let _ = writeln!(text, "<b>{label_prefix}Focus:</b> {}", escape_html(focus));
        let _ = writeln!(text, "<b>{label_prefix}Strengths:</b> {}", escape_html(strengths));
        let _ = writeln!(text, "<b>{label_prefix}Challenges:</b> {}", escape_html(challenges));
    }
}

fn short_card(text: &mut String, entry: &CardEntry) {
    if let Meaning::Arcana { upright, reverse } = entry.meaning {
        let _ = writeln!(text, "<b>{}</b>", escape_html(entry.display));
        let _ = writeln!(text, "Upright: {}", escape_html(upright));
        let _ = writeln!(text, "Reversed: {}\n", escape_html(reverse));
    }
}

/// The whole catalog split into chat-sized messages: an intro, the suits,
/// the Major Arcana in three parts (0-7, 8-15, 16-21) and one message per suit.
pub fn catalog_messages() -> Vec<String> {
    let mut messages = vec![
        "🔮 <b>Tarot Card Information</b> 🔮\n\nUse /tarot &lt;name&gt; to look up a single card.".to_string(),
    ];

    let mut suits = "<b>Tarot Suits</b>\n\n".to_string();
    for suit in all_entries(Some(Category::Suit)) {
        let _ = writeln!(suits, "<b>{}</b>", escape_html(suit.display));
        if let Meaning::Suit {
            themes,
            focus,
            strengths,
            challenges,
        } = suit.meaning
        {
            let _ = writeln!(suits, "Themes: {}", escape_html(themes));
            let _ = writeln!(suits, "Focus: {}", escape_html(focus));
            let _ = writeln!(suits, "Strengths: {}", escape_html(strengths));
            let _ = writeln!(suits, "Challenges: {}\n", escape_html(challenges));
        }
    }
    messages.push(suits);

    let major = all_entries(Some(Category::Major));
    for (part, chunk) in [&major[..8], &major[8..16], &major[16..]].into_iter().enumerate() {
        let mut text = format!("<b>Major Arcana (Part {})</b>\n\n", part + 1);
        for entry in chunk {
            short_card(&mut text, entry);
        }
        messages.push(text);
    }

    for suit in Category::suits() {
        let mut text = format!("<b>Minor Arcana - {}</b>\n\n", suit.title());
        for entry in all_entries(Some(suit)) {
            short_card(&mut text, entry);
        }
        messages.push(text);
    }

    messages
}
