//! Tarot card catalog
//!
//! Static reference data: the 22 Major Arcana, the 56 Minor Arcana grouped by
//! suit, and one descriptor per suit. Lookups never mutate and the only
//! failure is "not found", which callers answer with a re-prompt.

mod data;
pub mod info;

use strum::{Display, EnumIter, IntoEnumIterator};

/// Grouping of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Major,
    Cups,
    Wands,
    Swords,
    Pentacles,
    /// Suit-level descriptors (one per suit)
    Suit,
}

impl Category {
    /// The four minor-arcana suits in catalog order.
    pub fn suits() -> impl Iterator<Item = Category> {
        Category::iter().filter(|c| c.is_suit())
    }

    /// True for the four minor-arcana suits.
    pub fn is_suit(self) -> bool {
        matches!(self, Category::Cups | Category::Wands | Category::Swords | Category::Pentacles)
    }

    /// Key of the suit descriptor belonging to this category.
    pub fn suit_key(self) -> Option<&'static str> {
        match self {
            Category::Cups => Some("cups"),
            Category::Wands => Some("wands"),
            Category::Swords => Some("swords"),
            Category::Pentacles => Some("pentacles"),
            Category::Major | Category::Suit => None,
        }
    }

    /// Capitalized name, e.g. "Cups" or "Major Arcana".
    pub fn title(self) -> &'static str {
        match self {
            Category::Major => "Major Arcana",
            Category::Cups => "Cups",
            Category::Wands => "Wands",
            Category::Swords => "Swords",
            Category::Pentacles => "Pentacles",
            Category::Suit => "Suits",
        }
    }
}

/// What a catalog entry says about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meaning {
    /// Major and minor arcana cards
    Arcana {
        upright: &'static str,
        reverse: &'static str,
    },
    /// Suit descriptors
    Suit {
        themes: &'static str,
        focus: &'static str,
        strengths: &'static str,
        challenges: &'static str,
    },
}

/// One card (or suit descriptor) of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardEntry {
    /// Canonical id, stored as `tarot_suit` in the content store
    pub key: &'static str,
    /// Human label, also the keyboard button text
    pub display: &'static str,
    pub category: Category,
    pub meaning: Meaning,
}

impl CardEntry {
    pub fn is_suit(&self) -> bool {
        self.category == Category::Suit
    }
}

const fn arcana(
    key: &'static str,
    display: &'static str,
    category: Category,
    upright: &'static str,
    reverse: &'static str,
) -> CardEntry {
    CardEntry {
        key,
        display,
        category,
        meaning: Meaning::Arcana { upright, reverse },
    }
}

const fn suit(
    key: &'static str,
    display: &'static str,
    themes: &'static str,
    focus: &'static str,
    strengths: &'static str,
    challenges: &'static str,
) -> CardEntry {
    CardEntry {
        key,
        display,
        category: Category::Suit,
        meaning: Meaning::Suit {
            themes,
            focus,
            strengths,
            challenges,
        },
    }
}

fn table(category: Category) -> &'static [CardEntry] {
    match category {
        Category::Major => &data::MAJOR_ARCANA[..],
        Category::Cups => &data::CUPS[..],
        Category::Wands => &data::WANDS[..],
        Category::Swords => &data::SWORDS[..],
        Category::Pentacles => &data::PENTACLES[..],
        Category::Suit => &data::SUITS[..],
    }
}

/// Ordered entries for building selection prompts.
///
/// With a category, that category's entries in catalog order. Without one,
/// the Major Arcana first, then each suit's cards (cups, wands, swords,
/// pentacles), then the four suit descriptors.
pub fn all_entries(category: Option<Category>) -> Vec<&'static CardEntry> {
    match category {
        Some(category) => table(category).iter().collect(),
        None => Category::iter().flat_map(|c| table(c).iter()).collect(),
    }
}

/// Exact key lookup.
pub fn lookup_by_key(key: &str) -> Option<&'static CardEntry> {
    Category::iter().flat_map(|c| table(c).iter()).find(|entry| entry.key == key)
}

/// Case-insensitive match on the display label after trimming.
pub fn lookup_by_display_name(text: &str) -> Option<&'static CardEntry> {
    let wanted = text.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    Category::iter()
        .flat_map(|c| table(c).iter())
        .find(|entry| entry.display.to_lowercase() == wanted)
}

/// Bare suit names ("Cups", "wands", ...) resolve to the suit descriptor.
pub fn lookup_suit_name(text: &str) -> Option<&'static CardEntry> {
    let wanted = text.trim().to_lowercase();
    Category::suits()
        .find(|c| c.title().to_lowercase() == wanted)
        .and_then(|c| c.suit_key())
        .and_then(lookup_by_key)
}

/// The suit descriptor for a minor-arcana key, or the entry itself when the
/// key already names a suit. Major Arcana have no suit.
pub fn suit_of(key: &str) -> Option<&'static CardEntry> {
    let entry = lookup_by_key(key)?;
    if entry.is_suit() {
        return Some(entry);
    }
    entry.category.suit_key().and_then(lookup_by_key)
}
