//! Storage layer: media files, the Kirby content document and the card writer

pub mod backup;
pub mod card;
pub mod content_store;
pub mod document;
pub mod media;

pub use card::{CardDraft, CardRecord};
pub use content_store::ContentStore;
pub use document::KirbyDocument;
pub use media::{persist_media, MediaFetcher, SavedMedia};
