//! Tarotcore - card catalog, upload conversation and Kirby content store
//!
//! Everything the tarot uploader bot does except talking to Telegram.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors and logging
//! - `catalog`: Static tarot card reference data
//! - `session`: Per-chat conversation state
//! - `lock`: Process-wide upload lock
//! - `storage`: Media files, the Kirby content document and the card writer
//! - `conversation`: The upload state machine

pub mod catalog;
pub mod conversation;
pub mod core;
pub mod lock;
pub mod session;
pub mod storage;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult, ContentStoreError, MediaError, StoreSettings};
pub use conversation::{Conversation, Incoming, Reply};
pub use lock::GlobalLock;
pub use session::{FileType, Session, SessionStore, Step};
pub use storage::{ContentStore, MediaFetcher};
