//! Tarotbot - Telegram front end of the tarot card uploader
//!
//! # Module Structure
//!
//! - `cli`: Command line arguments
//! - `telegram`: Bot setup, dispatcher schema, media download and reply rendering

pub mod cli;
pub mod telegram;

pub use telegram::{create_bot, schema, setup_bot_commands, HandlerDeps, TelegramFetcher};
