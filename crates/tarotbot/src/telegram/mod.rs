//! Telegram bot integration and handlers

pub mod bot;
pub mod fetch;
pub mod handlers;
pub mod reply;

// Re-exports for convenience
pub use bot::{create_bot, help_reply, setup_bot_commands, Command};
pub use fetch::TelegramFetcher;
pub use handlers::{schema, HandlerDeps, HandlerError};
