//! Telegram bot handler tree configuration
//!
//! The schema is built from plain dependencies so tests can construct the
//! same handler tree as production code.

mod incoming;
mod schema;
mod types;

pub use incoming::incoming_from_message;
pub use schema::schema;
pub use types::{callback_sender_id, sender_id, HandlerDeps, HandlerError};
