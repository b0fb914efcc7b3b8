//! Handler types and dependencies

use std::sync::Arc;

use teloxide::types::{CallbackQuery, Message};

use tarotcore::{AppError, AppResult, Conversation};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub conversation: Conversation,
    /// Empty means everybody may use the bot
    pub allowed_users: Arc<Vec<i64>>,
}

impl HandlerDeps {
    pub fn new(conversation: Conversation, allowed_users: Vec<i64>) -> Self {
        Self {
            conversation,
            allowed_users: Arc::new(allowed_users),
        }
    }

    pub fn is_allowed(&self, user_id: Option<i64>) -> bool {
        if self.allowed_users.is_empty() {
            return true;
        }
        user_id.is_some_and(|id| self.allowed_users.contains(&id))
    }

    /// Allow-list check; anonymous senders are reported as user 0.
    pub fn authorize(&self, user_id: Option<i64>) -> AppResult<()> {
        if self.is_allowed(user_id) {
            Ok(())
        } else {
            Err(AppError::Unauthorized(user_id.unwrap_or_default()))
        }
    }
}

/// Telegram user id of the sender, if any.
pub fn sender_id(msg: &Message) -> Option<i64> {
    msg.from.as_ref().and_then(|u| i64::try_from(u.id.0).ok())
}

/// Telegram user id of whoever pressed an inline button.
pub fn callback_sender_id(q: &CallbackQuery) -> Option<i64> {
    i64::try_from(q.from.id.0).ok()
}
