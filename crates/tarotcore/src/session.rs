//! Per-chat conversation state
//!
//! Each state carries exactly the answers that are known at that point, so
//! there is no way to read a field that has not been collected yet.

use std::collections::HashMap;
use std::sync::Arc;

use strum::Display;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::catalog::{CardEntry, Category};

/// Kind of content being uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FileType {
    Photo,
    Video,
    Audio,
    Text,
}

impl FileType {
    /// Extension of the stored media file; text has no backing file.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            FileType::Photo => Some("jpg"),
            FileType::Video => Some("mp4"),
            FileType::Audio => Some("oga"),
            FileType::Text => None,
        }
    }
}

/// What was received at the start of a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_type: FileType,
    /// Stored file stem and cross-reference of the card entry
    pub uuid: Uuid,
    /// Platform file reference, media only
    pub file_id: Option<String>,
    /// Caption for media, the message itself for text
    pub description: String,
}

/// Conversation state of one chat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Idle,
    AwaitingTarotCategory {
        upload: Upload,
    },
    AwaitingTarotCard {
        upload: Upload,
        category: Category,
    },
    AwaitingTarotConfirmation {
        upload: Upload,
        card: &'static CardEntry,
    },
    AwaitingOrientation {
        upload: Upload,
        card: &'static CardEntry,
    },
    AwaitingHouse {
        upload: Upload,
        card: &'static CardEntry,
        orientation: String,
    },
}

/// Name of a session state, for logs and `/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Step {
    Idle,
    AwaitingTarotCategory,
    AwaitingTarotCard,
    AwaitingTarotConfirmation,
    AwaitingOrientation,
    AwaitingHouse,
}

impl Session {
    pub fn step(&self) -> Step {
        match self {
            Session::Idle => Step::Idle,
            Session::AwaitingTarotCategory { .. } => Step::AwaitingTarotCategory,
            Session::AwaitingTarotCard { .. } => Step::AwaitingTarotCard,
            Session::AwaitingTarotConfirmation { .. } => Step::AwaitingTarotConfirmation,
            Session::AwaitingOrientation { .. } => Step::AwaitingOrientation,
            Session::AwaitingHouse { .. } => Step::AwaitingHouse,
        }
    }

    /// The upload in progress, if any.
    pub fn upload(&self) -> Option<&Upload> {
        match self {
            Session::Idle => None,
            Session::AwaitingTarotCategory { upload }
            | Session::AwaitingTarotCard { upload, .. }
            | Session::AwaitingTarotConfirmation { upload, .. }
            | Session::AwaitingOrientation { upload, .. }
            | Session::AwaitingHouse { upload, .. } => Some(upload),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Session::Idle)
    }
}

/// In-memory session map keyed by chat id.
///
/// Sessions are created lazily as `Idle` and never persisted. Each chat's
/// updates arrive in order, so a get/set pair for one chat is never
/// interleaved with another update of the same chat.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<i64, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session of a chat, creating an idle one if absent.
    pub async fn get(&self, chat_id: i64) -> Session {
        let mut sessions = self.sessions.lock().await;
        sessions.entry(chat_id).or_default().clone()
    }

    /// Replaces the session of a chat.
    pub async fn set(&self, chat_id: i64, session: Session) {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(chat_id, session);
    }

    /// Drops every collected answer and returns the chat to `Idle`.
    pub async fn reset(&self, chat_id: i64) {
        self.set(chat_id, Session::Idle).await;
    }

    /// Number of chats with an upload in progress.
    pub async fn active_count(&self) -> usize {
        let sessions = self.sessions.lock().await;
        sessions.values().filter(|s| !s.is_idle()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::lookup_by_key;
    use pretty_assertions::assert_eq;

    fn upload() -> Upload {
        Upload {
            file_type: FileType::Photo,
            uuid: Uuid::new_v4(),
            file_id: Some("AgACAgIAAx".to_string()),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_get_creates_idle_session() {
        let store = SessionStore::new();
        assert_eq!(store.get(42).await, Session::Idle);
        assert_eq!(store.active_count().await, 0);
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let store = SessionStore::new();
        let card = lookup_by_key("fool").unwrap();
        store
            .set(
                7,
                Session::AwaitingHouse {
                    upload: upload(),
                    card,
                    orientation: "portrait".to_string(),
                },
            )
            .await;
        assert_eq!(store.get(7).await.step(), Step::AwaitingHouse);

        store.reset(7).await;
        let session = store.get(7).await;
        assert_eq!(session, Session::Idle);
        assert!(session.upload().is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated_per_chat() {
        let store = SessionStore::new();
        store.set(1, Session::AwaitingTarotCategory { upload: upload() }).await;
        assert!(store.get(2).await.is_idle());
        assert_eq!(store.active_count().await, 1);
    }

    #[test]
    fn test_step_names() {
        assert_eq!(Step::AwaitingTarotConfirmation.to_string(), "awaiting_tarot_confirmation");
        assert_eq!(Step::Idle.to_string(), "idle");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(FileType::Photo.extension(), Some("jpg"));
        assert_eq!(FileType::Video.extension(), Some("mp4"));
        assert_eq!(FileType::Audio.extension(), Some("oga"));
        assert_eq!(FileType::Text.extension(), None);
        assert_eq!(FileType::Audio.to_string(), "audio");
    }
}
