//! Upload conversation
//!
//! Every incoming message is interpreted against the chat's current
//! [`Session`]. The machine answers with a list of [`Reply`] values and never
//! talks to the chat platform itself.
//!
//! ```text
//! idle --media/text--> awaiting_tarot_category --category--> awaiting_tarot_card
//! awaiting_tarot_card --card--> awaiting_tarot_confirmation --yes--> awaiting_orientation
//!                                                           --no---> awaiting_tarot_category
//! awaiting_orientation --orientation--> awaiting_house --house--> finalize --> idle
//! ```

pub mod commands;
pub mod menu;
pub mod prompts;
pub mod reply;

use std::sync::Arc;

use uuid::Uuid;

use crate::catalog::CardEntry;
use crate::lock::GlobalLock;
use crate::session::{FileType, Session, SessionStore, Step, Upload};
use crate::storage::{persist_media, CardDraft, ContentStore, MediaFetcher};
pub use menu::MenuAction;
pub use reply::{Format, InlineButton, Keyboard, Reply};

/// A message as far as the conversation cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming {
    Media {
        file_type: FileType,
        file_id: String,
        caption: Option<String>,
    },
    Text(String),
}

/// The state machine plus the services it drives.
#[derive(Clone)]
pub struct Conversation {
    sessions: SessionStore,
    lock: GlobalLock,
    store: ContentStore,
    fetcher: Arc<dyn MediaFetcher>,
}

impl Conversation {
    pub fn new(store: ContentStore, lock: GlobalLock, fetcher: Arc<dyn MediaFetcher>) -> Self {
        Self {
            sessions: SessionStore::new(),
            lock,
            store,
            fetcher,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn lock(&self) -> &GlobalLock {
        &self.lock
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Interprets one non-command message of a chat.
    pub async fn handle(&self, chat_id: i64, incoming: Incoming) -> Vec<Reply> {
        if let Incoming::Text(text) = &incoming {
            if text.starts_with('/') {
                return vec![Reply::plain("Unknown command. Send /help for the list of commands.")];
            }
        }

        let session = self.sessions.get(chat_id).await;
        let locked = self.lock.is_locked();

        match (session, incoming) {
            (
                Session::Idle,
                Incoming::Media {
                    file_type,
                    file_id,
                    caption,
                },
            ) => {
                if locked {
                    self.save_locked(chat_id, file_type, file_id, caption).await
                } else {
                    self.start_media(chat_id, file_type, file_id, caption).await
                }
            }
            (session, Incoming::Media { .. }) => {
                let mut replies = vec![Reply::plain(
                    "You are already in the middle of an upload. Finish it first or send /reset to start over.",
                )];
                replies.extend(current_prompt(&session));
                replies
            }
            (Session::Idle, Incoming::Text(_)) if locked => vec![Reply::plain(
                "🔒 Uploads are locked. Only photos, videos and audio are accepted right now.",
            )],
            (session, Incoming::Text(text)) => self.advance(chat_id, session, text).await,
        }
    }

    /// Drops the chat's upload in progress.
    pub async fn reset(&self, chat_id: i64) -> Reply {
        let previous = self.sessions.get(chat_id).await.step();
        self.sessions.reset(chat_id).await;
        log::info!("Chat {}: reset from {}", chat_id, previous);
        Reply::plain("Session reset. You can start a new upload now.").removing_keyboard()
    }

    pub fn set_locked(&self, locked: bool, by: i64) -> Reply {
        if locked {
            self.lock.lock();
            log::warn!("Uploads locked by user {}", by);
            Reply::plain("🔒 Uploads locked. Media is saved without a card entry, text is refused.")
        } else {
            self.lock.unlock();
            log::warn!("Uploads unlocked by user {}", by);
            Reply::plain("🔓 Uploads unlocked. The full card flow is back.")
        }
    }

    pub async fn status(&self, chat_id: i64) -> Reply {
        let session = self.sessions.get(chat_id).await;
        let mut text = format!(
            "Step: {}\nLock: {}\nUploads in progress: {}",
            session.step(),
            if self.lock.is_locked() { "on" } else { "off" },
            self.sessions.active_count().await
        );
        if let Some(upload) = session.upload() {
            text.push_str(&format!("\nCurrent upload: {} {}", upload.file_type, upload.uuid));
        }
        Reply::plain(text)
    }

    async fn transition(&self, chat_id: i64, from: Step, to: Session) {
        log::info!("Chat {}: {} -> {}", chat_id, from, to.step());
        self.sessions.set(chat_id, to).await;
    }

    async fn start_media(
        &self,
        chat_id: i64,
        file_type: FileType,
        file_id: String,
        caption: Option<String>,
    ) -> Vec<Reply> {
        let upload = Upload {
            file_type,
            uuid: Uuid::new_v4(),
            file_id: Some(file_id),
            description: caption.unwrap_or_default(),
        };

        let settings = self.store.settings();
        if let Err(e) = persist_media(self.fetcher.as_ref(), &settings.content_dir, &upload).await {
            log::error!("Chat {}: saving {} {} failed: {}", chat_id, file_type, upload.uuid, e);
            self.sessions.reset(chat_id).await;
            return vec![Reply::plain(format!("❌ Could not save your {file_type}: {e}. Please send it again."))
                .removing_keyboard()];
        }

        self.transition(chat_id, Step::Idle, Session::AwaitingTarotCategory { upload })
            .await;
        vec![
            Reply::plain(format!("{} received!", capitalized(file_type))),
            prompts::category_prompt(),
        ]
    }

    async fn start_text(&self, chat_id: i64, text: String) -> Vec<Reply> {
        let upload = Upload {
            file_type: FileType::Text,
            uuid: Uuid::new_v4(),
            file_id: None,
            description: text,
        };
        self.transition(chat_id, Step::Idle, Session::AwaitingTarotCategory { upload })
            .await;
        vec![Reply::plain("Text received!"), prompts::category_prompt()]
    }

    /// Lock mode: store the file and its sidecar, skip every question.
    async fn save_locked(
        &self,
        chat_id: i64,
        file_type: FileType,
        file_id: String,
        caption: Option<String>,
    ) -> Vec<Reply> {
        let upload = Upload {
            file_type,
            uuid: Uuid::new_v4(),
            file_id: Some(file_id),
            description: caption.unwrap_or_default(),
        };

        let result = persist_media(self.fetcher.as_ref(), &self.store.settings().content_dir, &upload).await;
        let reply = match result {
            Ok(saved) => {
                log::info!("Chat {}: lock mode saved {}", chat_id, saved.path.display());
                Reply::plain(format!(
                    "🔒 {} saved as {}. Uploads are locked, so no card was created.",
                    capitalized(file_type),
                    upload.uuid
                ))
            }
            Err(e) => {
                log::error!("Chat {}: lock mode save of {} failed: {}", chat_id, upload.uuid, e);
                Reply::plain(format!("❌ Could not save your {file_type}: {e}"))
            }
        };
        vec![reply.removing_keyboard()]
    }

    async fn advance(&self, chat_id: i64, session: Session, text: String) -> Vec<Reply> {
        let from = session.step();
        match session {
            Session::Idle => self.start_text(chat_id, text).await,

            Session::AwaitingTarotCategory { upload } => {
                if let Some(category) = prompts::parse_category(&text) {
                    self.transition(chat_id, from, Session::AwaitingTarotCard { upload, category })
                        .await;
                    vec![prompts::card_prompt(category)]
                } else if let Some(card) = prompts::parse_card(&text) {
                    self.choose_card(chat_id, from, upload, card).await
                } else {
                    vec![Reply::plain("Please choose one of the categories."), prompts::category_prompt()]
                }
            }

            Session::AwaitingTarotCard { upload, category } => {
                if prompts::is_back(&text) {
                    self.transition(chat_id, from, Session::AwaitingTarotCategory { upload })
                        .await;
                    vec![prompts::category_prompt()]
                } else if let Some(card) = prompts::parse_card(&text) {
                    self.choose_card(chat_id, from, upload, card).await
                } else {
                    vec![
                        Reply::plain("Please select a valid tarot card:"),
                        prompts::card_prompt(category),
                    ]
                }
            }

            Session::AwaitingTarotConfirmation { upload, card } => match prompts::parse_confirmation(&text) {
                Some(true) => {
                    self.transition(chat_id, from, Session::AwaitingOrientation { upload, card })
                        .await;
                    vec![prompts::orientation_prompt()]
                }
                Some(false) => {
                    self.transition(chat_id, from, Session::AwaitingTarotCategory { upload })
                        .await;
                    vec![prompts::category_prompt()]
                }
                None => vec![
                    Reply::plain("Please answer yes or no."),
                    prompts::confirmation_prompt(card),
                ],
            },

            Session::AwaitingOrientation { upload, card } => {
                let Some(orientation) = prompts::parse_orientation(&text) else {
                    return vec![
                        Reply::plain("Please select a valid orientation."),
                        prompts::orientation_prompt(),
                    ];
                };
                self.transition(
                    chat_id,
                    from,
                    Session::AwaitingHouse {
                        upload,
                        card,
                        orientation: orientation.to_string(),
                    },
                )
                .await;
                vec![prompts::house_prompt()]
            }

            Session::AwaitingHouse {
                upload,
                card,
                orientation,
            } => match prompts::parse_house(&text) {
                Some(house) => {
                    self.finalize(chat_id, upload, card, orientation, house.to_string())
                        .await
                }
                None => vec![Reply::plain("Please select a valid house."), prompts::house_prompt()],
            },
        }
    }

    async fn choose_card(
        &self,
        chat_id: i64,
        from: Step,
        upload: Upload,
        card: &'static CardEntry,
    ) -> Vec<Reply> {
        self.transition(chat_id, from, Session::AwaitingTarotConfirmation { upload, card })
            .await;
        vec![prompts::confirmation_prompt(card)]
    }

    async fn finalize(
        &self,
        chat_id: i64,
        upload: Upload,
        card: &'static CardEntry,
        orientation: String,
        house: String,
    ) -> Vec<Reply> {
        let mut replies = vec![prompts::summary(&upload, card, &orientation, &house)];
        let draft = CardDraft {
            uuid: upload.uuid,
            file_type: upload.file_type,
            description: upload.description,
            orientation,
            tarot_card: card.key.to_string(),
            house,
        };

        let result = self.store.finalize(&draft).await;
        self.sessions.reset(chat_id).await;
        let reply = match result {
            Ok(record) => {
                log::info!("Chat {}: finalized card {} for {}", chat_id, record.id, draft.uuid);
                Reply::plain(format!(
                    "✅ Upload complete! Your {} has been saved to Kirby CMS.",
                    draft.file_type
                ))
            }
            Err(e) => {
                log::error!("Chat {}: finalize of {} failed: {}", chat_id, draft.uuid, e);
                Reply::plain(format!("❌ There was an error saving your upload: {e}"))
            }
        };
        replies.push(reply.removing_keyboard());
        replies
    }
}

/// The prompt belonging to a step, to re-issue after an interruption.
pub fn current_prompt(session: &Session) -> Option<Reply> {
    match session {
        Session::Idle => None,
        Session::AwaitingTarotCategory { .. } => Some(prompts::category_prompt()),
        Session::AwaitingTarotCard { category, .. } => Some(prompts::card_prompt(*category)),
        Session::AwaitingTarotConfirmation { card, .. } => Some(prompts::confirmation_prompt(card)),
        Session::AwaitingOrientation { .. } => Some(prompts::orientation_prompt()),
        Session::AwaitingHouse { .. } => Some(prompts::house_prompt()),
    }
}

fn capitalized(file_type: FileType) -> String {
    let name = file_type.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}
