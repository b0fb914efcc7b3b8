//! Dispatcher schema and handler chain builders

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};

use super::incoming::incoming_from_message;
use super::types::{callback_sender_id, sender_id, HandlerDeps, HandlerError};
use crate::telegram::bot::{help_reply, Command};
use crate::telegram::reply::send_replies;
use tarotcore::conversation::commands::{tarot_info, welcome};
use tarotcore::conversation::menu::{main_menu, ready_to_upload, upload_instructions, MenuAction};
use tarotcore::conversation::Incoming;
use tarotcore::AppError;

/// Creates the dispatcher schema for the bot.
///
/// Order matters: the allow-list runs first, then menu buttons, commands,
/// the conversation, and finally a catch-all for unsupported messages.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(unauthorized_handler(deps.clone()))
        .branch(menu_callback_handler(deps.clone()))
        .branch(command_handler(deps.clone()))
        .branch(conversation_handler(deps))
        .branch(unsupported_handler())
}

/// Rejects every message from a user outside the allow-list
fn unauthorized_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter_map(move |msg: Message| deps.authorize(sender_id(&msg)).err().map(Arc::new))
        .endpoint(|bot: Bot, msg: Message, denied: Arc<AppError>| async move {
            log::warn!("Unauthorized access attempt in chat {}: {}", msg.chat.id, denied);
            bot.send_message(msg.chat.id, format!("⛔ {} to use this bot.", denied))
                .await?;
            Ok(())
        })
}

/// Buttons of the `/start` and `/menu` inline menus
fn menu_callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            if let Err(denied) = deps.authorize(callback_sender_id(&q)) {
                log::warn!("Unauthorized menu button press: {}", denied);
                bot.answer_callback_query(q.id.clone())
                    .text(format!("⛔ {}", denied))
                    .await?;
                return Ok(());
            }
            bot.answer_callback_query(q.id.clone()).await?;

            let action = q.data.as_deref().and_then(MenuAction::from_callback_data);
            let chat_id = q.message.as_ref().map(|m| m.chat().id);
            let (Some(action), Some(chat_id)) = (action, chat_id) else {
                log::warn!("Ignoring callback {:?} from user {}", q.data, q.from.id.0);
                return Ok(());
            };

            log::info!("Menu button {:?} pressed in chat {}", action, chat_id);
            let replies = match action {
                MenuAction::Instructions => vec![upload_instructions()],
                MenuAction::Reset => vec![deps.conversation.reset(chat_id.0).await],
                MenuAction::Help => vec![help_reply()],
                MenuAction::StartUpload => vec![ready_to_upload()],
            };
            send_replies(&bot, chat_id, &replies).await?;
            Ok(())
        }
    })
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);
                let chat_id = msg.chat.id.0;
                let user_id = sender_id(&msg).unwrap_or_default();
                let conversation = &deps.conversation;

                let replies = match cmd {
                    Command::Start => vec![welcome()],
                    Command::Help => vec![help_reply()],
                    Command::Menu => vec![main_menu()],
                    Command::Reset => vec![conversation.reset(chat_id).await],
                    Command::Lock => vec![conversation.set_locked(true, user_id)],
                    Command::Unlock => vec![conversation.set_locked(false, user_id)],
                    Command::Status => vec![conversation.status(chat_id).await],
                    Command::Tarot(query) => tarot_info(&query),
                };
                send_replies(&bot, msg.chat.id, &replies).await?;
                Ok(())
            }
        },
    ))
}

/// Media and text that belong to the upload conversation
fn conversation_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter_map(|msg: Message| incoming_from_message(&msg))
        .endpoint(move |bot: Bot, msg: Message, incoming: Incoming| {
            let deps = deps.clone();
            async move {
                let replies = deps.conversation.handle(msg.chat.id.0, incoming).await;
                send_replies(&bot, msg.chat.id, &replies).await?;
                Ok(())
            }
        })
}

fn unsupported_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(|bot: Bot, msg: Message| async move {
        bot.send_message(
            msg.chat.id,
            "Please send a photo, video, audio or text message.",
        )
        .await?;
        Ok(())
    })
}
