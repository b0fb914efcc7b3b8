//! Sends conversation replies as Telegram messages

use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, KeyboardRemove,
    ParseMode, ReplyMarkup,
};

use tarotcore::conversation::{Format, InlineButton, Keyboard, Reply};

/// One-time reply keyboard for a list of button rows.
pub fn keyboard_markup(rows: &[Vec<String>]) -> KeyboardMarkup {
    let buttons: Vec<Vec<KeyboardButton>> = rows
        .iter()
        .map(|row| row.iter().map(|label| KeyboardButton::new(label.as_str())).collect())
        .collect();
    KeyboardMarkup::new(buttons).resize_keyboard().one_time_keyboard()
}

/// Inline keyboard of callback buttons.
pub fn inline_markup(rows: &[Vec<InlineButton>]) -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|b| InlineKeyboardButton::callback(b.label.as_str(), b.data.as_str()))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(buttons)
}

fn reply_markup(keyboard: &Keyboard) -> Option<ReplyMarkup> {
    match keyboard {
        Keyboard::Unchanged => None,
        Keyboard::Remove => Some(ReplyMarkup::KeyboardRemove(KeyboardRemove::new())),
        Keyboard::Options(rows) => Some(ReplyMarkup::Keyboard(keyboard_markup(rows))),
        Keyboard::Inline(rows) => Some(ReplyMarkup::InlineKeyboard(inline_markup(rows))),
    }
}

/// Sends one reply.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> ResponseResult<Message> {
    let mut request = bot.send_message(chat_id, reply.text.as_str());
    if reply.format == Format::Html {
        request = request.parse_mode(ParseMode::Html);
    }
    if let Some(markup) = reply_markup(&reply.keyboard) {
        request = request.reply_markup(markup);
    }
    request.await
}

/// Sends replies in order, stopping at the first failure.
pub async fn send_replies(bot: &Bot, chat_id: ChatId, replies: &[Reply]) -> ResponseResult<()> {
    for reply in replies {
        send_reply(bot, chat_id, reply).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_markup_keeps_rows() {
        let markup = keyboard_markup(&[
            vec!["The Fool".to_string(), "The Magician".to_string()],
            vec!["← Back to Categories".to_string()],
        ]);
        assert_eq!(markup.keyboard.len(), 2);
        assert_eq!(markup.keyboard[0][1].text, "The Magician");
        assert!(markup.one_time_keyboard);
        assert!(markup.resize_keyboard);
    }

    #[test]
    fn test_menu_renders_as_inline_keyboard() {
        let reply = tarotcore::conversation::menu::main_menu();
        let Some(ReplyMarkup::InlineKeyboard(markup)) = reply_markup(&reply.keyboard) else {
            panic!("main menu should render inline buttons");
        };
        assert_eq!(markup.inline_keyboard.len(), 3);
        assert_eq!(markup.inline_keyboard[0][0].text, "📷 Upload Instructions");
    }

    #[test]
    fn test_unchanged_keyboard_sends_no_markup() {
        assert!(reply_markup(&Keyboard::Unchanged).is_none());
        assert!(matches!(
            reply_markup(&Keyboard::Remove),
            Some(ReplyMarkup::KeyboardRemove(_))
        ));
    }
}
