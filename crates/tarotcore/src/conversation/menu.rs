//! Inline menus shown by `/start` and `/menu`

use indoc::indoc;
use strum::{AsRefStr, EnumIter, EnumString};

use super::reply::{InlineButton, Reply};

const CALLBACK_PREFIX: &str = "menu:";

/// A button of one of the inline menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum MenuAction {
    Instructions,
    Reset,
    Help,
    StartUpload,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Instructions => "📷 Upload Instructions",
            MenuAction::Reset => "🔄 Reset Session",
            MenuAction::Help => "❓ Help",
            MenuAction::StartUpload => "📷 Start Uploading",
        }
    }

    /// Callback payload carried by the button, e.g. `menu:start_upload`.
    pub fn callback_data(self) -> String {
        format!("{}{}", CALLBACK_PREFIX, self.as_ref())
    }

    pub fn from_callback_data(data: &str) -> Option<Self> {
        data.strip_prefix(CALLBACK_PREFIX)?.parse().ok()
    }

    fn button(self) -> InlineButton {
        InlineButton {
            label: self.label().to_string(),
            data: self.callback_data(),
        }
    }
}

pub fn main_menu() -> Reply {
    Reply::plain("Main menu:").with_inline([
        [MenuAction::Instructions.button()],
        [MenuAction::Reset.button()],
        [MenuAction::Help.button()],
    ])
}

pub fn start_menu(text: impl Into<String>) -> Reply {
    Reply::plain(text).with_inline([
        [MenuAction::StartUpload.button()],
        [MenuAction::Help.button()],
    ])
}

pub fn upload_instructions() -> Reply {
    Reply::plain(indoc! {"
        To upload content to Kirby CMS, follow these steps:

        1. Send a photo, video, audio or text message to this bot. A caption becomes the description.
        2. Pick a category and a tarot card, then confirm the card
        3. Select the orientation (landscape or portrait)
        4. Select a house
        5. Wait for the confirmation that your card has been saved"})
}

pub fn ready_to_upload() -> Reply {
    Reply::plain("Ready to upload! Send me a photo, video, audio or text message to begin.")
        .removing_keyboard()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::reply::Keyboard;
    use strum::IntoEnumIterator;

    #[test]
    fn test_callback_data_round_trips() {
        for action in MenuAction::iter() {
            let data = action.callback_data();
            assert!(data.len() <= 64, "{data}");
            assert_eq!(MenuAction::from_callback_data(&data), Some(action));
        }
        assert_eq!(MenuAction::StartUpload.callback_data(), "menu:start_upload");
    }

    #[test]
    fn test_foreign_callback_data_is_ignored() {
        assert_eq!(MenuAction::from_callback_data("menu:delete_everything"), None);
        assert_eq!(MenuAction::from_callback_data("help"), None);
    }

    #[test]
    fn test_main_menu_buttons() {
        let Keyboard::Inline(rows) = main_menu().keyboard else {
            panic!("main menu has no inline keyboard");
        };
        let labels: Vec<&str> = rows.iter().flatten().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["📷 Upload Instructions", "🔄 Reset Session", "❓ Help"]);
    }

    #[test]
    fn test_start_menu_offers_uploading_first() {
        let reply = start_menu("hi");
        let Keyboard::Inline(rows) = reply.keyboard else {
            panic!("start menu has no inline keyboard");
        };
        assert_eq!(rows[0][0].data, "menu:start_upload");
        assert_eq!(rows[1][0].data, "menu:help");
    }
}
