//! Card entries as stored in the `Cardscontent` blocks field

use chrono::NaiveDate;
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::FileType;

/// Length of block and card ids
pub const BLOCK_ID_LEN: usize = 16;

/// Random alphanumeric id for blocks and cards.
pub fn random_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(BLOCK_ID_LEN)
        .map(char::from)
        .collect()
}

/// Everything collected by one finished conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub uuid: Uuid,
    pub file_type: FileType,
    pub description: String,
    pub orientation: String,
    /// Catalog key of the selected card or suit
    pub tarot_card: String,
    pub house: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub location: String,
    pub image: Vec<String>,
    pub src: String,
    pub alt: String,
    pub caption: String,
    pub link: String,
    pub ratio: String,
    pub crop: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalVideoContent {
    pub vidfile: Vec<String>,
    pub vidposter: Vec<String>,
    pub autoplay: bool,
    pub muted: bool,
    pub controls: bool,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub playsinline: bool,
    pub preload: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioContent {
    pub audiofile: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockContent {
    Image(ImageContent),
    LocalVideo(LocalVideoContent),
    Audio(AudioContent),
    Text(TextContent),
}

/// One Kirby block inside the card's `media` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaBlock {
    pub content: BlockContent,
    pub id: String,
    #[serde(rename = "isHidden")]
    pub is_hidden: bool,
    #[serde(rename = "type")]
    pub block_type: String,
}

impl MediaBlock {
    /// The block for an upload: media reference its file by uuid, text is
    /// embedded as a paragraph.
    pub fn for_upload(file_type: FileType, uuid: &Uuid, description: &str) -> Self {
        let file_ref = format!("file://{uuid}");
        let (content, block_type) = match file_type {
            FileType::Photo => (
                BlockContent::Image(ImageContent {
                    location: "kirby".to_string(),
                    image: vec![file_ref],
                    src: String::new(),
                    alt: String::new(),
                    caption: String::new(),
                    link: String::new(),
                    ratio: String::new(),
                    crop: String::new(),
                }),
                "image",
            ),
            FileType::Video => (
                BlockContent::LocalVideo(LocalVideoContent {
                    vidfile: vec![file_ref],
                    vidposter: Vec::new(),
                    autoplay: false,
                    muted: false,
                    controls: false,
                    looped: false,
                    playsinline: false,
                    preload: "metadata".to_string(),
                }),
                "localvideo",
            ),
            FileType::Audio => (
                BlockContent::Audio(AudioContent {
                    audiofile: vec![file_ref],
                }),
                "audio",
            ),
            FileType::Text => (
                BlockContent::Text(TextContent {
                    text: format!("<p>{description}</p>"),
                }),
                "text",
            ),
        };

        Self {
            content,
            id: random_id(),
            is_hidden: false,
            block_type: block_type.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardContent {
    pub media: Vec<MediaBlock>,
    pub tarot_suit: String,
    pub description: String,
    pub orientation: String,
    pub house: String,
    pub addedby: Vec<String>,
    /// YYYY-MM-DD
    pub date: String,
}

/// One entry of the cards array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub content: CardContent,
    pub id: String,
    #[serde(rename = "isHidden")]
    pub is_hidden: bool,
    #[serde(rename = "type")]
    pub card_type: String,
}

impl CardRecord {
    pub fn build(draft: &CardDraft, date: NaiveDate) -> Self {
        Self {
            content: CardContent {
                media: vec![MediaBlock::for_upload(draft.file_type, &draft.uuid, &draft.description)],
                tarot_suit: draft.tarot_card.clone(),
                description: draft.description.clone(),
                orientation: draft.orientation.clone(),
                house: draft.house.clone(),
                addedby: Vec::new(),
                date: date.format("%Y-%m-%d").to_string(),
            },
            id: random_id(),
            is_hidden: false,
            card_type: "tarotCard".to_string(),
        }
    }
}
