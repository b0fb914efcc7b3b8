//! Maps Telegram messages onto conversation input

use teloxide::types::Message;

use tarotcore::conversation::Incoming;
use tarotcore::FileType;

/// Photos (largest size), videos, audio and voice notes become media; plain
/// text becomes text. Anything else is not part of the conversation.
pub fn incoming_from_message(msg: &Message) -> Option<Incoming> {
    let caption = msg.caption().map(str::to_string);
    let media = |file_type, file_id: &str| Incoming::Media {
        file_type,
        file_id: file_id.to_string(),
        caption: caption.clone(),
    };

    if let Some(photos) = msg.photo() {
        let photo = photos.iter().max_by_key(|p| p.width * p.height)?;
        return Some(media(FileType::Photo, &photo.file.id.0));
    }
    if let Some(video) = msg.video() {
        return Some(media(FileType::Video, &video.file.id.0));
    }
    if let Some(audio) = msg.audio() {
        return Some(media(FileType::Audio, &audio.file.id.0));
    }
    if let Some(voice) = msg.voice() {
        return Some(media(FileType::Audio, &voice.file.id.0));
    }
    msg.text().map(|text| Incoming::Text(text.to_string()))
}
