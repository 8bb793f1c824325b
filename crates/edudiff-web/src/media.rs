//! View models for rendering chat messages and their media.

use chat_core::{Attachment, Message};

/// One image tile in the visuals grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTile {
    pub url: String,
    /// "GIF 1", "GIF 2", ...
    pub label: String,
}

/// Media units for one message, grouped the way the bubble lays them out.
///
/// Every unit is rendered as its own element with its own controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaView {
    pub audio: Vec<String>,
    pub videos: Vec<String>,
    pub images: Vec<ImageTile>,
}

impl MediaView {
    pub fn is_empty(&self) -> bool {
        self.audio.is_empty() && self.videos.is_empty() && self.images.is_empty()
    }
}

/// A message ready for the template.
#[derive(Debug, Clone)]
pub struct MessageView {
    pub id: String,
    pub is_user: bool,
    pub content: String,
    pub time: String,
    pub media: MediaView,
}

impl MessageView {
    pub fn role_class(&self) -> &'static str {
        if self.is_user {
            "message user"
        } else {
            "message assistant"
        }
    }
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        let mut media = MediaView::default();

        // User turns never show media
        if !message.is_user() {
            for attachment in &message.media {
                match attachment {
                    Attachment::Audio(url) => media.audio.push(url.clone()),
                    Attachment::Video(url) => media.videos.push(url.clone()),
                    Attachment::Image(url) => {
                        let label = format!("GIF {}", media.images.len() + 1);
                        media.images.push(ImageTile {
                            url: url.clone(),
                            label,
                        });
                    }
                }
            }
        }

        Self {
            id: message.id.clone(),
            is_user: message.is_user(),
            content: message.content.clone(),
            time: message.timestamp.format("%H:%M").to_string(),
            media,
        }
    }
}

pub fn message_views(messages: &[Message]) -> Vec<MessageView> {
    messages.iter().map(MessageView::from).collect()
}
