//! Message and media types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One piece of media attached to an assistant turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum Attachment {
    /// Narration audio.
    Audio(String),
    /// Rendered explanation video.
    Video(String),
    /// Still or animated image (the short GIF visuals).
    Image(String),
}

impl Attachment {
    pub fn url(&self) -> &str {
        match self {
            Attachment::Audio(url) | Attachment::Video(url) | Attachment::Image(url) => url,
        }
    }
}

/// The media carried by a message. Empty means "no media".
///
/// Attachments keep the order they were added in; each one is rendered as an
/// independent playback unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaAttachments(Vec<Attachment>);

impl MediaAttachments {
    /// No media at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single video, or nothing when the URL is empty.
    pub fn video(url: impl Into<String>) -> Self {
        Self::none().with_video(url)
    }

    pub fn with_audio(mut self, url: impl Into<String>) -> Self {
        self.push_non_empty(url.into(), Attachment::Audio);
        self
    }

    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.push_non_empty(url.into(), Attachment::Video);
        self
    }

    pub fn with_images<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for url in urls {
            self.push_non_empty(url.into(), Attachment::Image);
        }
        self
    }

    fn push_non_empty(&mut self, url: String, wrap: fn(String) -> Attachment) {
        if !url.is_empty() {
            self.0.push(wrap(url));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attachment> {
        self.0.iter()
    }

    pub fn audio(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|a| match a {
            Attachment::Audio(url) => Some(url.as_str()),
            _ => None,
        })
    }

    pub fn videos(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|a| match a {
            Attachment::Video(url) => Some(url.as_str()),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|a| match a {
            Attachment::Image(url) => Some(url.as_str()),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a MediaAttachments {
    type Item = &'a Attachment;
    type IntoIter = std::slice::Iter<'a, Attachment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A single chat turn. Never mutated once it is in a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub media: MediaAttachments,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
