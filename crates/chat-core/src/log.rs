//! The append-only message log.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::message::{MediaAttachments, Message, Role};

/// Ordered chat turns for one page view.
///
/// Entries are only ever appended. Ids come from the creation instant in
/// milliseconds and are bumped when the clock has not moved, so they strictly
/// increase within a log.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MessageLog {
    messages: Vec<Message>,
    #[serde(skip)]
    last_id: i64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a log with a fixed assistant greeting under the id `welcome`.
    pub fn with_greeting(text: impl Into<String>) -> Self {
        let mut log = Self::new();
        log.messages.push(Message {
            id: "welcome".to_string(),
            role: Role::Assistant,
            content: text.into(),
            media: MediaAttachments::none(),
            timestamp: Utc::now(),
        });
        log
    }

    /// Append a message stamped with the current time.
    pub fn append(
        &mut self,
        role: Role,
        content: impl Into<String>,
        media: MediaAttachments,
    ) -> &Message {
        self.append_at(Utc::now(), role, content, media)
    }

    /// Append a message stamped with `at`.
    pub fn append_at(
        &mut self,
        at: DateTime<Utc>,
        role: Role,
        content: impl Into<String>,
        media: MediaAttachments,
    ) -> &Message {
        let millis = at.timestamp_millis();
        let id = if millis > self.last_id {
            millis
        } else {
            self.last_id + 1
        };
        self.last_id = id;

        self.messages.push(Message {
            id: id.to_string(),
            role,
            content: content.into(),
            media,
            timestamp: at,
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_is_first() {
        let log = MessageLog::with_greeting("Hi!");
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].id, "welcome");
        assert_eq!(log.messages()[0].role, Role::Assistant);
    }

    #[test]
    fn test_ids_increase_when_clock_stalls() {
        let mut log = MessageLog::new();
        let at = Utc::now();

        let first = log.append_at(at, Role::User, "a", MediaAttachments::none()).id.clone();
        let second = log.append_at(at, Role::Assistant, "b", MediaAttachments::none()).id.clone();
        let third = log.append_at(at, Role::User, "c", MediaAttachments::none()).id.clone();

        let first: i64 = first.parse().unwrap();
        let second: i64 = second.parse().unwrap();
        let third: i64 = third.parse().unwrap();
        assert_eq!(first, at.timestamp_millis());
        assert!(first < second && second < third);
    }

    #[test]
    fn test_insertion_order_not_timestamp_order() {
        let mut log = MessageLog::new();
        let later = Utc::now();
        let earlier = later - chrono::Duration::seconds(10);

        log.append_at(later, Role::User, "first", MediaAttachments::none());
        log.append_at(earlier, Role::Assistant, "second", MediaAttachments::none());

        let contents: Vec<&str> = log.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["first", "second"]);
    }
}
