//! Conversation types for the chat view.
//!
//! A [`Conversation`] is an append-only list of immutable [`Message`]s.
//! Each message carries a stable [`MessageId`] that renderers use as a key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Role of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Text typed by the person at the keyboard.
    User,
    /// Reply produced by a responder.
    Assistant,
}

impl Role {
    /// Lowercase role name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifier for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single message in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    role: Role,
    content: String,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    in_reply_to: Option<MessageId>,
}

impl Message {
    /// Create a new user message. Content is kept exactly as typed.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::User,
            content: content.into(),
            created_at: Utc::now(),
            in_reply_to: None,
        }
    }

    /// Create a new assistant message answering `in_reply_to`.
    pub fn assistant(content: impl Into<String>, in_reply_to: MessageId) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::Assistant,
            content: content.into(),
            created_at: Utc::now(),
            in_reply_to: Some(in_reply_to),
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The user message this one answers (assistant messages only).
    pub fn in_reply_to(&self) -> Option<MessageId> {
        self.in_reply_to
    }
}

/// Ordered, append-only sequence of messages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages in creation order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Look up a message by id.
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Position of a message in the sequence.
    pub fn position(&self, id: MessageId) -> Option<usize> {
        self.messages.iter().position(|m| m.id == id)
    }

    /// Count messages with the given role.
    pub fn count(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let user = Message::user("Hello");
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.content(), "Hello");
        assert!(user.in_reply_to().is_none());

        let reply = Message::assistant("Hi there!", user.id());
        assert_eq!(reply.role(), Role::Assistant);
        assert_eq!(reply.in_reply_to(), Some(user.id()));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("same");
        let b = Message::user("same");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_user_content_is_not_trimmed() {
        let msg = Message::user("  padded  ");
        assert_eq!(msg.content(), "  padded  ");
    }

    #[test]
    fn test_conversation_preserves_order() {
        let mut convo = Conversation::new();
        assert!(convo.is_empty());

        let first = Message::user("first");
        let first_id = first.id();
        convo.push(first);
        convo.push(Message::user("second"));
        convo.push(Message::assistant("reply", first_id));

        let contents: Vec<&str> = convo.messages().iter().map(Message::content).collect();
        assert_eq!(contents, vec!["first", "second", "reply"]);
        assert_eq!(convo.position(first_id), Some(0));
        assert_eq!(convo.count(Role::User), 2);
        assert_eq!(convo.count(Role::Assistant), 1);
    }

    #[test]
    fn test_conversation_allows_duplicates() {
        let mut convo = Conversation::new();
        convo.push(Message::user("again"));
        convo.push(Message::user("again"));
        assert_eq!(convo.len(), 2);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_user_message_omits_reply_link() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json["role"], "user");
        assert!(json.get("in_reply_to").is_none());
    }
}
