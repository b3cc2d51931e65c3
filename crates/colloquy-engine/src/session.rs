//! Chat session: conversation plus the submission rules.

use tracing::debug;

use crate::chat::{Conversation, Message, MessageId};
use crate::responder::{Reply, ReplyRequest};

/// Whether a draft may be submitted. Whitespace-only drafts are not.
pub fn is_submittable(draft: &str) -> bool {
    !draft.trim().is_empty()
}

/// A single chat view's state.
#[derive(Debug, Default)]
pub struct ChatSession {
    conversation: Conversation,
}

impl ChatSession {
    /// Create a session with an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Submit a draft.
    ///
    /// Blank drafts are ignored and return `None`. Otherwise the untrimmed
    /// draft is appended as a user message and a reply request is returned
    /// for the caller to schedule.
    pub fn submit(&mut self, draft: &str) -> Option<ReplyRequest> {
        if !is_submittable(draft) {
            debug!("blank submission ignored");
            return None;
        }

        let message = Message::user(draft);
        let id = message.id();
        self.conversation.push(message);
        debug!(message_id = %id, len = draft.len(), "user message appended");

        Some(ReplyRequest {
            in_reply_to: id,
            prompt: draft.to_string(),
        })
    }

    /// Append a finished reply as an assistant message.
    pub fn accept_reply(&mut self, reply: Reply) -> MessageId {
        let message = Message::assistant(reply.content, reply.in_reply_to);
        let id = message.id();
        self.conversation.push(message);
        debug!(
            message_id = %id,
            in_reply_to = %reply.in_reply_to,
            responder = %reply.responder,
            "assistant message appended"
        );
        id
    }
}
