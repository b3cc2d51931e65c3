//! Reply producers.
//!
//! A [`Responder`] turns a [`ReplyRequest`] into assistant text. The only
//! implementation shipped is [`SimulatedResponder`], which waits a fixed
//! delay and returns [`SAMPLE_REPLY`].

use crate::chat::MessageId;
use async_trait::async_trait;
use std::time::Duration;

/// Delay before the simulated reply appears.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(800);

/// Canned assistant reply exercising bold, italic, inline code, a two-item
/// list and a link. Lines end in two spaces to force markdown hard breaks.
pub const SAMPLE_REPLY: &str = "**Bold** _italic_  \n`code`  \n- List item 1\n- List item 2\n[Example](https://example.com)";

/// A request for one assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRequest {
    /// The user message being answered.
    pub in_reply_to: MessageId,
    /// The user's text.
    pub prompt: String,
}

/// A finished reply, ready to append to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// The user message being answered.
    pub in_reply_to: MessageId,
    /// Assistant text (markdown).
    pub content: String,
    /// Name of the responder that produced it.
    pub responder: String,
}

/// Capability that produces assistant replies.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Produce reply text for a request.
    async fn respond(&self, request: &ReplyRequest) -> String;
}

/// Responder that waits a fixed delay and returns constant content.
#[derive(Debug, Clone)]
pub struct SimulatedResponder {
    delay: Duration,
    content: String,
}

impl SimulatedResponder {
    /// Create a responder with the default delay and sample reply.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_REPLY_DELAY)
    }

    /// Create a responder with a custom delay and the sample reply.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            content: SAMPLE_REPLY.to_string(),
        }
    }

    /// Replace the reply content.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for SimulatedResponder {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn respond(&self, _request: &ReplyRequest) -> String {
        tokio::time::sleep(self.delay).await;
        self.content.clone()
    }
}
