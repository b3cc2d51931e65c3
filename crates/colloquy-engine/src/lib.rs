//! colloquy-engine: Headless model for the colloquy chat view
//!
//! This crate provides everything the view needs that is not drawing:
//! - Messages and the append-only conversation
//! - Submission rules for drafts
//! - The responder capability and its simulated implementation
//! - Scoped scheduling of deferred replies
//! - Configuration

pub mod chat;
pub mod config;
pub mod responder;
pub mod scheduler;
pub mod session;

// Re-export commonly used types
pub use chat::{Conversation, Message, MessageId, Role};
pub use config::{Config, ConfigError, ThemeName, DEFAULT_CONFIG_PATH};
pub use responder::{
    Reply, ReplyRequest, Responder, SimulatedResponder, DEFAULT_REPLY_DELAY, SAMPLE_REPLY,
};
pub use scheduler::ReplyScheduler;
pub use session::{is_submittable, ChatSession};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
