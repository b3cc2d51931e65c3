//! Widgets that make up the chat screen.

mod bubble;
mod composer;
mod header;
mod text_input;
mod transcript;

pub use bubble::{bubble_width, MessageBubble};
pub use composer::Composer;
pub use header::HeaderBar;
pub use text_input::TextInputState;
pub use transcript::{Transcript, TranscriptLayout};
