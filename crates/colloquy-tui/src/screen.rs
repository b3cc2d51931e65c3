//! The chat screen: header, transcript and composer stacked vertically.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::app::App;
use crate::widgets::{Composer, HeaderBar, Transcript};

/// Layout of the single chat screen.
///
/// ```text
///  ☰ ChatGPT ▼                               [Share]
///
///                              ╭ user bubble ╮
///  assistant reply in markdown
///
/// ╭──────────────────────────────────────────────╮
/// │Ask anything                                 ➤│
/// ╰──────────────────────────────────────────────╯
///  [Reason] [Deep research] […]   ChatGPT can make…
/// ```
pub struct ChatScreen;

impl ChatScreen {
    /// Render the screen. Clamps the app's scroll offset to the transcript.
    pub fn render(&self, app: &mut App, area: Rect, buf: &mut Buffer) {
        let composer_height = Composer::height(&app.input).min(area.height.saturating_sub(1));
        let [header_area, transcript_area, composer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(composer_height),
        ])
        .areas(area);

        let max = Transcript::new(app.session.conversation(), app.styles(), &app.theme)
            .max_scroll(transcript_area);
        app.clamp_scroll(max);

        HeaderBar::new(&app.config.title, &app.theme, &app.glyphs).render(header_area, buf);
        Transcript::new(app.session.conversation(), app.styles(), &app.theme)
            .scroll(app.transcript_scroll)
            .render(transcript_area, buf);
        Composer::new(&app.input, &app.config, &app.theme, &app.glyphs)
            .render(composer_area, buf);
    }
}
