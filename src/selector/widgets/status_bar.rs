//! Status line widget for session messages

use crate::selector::state::StatusMessage;
use crate::selector::theme::Theme;
use crate::ui::MessageLevel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status line showing the current message, if any
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(msg) = self.message else {
            return;
        };
        let marker = match msg.level {
            MessageLevel::Error => "✗ ",
            MessageLevel::Success => "✓ ",
            MessageLevel::Normal => "",
        };
        let style = self.theme.status(msg.level);
        Paragraph::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(marker, style),
            Span::styled(msg.text.as_str(), style),
        ]))
        .render(area, buf);
    }
}
