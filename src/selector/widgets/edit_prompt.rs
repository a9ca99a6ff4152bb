//! Rename prompt widget

use crate::selector::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Two-line prompt showing the alias being typed
pub struct EditPrompt<'a> {
    /// Alias typed so far
    buffer: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> EditPrompt<'a> {
    /// Create a new rename prompt widget
    #[must_use]
    pub const fn new(buffer: &'a str, theme: &'a Theme) -> Self {
        Self { buffer, theme }
    }
}

impl Widget for EditPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::raw("  "),
                Span::styled("Rename bookmark:", self.theme.accent()),
                Span::raw(" "),
                Span::raw(self.buffer),
                Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]),
            Line::styled(
                "  (Enter to save, Esc to cancel)",
                self.theme.muted(),
            ),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
