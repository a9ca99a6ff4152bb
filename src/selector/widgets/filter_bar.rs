//! Filter bar widget showing the active filter text

use crate::selector::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line `filter: <text>` display
pub struct FilterBar<'a> {
    /// Current filter text
    filter: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> FilterBar<'a> {
    /// Create a new filter bar widget
    #[must_use]
    pub const fn new(filter: &'a str, theme: &'a Theme) -> Self {
        Self { filter, theme }
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled("filter:", self.theme.filter_label()),
            Span::raw(" "),
            Span::raw(self.filter),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
