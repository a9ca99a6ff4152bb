//! Key binding hints shown on the last line

use crate::selector::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// `(key, action)` pairs while browsing
pub const BROWSING_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "navigate"),
    ("enter", "select"),
    ("e", "rename"),
    ("d", "delete"),
    ("esc", "clear"),
    ("q", "quit"),
];

/// `(key, action)` pairs while the rename prompt is open
pub const EDITING_HINTS: &[(&str, &str)] = &[("enter", "save"), ("esc", "cancel")];

/// Help line widget
pub struct HelpBar<'a> {
    editing: bool,
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(editing: bool, theme: &'a Theme) -> Self {
        Self { editing, theme }
    }

    const fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.editing { EDITING_HINTS } else { BROWSING_HINTS }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = Span::styled(" • ", self.theme.muted());
        let mut spans = vec![Span::raw("  ")];

        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(separator.clone());
            }
            spans.push(Span::styled(*key, self.theme.accent()));
            spans.push(Span::styled(format!(" {action}"), self.theme.muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
