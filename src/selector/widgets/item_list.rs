//! Bookmark list widget for displaying the filtered rows

use crate::Bookmark;
use crate::selector::state::SelectorState;
use crate::selector::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Widget},
};

/// List of the bookmarks matching the current filter
pub struct BookmarkList<'a> {
    /// Session state
    state: &'a SelectorState,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> BookmarkList<'a> {
    /// Create a new bookmark list widget
    #[must_use]
    pub const fn new(state: &'a SelectorState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// First visible row so that the cursor row fits in `height` rows
    #[must_use]
    pub const fn scroll_offset(cursor: usize, height: usize) -> usize {
        if height == 0 || cursor < height {
            0
        } else {
            cursor + 1 - height
        }
    }

    /// Render a single row
    fn render_item(&self, bookmark: &'a Bookmark, is_cursor: bool) -> ListItem<'a> {
        let (indicator, text_style) = if is_cursor {
            ("  > ", self.theme.highlight())
        } else {
            ("    ", Style::new())
        };

        let mut spans = vec![
            Span::styled(indicator, self.theme.accent()),
            Span::styled(bookmark.display_name(), text_style),
        ];
        if !bookmark.name.is_empty() {
            spans.push(Span::styled(
                format!(" {}", bookmark.path),
                self.theme.muted(),
            ));
        }

        ListItem::new(Line::from(spans))
    }
}

impl Widget for BookmarkList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        if self.state.filtered.is_empty() {
            Paragraph::new(Line::styled("  No matches", self.theme.muted()))
                .render(area, buf);
            return;
        }

        let visible_height = area.height as usize;
        let start = Self::scroll_offset(self.state.cursor, visible_height);
        let end = (start + visible_height).min(self.state.filtered.len());

        let items: Vec<ListItem> = (start..end)
            .filter_map(|row| {
                let idx = *self.state.filtered.get(row)?;
                let bookmark = self.state.bookmarks.get(idx)?;
                Some(self.render_item(bookmark, row == self.state.cursor))
            })
            .collect();

        List::new(items).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        assert_eq!(BookmarkList::scroll_offset(0, 5), 0);
        assert_eq!(BookmarkList::scroll_offset(4, 5), 0);
        assert_eq!(BookmarkList::scroll_offset(5, 5), 1);
        assert_eq!(BookmarkList::scroll_offset(12, 5), 8);
        assert_eq!(BookmarkList::scroll_offset(3, 0), 0);
    }
}
