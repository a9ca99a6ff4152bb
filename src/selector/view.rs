//! Full selector view
//!
//! Renders the session state top to bottom: filter line, rename prompt,
//! bookmark rows, status line, key hints. Rendering reads the state only.

use super::state::SelectorState;
use super::theme::Theme;
use super::widgets::{BookmarkList, EditPrompt, FilterBar, HelpBar, StatusBar};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Message shown when the store holds no bookmarks at all
pub const EMPTY_MESSAGE: &str = "No bookmarks yet. Use 'bk add' to add the current directory.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Gap,
    Filter,
    Edit,
    List,
    Status,
    Help,
}

impl Section {
    const fn constraint(self) -> Constraint {
        match self {
            Self::Gap | Self::Filter | Self::Status | Self::Help => Constraint::Length(1),
            Self::Edit => Constraint::Length(2),
            Self::List => Constraint::Min(1),
        }
    }
}

/// Widget drawing the whole selector screen
pub struct SelectorView<'a> {
    state: &'a SelectorState,
    theme: &'a Theme,
}

impl<'a> SelectorView<'a> {
    /// Create a view over `state`
    #[must_use]
    pub const fn new(state: &'a SelectorState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::Gap];
        if !self.state.filter.is_empty() {
            sections.extend([Section::Filter, Section::Gap]);
        }
        if self.state.is_editing() {
            sections.extend([Section::Edit, Section::Gap]);
        }
        sections.push(Section::List);
        if self.state.status.is_some() {
            sections.push(Section::Status);
        }
        sections.extend([Section::Gap, Section::Help]);
        sections
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::raw(""),
            Line::raw(format!("  {EMPTY_MESSAGE}")),
            Line::raw(""),
            Line::styled("  Press q to quit.", self.theme.muted()),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}

impl Widget for SelectorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.bookmarks.is_empty() {
            self.render_empty(area, buf);
            return;
        }

        let sections = self.sections();
        let areas = Layout::vertical(sections.iter().map(|s| s.constraint())).split(area);

        for (section, &rect) in sections.iter().zip(areas.iter()) {
            match section {
                Section::Gap => {}
                Section::Filter => FilterBar::new(&self.state.filter, self.theme).render(rect, buf),
                Section::Edit => {
                    let buffer = self.state.edit_buffer().unwrap_or_default();
                    EditPrompt::new(buffer, self.theme).render(rect, buf);
                }
                Section::List => BookmarkList::new(self.state, self.theme).render(rect, buf),
                Section::Status => {
                    StatusBar::new(self.state.status.as_ref(), self.theme).render(rect, buf);
                }
                Section::Help => HelpBar::new(self.state.is_editing(), self.theme).render(rect, buf),
            }
        }
    }
}
