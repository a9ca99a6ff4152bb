//! Colors used by the selector

use crate::ui::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Selector palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Cursor indicator, key names and the rename label
    pub accent: Color,
    /// The `filter:` label
    pub filter: Color,
    /// Paths shown next to aliases, hints, placeholder text
    pub muted: Color,
    pub success: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for dark terminals (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            filter: Color::Indexed(214),
            muted: Color::Indexed(245),
            success: Color::Green,
            error: Color::Red,
        }
    }

    /// Row under the cursor
    #[must_use]
    pub fn highlight(&self) -> Style {
        Style::new().add_modifier(Modifier::REVERSED)
    }

    #[must_use]
    pub fn accent(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn filter_label(&self) -> Style {
        Style::new().fg(self.filter).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        Style::new().fg(self.muted)
    }

    /// Status line style for a message level
    #[must_use]
    pub fn status(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Normal => Style::new(),
            MessageLevel::Success => Style::new().fg(self.success),
            MessageLevel::Error => Style::new().fg(self.error).add_modifier(Modifier::BOLD),
        }
    }
}
