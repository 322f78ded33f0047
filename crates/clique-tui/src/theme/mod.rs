//! Explicit styling configuration.
//!
//! Widgets take a [`Theme`] by reference instead of reading shared style
//! constants, so a different look can be swapped in per render.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use clique_app::NoticeLevel;

/// Every style the terminal UI draws with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub text: Style,
    pub muted: Style,
    pub accent: Style,
    pub label: Style,
    pub label_focused: Style,
    pub placeholder: Style,
    pub border: Style,
    pub border_focused: Style,
    /// Cell under the text cursor of the focused field
    pub cursor: Style,
    pub tab_active: Style,
    pub tab_inactive: Style,
    pub selected: Style,
    pub info: Style,
    pub success: Style,
    pub error: Style,
    pub border_type: BorderType,
}

impl Default for Theme {
    fn default() -> Self {
        let text = Color::Rgb(192, 200, 215);
        let muted = Color::Rgb(92, 99, 112);
        let accent = Color::Rgb(88, 166, 255);
        Self {
            text: Style::default().fg(text),
            muted: Style::default().fg(muted),
            accent: Style::default().fg(accent),
            label: Style::default().fg(Color::Rgb(140, 148, 163)),
            label_focused: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            placeholder: Style::default()
                .fg(muted)
                .add_modifier(Modifier::ITALIC),
            border: Style::default().fg(Color::Rgb(45, 51, 59)),
            border_focused: Style::default().fg(accent),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            tab_active: Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(muted),
            selected: Style::default()
                .bg(Color::Rgb(30, 36, 48))
                .add_modifier(Modifier::BOLD),
            info: Style::default().fg(accent),
            success: Style::default().fg(Color::Rgb(80, 250, 123)),
            error: Style::default().fg(Color::Rgb(255, 85, 85)),
            border_type: BorderType::Rounded,
        }
    }
}

impl Theme {
    /// A theme without colors, for terminals where color is unwanted
    pub fn monochrome() -> Self {
        let plain = Style::default();
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            text: plain,
            muted: Style::default().add_modifier(Modifier::DIM),
            accent: bold,
            label: plain,
            label_focused: bold,
            placeholder: Style::default().add_modifier(Modifier::DIM),
            border: plain,
            border_focused: bold,
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            tab_active: Style::default().add_modifier(Modifier::REVERSED),
            tab_inactive: plain,
            selected: Style::default().add_modifier(Modifier::REVERSED),
            info: plain,
            success: bold,
            error: bold,
            border_type: BorderType::Plain,
        }
    }

    pub fn notice(&self, level: NoticeLevel) -> Style {
        match level {
            NoticeLevel::Info => self.info,
            NoticeLevel::Success => self.success,
            NoticeLevel::Error => self.error,
        }
    }

    /// Bordered container, highlighted when focused
    pub fn block(&self, focused: bool) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(self.border_type)
            .border_style(if focused {
                self.border_focused
            } else {
                self.border
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_styles_differ_by_level() {
        let theme = Theme::default();
        assert_ne!(theme.notice(NoticeLevel::Error), theme.notice(NoticeLevel::Success));
        assert_eq!(theme.notice(NoticeLevel::Info), theme.info);
    }

    #[test]
    fn test_monochrome_has_no_colors() {
        let theme = Theme::monochrome();
        for style in [theme.text, theme.accent, theme.error, theme.success] {
            assert!(style.fg.is_none());
            assert!(style.bg.is_none());
        }
    }
}
