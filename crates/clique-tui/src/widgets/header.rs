//! Header bar with the app title and screen tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use clique_app::ScreenKind;

use crate::theme::Theme;

/// Title plus one tab per screen, labelled with its function key
pub struct Header<'a> {
    active: ScreenKind,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(active: ScreenKind, theme: &'a Theme) -> Self {
        Self { active, theme }
    }

    fn tabs(&self) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled(" Clique ", self.theme.accent), Span::raw(" ")];
        for (i, screen) in ScreenKind::ALL.iter().enumerate() {
            let style = if *screen == self.active {
                self.theme.tab_active
            } else {
                self.theme.tab_inactive
            };
            spans.push(Span::styled(format!(" F{} {} ", i + 1, screen.title()), style));
        }
        spans
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.theme.block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(Line::from(self.tabs())).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_lists_every_screen() {
        let theme = Theme::default();
        let mut term = TestTerminal::with_size(120, 3);
        let area = term.area();
        term.render_widget(Header::new(ScreenKind::Login, &theme), area);

        assert!(term.buffer_contains("Clique"));
        for (i, screen) in ScreenKind::ALL.iter().enumerate() {
            assert!(
                term.buffer_contains(&format!("F{} {}", i + 1, screen.title())),
                "missing tab for {screen}"
            );
        }
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let theme = Theme::default();
        let mut term = TestTerminal::with_size(120, 3);
        let area = term.area();
        term.render_widget(Header::new(ScreenKind::Feed, &theme), area);

        let (x, y) = term.find("F6").unwrap();
        assert_eq!(term.buffer()[(x, y)].bg, theme.tab_active.bg.unwrap());
    }
}
