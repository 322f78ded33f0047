//! Form screen body: one input per field, in schema order

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use clique_app::FormSession;

use super::field_input::{FieldInput, FIELD_HEIGHT};
use crate::theme::Theme;

/// Renders every field of a [`FormSession`], scrolled so the focused
/// field stays visible
pub struct FormView<'a> {
    session: &'a FormSession,
    theme: &'a Theme,
}

impl<'a> FormView<'a> {
    pub fn new(session: &'a FormSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    /// Index of the first field drawn when `visible` fields fit
    fn first_visible(&self, visible: usize) -> usize {
        let focus = self.session.focus();
        if visible == 0 {
            return focus;
        }
        focus.saturating_sub(visible - 1)
    }

    fn media_line(&self) -> Line<'static> {
        match self.session.media() {
            Some(media) => Line::from(vec![
                Span::styled(" Media: ", self.theme.label),
                Span::styled(
                    format!("{} ({})", media.file_name(), media.kind),
                    self.theme.accent,
                ),
                Span::styled("  Ctrl+X remove", self.theme.muted),
            ]),
            None => Line::from(vec![
                Span::styled(" Media: ", self.theme.label),
                Span::styled("none", self.theme.muted),
                Span::styled("  Ctrl+O attach", self.theme.muted),
            ]),
        }
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut fields_area = area;
        if self.session.policy().accepts_media && area.height > 0 {
            let media_row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            Paragraph::new(self.media_line()).render(media_row, buf);
            fields_area.height -= 1;
        }

        // Descriptors are rebuilt from the current state on every frame
        let descriptors = self.session.descriptors();
        let visible = usize::from(fields_area.height / FIELD_HEIGHT);
        let first = self.first_visible(visible);

        for (row, (index, descriptor)) in descriptors
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .enumerate()
        {
            let y = fields_area.y + FIELD_HEIGHT * row as u16;
            let field_area = Rect::new(fields_area.x, y, fields_area.width, FIELD_HEIGHT);
            FieldInput::new(descriptor, self.theme)
                .focused(index == self.session.focus())
                .required(self.session.schema().is_required(&descriptor.key))
                .render(field_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use clique_app::ScreenKind;
    use clique_core::{FieldValue, MediaKind, MediaReference};

    fn render(session: &FormSession, height: u16) -> TestTerminal {
        let theme = Theme::default();
        let mut term = TestTerminal::with_size(60, height);
        let area = term.area();
        term.render_widget(FormView::new(session, &theme), area);
        term
    }

    #[test]
    fn test_fields_render_in_schema_order() {
        let session = FormSession::new(ScreenKind::Signup).unwrap();
        let term = render(&session, 24);
        let first = term.find("First name").unwrap();
        let last = term.find("Last name").unwrap();
        assert!(first.1 < last.1);
    }

    #[test]
    fn test_edits_show_on_next_render() {
        let mut session = FormSession::new(ScreenKind::Login).unwrap();
        assert!(!render(&session, 12).buffer_contains("a@b.com"));

        session.edit("email", FieldValue::Text("a@b.com".into())).unwrap();
        assert!(render(&session, 12).buffer_contains("a@b.com"));
    }

    #[test]
    fn test_scrolls_to_focused_field() {
        let mut session = FormSession::new(ScreenKind::ClubSignup).unwrap();
        for _ in 0..12 {
            session.focus_next();
        }
        let term = render(&session, 9);
        // Last field (user_password) is focused and visible
        assert!(term.buffer_contains("Password"));
        assert!(!term.buffer_contains("Club name"));
    }

    #[test]
    fn test_media_line_on_create_post() {
        let mut session = FormSession::new(ScreenKind::CreatePost).unwrap();
        assert!(render(&session, 12).buffer_contains("Ctrl+O attach"));

        session
            .attach_media(MediaReference::with_kind("/tmp/board.png", MediaKind::Image))
            .unwrap();
        assert!(render(&session, 12).buffer_contains("board.png (image)"));
    }

    #[test]
    fn test_no_media_line_on_login() {
        let session = FormSession::new(ScreenKind::Login).unwrap();
        assert!(!render(&session, 12).buffer_contains("Media:"));
    }
}
