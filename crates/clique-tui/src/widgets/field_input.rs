//! Dynamic input renderer
//!
//! Draws one [`FieldDescriptor`] as a bordered input. The widget only
//! reads the descriptor; edits travel back through
//! [`clique_app::field_edit::apply_edit`] as `FieldEdited` messages.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use clique_core::{FieldDescriptor, FieldValue, KeyboardHint};

use crate::theme::Theme;

/// Rows taken by one input (border, content, border)
pub const FIELD_HEIGHT: u16 = 3;

const MASK: char = '•';

/// Text a control shows for a value, or `None` when the placeholder applies
pub fn display_value(descriptor: &FieldDescriptor) -> Option<String> {
    match &descriptor.value {
        FieldValue::Bool(true) => Some("[x] Yes".to_string()),
        FieldValue::Bool(false) => Some("[ ] No".to_string()),
        FieldValue::Text(s) | FieldValue::Number(s) if s.is_empty() => None,
        FieldValue::Text(s) | FieldValue::Number(s) if descriptor.secret => {
            Some(MASK.to_string().repeat(s.chars().count()))
        }
        FieldValue::Text(s) | FieldValue::Number(s) => Some(s.clone()),
    }
}

fn hint_badge(hint: KeyboardHint) -> Option<&'static str> {
    match hint {
        KeyboardHint::Default => None,
        KeyboardHint::Email => Some("@"),
        KeyboardHint::Numeric => Some("#"),
        KeyboardHint::Url => Some("url"),
    }
}

/// One form input
pub struct FieldInput<'a> {
    descriptor: &'a FieldDescriptor,
    theme: &'a Theme,
    focused: bool,
    required: bool,
}

impl<'a> FieldInput<'a> {
    pub fn new(descriptor: &'a FieldDescriptor, theme: &'a Theme) -> Self {
        Self {
            descriptor,
            theme,
            focused: false,
            required: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Column of the text cursor relative to the content start.
    ///
    /// Toggles have no text cursor.
    pub fn cursor_offset(&self) -> Option<u16> {
        match &self.descriptor.value {
            FieldValue::Bool(_) => None,
            _ => {
                let width = display_value(self.descriptor)
                    .map(|s| s.width())
                    .unwrap_or(0);
                Some(u16::try_from(width).unwrap_or(u16::MAX))
            }
        }
    }

    fn title(&self) -> Line<'static> {
        let label_style = if self.focused {
            self.theme.label_focused
        } else {
            self.theme.label
        };
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.descriptor.label.clone(), label_style),
        ];
        if self.required {
            spans.push(Span::styled(" *", self.theme.error));
        }
        if let Some(badge) = hint_badge(self.descriptor.keyboard_hint) {
            spans.push(Span::styled(format!(" ({badge})"), self.theme.muted));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for FieldInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.theme.block(self.focused).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let content = match display_value(self.descriptor) {
            Some(text) => Span::styled(text, self.theme.text),
            None => Span::styled(self.descriptor.placeholder.clone(), self.theme.placeholder),
        };
        Paragraph::new(Line::from(content)).render(inner, buf);

        if self.focused {
            if let Some(offset) = self.cursor_offset() {
                // Keep the cursor in view for values wider than the input
                let x = inner.x + offset.min(inner.width.saturating_sub(1));
                buf[(x, inner.y)].set_style(self.theme.cursor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use clique_core::FieldSpec;
    use ratatui::style::Modifier;

    fn render(descriptor: &FieldDescriptor, focused: bool) -> TestTerminal {
        let theme = Theme::default();
        let mut term = TestTerminal::with_size(40, FIELD_HEIGHT);
        let area = term.area();
        term.render_widget(
            FieldInput::new(descriptor, &theme).focused(focused).required(true),
            area,
        );
        term
    }

    #[test]
    fn test_renders_label_and_value() {
        let d = FieldSpec::text("email", "Email")
            .describe(FieldValue::Text("a@rpi.edu".into()));
        let term = render(&d, false);
        assert!(term.line(0).contains("Email *"));
        assert!(term.line(1).contains("a@rpi.edu"));
    }

    #[test]
    fn test_empty_value_shows_placeholder() {
        let d = FieldSpec::text("title", "Title")
            .placeholder("Enter a title")
            .describe(FieldValue::Text(String::new()));
        let term = render(&d, false);
        assert!(term.line(1).contains("Enter a title"));
    }

    #[test]
    fn test_secret_value_is_masked() {
        let d = FieldSpec::text("password", "Password")
            .secret()
            .describe(FieldValue::Text("hunter2".into()));
        let term = render(&d, false);
        assert!(!term.buffer_contains("hunter2"));
        assert!(term.line(1).contains("•••••••"));
    }

    #[test]
    fn test_toggle_renders_checkbox() {
        let spec = FieldSpec::toggle("is_active", "Active");
        assert!(render(&spec.describe(FieldValue::Bool(true)), false)
            .line(1)
            .contains("[x] Yes"));
        assert!(render(&spec.describe(FieldValue::Bool(false)), false)
            .line(1)
            .contains("[ ] No"));
    }

    #[test]
    fn test_value_rendered_verbatim() {
        let d = FieldSpec::text("title", "Title").describe(FieldValue::Text("  padded ".into()));
        let term = render(&d, false);
        assert!(term.line(1).contains("  padded "));
    }

    #[test]
    fn test_cursor_follows_display_width() {
        let theme = Theme::default();
        let d = FieldSpec::text("club_name", "Club").describe(FieldValue::Text("日本".into()));
        assert_eq!(FieldInput::new(&d, &theme).cursor_offset(), Some(4));

        let toggle = FieldSpec::toggle("is_active", "Active").describe(FieldValue::Bool(true));
        assert_eq!(FieldInput::new(&toggle, &theme).cursor_offset(), None);
    }

    #[test]
    fn test_focused_input_draws_cursor() {
        let d = FieldSpec::text("title", "Title").describe(FieldValue::Text("ab".into()));
        let term = render(&d, true);
        // Border column + two characters
        let cell = &term.buffer()[(3, 1)];
        assert!(cell.style().add_modifier.contains(Modifier::REVERSED));
        assert!(!term.buffer()[(2, 1)]
            .style()
            .add_modifier
            .contains(Modifier::REVERSED));
    }

    #[test]
    fn test_hint_badge() {
        let d = FieldSpec::text("contact_email", "Contact email")
            .hint(KeyboardHint::Email)
            .describe(FieldValue::Text(String::new()));
        assert!(render(&d, false).line(0).contains("(@)"));
    }
}
