//! Popup for typing the path or URL of a media file

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use clique_app::state::MediaPrompt;

use crate::theme::Theme;

const POPUP_WIDTH: u16 = 60;
const POPUP_HEIGHT: u16 = 4;

pub struct MediaPromptPopup<'a> {
    prompt: &'a MediaPrompt,
    theme: &'a Theme,
}

impl<'a> MediaPromptPopup<'a> {
    pub fn new(prompt: &'a MediaPrompt, theme: &'a Theme) -> Self {
        Self { prompt, theme }
    }

    /// Centered popup area within `area`
    pub fn area(area: Rect) -> Rect {
        let width = POPUP_WIDTH.min(area.width);
        let height = POPUP_HEIGHT.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Widget for MediaPromptPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::area(area);
        Clear.render(popup, buf);

        let block = self.theme.block(true).title(Line::from(vec![
            Span::raw(" "),
            Span::styled("Attach media", self.theme.label_focused),
            Span::raw(" "),
        ]));
        let inner = block.inner(popup);
        block.render(popup, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let input = if self.prompt.buffer.is_empty() {
            Span::styled("path/to/file.jpg or https://…", self.theme.placeholder)
        } else {
            Span::styled(self.prompt.buffer.clone(), self.theme.text)
        };
        let input_row = Rect::new(inner.x, inner.y, inner.width, 1);
        Paragraph::new(Line::from(input)).render(input_row, buf);

        let cursor = u16::try_from(self.prompt.buffer.width()).unwrap_or(u16::MAX);
        let x = inner.x + cursor.min(inner.width.saturating_sub(1));
        buf[(x, inner.y)].set_style(self.theme.cursor);

        if inner.height > 1 {
            let hint_row = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            Paragraph::new(Line::styled("Enter attach · Esc cancel", self.theme.muted))
                .render(hint_row, buf);
        }
    }
}
