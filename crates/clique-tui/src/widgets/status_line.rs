//! Bottom status line: notice or progress on the left, key hints on the right

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use clique_app::{AppState, View};

use super::spinner_frame;
use crate::theme::Theme;

pub struct StatusLine<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn left(&self) -> Line<'static> {
        if let Some(session) = self.state.form().filter(|s| s.is_busy()) {
            return Line::from(vec![
                Span::styled(format!(" {} ", spinner_frame(self.state.tick)), self.theme.accent),
                Span::styled(session.phase().label(), self.theme.info),
            ]);
        }
        match &self.state.notice {
            Some(notice) => Line::from(Span::styled(
                format!(" {}", notice.text),
                self.theme.notice(notice.level),
            )),
            None => Line::default(),
        }
    }

    fn hints(&self) -> &'static str {
        if self.state.media_prompt.is_some() {
            return "Enter attach  Esc cancel ";
        }
        match &self.state.view {
            View::Form(session) if session.policy().accepts_media => {
                "Tab next  Enter submit  ^O media  ^C quit "
            }
            View::Form(_) => "Tab next  Enter submit  ^C quit ",
            View::Feed(_) => "r refresh  j/k move  q quit ",
        }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = self.hints();
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(hints.chars().count() as u16),
        ])
        .areas(area);

        Paragraph::new(self.left()).render(left, buf);
        Paragraph::new(Line::styled(hints, self.theme.muted).right_aligned()).render(right, buf);
    }
}
