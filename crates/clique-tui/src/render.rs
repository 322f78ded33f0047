//! Main render/view function (View in TEA pattern)

use ratatui::Frame;

use clique_app::{AppState, View};

use crate::layout;
use crate::theme::Theme;
use crate::widgets::{FeedView, FormView, Header, MediaPromptPopup, StatusLine};

/// Render the complete UI.
///
/// Pure: reads `state` and draws, never mutates.
pub fn view(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let areas = layout::create(frame.area());

    frame.render_widget(Header::new(state.screen(), theme), areas.header);

    match &state.view {
        View::Form(session) => frame.render_widget(FormView::new(session, theme), areas.body),
        View::Feed(feed) => frame.render_widget(
            FeedView::new(feed, theme).tick(state.tick),
            areas.body,
        ),
    }

    frame.render_widget(StatusLine::new(state, theme), areas.status);

    if let Some(prompt) = &state.media_prompt {
        frame.render_widget(MediaPromptPopup::new(prompt, theme), frame.area());
    }
}
