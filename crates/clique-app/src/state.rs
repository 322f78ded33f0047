//! Application state (Model in TEA pattern)

use clique_core::Post;

use crate::config::Settings;
use crate::screens::ScreenKind;
use crate::submission::FormSession;

/// Severity of a status-line notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One human-readable message shown in the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Feed screen state
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub loading: bool,
    pub selected: usize,
}

impl FeedState {
    pub fn select_next(&mut self) {
        if !self.posts.is_empty() {
            self.selected = (self.selected + 1).min(self.posts.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// The mounted screen
#[derive(Debug, Clone)]
pub enum View {
    Form(Box<FormSession>),
    Feed(FeedState),
}

/// Text entry for the media path prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaPrompt {
    pub buffer: String,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub view: View,
    pub notice: Option<Notice>,
    /// Open while the user types a media path
    pub media_prompt: Option<MediaPrompt>,
    pub settings: Settings,
    /// Spinner frame counter, advanced on every tick
    pub tick: u64,
    pub should_quit: bool,
}

impl AppState {
    /// State with the configured initial screen mounted.
    ///
    /// A feed start needs a fetch; see [`crate::handler::update`] with
    /// [`crate::Message::Navigate`].
    pub fn new(settings: Settings) -> Self {
        let view = mount(settings.ui.initial_screen).unwrap_or_else(|| {
            View::Feed(FeedState::default())
        });
        Self {
            view,
            notice: None,
            media_prompt: None,
            settings,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> ScreenKind {
        match &self.view {
            View::Form(session) => session.screen(),
            View::Feed(_) => ScreenKind::Feed,
        }
    }

    pub fn form(&self) -> Option<&FormSession> {
        match &self.view {
            View::Form(session) => Some(&**session),
            View::Feed(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormSession> {
        match &mut self.view {
            View::Form(session) => Some(&mut **session),
            View::Feed(_) => None,
        }
    }

    pub fn feed(&self) -> Option<&FeedState> {
        match &self.view {
            View::Feed(feed) => Some(feed),
            View::Form(_) => None,
        }
    }

    pub fn feed_mut(&mut self) -> Option<&mut FeedState> {
        match &mut self.view {
            View::Feed(feed) => Some(feed),
            View::Form(_) => None,
        }
    }

    /// Whether background work is running (drives the spinner)
    pub fn is_busy(&self) -> bool {
        match &self.view {
            View::Form(session) => session.is_busy(),
            View::Feed(feed) => feed.loading,
        }
    }
}

/// Fresh view for a form screen, `None` for the feed.
pub(crate) fn mount(screen: ScreenKind) -> Option<View> {
    match FormSession::new(screen) {
        Ok(session) => Some(View::Form(Box::new(session))),
        Err(_) if !screen.is_form() => None,
        Err(e) => {
            tracing::error!("Failed to mount {}: {}", screen, e);
            None
        }
    }
}
