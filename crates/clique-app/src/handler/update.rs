//! Main update function - handles state transitions (TEA pattern)

use clique_core::prelude::*;
use clique_core::MediaKind;

use super::{keys, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::screens::ScreenKind;
use crate::state::{mount, AppState, FeedState, MediaPrompt, Notice, View};
use crate::submission::SubmitStart;

/// Process a message and update state
/// Returns an optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.is_busy() {
                state.tick = state.tick.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FieldEdited { key, value } => {
            if let Some(session) = state.form_mut() {
                match session.edit(&key, value) {
                    Ok(()) => trace!("Field '{}' edited", key),
                    Err(e) => error!("Rejected edit on {}: {}", session.screen(), e),
                }
            }
            UpdateResult::none()
        }

        Message::FocusNext => {
            if let Some(session) = state.form_mut() {
                session.focus_next();
            }
            UpdateResult::none()
        }

        Message::FocusPrev => {
            if let Some(session) = state.form_mut() {
                session.focus_prev();
            }
            UpdateResult::none()
        }

        Message::Submit => handle_submit(state),

        Message::SubmissionProgress { attempt, phase } => {
            if let Some(session) = state.form_mut() {
                session.advance(attempt, phase);
            }
            UpdateResult::none()
        }

        Message::SubmissionCompleted { attempt, result } => {
            let Some(session) = state.form_mut() else {
                debug!("Submission {} completed after its form was unmounted", attempt);
                return UpdateResult::none();
            };
            if !session.complete(attempt, result.clone()) {
                return UpdateResult::none();
            }

            let policy = *session.policy();
            let screen = session.screen();
            let text = policy.describe(&result);

            if result.is_success() {
                info!("{} submitted", screen);
                let follow_up = if policy.on_success != screen {
                    navigate(state, policy.on_success)
                } else {
                    UpdateResult::none()
                };
                state.notice = Some(Notice::success(text));
                follow_up
            } else {
                state.notice = Some(Notice::error(text));
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Media Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenMediaPrompt => {
            if state.form().is_some_and(|s| s.policy().accepts_media) {
                state.media_prompt = Some(MediaPrompt::default());
            }
            UpdateResult::none()
        }

        Message::MediaPromptEdited(buffer) => {
            if let Some(prompt) = &mut state.media_prompt {
                prompt.buffer = buffer;
            }
            UpdateResult::none()
        }

        Message::AttachMedia(media) => {
            state.media_prompt = None;
            let Some(session) = state.form_mut() else {
                return UpdateResult::none();
            };
            let label = format!("Attached {}: {}", media.kind, media.file_name());
            match session.attach_media(media) {
                Ok(()) => state.notice = Some(Notice::info(label)),
                Err(e) => {
                    warn!("{}", e);
                    state.notice = Some(Notice::error("This screen does not take media"));
                }
            }
            UpdateResult::none()
        }

        Message::ClearMedia => {
            if let Some(session) = state.form_mut() {
                if session.media().is_some() {
                    session.clear_media();
                    state.notice = Some(Notice::info("Media removed"));
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation & Feed
        // ─────────────────────────────────────────────────────────
        Message::Navigate(screen) => {
            state.notice = None;
            navigate(state, screen)
        }

        Message::RefreshFeed => match state.feed_mut() {
            Some(feed) if !feed.loading => {
                feed.loading = true;
                UpdateResult::action(UpdateAction::FetchPosts)
            }
            _ => UpdateResult::none(),
        },

        Message::FeedSelectNext => {
            if let Some(feed) = state.feed_mut() {
                feed.select_next();
            }
            UpdateResult::none()
        }

        Message::FeedSelectPrev => {
            if let Some(feed) = state.feed_mut() {
                feed.select_prev();
            }
            UpdateResult::none()
        }

        Message::PostsLoaded(result) => {
            let Some(feed) = state.feed_mut() else {
                return UpdateResult::none();
            };
            feed.loading = false;
            match result {
                Ok(posts) => {
                    feed.selected = feed.selected.min(posts.len().saturating_sub(1));
                    feed.posts = posts;
                }
                Err(message) => state.notice = Some(Notice::error(message)),
            }
            UpdateResult::none()
        }

        Message::DismissNotice => {
            state.notice = None;
            state.media_prompt = None;
            UpdateResult::none()
        }
    }
}

fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(session) = state.form_mut() else {
        return UpdateResult::none();
    };

    match session.begin_submit() {
        SubmitStart::Busy => UpdateResult::none(),
        SubmitStart::Invalid(failure) => {
            let text = session.policy().describe(&failure);
            state.notice = Some(Notice::error(text));
            UpdateResult::none()
        }
        SubmitStart::Started(attempt) => {
            let media_note = match attempt.media.as_ref().map(|m| m.kind) {
                Some(MediaKind::Video) => " with video",
                Some(MediaKind::Image) => " with image",
                _ => "",
            };
            state.notice = Some(Notice::info(format!("Submitting{}…", media_note)));
            UpdateResult::action(UpdateAction::SubmitForm(Box::new(attempt)))
        }
    }
}

/// Unmount the current screen and mount `screen` with fresh state.
fn navigate(state: &mut AppState, screen: ScreenKind) -> UpdateResult {
    state.media_prompt = None;
    debug!("Navigating {} -> {}", state.screen(), screen);

    match mount(screen) {
        Some(view) => {
            state.view = view;
            UpdateResult::none()
        }
        None if screen == ScreenKind::Feed => {
            state.view = View::Feed(FeedState {
                loading: true,
                ..Default::default()
            });
            UpdateResult::action(UpdateAction::FetchPosts)
        }
        None => UpdateResult::none(),
    }
}
