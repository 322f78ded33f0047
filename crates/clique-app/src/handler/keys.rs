//! Key event handlers for each screen

use clique_core::MediaReference;

use crate::field_edit::apply_edit;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::screens::ScreenKind;
use crate::state::{AppState, MediaPrompt, View};
use crate::submission::FormSession;

/// Convert key events to messages based on the mounted screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global keys
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::F(n) => return ScreenKind::from_function_key(n).map(Message::Navigate),
        _ => {}
    }

    if let Some(prompt) = &state.media_prompt {
        return handle_key_media_prompt(prompt, key);
    }

    match &state.view {
        View::Form(session) => handle_key_form(session, key),
        View::Feed(_) => handle_key_feed(key),
    }
}

fn handle_key_form(session: &FormSession, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),
        InputKey::Enter => Some(Message::Submit),
        InputKey::Esc => Some(Message::DismissNotice),
        InputKey::CharCtrl('o') if session.policy().accepts_media => {
            Some(Message::OpenMediaPrompt)
        }
        InputKey::CharCtrl('x') if session.media().is_some() => Some(Message::ClearMedia),
        key => {
            let descriptor = session.focused_descriptor()?;
            let mut edited = None;
            apply_edit(&descriptor, &key, |k, value| {
                edited = Some(Message::FieldEdited {
                    key: k.to_string(),
                    value,
                })
            });
            edited
        }
    }
}

fn handle_key_feed(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') => Some(Message::RefreshFeed),
        InputKey::Char('j') | InputKey::Down => Some(Message::FeedSelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::FeedSelectPrev),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc => Some(Message::DismissNotice),
        _ => None,
    }
}

fn handle_key_media_prompt(prompt: &MediaPrompt, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::DismissNotice),
        InputKey::Enter => {
            let path = prompt.buffer.trim();
            if path.is_empty() {
                Some(Message::DismissNotice)
            } else {
                Some(Message::AttachMedia(MediaReference::infer(path, None)))
            }
        }
        InputKey::Backspace => {
            let mut buffer = prompt.buffer.clone();
            buffer.pop()?;
            Some(Message::MediaPromptEdited(buffer))
        }
        InputKey::Char(c) => Some(Message::MediaPromptEdited(format!("{}{}", prompt.buffer, c))),
        _ => None,
    }
}
