//! Message types for the application (TEA pattern)

use clique_core::{FieldValue, MediaReference, Post, SubmissionResult};

use crate::input_key::InputKey;
use crate::screens::ScreenKind;
use crate::submission::{AttemptId, SubmissionPhase};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// A field's raw value changed
    FieldEdited { key: String, value: FieldValue },

    FocusNext,
    FocusPrev,

    /// Submit the active form
    Submit,

    /// A background attempt entered a new phase
    SubmissionProgress {
        attempt: AttemptId,
        phase: SubmissionPhase,
    },

    /// A background attempt finished
    SubmissionCompleted {
        attempt: AttemptId,
        result: SubmissionResult,
    },

    // ─────────────────────────────────────────────────────────
    // Media Messages
    // ─────────────────────────────────────────────────────────
    /// Show the media path prompt
    OpenMediaPrompt,

    /// The media path prompt's text changed
    MediaPromptEdited(String),

    /// Attach a selected media file to the active form
    AttachMedia(MediaReference),

    ClearMedia,

    // ─────────────────────────────────────────────────────────
    // Navigation & Feed
    // ─────────────────────────────────────────────────────────
    /// Unmount the current screen and mount another
    Navigate(ScreenKind),

    RefreshFeed,

    FeedSelectNext,
    FeedSelectPrev,

    /// Feed fetch finished; the error is already a display message
    PostsLoaded(Result<Vec<Post>, String>),

    /// Clear the status-line notice and close the media prompt
    DismissNotice,
}
