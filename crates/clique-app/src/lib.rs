//! clique-app - Application state and orchestration for Clique
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the per-screen form configuration, the submission pipeline,
//! configuration loading and background task dispatch.

pub mod actions;
pub mod backend;
pub mod config;
pub mod field_edit;
pub mod handler;
pub mod headless;
pub mod input_key;
pub mod message;
pub mod process;
pub mod screens;
pub mod state;
pub mod submission;

// Re-export primary types
pub use backend::{Backend, HttpBackend};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use screens::{ScreenKind, ScreenPolicy};
pub use state::{AppState, FeedState, Notice, NoticeLevel, View};
pub use submission::{FormSession, SubmissionAttempt, SubmissionPhase, SubmitStart};
