//! Widget components for the TUI

mod feed_view;
mod field_input;
mod form_view;
mod header;
mod media_prompt;
mod status_line;

pub use feed_view::FeedView;
pub use field_input::{display_value, FieldInput, FIELD_HEIGHT};
pub use form_view::FormView;
pub use header::Header;
pub use media_prompt::MediaPromptPopup;
pub use status_line::StatusLine;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation tick
pub(crate) fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}
