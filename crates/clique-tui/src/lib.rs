//! clique-tui - Terminal UI for Clique
//!
//! Renders the application state from clique-app with ratatui, turns
//! terminal key presses into messages and runs the main loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
pub use theme::Theme;
