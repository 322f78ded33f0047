//! Clique - terminal client for the Clique club-posting service
//!
//! The binary wires the command line to the workspace crates: the
//! interactive UI lives in `clique-tui`, one-shot commands in [`commands`].

pub mod cli;
pub mod commands;
