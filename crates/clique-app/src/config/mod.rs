//! Configuration file parsing for Clique
//!
//! Looks for `.clique/config.toml` in the working directory, then
//! `<config_dir>/clique/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{
    init_config_dir, load_settings, project_config_path, save_settings, user_config_path,
};
pub use types::*;
