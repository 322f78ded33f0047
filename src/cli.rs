//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use clique_app::config::Settings;
use clique_app::ScreenKind;
use clique_core::MediaKind;

/// Clique - terminal client for club sign-ups and posts
#[derive(Parser, Debug)]
#[command(name = "clique")]
#[command(about = "Terminal client for the Clique club-posting service", long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory holding `.clique/config.toml` (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive terminal UI (the default)
    Tui {
        /// Screen to open first
        #[arg(long, value_parser = parse_screen)]
        screen: Option<ScreenKind>,
    },

    /// Submit one form without the UI and print the outcome as JSON
    Submit(SubmitArgs),

    /// Fetch the latest posts and print them as JSON
    Posts,

    /// Write a default `.clique/config.toml`
    Init,
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Form to submit (login, signup, club_signup, forgot_password, create_post)
    #[arg(long, value_parser = parse_screen)]
    pub screen: ScreenKind,

    /// Field assignment, repeatable
    #[arg(long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// Media file path or URL (create_post only)
    #[arg(long, value_name = "PATH")]
    pub media: Option<String>,

    /// Media kind; inferred from the file when omitted
    #[arg(long, value_enum, requires = "media")]
    pub media_kind: Option<MediaKindArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKindArg {
    Image,
    Video,
}

impl From<MediaKindArg> for MediaKind {
    fn from(arg: MediaKindArg) -> Self {
        match arg {
            MediaKindArg::Image => MediaKind::Image,
            MediaKindArg::Video => MediaKind::Video,
        }
    }
}

fn parse_screen(s: &str) -> Result<ScreenKind, String> {
    s.parse::<ScreenKind>().map_err(|e| e.to_string())
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.base_url {
            settings.backend.base_url = url.clone();
        }
        if let Some(Command::Tui {
            screen: Some(screen),
        }) = &self.command
        {
            settings.ui.initial_screen = *screen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["clique"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_submit_args() {
        let cli = Cli::try_parse_from([
            "clique",
            "submit",
            "--screen",
            "create-post",
            "--field",
            "club_name=Chess Club",
            "--field",
            "title=a=b",
            "--media",
            "/tmp/clip.mp4",
            "--media-kind",
            "video",
        ])
        .unwrap();

        let Some(Command::Submit(args)) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.screen, ScreenKind::CreatePost);
        assert_eq!(args.fields, ["club_name=Chess Club", "title=a=b"]);
        assert_eq!(args.media.as_deref(), Some("/tmp/clip.mp4"));
        assert_eq!(args.media_kind, Some(MediaKindArg::Video));
    }

    #[test]
    fn test_media_kind_requires_media() {
        let result = Cli::try_parse_from([
            "clique",
            "submit",
            "--screen",
            "create_post",
            "--media-kind",
            "image",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_screen_rejected() {
        assert!(Cli::try_parse_from(["clique", "tui", "--screen", "settings"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "clique",
            "--base-url",
            "http://api.example.test",
            "tui",
            "--screen",
            "feed",
        ])
        .unwrap();
        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);

        assert_eq!(settings.backend.base_url, "http://api.example.test");
        assert_eq!(settings.ui.initial_screen, ScreenKind::Feed);
    }

    #[test]
    fn test_global_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["clique", "posts", "--base-url", "http://x.test"]).unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://x.test"));
    }
}
