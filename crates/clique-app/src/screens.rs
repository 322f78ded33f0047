//! Per-screen configuration
//!
//! Every screen is described by data: its field schema, required-field
//! policy, endpoint, which fields are trimmed before sending, whether media
//! is accepted, where to go after success and how failures are worded. The
//! form engine is written once against [`ScreenPolicy`].

use std::str::FromStr;

use clique_client::Endpoint;
use clique_core::prelude::*;
use clique_core::{FieldSpec, FormSchema, KeyboardHint, SubmissionResult};
use serde::{Deserialize, Serialize};

/// Screens reachable in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    #[default]
    Login,
    Signup,
    ClubSignup,
    ForgotPassword,
    CreatePost,
    Feed,
}

impl ScreenKind {
    /// All screens in function-key order (F1, F2, ...)
    pub const ALL: [ScreenKind; 6] = [
        ScreenKind::Login,
        ScreenKind::Signup,
        ScreenKind::ClubSignup,
        ScreenKind::ForgotPassword,
        ScreenKind::CreatePost,
        ScreenKind::Feed,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ScreenKind::Login => "Log In",
            ScreenKind::Signup => "Sign Up",
            ScreenKind::ClubSignup => "Register a Club",
            ScreenKind::ForgotPassword => "Forgot Password",
            ScreenKind::CreatePost => "Create Post",
            ScreenKind::Feed => "Feed",
        }
    }

    /// Identifier used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenKind::Login => "login",
            ScreenKind::Signup => "signup",
            ScreenKind::ClubSignup => "club_signup",
            ScreenKind::ForgotPassword => "forgot_password",
            ScreenKind::CreatePost => "create_post",
            ScreenKind::Feed => "feed",
        }
    }

    /// Screen bound to function key `F{n}`
    pub fn from_function_key(n: u8) -> Option<ScreenKind> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn is_form(&self) -> bool {
        self.policy().is_some()
    }

    /// Form policy, `None` for the feed.
    pub fn policy(&self) -> Option<ScreenPolicy> {
        let policy = match self {
            ScreenKind::Login => ScreenPolicy {
                endpoint: Endpoint::CheckUser,
                trimmed: &[],
                accepts_media: false,
                on_success: ScreenKind::Feed,
                success_message: "Login successful",
                credential_failure_statuses: &[400, 401, 404],
            },
            ScreenKind::Signup => ScreenPolicy {
                endpoint: Endpoint::CreateUser,
                trimmed: &[],
                accepts_media: false,
                on_success: ScreenKind::Login,
                success_message: "Account created. Please log in.",
                credential_failure_statuses: &[],
            },
            ScreenKind::ClubSignup => ScreenPolicy {
                endpoint: Endpoint::CreateClub,
                trimmed: &[],
                accepts_media: false,
                on_success: ScreenKind::Login,
                success_message: "Club registered. Please log in.",
                credential_failure_statuses: &[],
            },
            ScreenKind::ForgotPassword => ScreenPolicy {
                endpoint: Endpoint::ForgotPassword,
                trimmed: &[],
                accepts_media: false,
                on_success: ScreenKind::Login,
                success_message: "Password reset email sent",
                credential_failure_statuses: &[],
            },
            ScreenKind::CreatePost => ScreenPolicy {
                endpoint: Endpoint::CreatePost,
                trimmed: &["title", "description"],
                accepts_media: true,
                on_success: ScreenKind::CreatePost,
                success_message: "Post created successfully!",
                credential_failure_statuses: &[],
            },
            ScreenKind::Feed => return None,
        };
        Some(policy)
    }

    /// Field schema for a form screen.
    ///
    /// Fails only when the schema wiring is inconsistent.
    pub fn schema(&self) -> Result<FormSchema> {
        match self {
            ScreenKind::Login => FormSchema::new(
                vec![
                    FieldSpec::text("email", "Email")
                        .placeholder("you@rpi.edu")
                        .hint(KeyboardHint::Email),
                    FieldSpec::text("password", "Password").secret(),
                ],
                ["email", "password"],
            ),
            ScreenKind::Signup => FormSchema::new(
                vec![
                    FieldSpec::text("firstname", "First name"),
                    FieldSpec::text("lastname", "Last name"),
                    FieldSpec::text("email", "Email")
                        .placeholder("you@rpi.edu")
                        .hint(KeyboardHint::Email),
                    FieldSpec::text("password", "Password").secret(),
                    FieldSpec::text("rcs_id", "RCS ID").placeholder("smithj"),
                    FieldSpec::number("graduation_year", "Graduation year").placeholder("2027"),
                    FieldSpec::text("major", "Major"),
                ],
                ["email", "password", "rcs_id"],
            ),
            ScreenKind::ClubSignup => FormSchema::new(
                vec![
                    FieldSpec::text("name", "Club name"),
                    FieldSpec::text("description", "Description"),
                    FieldSpec::text("logo_url", "Logo URL").hint(KeyboardHint::Url),
                    FieldSpec::text("banner_url", "Banner URL").hint(KeyboardHint::Url),
                    FieldSpec::text("meeting_location", "Meeting location"),
                    FieldSpec::text("meeting_time", "Meeting time")
                        .placeholder("Thursdays 7pm"),
                    FieldSpec::text("contact_email", "Contact email").hint(KeyboardHint::Email),
                    FieldSpec::text("website_url", "Website").hint(KeyboardHint::Url),
                    FieldSpec::text("instagram_handle", "Instagram handle"),
                    FieldSpec::text("discord_link", "Discord link").hint(KeyboardHint::Url),
                    FieldSpec::toggle("is_active", "Active"),
                    FieldSpec::text("user_email", "Your email").hint(KeyboardHint::Email),
                    FieldSpec::text("user_password", "Your password").secret(),
                ],
                ["name", "contact_email", "user_email", "user_password"],
            ),
            ScreenKind::ForgotPassword => FormSchema::new(
                vec![FieldSpec::text("email", "Email")
                    .placeholder("you@rpi.edu")
                    .hint(KeyboardHint::Email)],
                ["email"],
            ),
            ScreenKind::CreatePost => FormSchema::new(
                vec![
                    FieldSpec::text("club_name", "Club"),
                    FieldSpec::text("title", "Title"),
                    FieldSpec::text("description", "Description"),
                ],
                ["club_name", "title"],
            ),
            ScreenKind::Feed => Err(Error::config("the feed screen has no form")),
        }
    }
}

impl std::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|screen| screen.as_str() == normalized)
            .ok_or_else(|| Error::config_invalid(format!("unknown screen '{}'", s)))
    }
}

/// Submission behaviour of one form screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPolicy {
    pub endpoint: Endpoint,
    /// Text fields whose surrounding whitespace is removed before sending
    pub trimmed: &'static [&'static str],
    /// Whether a media reference may be attached
    pub accepts_media: bool,
    /// Screen to show after a successful submission
    pub on_success: ScreenKind,
    pub success_message: &'static str,
    /// Server statuses reported as bad credentials
    pub credential_failure_statuses: &'static [u16],
}

impl ScreenPolicy {
    pub fn is_trimmed(&self, key: &str) -> bool {
        self.trimmed.contains(&key)
    }

    /// The one user-facing message for an outcome on this screen.
    pub fn describe(&self, result: &SubmissionResult) -> String {
        match result {
            SubmissionResult::Success { .. } => self.success_message.to_string(),
            SubmissionResult::ServerFailure { status, .. }
                if self.credential_failure_statuses.contains(status) =>
            {
                "Invalid email or password".to_string()
            }
            other => other.message(),
        }
    }
}
