//! Backend endpoint table.

use serde::{Deserialize, Serialize};

/// HTTP method used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Every backend route the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Authenticate a user: `{email, password}`
    CheckUser,
    /// Register a user
    CreateUser,
    /// Register a club together with the owning user's credentials
    CreateClub,
    /// Request a password reset link
    ForgotPassword,
    /// Create a post, optionally with media
    CreatePost,
    /// Latest ten posts
    ListPosts,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListPosts => Method::Get,
            _ => Method::Post,
        }
    }

    /// Path relative to the configured base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::CheckUser => "/check_user",
            Endpoint::CreateUser => "/users",
            Endpoint::CreateClub => "/clubs",
            Endpoint::ForgotPassword => "/forgot_password",
            Endpoint::CreatePost => "/posts",
            Endpoint::ListPosts => "/10posts",
        }
    }

    /// Get a human-readable description for logging
    pub fn description(&self) -> &'static str {
        match self {
            Endpoint::CheckUser => "authenticate user",
            Endpoint::CreateUser => "register user",
            Endpoint::CreateClub => "register club",
            Endpoint::ForgotPassword => "request password reset",
            Endpoint::CreatePost => "create post",
            Endpoint::ListPosts => "list posts",
        }
    }
}
