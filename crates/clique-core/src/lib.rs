//! # clique-core - Core Domain Types
//!
//! Foundation crate for Clique. Provides the declarative form model, the
//! submission outcome type, media references, feed types, error handling
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, mime_guess).
//!
//! ## Public API
//!
//! ### Form Model (`form`)
//! - [`FieldSpec`] - Static description of one input (key, label, hint, secrecy, kind)
//! - [`FieldDescriptor`] - A spec paired with its current value, built per render
//! - [`FormSchema`] - Ordered field list plus required-field policy
//! - [`FormState`] - Per-screen value container with single-key updates
//!
//! ### Outcomes (`outcome`)
//! - [`SubmissionResult`] - Success / validation / network / server outcome
//!
//! ### Media (`media`)
//! - [`MediaReference`], [`MediaKind`] - User-selected file awaiting upload
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with configuration vs recoverable classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use clique_core::prelude::*;
//! ```

pub mod error;
pub mod feed;
pub mod form;
pub mod logging;
pub mod media;
pub mod outcome;

/// Prelude for common imports used throughout all Clique crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use feed::Post;
pub use form::{FieldDescriptor, FieldKind, FieldSpec, FieldValue, FormSchema, FormState, KeyboardHint};
pub use media::{MediaKind, MediaReference};
pub use outcome::{
    SubmissionResult, MALFORMED_RESPONSE, MEDIA_ENCODE_ERROR, REASON_INVALID_NUMBER,
    REASON_REQUIRED,
};
