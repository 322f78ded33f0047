//! Submission pipeline
//!
//! - `phase`: pipeline state machine phases
//! - `validate`: required-field and number checks
//! - `body`: JSON / multipart request bodies
//! - `attempt`: one validated snapshot and its execution
//! - `session`: the per-screen owner of form state and media

pub mod attempt;
pub mod body;
pub mod phase;
pub mod session;
pub mod validate;

pub use attempt::{next_attempt_id, AttemptId, SubmissionAttempt};
pub use body::build_request;
pub use phase::SubmissionPhase;
pub use session::{FormSession, SubmitStart};
pub use validate::validate;
