//! A single submission attempt and its execution

use std::sync::atomic::{AtomicU64, Ordering};

use clique_client::{map_response, MediaSource, Transport};
use clique_core::prelude::*;
use clique_core::{FormSchema, FormState, MediaReference, SubmissionResult};

use super::body::build_request;
use super::phase::SubmissionPhase;
use crate::backend::Backend;
use crate::screens::{ScreenKind, ScreenPolicy};

/// Identifies one attempt across all form sessions
pub type AttemptId = u64;

static ATTEMPT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a new unique attempt ID
pub fn next_attempt_id() -> AttemptId {
    ATTEMPT_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Validated snapshot of a form taken when the attempt began.
///
/// Edits made after the snapshot do not affect the attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionAttempt {
    pub id: AttemptId,
    pub screen: ScreenKind,
    pub policy: ScreenPolicy,
    pub schema: FormSchema,
    pub state: FormState,
    pub media: Option<MediaReference>,
}

impl SubmissionAttempt {
    /// Phase entered once validation has passed
    pub fn first_phase(&self) -> SubmissionPhase {
        if self.encodes_media() {
            SubmissionPhase::Encoding
        } else {
            SubmissionPhase::Submitting
        }
    }

    fn encodes_media(&self) -> bool {
        self.policy.accepts_media && self.media.as_ref().is_some_and(MediaReference::has_media)
    }

    /// Encode media (if any), send exactly one request and map the outcome.
    ///
    /// `on_phase` is told about each phase as it is entered. Never retries.
    pub async fn execute<T, S, F>(&self, backend: &Backend<T, S>, mut on_phase: F) -> SubmissionResult
    where
        T: Transport + Sync,
        S: MediaSource + Sync,
        F: FnMut(SubmissionPhase) + Send,
    {
        let encoded = match self.media.as_ref().filter(|_| self.encodes_media()) {
            Some(media) => {
                on_phase(SubmissionPhase::Encoding);
                match backend.encoder.encode(&backend.media, media).await {
                    Ok(encoded) => encoded,
                    Err(e) => {
                        warn!("Attempt {}: media encoding failed: {}", self.id, e);
                        return SubmissionResult::media_encode_error();
                    }
                }
            }
            None => None,
        };

        on_phase(SubmissionPhase::Submitting);
        let request = build_request(
            &self.policy,
            &self.schema,
            &self.state,
            encoded.as_ref(),
            backend.encoder.encoding(),
        );
        debug!(
            "Attempt {}: sending {} request",
            self.id,
            self.policy.endpoint.description()
        );

        match backend.transport.send(request).await {
            Ok(response) => {
                let result = map_response(&response);
                if result.is_failure() {
                    warn!("Attempt {}: server returned {}", self.id, response.status);
                }
                result
            }
            Err(e) => {
                if e.is_recoverable() {
                    warn!("Attempt {}: {}", self.id, e);
                } else {
                    error!("Attempt {}: {}", self.id, e);
                }
                SubmissionResult::from(e)
            }
        }
    }
}
