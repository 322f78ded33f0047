//! Form session: one mounted form screen and its submission pipeline

use clique_client::{MediaSource, Transport};
use clique_core::prelude::*;
use clique_core::{FieldDescriptor, FieldValue, FormSchema, FormState, MediaReference, SubmissionResult};

use super::attempt::{next_attempt_id, AttemptId, SubmissionAttempt};
use super::phase::SubmissionPhase;
use super::validate::validate;
use crate::backend::Backend;
use crate::screens::{ScreenKind, ScreenPolicy};

/// What happened when a submit was requested
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart {
    /// An attempt is already in flight
    Busy,
    /// Local validation failed; the session is now `Failed`
    Invalid(SubmissionResult),
    /// Validation passed; run the attempt and report back with [`FormSession::complete`]
    Started(SubmissionAttempt),
}

/// State owned by one mounted form screen.
///
/// Dropping the session discards its state.
#[derive(Debug, Clone)]
pub struct FormSession {
    screen: ScreenKind,
    policy: ScreenPolicy,
    schema: FormSchema,
    state: FormState,
    media: Option<MediaReference>,
    phase: SubmissionPhase,
    focus: usize,
    current_attempt: Option<AttemptId>,
    last_outcome: Option<SubmissionResult>,
}

impl FormSession {
    /// Mount a form screen with default values.
    pub fn new(screen: ScreenKind) -> Result<Self> {
        let policy = screen
            .policy()
            .ok_or_else(|| Error::config(format!("{} is not a form screen", screen)))?;
        let schema = screen.schema()?;
        let state = schema.initialize();
        Ok(Self {
            screen,
            policy,
            schema,
            state,
            media: None,
            phase: SubmissionPhase::Idle,
            focus: 0,
            current_attempt: None,
            last_outcome: None,
        })
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn screen(&self) -> ScreenKind {
        self.screen
    }

    pub fn policy(&self) -> &ScreenPolicy {
        &self.policy
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn media(&self) -> Option<&MediaReference> {
        self.media.as_ref()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    pub fn current_attempt(&self) -> Option<AttemptId> {
        self.current_attempt
    }

    pub fn last_outcome(&self) -> Option<&SubmissionResult> {
        self.last_outcome.as_ref()
    }

    /// Descriptors for the current values, rebuilt on every call.
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.schema.descriptors(&self.state)
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    /// Set one field. Unknown keys and wrong kinds are wiring errors.
    pub fn edit(&mut self, key: &str, value: FieldValue) -> Result<()> {
        self.state = self.state.update(key, value)?;
        Ok(())
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_descriptor(&self) -> Option<FieldDescriptor> {
        self.descriptors().into_iter().nth(self.focus)
    }

    pub fn focus_next(&mut self) {
        let len = self.schema.len();
        if len > 0 {
            self.focus = (self.focus + 1) % len;
        }
    }

    pub fn focus_prev(&mut self) {
        let len = self.schema.len();
        if len > 0 {
            self.focus = (self.focus + len - 1) % len;
        }
    }

    /// Attach media. Rejected on screens that do not take media.
    pub fn attach_media(&mut self, media: MediaReference) -> Result<()> {
        if !self.policy.accepts_media {
            return Err(Error::config(format!(
                "{} does not accept media",
                self.screen
            )));
        }
        debug!("Attached {} media {}", media.kind, media.local_uri);
        self.media = Some(media);
        Ok(())
    }

    pub fn clear_media(&mut self) {
        self.media = None;
    }

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────

    /// Start an attempt from the current values.
    ///
    /// Ignored while another attempt is in flight. Validation runs here
    /// against a snapshot; failures complete immediately without any I/O.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.phase.is_busy() {
            debug!("Submit ignored on {}: {:?} in progress", self.screen, self.phase);
            return SubmitStart::Busy;
        }

        self.phase = SubmissionPhase::Validating;
        let snapshot = self.state.clone();

        if let Err(failure) = validate(&self.schema, &snapshot) {
            debug!("Validation failed on {}: {:?}", self.screen, failure);
            self.phase = SubmissionPhase::Failed;
            self.current_attempt = None;
            self.last_outcome = Some(failure.clone());
            return SubmitStart::Invalid(failure);
        }

        let attempt = SubmissionAttempt {
            id: next_attempt_id(),
            screen: self.screen,
            policy: self.policy,
            schema: self.schema.clone(),
            state: snapshot,
            media: self.media.clone(),
        };
        self.phase = attempt.first_phase();
        self.current_attempt = Some(attempt.id);
        debug!("Attempt {} started on {}", attempt.id, self.screen);
        SubmitStart::Started(attempt)
    }

    /// Record progress of the current attempt. Stale ids are ignored.
    pub fn advance(&mut self, attempt: AttemptId, phase: SubmissionPhase) -> bool {
        if self.current_attempt != Some(attempt) || !phase.is_busy() {
            return false;
        }
        self.phase = phase;
        true
    }

    /// Apply the outcome of the current attempt.
    ///
    /// Success resets values to their defaults and clears media; failure
    /// leaves both untouched. Returns `false` for stale attempts.
    pub fn complete(&mut self, attempt: AttemptId, result: SubmissionResult) -> bool {
        if self.current_attempt != Some(attempt) {
            debug!("Ignoring completion of stale attempt {}", attempt);
            return false;
        }

        self.current_attempt = None;
        if result.is_success() {
            self.phase = SubmissionPhase::Succeeded;
            self.state = self.state.reset();
            self.media = None;
            self.focus = 0;
        } else {
            self.phase = SubmissionPhase::Failed;
        }
        debug!("Attempt {} finished: {:?}", attempt, self.phase);
        self.last_outcome = Some(result);
        true
    }

    /// Run a whole submission inline. Returns `None` if an attempt was
    /// already in flight.
    pub async fn submit<T, S>(&mut self, backend: &Backend<T, S>) -> Option<SubmissionResult>
    where
        T: Transport + Sync,
        S: MediaSource + Sync,
    {
        let attempt = match self.begin_submit() {
            SubmitStart::Busy => return None,
            SubmitStart::Invalid(failure) => return Some(failure),
            SubmitStart::Started(attempt) => attempt,
        };

        let result = attempt.execute(backend, |_| {}).await;
        self.complete(attempt.id, result.clone());
        Some(result)
    }
}
