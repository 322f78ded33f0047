//! Submission pipeline phases

use serde::Serialize;

/// `Idle → Validating → Encoding → Submitting → {Succeeded, Failed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Encoding,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// An attempt is in flight; further submits are ignored.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SubmissionPhase::Validating | SubmissionPhase::Encoding | SubmissionPhase::Submitting
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionPhase::Succeeded | SubmissionPhase::Failed)
    }

    /// Short label for status displays
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "",
            SubmissionPhase::Validating => "Validating…",
            SubmissionPhase::Encoding => "Processing media…",
            SubmissionPhase::Submitting => "Submitting…",
            SubmissionPhase::Succeeded => "Done",
            SubmissionPhase::Failed => "Failed",
        }
    }
}
