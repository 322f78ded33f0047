//! Outcome of one submission attempt.

use serde::Serialize;

use crate::error::Error;

/// Reason attached to a blank required field.
pub const REASON_REQUIRED: &str = "required";

/// Reason attached to a number field whose text is not an integer.
pub const REASON_INVALID_NUMBER: &str = "invalid number";

/// Server message used when a response body could not be parsed.
pub const MALFORMED_RESPONSE: &str = "Malformed server response";

/// Network failure detail used when media could not be encoded.
pub const MEDIA_ENCODE_ERROR: &str = "media-encode-error";

/// Tagged outcome produced exactly once per submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionResult {
    /// 2xx response, with the parsed body when it was JSON
    Success { payload: Option<serde_json::Value> },
    /// A field failed local validation; nothing was sent
    ValidationFailure { field: String, reason: String },
    /// No response was obtained
    NetworkFailure { detail: String },
    /// The server answered with a non-2xx status
    ServerFailure { status: u16, messages: Vec<String> },
}

impl SubmissionResult {
    pub fn success(payload: Option<serde_json::Value>) -> Self {
        Self::Success { payload }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailure {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        Self::validation(field, REASON_REQUIRED)
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::NetworkFailure {
            detail: detail.into(),
        }
    }

    pub fn media_encode_error() -> Self {
        Self::network(MEDIA_ENCODE_ERROR)
    }

    pub fn server(status: u16, messages: Vec<String>) -> Self {
        Self::ServerFailure { status, messages }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The single human-readable message for this outcome.
    pub fn message(&self) -> String {
        match self {
            Self::Success { .. } => "Submitted successfully".to_string(),
            Self::ValidationFailure { field, reason } if reason == REASON_REQUIRED => {
                format!("Please enter a {}", humanize_key(field))
            }
            Self::ValidationFailure { field, reason } => {
                format!("{}: {}", humanize_key(field), reason)
            }
            Self::NetworkFailure { detail } if detail == MEDIA_ENCODE_ERROR => {
                "Error processing media. Please try again.".to_string()
            }
            Self::NetworkFailure { detail } => format!("Network error: {}", detail),
            Self::ServerFailure { status, messages } if messages.is_empty() => {
                format!("Unexpected error: {}", status)
            }
            Self::ServerFailure { messages, .. } => messages.join("\n"),
        }
    }
}

impl From<Error> for SubmissionResult {
    /// Map transport-level errors. Encode failures keep their fixed detail.
    ///
    /// A body that failed to parse came from a response, so it is a server
    /// failure; its status is not known here and is reported as 0.
    fn from(err: Error) -> Self {
        match err {
            Error::Encode { .. } => Self::media_encode_error(),
            Error::Server { status, message } => Self::server(status, vec![message]),
            Error::Network { message } => Self::network(message),
            Error::Json(_) => Self::server(0, vec![MALFORMED_RESPONSE.to_string()]),
            other => Self::network(other.to_string()),
        }
    }
}

/// `club_name` → `club name`
fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message() {
        let result = SubmissionResult::required("title");
        assert_eq!(result.message(), "Please enter a title");
        assert!(result.is_failure());
    }

    #[test]
    fn test_server_messages_joined_by_newline() {
        let result = SubmissionResult::server(
            422,
            vec!["bad email".to_string(), "weak password".to_string()],
        );
        assert_eq!(result.message(), "bad email\nweak password");
    }

    #[test]
    fn test_server_without_messages_mentions_status() {
        let result = SubmissionResult::server(500, vec![]);
        assert_eq!(result.message(), "Unexpected error: 500");
    }

    #[test]
    fn test_json_error_is_malformed_response() {
        let parse_err = serde_json::from_str::<Vec<u8>>(r#"{"oops": true}"#).unwrap_err();
        let result = SubmissionResult::from(Error::from(parse_err));
        assert!(matches!(result, SubmissionResult::ServerFailure { .. }));
        assert_eq!(result.message(), "Malformed server response");
    }

    #[test]
    fn test_encode_error_maps_to_media_detail() {
        let result: SubmissionResult = Error::encode("dangling handle").into();
        assert_eq!(result, SubmissionResult::network(MEDIA_ENCODE_ERROR));
        assert_eq!(result.message(), "Error processing media. Please try again.");
    }

    #[test]
    fn test_network_error_maps_to_network_failure() {
        let result: SubmissionResult = Error::network("connection refused").into();
        assert_eq!(result, SubmissionResult::network("connection refused"));
    }

    #[test]
    fn test_serializes_with_outcome_tag() {
        let json = serde_json::to_value(SubmissionResult::required("email")).unwrap();
        assert_eq!(json["outcome"], "validation_failure");
        assert_eq!(json["field"], "email");
        assert_eq!(json["reason"], "required");
    }
}
