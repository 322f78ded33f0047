//! Mapping backend responses onto [`SubmissionResult`].

use clique_core::SubmissionResult;
use serde_json::Value;

use crate::request::ApiResponse;

/// 2xx becomes `Success` with the JSON body if any; everything else
/// becomes `ServerFailure` with the extracted error messages.
pub fn map_response(response: &ApiResponse) -> SubmissionResult {
    if response.is_success() {
        SubmissionResult::success(response.json())
    } else {
        SubmissionResult::server(response.status, error_messages(response))
    }
}

/// Extract error messages from an error body.
///
/// Understands `{"detail": "..."}`, `{"detail": [{"msg": "..."}, ...]}`
/// and `{"message": "..."}`. Non-JSON bodies are returned as trimmed text.
pub fn error_messages(response: &ApiResponse) -> Vec<String> {
    match response.json() {
        Some(Value::Object(map)) => {
            if let Some(detail) = map.get("detail") {
                detail_messages(detail)
            } else if let Some(Value::String(message)) = map.get("message") {
                vec![message.clone()]
            } else {
                vec![Value::Object(map).to_string()]
            }
        }
        Some(Value::String(text)) => vec![text],
        Some(other) => vec![other.to_string()],
        None => {
            let text = response.text();
            let text = text.trim();
            if text.is_empty() {
                Vec::new()
            } else {
                vec![text.to_string()]
            }
        }
    }
}

fn detail_messages(detail: &Value) -> Vec<String> {
    match detail {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                Value::Object(obj) => match obj.get("msg") {
                    Some(Value::String(msg)) => msg.clone(),
                    _ => item.to_string(),
                },
                other => other.to_string(),
            })
            .collect(),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}
