//! Request and response values exchanged with a [`crate::Transport`].

use crate::endpoints::Endpoint;

/// One part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartContent {
    Text(String),
    File {
        bytes: Vec<u8>,
        file_name: String,
        content_type: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPart {
    pub name: String,
    pub content: PartContent,
}

impl MultipartPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: PartContent::Text(value.into()),
        }
    }

    pub fn file(
        name: impl Into<String>,
        bytes: Vec<u8>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: PartContent::File {
                bytes,
                file_name: file_name.into(),
                content_type: content_type.into(),
            },
        }
    }
}

/// Serialized request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Sent as `application/json`
    Json(serde_json::Value),
    /// Sent as `multipart/form-data`
    Multipart(Vec<MultipartPart>),
}

impl RequestBody {
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Json(_) => Some("application/json"),
            RequestBody::Multipart(_) => Some("multipart/form-data"),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            RequestBody::Json(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            body: RequestBody::Empty,
        }
    }

    pub fn json(endpoint: Endpoint, body: serde_json::Value) -> Self {
        Self {
            endpoint,
            body: RequestBody::Json(body),
        }
    }

    pub fn multipart(endpoint: Endpoint, parts: Vec<MultipartPart>) -> Self {
        Self {
            endpoint,
            body: RequestBody::Multipart(parts),
        }
    }
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body parsed as JSON, `None` when empty or not JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        serde_json::from_slice(&self.body).ok()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_range() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(199, "").is_success());
        assert!(!ApiResponse::new(400, "").is_success());
    }

    #[test]
    fn test_response_json() {
        assert_eq!(ApiResponse::new(200, "{}").json(), Some(json!({})));
        assert_eq!(ApiResponse::new(200, "  ").json(), None);
        assert_eq!(ApiResponse::new(200, "not json").json(), None);
    }

    #[test]
    fn test_body_content_types() {
        assert_eq!(RequestBody::Empty.content_type(), None);
        assert_eq!(
            RequestBody::Json(json!({})).content_type(),
            Some("application/json")
        );
        assert_eq!(
            RequestBody::Multipart(vec![]).content_type(),
            Some("multipart/form-data")
        );
    }
}
