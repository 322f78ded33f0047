//! Feed retrieval

use clique_core::prelude::*;
use clique_core::{Post, MALFORMED_RESPONSE};

use crate::endpoints::Endpoint;
use crate::request::ApiRequest;
use crate::response::error_messages;
use crate::transport::Transport;

/// Fetch the latest posts from `GET /10posts`.
pub async fn fetch_posts<T: Transport>(transport: &T) -> Result<Vec<Post>> {
    let response = transport.send(ApiRequest::new(Endpoint::ListPosts)).await?;

    if !response.is_success() {
        let messages = error_messages(&response);
        let message = if messages.is_empty() {
            format!("Unexpected error: {}", response.status)
        } else {
            messages.join("\n")
        };
        return Err(Error::server(response.status, message));
    }

    let posts: Vec<Post> = serde_json::from_slice(&response.body).map_err(|e| {
        warn!("Unreadable feed body ({}): {}", response.status, e);
        Error::server(response.status, MALFORMED_RESPONSE)
    })?;
    debug!("Fetched {} posts", posts.len());
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingTransport;
    use clique_core::SubmissionResult;

    #[tokio::test]
    async fn test_fetch_posts_parses_list() {
        let transport = RecordingTransport::new().respond_with(
            200,
            r#"[{"title": "Open mic", "cid": "Music"}, {"title": "Hackathon"}]"#,
        );

        let posts = fetch_posts(&transport).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].club_name.as_deref(), Some("Music"));
        assert_eq!(transport.requests()[0].endpoint, Endpoint::ListPosts);
    }

    #[tokio::test]
    async fn test_fetch_posts_server_error() {
        let transport =
            RecordingTransport::new().respond_with(500, r#"{"detail": "database offline"}"#);

        let err = fetch_posts(&transport).await.unwrap_err();
        match err {
            Error::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database offline");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_posts_malformed_body() {
        let transport = RecordingTransport::new().respond_with(200, r#"{"oops": true}"#);

        let err = fetch_posts(&transport).await.unwrap_err();
        assert!(matches!(err, Error::Server { status: 200, .. }));
        assert_eq!(
            SubmissionResult::from(err).message(),
            "Malformed server response"
        );
    }

    #[tokio::test]
    async fn test_fetch_posts_naive_timestamps() {
        let transport = RecordingTransport::new().respond_with(
            200,
            r#"[{"pid": "0000001", "cid": "0000002", "title": "Tournament", "created_at": "2024-11-02T18:30:00.123456"}]"#,
        );

        let posts = fetch_posts(&transport).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].created_at.is_some());
    }

    #[tokio::test]
    async fn test_fetch_posts_network_error_propagates() {
        let transport = RecordingTransport::new().fail_with(Error::network("connection refused"));
        let err = fetch_posts(&transport).await.unwrap_err();
        assert!(matches!(err, Error::Network { .. }));
    }
}
