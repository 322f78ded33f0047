//! One-shot submissions without a terminal

use clique_client::{MediaSource, Transport};
use clique_core::prelude::*;
use clique_core::{FieldKind, FieldValue, MediaReference, SubmissionResult};

use crate::backend::Backend;
use crate::screens::ScreenKind;
use crate::submission::FormSession;

/// Parse a command-line value for a field of the given kind.
pub fn parse_field_value(key: &str, kind: FieldKind, raw: &str) -> Result<FieldValue> {
    match kind {
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Number => Ok(FieldValue::Number(raw.to_string())),
        FieldKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(FieldValue::Bool(true)),
            "false" | "no" | "0" | "off" => Ok(FieldValue::Bool(false)),
            _ => Err(Error::field_kind_mismatch(key, FieldKind::Bool.name())),
        },
    }
}

/// Split `key=value`. The value may itself contain `=`.
pub fn parse_assignment(arg: &str) -> Result<(String, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| Error::config_invalid(format!("expected key=value, got '{}'", arg)))?;
    Ok((key.trim().to_string(), value.to_string()))
}

/// Mount `screen`, fill it, attach media and submit once.
///
/// Wiring errors (unknown keys, bad booleans, media on a screen without
/// media) are returned as `Err`; every submission outcome is `Ok`.
pub async fn submit_once<T, S>(
    backend: &Backend<T, S>,
    screen: ScreenKind,
    fields: &[(String, String)],
    media: Option<MediaReference>,
) -> Result<SubmissionResult>
where
    T: Transport + Sync,
    S: MediaSource + Sync,
{
    let mut session = FormSession::new(screen)?;

    for (key, raw) in fields {
        let kind = session
            .schema()
            .field(key)
            .map(|spec| spec.kind)
            .ok_or_else(|| Error::unknown_field(key))?;
        session.edit(key, parse_field_value(key, kind, raw)?)?;
    }

    if let Some(media) = media {
        session.attach_media(media)?;
    }

    let result = session
        .submit(backend)
        .await
        .ok_or_else(|| Error::config("a submission is already in progress"))?;
    info!("Headless {} submission: {:?}", screen, result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clique_client::test_utils::{RecordingTransport, StaticMediaSource};
    use clique_client::MediaEncoder;
    use serde_json::json;

    fn backend(transport: RecordingTransport) -> Backend<RecordingTransport, StaticMediaSource> {
        Backend::new(transport, StaticMediaSource::new(), MediaEncoder::default())
    }

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("website_url=https://x.org/?a=b").unwrap(),
            ("website_url".to_string(), "https://x.org/?a=b".to_string())
        );
        assert!(parse_assignment("title").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(
            parse_field_value("is_active", FieldKind::Bool, "yes").unwrap(),
            FieldValue::Bool(true)
        );
        assert!(parse_field_value("is_active", FieldKind::Bool, "maybe").is_err());
    }

    #[tokio::test]
    async fn test_club_signup_body() {
        let backend = backend(RecordingTransport::new().respond_with(200, "{}"));
        let result = submit_once(
            &backend,
            ScreenKind::ClubSignup,
            &fields(&[
                ("name", "Chess Club"),
                ("contact_email", "chess@rpi.edu"),
                ("user_email", "me@rpi.edu"),
                ("user_password", "pw"),
                ("is_active", "true"),
            ]),
            None,
        )
        .await
        .unwrap();

        assert!(result.is_success());
        let body = backend.transport.last_request().unwrap().body;
        let body = body.as_json().unwrap();
        assert_eq!(body["name"], json!("Chess Club"));
        assert_eq!(body["is_active"], json!(true));
        assert_eq!(body["logo_url"], json!(""));
    }

    #[tokio::test]
    async fn test_unknown_field_is_error() {
        let backend = backend(RecordingTransport::new());
        let err = submit_once(
            &backend,
            ScreenKind::Login,
            &fields(&[("username", "x")]),
            None,
        )
        .await
        .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(backend.transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_validation_failure_is_ok_outcome() {
        let backend = backend(RecordingTransport::new());
        let result = submit_once(&backend, ScreenKind::Login, &[], None)
            .await
            .unwrap();
        assert_eq!(result, SubmissionResult::required("email"));
    }
}
