//! Request body serialization

use clique_client::media::write_empty_media;
use clique_client::{ApiRequest, EncodedMedia, MediaEncoding, MultipartPart};
use clique_core::{FieldValue, FormSchema, FormState};
use serde_json::{Map, Value};

use crate::screens::ScreenPolicy;

/// Build the request for a validated form snapshot.
///
/// Screens that accept media use a multipart body when `encoding` is
/// [`MediaEncoding::Multipart`]; every other request is JSON.
pub fn build_request(
    policy: &ScreenPolicy,
    schema: &FormSchema,
    state: &FormState,
    media: Option<&EncodedMedia>,
    encoding: MediaEncoding,
) -> ApiRequest {
    if policy.accepts_media && encoding == MediaEncoding::Multipart {
        ApiRequest::multipart(policy.endpoint, multipart_parts(policy, schema, state, media))
    } else {
        ApiRequest::json(policy.endpoint, json_body(policy, schema, state, media))
    }
}

/// One JSON member per schema field, plus `image_data`/`video_data` on
/// media screens.
pub fn json_body(
    policy: &ScreenPolicy,
    schema: &FormSchema,
    state: &FormState,
    media: Option<&EncodedMedia>,
) -> Value {
    let mut body = Map::new();
    for spec in schema.fields() {
        let value = state
            .get(&spec.key)
            .cloned()
            .unwrap_or_else(|| spec.kind.default_value());
        body.insert(spec.key.clone(), json_value(policy, &spec.key, value));
    }

    if policy.accepts_media {
        match media {
            Some(encoded) => encoded.write_json(&mut body),
            None => write_empty_media(&mut body),
        }
    }

    Value::Object(body)
}

fn json_value(policy: &ScreenPolicy, key: &str, value: FieldValue) -> Value {
    match value {
        FieldValue::Text(text) if policy.is_trimmed(key) => Value::String(text.trim().to_string()),
        FieldValue::Text(text) => Value::String(text),
        FieldValue::Bool(b) => Value::Bool(b),
        FieldValue::Number(text) => {
            let text = text.trim();
            if text.is_empty() {
                Value::Null
            } else {
                text.parse::<i64>()
                    .map(Value::from)
                    .unwrap_or_else(|_| Value::String(text.to_string()))
            }
        }
    }
}

fn multipart_parts(
    policy: &ScreenPolicy,
    schema: &FormSchema,
    state: &FormState,
    media: Option<&EncodedMedia>,
) -> Vec<MultipartPart> {
    let mut parts: Vec<MultipartPart> = schema
        .fields()
        .iter()
        .filter_map(|spec| {
            let text = match state.get(&spec.key)? {
                FieldValue::Text(text) if policy.is_trimmed(&spec.key) => text.trim().to_string(),
                FieldValue::Text(text) => text.clone(),
                FieldValue::Bool(b) => b.to_string(),
                FieldValue::Number(text) if text.trim().is_empty() => return None,
                FieldValue::Number(text) => text.trim().to_string(),
            };
            Some(MultipartPart::text(&spec.key, text))
        })
        .collect();

    parts.extend(media.and_then(EncodedMedia::to_part));
    parts
}
