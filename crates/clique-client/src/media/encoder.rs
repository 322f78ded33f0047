//! Media encoding for request bodies.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use clique_core::prelude::*;
use clique_core::{MediaKind, MediaReference};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::source::MediaSource;
use crate::request::MultipartPart;

/// JSON key carrying base64 image data
pub const IMAGE_DATA_KEY: &str = "image_data";

/// JSON key carrying base64 video data
pub const VIDEO_DATA_KEY: &str = "video_data";

/// Multipart part name for the media file
pub const MEDIA_PART_NAME: &str = "media";

/// How media, and therefore the whole body, is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaEncoding {
    /// JSON body with base64 `image_data`/`video_data`
    #[default]
    Base64,
    /// `multipart/form-data` body with a binary `media` part
    Multipart,
}

impl std::fmt::Display for MediaEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaEncoding::Base64 => write!(f, "base64"),
            MediaEncoding::Multipart => write!(f, "multipart"),
        }
    }
}

/// Media ready to be placed in a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedMedia {
    Base64 {
        kind: MediaKind,
        data: String,
    },
    File {
        kind: MediaKind,
        bytes: Vec<u8>,
        file_name: String,
        content_type: String,
    },
}

impl EncodedMedia {
    pub fn kind(&self) -> MediaKind {
        match self {
            EncodedMedia::Base64 { kind, .. } | EncodedMedia::File { kind, .. } => *kind,
        }
    }

    /// Write both media keys into a JSON body: the matching one carries
    /// the data, the other is `null`.
    pub fn write_json(&self, body: &mut Map<String, Value>) {
        write_empty_media(body);
        if let EncodedMedia::Base64 { kind, data } = self {
            let key = match kind {
                MediaKind::Video => VIDEO_DATA_KEY,
                _ => IMAGE_DATA_KEY,
            };
            body.insert(key.to_string(), Value::String(data.clone()));
        }
    }

    /// The binary `media` part, if this is file-encoded media.
    pub fn to_part(&self) -> Option<MultipartPart> {
        match self {
            EncodedMedia::File {
                bytes,
                file_name,
                content_type,
                ..
            } => Some(MultipartPart::file(
                MEDIA_PART_NAME,
                bytes.clone(),
                file_name.clone(),
                content_type.clone(),
            )),
            EncodedMedia::Base64 { .. } => None,
        }
    }
}

/// Set both media keys to `null`.
pub fn write_empty_media(body: &mut Map<String, Value>) {
    body.insert(IMAGE_DATA_KEY.to_string(), Value::Null);
    body.insert(VIDEO_DATA_KEY.to_string(), Value::Null);
}

/// Reads media through a [`MediaSource`] and encodes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaEncoder {
    encoding: MediaEncoding,
}

impl MediaEncoder {
    pub fn new(encoding: MediaEncoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> MediaEncoding {
        self.encoding
    }

    /// Returns `Ok(None)` for references of kind `None`. Read failures
    /// surface as [`Error::Encode`].
    pub async fn encode<S: MediaSource>(
        &self,
        source: &S,
        media: &MediaReference,
    ) -> Result<Option<EncodedMedia>> {
        if !media.has_media() {
            return Ok(None);
        }

        let blob = source.read(media).await?;
        debug!(
            "Encoding {} bytes of {} as {}",
            blob.bytes.len(),
            media.kind,
            self.encoding
        );

        let encoded = match self.encoding {
            MediaEncoding::Base64 => EncodedMedia::Base64 {
                kind: media.kind,
                data: STANDARD.encode(&blob.bytes),
            },
            MediaEncoding::Multipart => EncodedMedia::File {
                kind: media.kind,
                file_name: media.file_name().to_string(),
                content_type: blob
                    .content_type
                    .unwrap_or_else(|| fallback_content_type(media.kind).to_string()),
                bytes: blob.bytes,
            },
        };
        Ok(Some(encoded))
    }
}

fn fallback_content_type(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "video/mp4",
        MediaKind::Image => "image/jpeg",
        MediaKind::None => "application/octet-stream",
    }
}
