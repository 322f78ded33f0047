//! Platform-specific readers that resolve a media handle to bytes.

use std::path::PathBuf;

use clique_core::prelude::*;
use clique_core::MediaReference;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

/// Bytes read from a media handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlob {
    pub bytes: Vec<u8>,
    /// Content type reported by the platform, if any
    pub content_type: Option<String>,
}

impl MediaBlob {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Resolves a [`MediaReference`] handle to its bytes.
///
/// Any failure to resolve is reported as [`Error::Encode`].
#[trait_variant::make(MediaSource: Send)]
pub trait LocalMediaSource {
    async fn read(&self, media: &MediaReference) -> Result<MediaBlob>;
}

/// Which platform reader to use for media handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaPlatform {
    /// Handles are filesystem paths or `file://` URIs
    #[default]
    Native,
    /// Handles are fetchable URLs (object or data URLs behind an HTTP origin)
    Web,
}

impl std::fmt::Display for MediaPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaPlatform::Native => write!(f, "native"),
            MediaPlatform::Web => write!(f, "web"),
        }
    }
}

/// Reads media from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct NativeMediaSource;

impl NativeMediaSource {
    /// Filesystem path for a handle, stripping a `file://` scheme.
    pub fn path_for(local_uri: &str) -> PathBuf {
        PathBuf::from(local_uri.strip_prefix("file://").unwrap_or(local_uri))
    }
}

impl MediaSource for NativeMediaSource {
    async fn read(&self, media: &MediaReference) -> Result<MediaBlob> {
        let path = Self::path_for(&media.local_uri);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| Error::encode(format!("cannot read {}: {}", path.display(), e)))?;

        let content_type = media.content_type.clone().or_else(|| {
            mime_guess::from_path(&path)
                .first()
                .map(|m| m.essence_str().to_string())
        });

        trace!("Read {} bytes of media from {}", bytes.len(), path.display());
        Ok(MediaBlob {
            bytes,
            content_type,
        })
    }
}

/// Fetches media over HTTP, the way a browser resolves an object URL.
#[derive(Debug, Clone, Default)]
pub struct WebMediaSource {
    client: reqwest::Client,
}

impl WebMediaSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl MediaSource for WebMediaSource {
    async fn read(&self, media: &MediaReference) -> Result<MediaBlob> {
        let response = self
            .client
            .get(&media.local_uri)
            .send()
            .await
            .map_err(|e| Error::encode(format!("cannot fetch {}: {}", media.local_uri, e)))?;

        if !response.status().is_success() {
            return Err(Error::encode(format!(
                "fetching {} returned {}",
                media.local_uri,
                response.status()
            )));
        }

        let reported = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::encode(format!("cannot read {}: {}", media.local_uri, e)))?;

        Ok(MediaBlob {
            bytes: bytes.to_vec(),
            content_type: media.content_type.clone().or(reported),
        })
    }
}

/// Media source selected at startup from configuration.
#[derive(Debug, Clone)]
pub enum PlatformMediaSource {
    Native(NativeMediaSource),
    Web(WebMediaSource),
}

impl PlatformMediaSource {
    pub fn for_platform(platform: MediaPlatform) -> Self {
        match platform {
            MediaPlatform::Native => Self::Native(NativeMediaSource),
            MediaPlatform::Web => Self::Web(WebMediaSource::default()),
        }
    }
}

impl Default for PlatformMediaSource {
    fn default() -> Self {
        Self::Native(NativeMediaSource)
    }
}

impl MediaSource for PlatformMediaSource {
    async fn read(&self, media: &MediaReference) -> Result<MediaBlob> {
        match self {
            Self::Native(source) => MediaSource::read(source, media).await,
            Self::Web(source) => MediaSource::read(source, media).await,
        }
    }
}
