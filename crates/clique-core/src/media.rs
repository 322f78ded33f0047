//! Media references selected by the user before a submission.

use serde::{Deserialize, Serialize};

/// What a selected media file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    #[default]
    None,
}

impl MediaKind {
    /// Classify a MIME type. Returns `None` for anything that is neither
    /// an image nor a video.
    pub fn from_content_type(content_type: &str) -> Option<MediaKind> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if essence.starts_with("image/") {
            Some(MediaKind::Image)
        } else if essence.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Classify from the extension of a path or URI.
    pub fn from_extension(uri: &str) -> Option<MediaKind> {
        let name = uri.rsplit('/').next().unwrap_or(uri);
        if !name.contains('.') {
            return None;
        }
        mime_guess::from_path(name)
            .first()
            .and_then(|mime| Self::from_content_type(mime.essence_str()))
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
            MediaKind::None => write!(f, "none"),
        }
    }
}

/// Opaque handle to a user-selected file plus its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReference {
    /// Platform handle: a path, `file://` URI, or fetchable URL
    pub local_uri: String,
    pub kind: MediaKind,
    /// Content type declared by whoever selected the file, if any
    #[serde(default)]
    pub content_type: Option<String>,
}

impl MediaReference {
    /// Reference with a caller-supplied kind. Preferred over inference.
    pub fn with_kind(local_uri: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            local_uri: local_uri.into(),
            kind,
            content_type: None,
        }
    }

    /// Reference whose kind is inferred from the declared content type,
    /// then the file extension, defaulting to an image.
    pub fn infer(local_uri: impl Into<String>, content_type: Option<String>) -> Self {
        let local_uri = local_uri.into();
        let kind = content_type
            .as_deref()
            .and_then(MediaKind::from_content_type)
            .or_else(|| MediaKind::from_extension(&local_uri))
            .unwrap_or_else(|| {
                tracing::warn!(
                    "Could not determine media kind for {}, assuming image",
                    local_uri
                );
                MediaKind::Image
            });
        Self {
            local_uri,
            kind,
            content_type,
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Whether the pipeline should encode this reference at all.
    pub fn has_media(&self) -> bool {
        self.kind != MediaKind::None
    }

    /// Last path segment, used as the upload filename.
    pub fn file_name(&self) -> &str {
        self.local_uri
            .rsplit('/')
            .find(|s| !s.is_empty())
            .unwrap_or("media")
    }
}
