//! Backend capabilities shared by submission and feed tasks

use clique_client::{HttpTransport, MediaEncoder, MediaSource, PlatformMediaSource, Transport};
use clique_core::prelude::*;

use crate::config::Settings;

/// Transport, media source and encoder used by every background task.
///
/// Generic so tests can substitute scripted implementations.
#[derive(Debug)]
pub struct Backend<T, S> {
    pub transport: T,
    pub media: S,
    pub encoder: MediaEncoder,
}

impl<T: Transport, S: MediaSource> Backend<T, S> {
    pub fn new(transport: T, media: S, encoder: MediaEncoder) -> Self {
        Self {
            transport,
            media,
            encoder,
        }
    }
}

/// The production backend
pub type HttpBackend = Backend<HttpTransport, PlatformMediaSource>;

impl HttpBackend {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transport = HttpTransport::new(
            &settings.backend.base_url,
            settings.backend.request_timeout(),
        )?;
        info!(
            "Backend at {} (media: {} via {})",
            transport.base_url(),
            settings.media.encoding,
            settings.media.platform
        );
        Ok(Self::new(
            transport,
            PlatformMediaSource::for_platform(settings.media.platform),
            MediaEncoder::new(settings.media.encoding),
        ))
    }
}
