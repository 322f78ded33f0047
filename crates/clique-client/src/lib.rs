//! # clique-client - Backend and Media Layer
//!
//! Everything that leaves the process: the HTTP transport to the Clique
//! backend, the endpoint table, response mapping onto
//! [`clique_core::SubmissionResult`], and platform media readers with
//! base64 or multipart encoding.
//!
//! ## Public API
//!
//! ### Transport
//! - [`Transport`] - Send an [`ApiRequest`], get an [`ApiResponse`]
//! - [`HttpTransport`] - reqwest implementation rooted at a base URL
//! - [`Endpoint`] - Backend routes with their method and path
//!
//! ### Responses
//! - [`map_response()`] - Status + body to `SubmissionResult`
//! - [`fetch_posts()`] - Latest posts for the feed
//!
//! ### Media
//! - [`MediaSource`] - Resolve a media handle to bytes
//! - [`NativeMediaSource`], [`WebMediaSource`], [`PlatformMediaSource`]
//! - [`MediaEncoder`] - Base64 or multipart encoding
//!
//! ### Test Utilities (feature `test-helpers`)
//! - `test_utils::RecordingTransport`, `test_utils::StaticMediaSource`

pub mod endpoints;
pub mod feed;
pub mod media;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use endpoints::{Endpoint, Method};
pub use feed::fetch_posts;
pub use media::{
    EncodedMedia, MediaBlob, MediaEncoder, MediaEncoding, MediaPlatform, MediaSource,
    NativeMediaSource, PlatformMediaSource, WebMediaSource,
};
pub use request::{ApiRequest, ApiResponse, MultipartPart, PartContent, RequestBody};
pub use response::{error_messages, map_response};
pub use transport::{HttpTransport, Transport, DEFAULT_TIMEOUT};
