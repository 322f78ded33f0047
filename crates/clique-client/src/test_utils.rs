//! Test utilities for code that talks to the backend
//!
//! Provides a scripted [`Transport`] that records every request and a
//! [`MediaSource`] backed by an in-memory map.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use clique_core::prelude::*;
use clique_core::MediaReference;

use crate::media::source::{MediaBlob, MediaSource};
use crate::request::{ApiRequest, ApiResponse};
use crate::transport::Transport;

/// Transport that replays scripted responses in order.
///
/// When the script runs out every further call fails with a network error.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond_with(self, status: u16, body: &str) -> Self {
        self.push(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a transport-level failure.
    pub fn fail_with(self, error: Error) -> Self {
        self.push(Err(error));
        self
    }

    pub fn push(&self, response: Result<ApiResponse>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    /// Number of requests sent so far
    pub fn calls(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests().pop()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        let next = self
            .responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front());
        next.unwrap_or_else(|| Err(Error::network("no scripted response")))
    }
}

/// Media source resolving handles from a fixed map.
#[derive(Debug, Clone, Default)]
pub struct StaticMediaSource {
    blobs: HashMap<String, MediaBlob>,
}

impl StaticMediaSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, local_uri: impl Into<String>, blob: MediaBlob) -> Self {
        self.blobs.insert(local_uri.into(), blob);
        self
    }
}

impl MediaSource for StaticMediaSource {
    async fn read(&self, media: &MediaReference) -> Result<MediaBlob> {
        self.blobs
            .get(&media.local_uri)
            .cloned()
            .ok_or_else(|| Error::encode(format!("unresolved media handle: {}", media.local_uri)))
    }
}
