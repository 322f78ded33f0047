//! Transport capability and its HTTP implementation.

use std::time::Duration;

use clique_core::prelude::*;
use reqwest::header::ACCEPT;
use url::Url;

use crate::endpoints::{Endpoint, Method};
use crate::request::{ApiRequest, ApiResponse, PartContent, RequestBody};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends one request and returns the status and raw body.
///
/// Implementations return `Err` only when no response was obtained;
/// any HTTP status, including 4xx/5xx, is an `Ok` response.
#[trait_variant::make(Transport: Send)]
pub trait LocalTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// reqwest-backed transport rooted at a base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| {
            Error::config_invalid(format!("invalid backend URL '{}': {}", base_url, e))
        })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint, keeping any path prefix of the base URL.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url> {
        self.base_url
            .join(endpoint.path().trim_start_matches('/'))
            .map_err(|e| Error::config_invalid(format!("invalid endpoint URL: {}", e)))
    }

    fn multipart_form(parts: Vec<crate::request::MultipartPart>) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            form = match part.content {
                PartContent::Text(value) => form.text(part.name, value),
                PartContent::File {
                    bytes,
                    file_name,
                    content_type,
                } => {
                    let file = reqwest::multipart::Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&content_type)
                        .map_err(|e| Error::encode(format!("invalid content type: {}", e)))?;
                    form.part(part.name, file)
                }
            };
        }
        Ok(form)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.endpoint_url(request.endpoint)?;
        debug!("Sending {} request to {}", request.endpoint.description(), url);

        let builder = match request.endpoint.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        }
        .header(ACCEPT, "application/json");

        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(parts) => builder.multipart(Self::multipart_form(parts)?),
        };

        let response = builder.send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(network_error)?;

        debug!(
            "{} returned {} ({} bytes)",
            request.endpoint.description(),
            status,
            body.len()
        );
        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

fn network_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::network("request timed out")
    } else if err.is_connect() {
        Error::network(format!("could not connect to server: {}", err))
    } else {
        Error::network(err.to_string())
    }
}
