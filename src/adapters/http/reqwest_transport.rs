//! Reqwest transport - sends envelopes to the real backend.
//!
//! # Configuration
//!
//! ```ignore
//! let transport = ReqwestTransport::new("http://localhost:5000/api/auth");
//! let gateway = RequestGateway::new(Arc::new(transport), sessions, notifier);
//! ```
//!
//! Query pairs are percent-encoded by reqwest. Multipart bodies get their
//! own `Content-Type` (with boundary) from reqwest.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::domain::request::{MultipartPart, RequestBody, RequestEnvelope};
use crate::ports::{HttpTransport, RawResponse, TransportError};

/// HTTP transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Creates a transport for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a transport using an existing client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path.
    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn multipart_form(parts: Vec<MultipartPart>) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            MultipartPart::Text { name, value } => form.text(name, value),
            MultipartPart::File { name, file } => {
                let mut body = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(content_type) = file.content_type {
                    body = body
                        .mime_str(&content_type)
                        .map_err(|e| TransportError::Build(e.to_string()))?;
                }
                form.part(name, body)
            }
        };
    }
    Ok(form)
}

fn classify(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else if error.is_builder() {
        TransportError::Build(error.to_string())
    } else {
        TransportError::Other(error.to_string())
    }
}

impl ReqwestTransport {
    /// Turns an envelope into a ready-to-execute request.
    fn build(&self, envelope: RequestEnvelope) -> Result<reqwest::Request, TransportError> {
        let RequestEnvelope {
            method,
            path,
            query,
            headers,
            body,
        } = envelope;

        let mut request = self.client.request(method, self.url_for(&path)).headers(headers);
        if !query.is_empty() {
            request = request.query(&query);
        }
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => {
                let bytes =
                    serde_json::to_vec(&value).map_err(|e| TransportError::Build(e.to_string()))?;
                request.body(bytes)
            }
            RequestBody::Multipart(parts) => request.multipart(multipart_form(parts)?),
        };

        request.build().map_err(classify)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, envelope: RequestEnvelope) -> Result<RawResponse, TransportError> {
        let request = self.build(envelope)?;

        let response = self.client.execute(request).await.map_err(classify)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(classify)?;

        Ok(RawResponse::new(status, bytes.to_vec()))
    }
}
