//! RequestGateway - the single path every backend call takes.
//!
//! Builds the envelope (caller headers, JSON content type, bearer token),
//! hands it to the transport, parses the JSON reply and classifies failures.
//! Failures are logged and surfaced to the user as one error notification
//! before the error is returned.

use std::sync::Arc;

use http::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, error};

use crate::domain::request::{
    status_fallback_message, RequestEnvelope, RequestError, RequestOptions,
};
use crate::ports::{HttpTransport, Notifier, RawResponse, SessionProvider};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Sends requests to the backend on behalf of the domain client functions.
#[derive(Clone)]
pub struct RequestGateway {
    transport: Arc<dyn HttpTransport>,
    sessions: Arc<dyn SessionProvider>,
    notifier: Arc<dyn Notifier>,
}

impl RequestGateway {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        sessions: Arc<dyn SessionProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            sessions,
            notifier,
        }
    }

    /// The notifier failures are reported to.
    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Sends a request and returns the parsed JSON body.
    ///
    /// On failure exactly one error notification carrying the failure's
    /// message is raised before the error is returned.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Value, RequestError> {
        match self.execute(path, options, None).await {
            Ok(value) => Ok(value),
            Err(e) => {
                self.notifier.error(e.message());
                Err(e)
            }
        }
    }

    /// Like [`request`](Self::request) but raises no notification.
    ///
    /// `fallback` replaces the generic status message when a failed
    /// response carries no `error` field.
    pub async fn request_quiet(
        &self,
        path: &str,
        options: RequestOptions,
        fallback: &str,
    ) -> Result<Value, RequestError> {
        self.execute(path, options, Some(fallback)).await
    }

    /// Builds the envelope the transport will see.
    ///
    /// Caller headers win; the JSON content type is added unless the body is
    /// multipart, and the bearer token only when the session has one.
    pub async fn prepare(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<RequestEnvelope, RequestError> {
        let RequestOptions {
            method,
            mut headers,
            query,
            body,
        } = options;

        if !body.is_multipart() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        if !headers.contains_key(AUTHORIZATION) {
            let authorization = self
                .sessions
                .load()
                .await
                .and_then(|session| session.authorization_value());
            if let Some(value) = authorization {
                let value = HeaderValue::from_str(&value).map_err(|_| {
                    RequestError::invalid_request("Session token is not a valid header value")
                })?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        Ok(RequestEnvelope {
            method,
            path: path.to_string(),
            query,
            headers,
            body,
        })
    }

    async fn execute(
        &self,
        path: &str,
        options: RequestOptions,
        fallback: Option<&str>,
    ) -> Result<Value, RequestError> {
        let result = self.send(path, options, fallback).await;
        if let Err(e) = &result {
            error!(path, status = ?e.http_status(), error = %e, "API request failed");
        }
        result
    }

    async fn send(
        &self,
        path: &str,
        options: RequestOptions,
        fallback: Option<&str>,
    ) -> Result<Value, RequestError> {
        let envelope = self.prepare(path, options).await?;
        debug!(
            method = %envelope.method,
            path,
            authorized = envelope.authorization().is_some(),
            "Sending API request"
        );

        let response = self
            .transport
            .send(envelope)
            .await
            .map_err(|e| RequestError::transport(e.to_string()))?;

        interpret(response, fallback)
    }
}

/// Parses the body and classifies the status.
///
/// The body is parsed as JSON whatever the status, so a non-JSON error page
/// surfaces as `InvalidResponse` rather than `Api`.
fn interpret(response: RawResponse, fallback: Option<&str>) -> Result<Value, RequestError> {
    let status = response.status;
    let data: Value = serde_json::from_slice(&response.body)
        .map_err(|e| RequestError::invalid_response(e.to_string(), status))?;

    if status.is_success() {
        return Ok(data);
    }

    let message = data
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| match fallback {
            Some(fallback) => fallback.to_string(),
            None => status_fallback_message(status),
        });
    Err(RequestError::api(message, status))
}
