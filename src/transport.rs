//! The transport seam and the bundled blocking HTTP implementation.
//!
//! The facade only ever hands a finished [`RequestDescriptor`] to a
//! [`Transport`]; all HTTP and JSON framing belongs to the implementation.
//! Tests substitute a recording transport, production code uses
//! [`HttpTransport`] (feature `remote`, enabled by default).

use serde_json::Value;

use crate::error::TransportError;
use crate::request::RequestDescriptor;

#[cfg(feature = "remote")]
use std::time::Duration;

#[cfg(feature = "remote")]
use tracing::debug;

#[cfg(feature = "remote")]
use crate::request::Verb;

/// Executes finished requests against the remote API.
pub trait Transport {
    /// Execute the request and return the decoded response payload.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network failure, non-2xx status, or
    /// an undecodable response body. The facade propagates it unchanged.
    fn send(&self, request: &RequestDescriptor) -> Result<Value, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &RequestDescriptor) -> Result<Value, TransportError> {
        (**self).send(request)
    }
}

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Production API base URL.
#[cfg(feature = "remote")]
const API_BASE: &str = "https://api.nylas.com";

/// Blocking HTTP transport backed by `reqwest`.
///
/// Expands the endpoint template, attaches query parameters, frames body
/// parameters as JSON, and sets headers verbatim. Non-JSON response bodies
/// (the picture endpoint returns raw image data) come back as a string
/// value; empty bodies as null.
#[cfg(feature = "remote")]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "remote")]
impl HttpTransport {
    /// Transport against an explicit base URL (trailing slash stripped).
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Network` if the underlying client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|source| TransportError::Network {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { base_url, client })
    }

    /// Transport against the production API.
    ///
    /// # Errors
    ///
    /// Same as [`HttpTransport::new`].
    pub fn live() -> Result<Self, TransportError> {
        Self::new(API_BASE)
    }
}

#[cfg(feature = "remote")]
impl Transport for HttpTransport {
    fn send(&self, request: &RequestDescriptor) -> Result<Value, TransportError> {
        let url = format!(
            "{}{}",
            self.base_url,
            request.endpoint.expand(&request.path_params)
        );
        debug!(url = %url, verb = ?request.verb, endpoint = request.endpoint.key(), "sending request");

        let mut builder = match request.verb {
            Verb::Get => self.client.get(&url),
            Verb::Post => self.client.post(&url),
            Verb::Put => self.client.put(&url),
            Verb::Delete => self.client.delete(&url),
        };

        for (name, value) in &request.header_params {
            builder = builder.header(name, value);
        }
        if !request.query_params.is_empty() {
            builder = builder.query(&request.query_params);
        }
        if !request.body_params.is_empty() {
            builder = builder.json(&request.body_params);
        }

        let response = builder.send().map_err(|source| TransportError::Network {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        let json_body = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("json"));
        let body = response.text().map_err(|source| TransportError::Network {
            url: url.clone(),
            source,
        })?;
        debug!(status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }
        if json_body {
            serde_json::from_str(&body).map_err(|source| TransportError::Decode { source })
        } else {
            Ok(Value::String(body))
        }
    }
}
