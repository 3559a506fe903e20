//! # Transport: the single seam between the client and the network
//!
//! [`ApiClient`](crate::ApiClient) never talks to the network directly. It
//! builds an [`ApiRequest`] (method, absolute URL, optional JSON body) and hands
//! it to a [`Transport`], which returns the raw status and body text. Status
//! interpretation, JSON decoding and the 401 broadcast all stay in the client,
//! so they are exercised identically by the browser transport, the native
//! transport and [`MockTransport`](crate::MockTransport).
//!
//! | Implementation | Target | Backing |
//! |----------------|--------|---------|
//! | `FetchTransport` | `wasm32` | `gloo-net` over `window.fetch`, `credentials: include` |
//! | `HttpTransport` | native | `reqwest` with an in-process cookie jar |
//! | [`MockTransport`](crate::MockTransport) | any | scripted responses for tests |
//!
//! A transport only fails when no response was received at all; any HTTP
//! status, including 4xx/5xx, is a successful [`RawResponse`].

use std::fmt;

#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;

#[cfg(not(target_arch = "wasm32"))]
mod http;
#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpTransport;

/// Platform-appropriate network transport.
#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = HttpTransport;

/// HTTP methods used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON-encoded body.
    pub body: Option<String>,
}

impl ApiRequest {
    /// `Content-Type` header value. Bodiless requests send none.
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| "application/json")
    }
}

/// Status and body text of any received response.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Pairs a status with the outcome of reading the body. A body that could
    /// not be read means the response never fully arrived.
    pub fn read<E: fmt::Display>(
        status: u16,
        body: Result<String, E>,
    ) -> Result<Self, TransportError> {
        body.map(|body| Self { status, body })
            .map_err(|e| TransportError::new(format!("Failed to read response body: {e}")))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Async trait for sending credential-bearing requests.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<RawResponse, TransportError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, body: Option<&str>) -> ApiRequest {
        ApiRequest {
            method,
            url: "https://seembe.test/api/events".into(),
            body: body.map(str::to_string),
        }
    }

    #[test]
    fn test_content_type_only_with_body() {
        assert_eq!(request(Method::Get, None).content_type(), None);
        assert_eq!(request(Method::Delete, None).content_type(), None);
        assert_eq!(
            request(Method::Post, Some("{}")).content_type(),
            Some("application/json")
        );
        assert_eq!(
            request(Method::Put, Some(r#"{"role":"admin"}"#)).content_type(),
            Some("application/json")
        );
    }

    #[test]
    fn test_unreadable_body_is_a_transport_error() {
        let err = RawResponse::read(200, Err::<String, _>("stream closed")).unwrap_err();
        assert!(err.message.contains("stream closed"));

        let ok = RawResponse::read(204, Ok::<_, String>(String::new())).unwrap();
        assert_eq!(ok, RawResponse { status: 204, body: String::new() });
        assert!(ok.is_success());
    }
}
