//! Browser transport over `window.fetch`.

use gloo_net::http::{Request, RequestBuilder};
use web_sys::RequestCredentials;

use super::{ApiRequest, Method, RawResponse, Transport, TransportError};

/// `fetch`-backed transport. Every request includes cookies so the backend's
/// session cookie travels with it.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let mut builder =
            builder(request.method, &request.url).credentials(RequestCredentials::Include);
        if let Some(content_type) = request.content_type() {
            builder = builder.header("Content-Type", content_type);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::new(format!("Failed to build request: {e}")))?;

        let response = built
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        RawResponse::read(status, response.text().await)
    }
}
