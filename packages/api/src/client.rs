//! HTTP Client Wrapper. [`ApiClient`] joins paths onto the configured base
//! URL, sends JSON through a [`Transport`] and decodes JSON replies. Failures
//! come back as a normalized [`ApiError`]; a 401 additionally notifies every
//! callback registered with [`ApiClient::on_unauthorized`] before the error
//! is returned.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::listeners::{Listeners, Subscription};
use crate::transport::{ApiRequest, Method, RawResponse, Transport};

/// Payload passed to unauthorized callbacks.
#[derive(Clone, Debug, PartialEq)]
pub struct Unauthorized {
    pub method: Method,
    pub path: String,
}

struct ClientInner<T> {
    transport: T,
    config: ApiConfig,
    unauthorized: Listeners<Unauthorized>,
}

/// Shared JSON client. Clones share the transport and callback registry.
pub struct ApiClient<T> {
    inner: Arc<ClientInner<T>>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for ApiClient<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: &ApiConfig) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                config: config.clone(),
                unauthorized: Listeners::new(),
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Register a callback for 401 responses. Drop or unsubscribe the
    /// returned [`Subscription`] to remove it.
    pub fn on_unauthorized(&self, callback: impl Fn(&Unauthorized) + 'static) -> Subscription {
        self.inner.unauthorized.subscribe(callback)
    }

    #[cfg(test)]
    pub(crate) fn unauthorized_listener_count(&self) -> usize {
        self.inner.unauthorized.len()
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let payload = encode(body)?;
        self.request(Method::Post, path, Some(payload)).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let payload = encode(body)?;
        self.request(Method::Put, path, Some(payload)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Delete, path, None).await
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let url = self.inner.config.url(path);
        tracing::debug!("{method} {path}");

        let response = self
            .inner
            .transport
            .send(ApiRequest { method, url, body })
            .await
            .map_err(|e| ApiError::transport(e.message))?;

        if response.is_success() {
            return decode(&response);
        }

        let error = ApiError::from_status(response.status, parse_body(&response.body));
        if error.is_unauthorized() {
            let notified = self.inner.unauthorized.emit(&Unauthorized {
                method,
                path: path.to_string(),
            });
            tracing::debug!("401 on {method} {path}, notified {notified} listeners");
        }
        Err(error)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::invalid(format!("Failed to encode request: {e}")))
}

fn parse_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        None
    } else {
        serde_json::from_str(body).ok()
    }
}

/// Empty bodies decode as JSON `null`, so `()` and `Option<_>` accept a 204.
fn decode<R: DeserializeOwned>(response: &RawResponse) -> Result<R, ApiError> {
    let value = parse_body(&response.body).unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| ApiError::Decode {
        status: response.status,
        message: format!("Failed to decode response: {e}"),
    })
}
