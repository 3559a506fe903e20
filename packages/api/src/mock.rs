use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use crate::transport::{ApiRequest, RawResponse, Transport, TransportError};

#[derive(Default)]
struct MockState {
    script: VecDeque<Result<RawResponse, TransportError>>,
    requests: Vec<ApiRequest>,
}

/// Scripted Transport for tests and offline previews.
///
/// Responses are served in the order they were queued; every request is
/// recorded. An exhausted script answers with a transport failure.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.respond_raw(status, &body.to_string())
    }

    /// Queue a response with a literal body.
    pub fn respond_raw(&self, status: u16, body: &str) -> &Self {
        self.lock().script.push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    /// Queue a transport-level failure.
    pub fn fail(&self, message: &str) -> &Self {
        self.lock()
            .script
            .push_back(Err(TransportError::new(message)));
        self
    }

    /// Every request sent so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.lock().requests.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let mut state = self.lock();
        state.requests.push(request);
        state
            .script
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("No scripted response")))
    }
}
