//! Normalized request errors. Every failure a view can see passes through
//! [`ApiError`], which always carries a displayable message and, for HTTP
//! failures, the status code and raw response body.

use serde_json::Value;

/// Message used when neither the response nor the transport explains a failure.
pub const GENERIC_ERROR: &str = "Unexpected error";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response was received.
    #[error("{message}")]
    Transport { message: String },
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        data: Option<Value>,
    },
    /// A 2xx response whose body did not match the expected shape.
    #[error("{message}")]
    Decode { status: u16, message: String },
    /// Rejected locally before any request was sent.
    #[error("{message}")]
    Invalid { message: String },
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_ERROR.to_string()
        } else {
            message
        };
        ApiError::Transport { message }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid {
            message: message.into(),
        }
    }

    /// Builds an HTTP error, preferring the body's `message` field.
    pub fn from_status(status: u16, data: Option<Value>) -> Self {
        let message = data
            .as_ref()
            .and_then(body_message)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        ApiError::Http {
            status,
            message,
            data,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport { message }
            | ApiError::Http { message, .. }
            | ApiError::Decode { message, .. }
            | ApiError::Invalid { message } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } | ApiError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiError::Http { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The `message` field of the response body, if the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        self.data().and_then(body_message)
    }

    /// Text for a view: the server's explanation, a local validation message,
    /// or the caller's per-action fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Invalid { message } => message.clone(),
            _ => self.server_message().unwrap_or(fallback).to_string(),
        }
    }
}

fn body_message(data: &Value) -> Option<&str> {
    data.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
}
