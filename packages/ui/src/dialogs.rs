//! Blocking browser dialogs behind a trait, plus the confirm-then-act helper
//! every destructive action goes through.

use std::future::Future;

use api::ApiError;

pub trait Dialogs {
    /// Ask a yes/no question. `false` means the user declined.
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserDialogs;

#[cfg(target_arch = "wasm32")]
impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                tracing::error!("Failed to show alert: {e:?}");
            }
        }
    }
}

// No dialog surface off the web: decline everything and log alerts.
#[cfg(not(target_arch = "wasm32"))]
impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        tracing::warn!("Declining confirmation without a browser: {message}");
        false
    }

    fn alert(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Cancelled,
    Done,
    Failed(String),
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done)
    }
}

/// Run `action` only if the user confirms `prompt`. Failures are alerted
/// with the server's message or `fallback`.
///
/// `action` is not polled before confirmation, so a declined prompt sends
/// nothing.
pub async fn confirm_then(
    dialogs: &impl Dialogs,
    prompt: &str,
    fallback: &str,
    action: impl Future<Output = Result<(), ApiError>>,
) -> Outcome {
    if !dialogs.confirm(prompt) {
        return Outcome::Cancelled;
    }
    attempt(dialogs, fallback, action).await
}

/// Run `action`, alerting on failure.
pub async fn attempt(
    dialogs: &impl Dialogs,
    fallback: &str,
    action: impl Future<Output = Result<(), ApiError>>,
) -> Outcome {
    match action.await {
        Ok(()) => Outcome::Done,
        Err(e) => {
            let message = e.user_message(fallback);
            tracing::warn!("{fallback}: {e}");
            dialogs.alert(&message);
            Outcome::Failed(message)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use api::{ApiClient, ApiConfig, MockTransport};
    use serde_json::json;
    use std::cell::RefCell;

    /// Scripted dialogs that record alerts.
    pub struct FakeDialogs {
        pub answer: bool,
        pub alerts: RefCell<Vec<String>>,
    }

    impl FakeDialogs {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer,
                alerts: RefCell::new(Vec::new()),
            }
        }
    }

    impl Dialogs for FakeDialogs {
        fn confirm(&self, _message: &str) -> bool {
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn client(mock: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(mock.clone(), &ApiConfig::with_base_url("https://seembe.test/api"))
    }

    #[tokio::test]
    async fn test_declined_celebrant_delete_sends_nothing() {
        let mock = MockTransport::new();
        let api = client(&mock);
        let dialogs = FakeDialogs::answering(false);

        let outcome = confirm_then(
            &dialogs,
            "Delete this celebrant?",
            "Unable to delete celebrant",
            api.delete_celebrant("c1"),
        )
        .await;

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(mock.request_count(), 0);
        assert!(dialogs.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_delete_runs_once() {
        let mock = MockTransport::new();
        mock.respond(200, json!({ "message": "Celebrant removed" }));
        let api = client(&mock);

        let outcome = confirm_then(
            &FakeDialogs::answering(true),
            "Delete this celebrant?",
            "Unable to delete celebrant",
            api.delete_celebrant("c1"),
        )
        .await;

        assert!(outcome.is_done());
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_alerted_with_fallback() {
        let mock = MockTransport::new();
        mock.respond(500, json!({}));
        mock.respond(403, json!({ "message": "Not allowed" }));
        let api = client(&mock);
        let dialogs = FakeDialogs::answering(true);

        let first = attempt(&dialogs, "Unable to delete user", api.delete_user("u1")).await;
        let second = attempt(&dialogs, "Unable to delete user", api.delete_user("u1")).await;

        assert_eq!(first, Outcome::Failed("Unable to delete user".into()));
        assert_eq!(second, Outcome::Failed("Not allowed".into()));
        assert_eq!(
            *dialogs.alerts.borrow(),
            vec!["Unable to delete user".to_string(), "Not allowed".to_string()]
        );
    }
}
