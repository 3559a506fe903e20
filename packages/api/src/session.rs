//! # Session Store: the client's single piece of shared mutable state
//!
//! [`SessionStore`] owns who is signed in. Views never write session state
//! directly; they call the store's methods and re-render from [`AuthState`]
//! snapshots delivered through [`SessionStore::watch`].
//!
//! ## States
//!
//! | State | Entered by |
//! |-------|-----------|
//! | `Loading(prefill)` | construction; `prefill` is the user read from durable storage, if any |
//! | `Authenticated(user)` | successful profile fetch, login or registration |
//! | `Unauthenticated` | failed profile fetch, logout, or any 401 seen by the client |
//!
//! ## Durable mirror
//!
//! Every transition into `Authenticated` writes the user as JSON under
//! [`SESSION_STORAGE_KEY`]; every transition out removes it. A corrupt stored
//! value is logged and treated as absent.
//!
//! ## Unauthorized hook
//!
//! The store registers itself with [`ApiClient::on_unauthorized`] on
//! construction. The callback holds only a weak reference, so dropping the
//! last store handle also removes the registration.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::listeners::{Listeners, Subscription};
use crate::models::{Credentials, Registration, User};
use crate::transport::Transport;

/// Durable storage key for the signed-in user.
pub const SESSION_STORAGE_KEY: &str = "se-embe:user";

/// Notice shown when the session ends without a server explanation.
pub const SESSION_EXPIRED: &str = "Session expired";

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Startup profile check in flight.
    Loading(Option<User>),
    Authenticated(User),
    Unauthenticated,
}

/// Snapshot rendered by the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: SessionState,
    /// Displayable reason the last session ended, if any.
    pub notice: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: SessionState::Loading(None),
            notice: None,
        }
    }
}

impl AuthState {
    /// The confirmed user, or the stored one while loading.
    pub fn user(&self) -> Option<&User> {
        match &self.session {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Loading(prefill) => prefill.as_ref(),
            SessionState::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, SessionState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.session, SessionState::Loading(_))
    }

    pub fn is_admin(&self) -> bool {
        match &self.session {
            SessionState::Authenticated(user) => user.is_admin(),
            _ => false,
        }
    }
}

struct SessionInner<T, S> {
    client: ApiClient<T>,
    storage: S,
    state: Mutex<AuthState>,
    watchers: Listeners<AuthState>,
    unauthorized: Mutex<Option<Subscription>>,
}

/// Shared session handle. Clones observe the same state.
pub struct SessionStore<T, S> {
    inner: Arc<SessionInner<T, S>>,
}

impl<T, S> Clone for SessionStore<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T, S> PartialEq for SessionStore<T, S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T, S> SessionStore<T, S>
where
    T: Transport + 'static,
    S: KeyValueStore + 'static,
{
    /// Builds the store in `Loading`, pre-filled from durable storage, and
    /// hooks it to the client's 401 broadcast. Call [`init`](Self::init) to
    /// confirm the session with the backend.
    pub fn new(client: ApiClient<T>, storage: S) -> Self {
        let prefill: Option<User> = store::load_json(&storage, SESSION_STORAGE_KEY);
        let inner = Arc::new(SessionInner {
            client,
            storage,
            state: Mutex::new(AuthState {
                session: SessionState::Loading(prefill),
                notice: None,
            }),
            watchers: Listeners::new(),
            unauthorized: Mutex::new(None),
        });

        let weak: Weak<SessionInner<T, S>> = Arc::downgrade(&inner);
        let subscription = inner.client.on_unauthorized(move |event| {
            if let Some(inner) = weak.upgrade() {
                tracing::info!("Unauthorized response from {}", event.path);
                SessionStore { inner }.invalidate();
            }
        });
        *lock(&inner.unauthorized) = Some(subscription);

        Self { inner }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.inner.client
    }

    pub fn state(&self) -> AuthState {
        lock(&self.inner.state).clone()
    }

    /// Observe every transition. The callback receives the new snapshot.
    pub fn watch(&self, callback: impl Fn(&AuthState) + 'static) -> Subscription {
        self.inner.watchers.subscribe(callback)
    }

    /// Startup profile check.
    pub async fn init(&self) {
        tracing::debug!("Checking stored session");
        self.refresh().await;
    }

    /// Re-fetch the profile and reconcile. Never fails: an error ends the
    /// session and is kept as the notice.
    pub async fn refresh(&self) {
        match self.inner.client.profile().await {
            Ok(user) => self.activate(user),
            Err(e) => {
                tracing::info!("Profile check failed: {e}");
                store::remove(&self.inner.storage, SESSION_STORAGE_KEY);
                let notice = e.server_message().unwrap_or(SESSION_EXPIRED).to_string();
                self.transition(|state| {
                    state.session = SessionState::Unauthenticated;
                    state.notice = Some(notice);
                });
            }
        }
    }

    /// Sign in. On failure the state is left as it was and the error is returned.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let user = self.inner.client.login(credentials).await?;
        self.activate(user.clone());
        Ok(user)
    }

    /// Create an account and sign straight into it.
    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        let user = self.inner.client.register(registration).await?;
        self.activate(user.clone());
        Ok(user)
    }

    /// Sign out. The local session is cleared even if the server call fails.
    pub async fn logout(&self) {
        if let Err(e) = self.inner.client.logout().await {
            tracing::error!("Failed to log out: {e}");
        }
        store::remove(&self.inner.storage, SESSION_STORAGE_KEY);
        self.transition(|state| {
            state.session = SessionState::Unauthenticated;
            state.notice = None;
        });
    }

    /// Drop the session after an authentication failure. Already signed-out
    /// state is left untouched apart from clearing storage.
    pub fn invalidate(&self) {
        store::remove(&self.inner.storage, SESSION_STORAGE_KEY);
        if matches!(lock(&self.inner.state).session, SessionState::Unauthenticated) {
            return;
        }
        self.transition(|state| {
            state.session = SessionState::Unauthenticated;
            state.notice = Some(SESSION_EXPIRED.to_string());
        });
    }

    pub fn dismiss_notice(&self) {
        if lock(&self.inner.state).notice.is_none() {
            return;
        }
        self.transition(|state| state.notice = None);
    }

    fn activate(&self, user: User) {
        store::save_json(&self.inner.storage, SESSION_STORAGE_KEY, &user);
        self.transition(|state| {
            state.session = SessionState::Authenticated(user);
            state.notice = None;
        });
    }

    fn transition(&self, update: impl FnOnce(&mut AuthState)) {
        let snapshot = {
            let mut state = lock(&self.inner.state);
            update(&mut state);
            state.clone()
        };
        self.inner.watchers.emit(&snapshot);
    }
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiConfig, MockTransport};
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::rc::Rc;
    use store::MemoryStore;

    fn session(mock: &MockTransport, storage: &MemoryStore) -> SessionStore<MockTransport, MemoryStore> {
        let client = ApiClient::new(mock.clone(), &ApiConfig::with_base_url("https://seembe.test/api"));
        SessionStore::new(client, storage.clone())
    }

    fn user_json() -> Value {
        json!({ "_id": "1", "name": "A", "email": "a@b.com", "role": "user" })
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "a@b.com".into(),
            password: "x".into(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_exact_user() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(200, user_json());
        let store = session(&mock, &storage);

        let user = store.login(&credentials()).await.unwrap();

        let expected: User = serde_json::from_value(user_json()).unwrap();
        assert_eq!(user, expected);
        assert_eq!(store.state().session, SessionState::Authenticated(expected));
        assert_eq!(
            storage.get(SESSION_STORAGE_KEY).as_deref(),
            Some(r#"{"_id":"1","name":"A","email":"a@b.com","role":"user"}"#)
        );
    }

    #[tokio::test]
    async fn test_login_then_logout_clears_session_even_when_server_fails() {
        for logout_status in [200u16, 500] {
            let mock = MockTransport::new();
            let storage = MemoryStore::new();
            mock.respond(200, user_json());
            mock.respond(logout_status, json!({ "message": "bye" }));
            let store = session(&mock, &storage);

            store.login(&credentials()).await.unwrap();
            store.logout().await;

            assert_eq!(store.state().session, SessionState::Unauthenticated);
            assert_eq!(storage.get(SESSION_STORAGE_KEY), None);
        }
    }

    #[tokio::test]
    async fn test_logout_survives_transport_failure() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(200, user_json());
        mock.fail("offline");
        let store = session(&mock, &storage);

        store.login(&credentials()).await.unwrap();
        store.logout().await;

        assert_eq!(store.state().session, SessionState::Unauthenticated);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_failed_startup_profile_leaves_notice() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(401, json!({}));
        let store = session(&mock, &storage);
        assert_eq!(store.state().session, SessionState::Loading(None));

        store.init().await;

        let state = store.state();
        assert_eq!(state.session, SessionState::Unauthenticated);
        assert!(state.notice.as_deref().is_some_and(|n| !n.is_empty()));
    }

    #[tokio::test]
    async fn test_failed_profile_keeps_server_message() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(401, json!({ "message": "Not authorized, no token" }));
        let store = session(&mock, &storage);

        store.init().await;

        assert_eq!(store.state().notice.as_deref(), Some("Not authorized, no token"));
    }

    #[tokio::test]
    async fn test_corrupt_stored_session_still_fetches_profile() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        storage.set(SESSION_STORAGE_KEY, "{not json");
        mock.respond(200, user_json());
        let store = session(&mock, &storage);
        assert_eq!(store.state().session, SessionState::Loading(None));

        store.init().await;

        assert_eq!(mock.request_count(), 1);
        assert!(mock.requests()[0].url.ends_with("/auth/profile"));
        assert!(store.state().is_authenticated());
    }

    #[tokio::test]
    async fn test_stored_session_prefills_loading_state() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        storage.set(SESSION_STORAGE_KEY, &user_json().to_string());
        let store = session(&mock, &storage);

        let state = store.state();
        assert!(state.is_loading());
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("1"));
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_and_returns_error() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(401, json!({ "message": "Not authorized" }));
        mock.respond(401, json!({ "message": "Invalid email or password" }));
        let store = session(&mock, &storage);
        store.init().await;
        let before = store.state();

        let err = store.login(&credentials()).await.unwrap_err();

        assert_eq!(err.message(), "Invalid email or password");
        assert_eq!(store.state(), before);
    }

    #[tokio::test]
    async fn test_any_401_ends_an_active_session() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(200, user_json());
        mock.respond(401, json!({ "message": "Token expired" }));
        let store = session(&mock, &storage);
        store.login(&credentials()).await.unwrap();

        let err = store.client().list_events().await.unwrap_err();

        assert!(err.is_unauthorized());
        let state = store.state();
        assert_eq!(state.session, SessionState::Unauthenticated);
        assert_eq!(state.notice.as_deref(), Some(SESSION_EXPIRED));
        assert_eq!(storage.get(SESSION_STORAGE_KEY), None);
    }

    #[tokio::test]
    async fn test_refresh_after_profile_edit() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(200, user_json());
        mock.respond(200, json!({ "user": { "_id": "1", "name": "Ada", "email": "a@b.com" } }));
        let store = session(&mock, &storage);
        store.login(&credentials()).await.unwrap();

        store.refresh().await;

        assert_eq!(store.state().user().map(|u| u.name.as_str()), Some("Ada"));
        let saved: User = store::load_json(&storage, SESSION_STORAGE_KEY).unwrap();
        assert_eq!(saved.name, "Ada");
    }

    #[tokio::test]
    async fn test_watchers_see_each_transition() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(200, user_json());
        mock.respond(200, json!({}));
        let store = session(&mock, &storage);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _watch = store.watch(move |state| sink.borrow_mut().push(state.is_authenticated()));

        store.login(&credentials()).await.unwrap();
        store.logout().await;

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_dropping_store_removes_unauthorized_hook() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        let client = ApiClient::new(mock.clone(), &ApiConfig::default());
        let store = SessionStore::new(client.clone(), storage);
        assert_eq!(client.unauthorized_listener_count(), 1);

        drop(store);
        assert_eq!(client.unauthorized_listener_count(), 0);

        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let _hook = client.on_unauthorized(move |_| *counter.borrow_mut() += 1);
        mock.respond(401, json!({}));
        let err = client.get::<Value>("/events").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(client.unauthorized_listener_count(), 1);
    }

    fn registration() -> Registration {
        Registration {
            name: "Nine".into(),
            email: "nine@b.com".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn test_register_signs_in_and_saves_user() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(
            201,
            json!({ "user": { "_id": "9", "name": "Nine", "email": "nine@b.com", "role": "user" } }),
        );
        let store = session(&mock, &storage);

        let user = store.register(&registration()).await.unwrap();

        assert_eq!(user.id, "9");
        assert!(store.state().is_authenticated());
        assert_eq!(store.state().user().map(|u| u.id.as_str()), Some("9"));
        let saved: User = store::load_json(&storage, SESSION_STORAGE_KEY).unwrap();
        assert_eq!(saved, user);
        assert!(mock.requests()[0].url.ends_with("/auth/register"));
    }

    #[tokio::test]
    async fn test_failed_register_stays_signed_out() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(401, json!({}));
        mock.respond(400, json!({ "message": "User already exists" }));
        let store = session(&mock, &storage);
        store.init().await;

        let err = store.register(&registration()).await.unwrap_err();

        assert_eq!(err.message(), "User already exists");
        assert_eq!(store.state().session, SessionState::Unauthenticated);
        assert_eq!(storage.get(SESSION_STORAGE_KEY), None);
    }

    #[tokio::test]
    async fn test_stored_user_is_dropped_when_startup_check_fails() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        storage.set(SESSION_STORAGE_KEY, &user_json().to_string());
        mock.respond(401, json!({}));
        let store = session(&mock, &storage);
        assert_eq!(store.state().user().map(|u| u.id.as_str()), Some("1"));

        store.init().await;

        let state = store.state();
        assert_eq!(state.session, SessionState::Unauthenticated);
        assert_eq!(state.notice.as_deref(), Some(SESSION_EXPIRED));
        assert_eq!(state.user(), None);
        assert_eq!(storage.get(SESSION_STORAGE_KEY), None);
    }

    #[tokio::test]
    async fn test_dismiss_notice_clears_it_once() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(401, json!({}));
        let store = session(&mock, &storage);
        store.init().await;
        assert!(store.state().notice.is_some());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _watch = store.watch(move |state| sink.borrow_mut().push(state.notice.clone()));

        store.dismiss_notice();
        store.dismiss_notice();

        assert_eq!(store.state().notice, None);
        assert_eq!(store.state().session, SessionState::Unauthenticated);
        assert_eq!(*seen.borrow(), vec![None]);
    }
}
