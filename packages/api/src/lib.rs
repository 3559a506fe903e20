//! # API crate: HTTP client, domain models and session state for Seembe
//!
//! Seembe's backend owns every rule about celebrants, events, messages and
//! accounts. This crate is the client's only door to it: a credential-bearing
//! JSON client with a global "unauthorized" broadcast, the typed models the
//! REST resources return, and the session store that the UI renders from.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL joining, JSON encode/decode, error normalization, 401 broadcast |
//! | [`config`] | [`ApiConfig`]: build-time base URL with a runtime `window.SEEMBE_CONFIG` override |
//! | [`error`] | [`ApiError`]: transport, HTTP, decode and local validation failures |
//! | [`listeners`] | [`Listeners`] / [`Subscription`]: multi-subscriber callbacks with capability-style removal |
//! | [`transport`] | [`Transport`] trait plus fetch (wasm32) and reqwest (native) implementations |
//! | [`mock`] | [`MockTransport`]: scripted responses and a request log for tests |
//! | [`models`] | `User`, `Celebrant`, `Event`, `Message` and the [`Linked`] id-or-object union |
//! | [`session`] | [`SessionStore`]: `Loading` / `Authenticated` / `Unauthenticated` with durable mirroring |
//!
//! ## Endpoints
//!
//! Typed endpoint methods are implemented on [`ApiClient`] in the `endpoints`
//! module, one file per resource:
//!
//! - **Auth**: `login`, `register`, `logout`, `profile`
//! - **Celebrants**: `list_celebrants`, `get_celebrant`, `create_celebrant`, `update_celebrant`, `delete_celebrant`
//! - **Events**: `list_events`, `get_event`, `create_event`, `update_event`, `update_event_status`, `delete_event`
//! - **Messages**: `list_messages`, `create_message`, `update_message`, `delete_message`
//! - **Users**: `list_users`, `update_user_role`, `delete_user`, `update_me`

pub mod client;
pub mod config;
mod endpoints;
pub mod error;
pub mod listeners;
pub mod mock;
pub mod models;
pub mod session;
pub mod transport;

pub use client::{ApiClient, Unauthorized};
pub use config::ApiConfig;
pub use error::ApiError;
pub use listeners::{Listeners, Subscription};
pub use mock::MockTransport;
pub use models::{
    Author, Celebrant, CelebrantDraft, Credentials, Event, EventDraft, EventStatus, Identified,
    KeyDate, Linked, Message, ProfileUpdate, Registration, ReminderSettings, Role, User,
};
pub use session::{AuthState, SessionState, SessionStore, SESSION_STORAGE_KEY};
pub use transport::{ApiRequest, DefaultTransport, Method, RawResponse, Transport, TransportError};
