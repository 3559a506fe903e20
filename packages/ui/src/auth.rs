//! Session context and hooks for the UI.
//!
//! [`AuthProvider`] builds the app's one [`ApiClient`] and [`SessionStore`],
//! mirrors every session transition into a `Signal<AuthState>` and runs the
//! startup profile check. Components read the signal with [`use_auth`] and
//! act through [`use_session`] / [`use_api`].

use std::rc::Rc;

use api::{ApiClient, ApiConfig, AuthState, DefaultTransport, SessionStore};
use dioxus::prelude::*;
use store::DefaultStore;

pub type AppClient = ApiClient<DefaultTransport>;
pub type AppSession = SessionStore<DefaultTransport, DefaultStore>;

/// Current session snapshot. Updates on login, logout and any 401.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

pub fn use_api() -> AppClient {
    use_context::<AppClient>()
}

/// Wrap the router with this component.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_hook(|| {
        let config = ApiConfig::load();
        tracing::info!("Using API at {}", config.base_url);
        let client = ApiClient::new(DefaultTransport::default(), &config);
        SessionStore::new(client, DefaultStore::default())
    });
    let auth_state = use_signal(|| session.state());

    // Held for the provider's lifetime.
    let _watch = use_hook(|| {
        Rc::new(session.watch(move |state| {
            let mut auth_state = auth_state;
            auth_state.set(state.clone());
        }))
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| session.client().clone());
    let session = use_context_provider(|| session.clone());

    use_future(move || {
        let session = session.clone();
        async move { session.init().await }
    });

    if auth_state.read().is_loading() {
        return rsx! {
            div { class: "app-loading", "Loading Seembe..." }
        };
    }

    rsx! {
        {children}
    }
}
