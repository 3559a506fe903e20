use dioxus::prelude::*;

use api::Credentials;

use crate::guards::return_path;
use crate::{use_auth, use_session, Destination, NavLink};

/// Sign-in form. `from` is the location to return to afterwards.
#[component]
pub fn LoginView(
    from: String,
    on_navigate: EventHandler<Destination>,
    /// Called with the path to continue to.
    on_signed_in: EventHandler<String>,
) -> Element {
    let session = use_session();
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let notice = auth.read().notice.clone();
    let dismiss_session = session.clone();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        let from = from.clone();
        async move {
            loading.set(true);
            error.set(None);
            let credentials = Credentials {
                email: email(),
                password: password(),
            };
            match session.login(&credentials).await {
                Ok(user) => {
                    tracing::info!("Signed in as {}", user.email);
                    loading.set(false);
                    on_signed_in.call(return_path(&from).to_string());
                }
                Err(e) => {
                    error.set(Some(e.user_message("Unable to sign in. Try again.")));
                    loading.set(false);
                }
            }
        }
    };

    rsx! {
        div {
            class: "auth auth--login",
            div {
                class: "auth__container",
                h1 { "Welcome back" }
                p { class: "auth__subtitle", "Sign in to keep celebrating the people who matter the most." }

                if let Some(message) = error() {
                    div { class: "auth__error", "{message}" }
                } else if let Some(message) = notice {
                    div {
                        class: "auth__notice",
                        role: "status",
                        span { "{message}" }
                        button {
                            r#type: "button",
                            class: "auth__notice-dismiss",
                            aria_label: "Dismiss",
                            onclick: move |_| dismiss_session.dismiss_notice(),
                            "×"
                        }
                    }
                }

                form {
                    class: "auth__form",
                    onsubmit: onsubmit,
                    label {
                        "Email"
                        input {
                            r#type: "email",
                            name: "email",
                            autocomplete: "email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    label {
                        "Password"
                        input {
                            r#type: "password",
                            name: "password",
                            autocomplete: "current-password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }
                p {
                    class: "auth__switch",
                    "New here? "
                    NavLink { to: Destination::Register, on_navigate: on_navigate, "Create an account" }
                }
            }
        }
    }
}
