use dioxus::prelude::*;

use api::Registration;

use crate::forms::validate_registration;
use crate::guards::DASHBOARD_PATH;
use crate::{use_session, Destination, NavLink};

#[component]
pub fn RegisterView(
    on_navigate: EventHandler<Destination>,
    on_signed_in: EventHandler<String>,
) -> Element {
    let session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        async move {
            error.set(None);
            if let Err(e) = validate_registration(&password(), &confirm()) {
                error.set(Some(e.message().to_string()));
                return;
            }
            loading.set(true);
            let registration = Registration {
                name: name(),
                email: email(),
                password: password(),
            };
            match session.register(&registration).await {
                Ok(_) => {
                    loading.set(false);
                    on_signed_in.call(DASHBOARD_PATH.to_string());
                }
                Err(e) => {
                    error.set(Some(e.user_message("Registration failed")));
                    loading.set(false);
                }
            }
        }
    };

    rsx! {
        div {
            class: "auth auth--register",
            div {
                class: "auth__container",
                h1 { "Create your Seembe account" }
                p {
                    class: "auth__subtitle",
                    "Track celebrants, plan events, and deliver heartfelt moments with less stress."
                }
                if let Some(message) = error() {
                    div { class: "auth__error", "{message}" }
                }
                form {
                    class: "auth__form",
                    onsubmit: onsubmit,
                    label {
                        "Full name"
                        input {
                            r#type: "text",
                            autocomplete: "name",
                            required: true,
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    label {
                        "Email"
                        input {
                            r#type: "email",
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
                            autocomplete: "new-password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    label {
                        "Confirm password"
                        input {
                            r#type: "password",
                            autocomplete: "new-password",
                            required: true,
                            value: "{confirm}",
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Create account" }
                    }
                }
                p {
                    class: "auth__switch",
                    "Already have an account? "
                    NavLink { to: Destination::Login, on_navigate: on_navigate, "Sign in" }
                }
            }
        }
    }
}
