use dioxus::prelude::*;

use api::ProfileUpdate;

use crate::{use_api, use_auth, use_session};

#[component]
pub fn ProfileView() -> Element {
    let api = use_api();
    let session = use_session();
    let auth = use_auth();
    let user = auth.read().user().cloned();

    let mut name = use_signal(|| user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut email = use_signal(|| user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let mut saving = use_signal(|| false);
    let mut success = use_signal(|| Option::<&'static str>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Follow the session when it changes underneath the form.
    use_effect(move || {
        if let Some(user) = auth.read().user() {
            name.set(user.name.clone());
            email.set(user.email.clone());
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let session = session.clone();
        async move {
            saving.set(true);
            error.set(None);
            success.set(None);
            let update = ProfileUpdate {
                name: name(),
                email: email(),
            };
            match api.update_me(&update).await {
                Ok(()) => {
                    success.set(Some("Profile updated successfully"));
                    session.refresh().await;
                }
                Err(e) => error.set(Some(e.user_message("Unable to update profile"))),
            }
            saving.set(false);
        }
    };

    let (display_name, display_email, role) = user
        .map(|u| (u.name.clone(), u.email.clone(), u.role.as_str()))
        .unwrap_or_default();

    rsx! {
        div {
            class: "profile",
            header {
                h1 { "Your profile" }
                p { "Keep your Se-Embe account details up to date." }
            }
            section {
                class: "profile__card",
                div {
                    class: "profile__overview",
                    h2 { "{display_name}" }
                    p { "{display_email}" }
                    span { class: "profile__role", "Role: {role}" }
                }
                form {
                    class: "profile__form",
                    onsubmit: onsubmit,
                    if let Some(message) = success() {
                        div { class: "profile__success", "{message}" }
                    }
                    if let Some(message) = error() {
                        div { class: "profile__error", "{message}" }
                    }
                    label {
                        "Name"
                        input {
                            r#type: "text",
                            required: true,
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    label {
                        "Email"
                        input {
                            r#type: "email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save changes" }
                    }
                }
            }
        }
    }
}
