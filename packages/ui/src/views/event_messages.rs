use chrono::Local;
use dioxus::prelude::*;

use api::ApiError;

use crate::dialogs::{attempt, confirm_then, BrowserDialogs};
use crate::filters::newest_first;
use crate::icons::FaTrash;
use crate::{use_api, use_auth, Icon};

/// Planning notes for one event.
#[component]
pub fn EventMessagesView(id: String) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut draft = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let fetch_api = api.clone();
    let fetch_id = id.clone();
    let mut data = use_resource(move || {
        let api = fetch_api.clone();
        let id = fetch_id.clone();
        async move {
            let (event, messages) = futures::try_join!(api.get_event(&id), api.list_messages(&id))?;
            Ok::<_, ApiError>((event, newest_first(messages)))
        }
    });

    let post_api = api.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = post_api.clone();
        let id = id.clone();
        async move {
            let content = draft();
            if content.trim().is_empty() {
                return;
            }
            submitting.set(true);
            let outcome = attempt(
                &BrowserDialogs,
                "Could not send message",
                api.create_message(&id, &content),
            )
            .await;
            submitting.set(false);
            if outcome.is_done() {
                draft.set(String::new());
                data.restart();
            }
        }
    };

    let on_delete = use_callback(move |message_id: String| {
        let api = api.clone();
        spawn(async move {
            let outcome = confirm_then(
                &BrowserDialogs,
                "Delete this note?",
                "Unable to delete message",
                api.delete_message(&message_id),
            )
            .await;
            if outcome.is_done() {
                data.restart();
            }
        });
    });

    let me = auth.read().user().cloned();

    match &*data.read_unchecked() {
        None => rsx! { div { class: "page-loading", "Loading message hub..." } },
        Some(Err(e)) => {
            let message = e.user_message("Unable to load event messages");
            rsx! { div { class: "page-error", "{message}" } }
        }
        Some(Ok((event, messages))) => rsx! {
            div {
                class: "messages",
                header {
                    class: "messages__header",
                    div {
                        h1 { "Message hub: {event.title}" }
                        p { "Capture ideas, checklists, and notes for this celebration. Share updates with collaborators easily." }
                    }
                    div {
                        class: "messages__meta",
                        span { {event.date.with_timezone(&Local).format("%A, %B %-d").to_string()} }
                        span { "Status: {event.status.as_str()}" }
                    }
                }
                section {
                    class: "messages__composer",
                    form {
                        onsubmit: onsubmit,
                        textarea {
                            rows: "4",
                            required: true,
                            placeholder: "Add a note, to-do, or message template...",
                            value: "{draft}",
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Posting..." } else { "Post message" }
                        }
                    }
                }
                section {
                    class: "messages__list",
                    if messages.is_empty() {
                        div {
                            class: "messages__empty",
                            p { "No notes yet. Kick off the planning with your first message." }
                        }
                    }
                    for message in messages.iter() {
                        article {
                            key: "{message.id}",
                            class: "messages__card",
                            header {
                                span {
                                    {message
                                        .created_at
                                        .map(|at| at.with_timezone(&Local).format("%b %-d, %H:%M").to_string())
                                        .unwrap_or_default()}
                                }
                                // The backend decides who may delete; this only hides the button.
                                if me.as_ref().is_some_and(|me| message.is_authored_by(me)) {
                                    button {
                                        onclick: {
                                            let message_id = message.id.clone();
                                            move |_| on_delete.call(message_id.clone())
                                        },
                                        Icon { icon: FaTrash, width: 12, height: 12 }
                                        " Delete"
                                    }
                                }
                            }
                            p { "{message.content}" }
                        }
                    }
                }
            }
        },
    }
}
