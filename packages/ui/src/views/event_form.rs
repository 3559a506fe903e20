use dioxus::prelude::*;

use api::{ApiError, EventStatus};

use crate::forms::{EventForm, MAX_REMINDER_DAYS};
use crate::{use_api, Destination};

/// Create (`id == None`) or edit an event.
#[component]
pub fn EventFormView(id: Option<String>, on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let editing = id.is_some();
    let mut form = use_signal(EventForm::default);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let load_id = id.clone();
    let loader = use_resource(move || {
        let api = load_api.clone();
        let id = load_id.clone();
        async move {
            let celebrants = api.list_celebrants().await.map_err(|e| {
                error.set(Some(e.user_message("Unable to load celebrants")));
                e
            });
            if let Some(id) = id {
                match api.get_event(&id).await {
                    Ok(event) => form.set(EventForm::from_event(&event)),
                    Err(e) => error.set(Some(e.user_message("Unable to load event"))),
                }
            }
            celebrants.unwrap_or_default()
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let id = id.clone();
        async move {
            saving.set(true);
            error.set(None);
            let fallback = if id.is_some() {
                "Unable to update event"
            } else {
                "Unable to create event"
            };
            let draft = form.read().to_draft();
            let result: Result<(), ApiError> = match draft {
                Ok(draft) => match &id {
                    Some(id) => api.update_event(id, &draft).await,
                    None => api.create_event(&draft).await,
                },
                Err(e) => Err(e),
            };
            saving.set(false);
            match result {
                Ok(()) => on_navigate.call(Destination::Events),
                Err(e) => error.set(Some(e.user_message(fallback))),
            }
        }
    };

    let heading = if editing { "Update event details" } else { "Create a new event" };
    let subtitle = if editing {
        "Adjust details, schedules, or reminder preferences."
    } else {
        "Connect an event to a celebrant and decide when to be reminded."
    };
    let current = form.read().clone();
    let celebrants = loader.read_unchecked().clone();

    rsx! {
        div {
            class: "event-form",
            header {
                h1 { "{heading}" }
                p { "{subtitle}" }
            }
            if let Some(message) = error() {
                div { class: "page-error", "{message}" }
            }
            {match celebrants {
                None => rsx! { div { class: "page-loading", "Preparing form..." } },
                Some(celebrants) => rsx! {
                    form {
                        class: "event-form__form",
                        onsubmit: onsubmit,
                        label {
                            "Event title"
                            input {
                                r#type: "text",
                                required: true,
                                placeholder: "e.g. Mom's 60th Birthday",
                                value: "{current.title}",
                                oninput: move |evt| form.write().title = evt.value(),
                            }
                        }
                        label {
                            "Date & time"
                            input {
                                r#type: "datetime-local",
                                required: true,
                                value: "{current.date}",
                                oninput: move |evt| form.write().date = evt.value(),
                            }
                        }
                        label {
                            "Celebrant"
                            select {
                                required: true,
                                onchange: move |evt| form.write().celebrant = evt.value(),
                                option { value: "", disabled: true, selected: current.celebrant.is_empty(), "Select celebrant" }
                                for celebrant in celebrants.iter() {
                                    option {
                                        key: "{celebrant.id}",
                                        value: "{celebrant.id}",
                                        selected: current.celebrant == celebrant.id,
                                        "{celebrant.name} ({celebrant.relationship})"
                                    }
                                }
                            }
                        }
                        label {
                            "Reminder (days before)"
                            input {
                                r#type: "number",
                                min: "0",
                                max: "{MAX_REMINDER_DAYS}",
                                value: "{current.reminder_days}",
                                oninput: move |evt| form.write().reminder_days = evt.value(),
                            }
                        }
                        label {
                            "Notes for reminder"
                            textarea {
                                rows: "4",
                                placeholder: "Gift ideas, tasks, message prompts...",
                                value: "{current.notes}",
                                oninput: move |evt| form.write().notes = evt.value(),
                            }
                        }
                        if editing {
                            label {
                                "Status"
                                select {
                                    onchange: move |evt| {
                                        if let Some(status) = EventStatus::parse(&evt.value()) {
                                            form.write().status = status;
                                        }
                                    },
                                    for status in EventStatus::ALL {
                                        option {
                                            value: "{status.as_str()}",
                                            selected: status == current.status,
                                            "{status.label()}"
                                        }
                                    }
                                }
                            }
                        }
                        div {
                            class: "event-form__actions",
                            button {
                                r#type: "button",
                                class: "ghost",
                                disabled: saving(),
                                onclick: move |_| on_navigate.call(Destination::Back),
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                disabled: saving(),
                                if saving() {
                                    "Saving..."
                                } else if editing {
                                    "Save changes"
                                } else {
                                    "Create event"
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
