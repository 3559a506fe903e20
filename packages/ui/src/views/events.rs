use chrono::Local;
use dioxus::prelude::*;

use api::{ApiError, EventStatus};

use crate::dialogs::{attempt, confirm_then, BrowserDialogs};
use crate::filters::{celebrant_label, EventFilters};
use crate::{use_api, Destination, NavLink};

#[component]
pub fn EventsView(on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let fetch_api = api.clone();
    let mut data = use_resource(move || {
        let api = fetch_api.clone();
        async move {
            let (events, celebrants) =
                futures::try_join!(api.list_events(), api.list_celebrants())?;
            Ok::<_, ApiError>((events, celebrants))
        }
    });
    let mut filters = use_signal(EventFilters::default);

    let delete_api = api.clone();
    let on_delete = use_callback(move |id: String| {
        let api = delete_api.clone();
        spawn(async move {
            let outcome = confirm_then(
                &BrowserDialogs,
                "Delete this event?",
                "Could not delete event",
                api.delete_event(&id),
            )
            .await;
            if outcome.is_done() {
                data.restart();
            }
        });
    });

    let on_status = use_callback(move |(id, status): (String, EventStatus)| {
        let api = api.clone();
        spawn(async move {
            let outcome = attempt(
                &BrowserDialogs,
                "Could not update event",
                api.update_event_status(&id, status),
            )
            .await;
            if outcome.is_done() {
                data.restart();
            }
        });
    });

    let celebrant_options = match &*data.read_unchecked() {
        Some(Ok((_, celebrants))) => celebrants.clone(),
        _ => Vec::new(),
    };

    let body = match &*data.read_unchecked() {
        None => rsx! { div { class: "page-loading", "Loading events..." } },
        Some(Err(e)) => {
            let message = e.user_message("Unable to load events");
            rsx! { div { class: "page-error", "{message}" } }
        }
        Some(Ok((events, celebrants))) => {
            let visible = filters.read().apply(events);
            rsx! {
                div {
                    class: "events__grid",
                    if visible.is_empty() {
                        div {
                            class: "events__empty",
                            p { "No events found. Try adjusting your filters or create a new one." }
                        }
                    }
                    for event in visible.into_iter() {
                        article {
                            key: "{event.id}",
                            class: "events__card",
                            div {
                                class: "events__status events__status--{event.status.as_str()}",
                                "{event.status.label()}"
                            }
                            h2 { "{event.title}" }
                            p {
                                class: "events__date",
                                {event.date.with_timezone(&Local).format("%c").to_string()}
                            }
                            p {
                                class: "events__celebrant",
                                "Celebrant: {celebrant_label(&event, celebrants)}"
                            }
                            if let Some(reminder) = event.reminder_settings.as_ref() {
                                p {
                                    class: "events__meta",
                                    "Reminder: {reminder.days_before} day(s) before"
                                    if !reminder.notes.is_empty() {
                                        " · {reminder.notes}"
                                    }
                                }
                            }
                            div {
                                class: "events__actions",
                                button {
                                    onclick: {
                                        let id = event.id.clone();
                                        move |_| on_navigate.call(Destination::EditEvent(id.clone()))
                                    },
                                    "Edit"
                                }
                                button {
                                    onclick: {
                                        let id = event.id.clone();
                                        move |_| on_navigate.call(Destination::EventMessages(id.clone()))
                                    },
                                    "Messages"
                                }
                                button {
                                    class: "danger",
                                    onclick: {
                                        let id = event.id.clone();
                                        move |_| on_delete.call(id.clone())
                                    },
                                    "Delete"
                                }
                            }
                            div {
                                class: "events__status-toggle",
                                label { r#for: "status-{event.id}", "Update status" }
                                select {
                                    id: "status-{event.id}",
                                    value: "{event.status.as_str()}",
                                    onchange: {
                                        let id = event.id.clone();
                                        move |evt: FormEvent| {
                                            if let Some(status) = EventStatus::parse(&evt.value()) {
                                                on_status.call((id.clone(), status));
                                            }
                                        }
                                    },
                                    for status in EventStatus::ALL {
                                        option {
                                            value: "{status.as_str()}",
                                            selected: status == event.status,
                                            "{status.label()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    let current = filters.read().clone();

    rsx! {
        div {
            class: "events",
            header {
                class: "events__header",
                div {
                    h1 { "Events" }
                    p { "Manage celebrations, reminders, and preparation tasks." }
                }
                NavLink { to: Destination::NewEvent, on_navigate: on_navigate, class: "events__create", "+ Schedule event" }
            }
            section {
                class: "events__filters",
                input {
                    r#type: "search",
                    placeholder: "Search events",
                    value: "{current.query}",
                    oninput: move |evt| filters.write().query = evt.value(),
                }
                select {
                    onchange: move |evt| filters.write().status = EventStatus::parse(&evt.value()),
                    option { value: "", selected: current.status.is_none(), "All statuses" }
                    for status in EventStatus::ALL {
                        option {
                            value: "{status.as_str()}",
                            selected: current.status == Some(status),
                            "{status.label()}"
                        }
                    }
                }
                select {
                    onchange: move |evt| filters.write().celebrant = evt.value(),
                    option { value: "", selected: current.celebrant.is_empty(), "All celebrants" }
                    for celebrant in celebrant_options.iter() {
                        option {
                            key: "{celebrant.id}",
                            value: "{celebrant.id}",
                            selected: current.celebrant == celebrant.id,
                            "{celebrant.name}"
                        }
                    }
                }
            }
            {body}
        }
    }
}
