use api::ApiError;
use chrono::{Local, Utc};
use dioxus::prelude::*;

use crate::summary::DashboardSummary;
use crate::{use_api, use_auth, Destination, NavLink};

#[component]
pub fn DashboardView(on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let greeting = auth
        .read()
        .user()
        .map(|user| user.name.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "there".to_string());

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            let (events, celebrants) =
                futures::try_join!(api.list_events(), api.list_celebrants())?;
            Ok::<_, ApiError>(DashboardSummary::new(&events, &celebrants, Utc::now()))
        }
    });

    let body = match &*data.read_unchecked() {
        None => rsx! { div { class: "page-loading", "Loading your dashboard..." } },
        Some(Err(e)) => {
            let message = e.user_message("Unable to load dashboard");
            rsx! { div { class: "page-error", "{message}" } }
        }
        Some(Ok(summary)) => rsx! {
            section {
                class: "dashboard__metrics",
                Metric { label: "Total events", value: summary.total_events }
                Metric { label: "Upcoming events", value: summary.upcoming_events }
                Metric { label: "Past events", value: summary.past_events }
                Metric { label: "Celebrants", value: summary.celebrants }
            }
            section {
                class: "dashboard__grid",
                div {
                    class: "dashboard__panel",
                    div {
                        class: "dashboard__panel-heading",
                        h2 { "Next celebration" }
                        NavLink { to: Destination::Events, on_navigate: on_navigate, "View all" }
                    }
                    if let Some(next) = &summary.next_event {
                        div {
                            class: "dashboard__event-card",
                            h3 { "{next.title}" }
                            span { {next.date.with_timezone(&Local).format("%A, %B %-d").to_string()} }
                            p { "{next.status.as_str()}" }
                            NavLink {
                                to: Destination::EventMessages(next.id.clone()),
                                on_navigate: on_navigate,
                                class: "dashboard__event-link",
                                "Open preparation hub"
                            }
                        }
                    } else {
                        div {
                            class: "dashboard__empty",
                            p { "No upcoming events yet." }
                            NavLink { to: Destination::NewEvent, on_navigate: on_navigate, "Schedule your first event" }
                        }
                    }
                }
                div {
                    class: "dashboard__panel",
                    div {
                        class: "dashboard__panel-heading",
                        h2 { "Celebrant spotlight" }
                        NavLink { to: Destination::Celebrants, on_navigate: on_navigate, "See directory" }
                    }
                    if let Some(spotlight) = &summary.spotlight {
                        div {
                            class: "dashboard__celebrant-card",
                            h3 { "{spotlight.celebrant.name}" }
                            span { "{spotlight.celebrant.relationship}" }
                            p {
                                "{spotlight.events} scheduled event"
                                if spotlight.events != 1 { "s" }
                            }
                            NavLink {
                                to: Destination::EditCelebrant(spotlight.celebrant.id.clone()),
                                on_navigate: on_navigate,
                                "Update details"
                            }
                        }
                    } else {
                        div {
                            class: "dashboard__empty",
                            p { "No celebrants tracked yet." }
                            NavLink { to: Destination::NewCelebrant, on_navigate: on_navigate, "Add someone special" }
                        }
                    }
                }
            }
            section {
                class: "dashboard__list",
                div {
                    class: "dashboard__panel",
                    div { class: "dashboard__panel-heading", h2 { "Upcoming timeline" } }
                    if summary.timeline.is_empty() {
                        div { class: "dashboard__empty", p { "You have no events yet." } }
                    } else {
                        ul {
                            class: "dashboard__timeline",
                            for event in summary.timeline.iter() {
                                li {
                                    key: "{event.id}",
                                    div {
                                        span {
                                            class: "dashboard__timeline-date",
                                            {event.date.with_timezone(&Local).format("%x").to_string()}
                                        }
                                        h3 { "{event.title}" }
                                        p { "{event.status.as_str()}" }
                                    }
                                    NavLink {
                                        to: Destination::EditEvent(event.id.clone()),
                                        on_navigate: on_navigate,
                                        "Edit"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard__header",
                div {
                    h1 { "Hello, {greeting}" }
                    p { "Here is a summary of upcoming celebrations and the people you're planning for." }
                }
                div {
                    class: "dashboard__quick-actions",
                    NavLink { to: Destination::NewEvent, on_navigate: on_navigate, class: "dashboard__action primary", "+ New event" }
                    NavLink { to: Destination::NewCelebrant, on_navigate: on_navigate, class: "dashboard__action ghost", "+ Add celebrant" }
                }
            }
            {body}
        }
    }
}

#[component]
fn Metric(label: &'static str, value: usize) -> Element {
    rsx! {
        article {
            span { "{label}" }
            strong { "{value}" }
        }
    }
}
