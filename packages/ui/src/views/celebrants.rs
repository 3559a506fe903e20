use dioxus::prelude::*;

use crate::dialogs::{confirm_then, BrowserDialogs};
use crate::icons::{FaPen, FaTrash};
use crate::{use_api, Destination, Icon, NavLink};

#[component]
pub fn CelebrantsView(on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let fetch_api = api.clone();
    let mut celebrants = use_resource(move || {
        let api = fetch_api.clone();
        async move { api.list_celebrants().await }
    });

    let on_delete = use_callback(move |id: String| {
        let api = api.clone();
        spawn(async move {
            let outcome = confirm_then(
                &BrowserDialogs,
                "Remove this celebrant and related events?",
                "Unable to delete celebrant",
                api.delete_celebrant(&id),
            )
            .await;
            if outcome.is_done() {
                celebrants.restart();
            }
        });
    });

    let body = match &*celebrants.read_unchecked() {
        None => rsx! { div { class: "page-loading", "Loading celebrants..." } },
        Some(Err(e)) => {
            let message = e.user_message("Unable to load celebrants");
            rsx! { div { class: "page-error", "{message}" } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            div {
                class: "celebrants__empty",
                p { "No celebrants saved yet." }
                NavLink { to: Destination::NewCelebrant, on_navigate: on_navigate, "Add your first celebrant" }
            }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "celebrants__grid",
                for celebrant in list.iter().cloned() {
                    article {
                        key: "{celebrant.id}",
                        class: "celebrants__card",
                        div {
                            class: "celebrants__heading",
                            if let Some(photo) = celebrant.photo_url.as_ref() {
                                img { src: "{photo}", alt: "{celebrant.name}" }
                            }
                            div {
                                h2 { "{celebrant.name}" }
                                span { "{celebrant.relationship}" }
                            }
                        }
                        if !celebrant.favourite_tags.is_empty() {
                            div {
                                class: "celebrants__tags",
                                for tag in celebrant.favourite_tags.iter() {
                                    span { key: "{tag}", "{tag}" }
                                }
                            }
                        }
                        if !celebrant.key_dates.is_empty() {
                            ul {
                                class: "celebrants__dates",
                                for key_date in celebrant.key_dates.iter() {
                                    li {
                                        strong { "{key_date.kind}" }
                                        span {
                                            {key_date.date.format("%B %-d").to_string()}
                                            if key_date.recurring { " • repeats" }
                                        }
                                    }
                                }
                            }
                        }
                        if !celebrant.notes.is_empty() {
                            p { class: "celebrants__notes", "{celebrant.notes}" }
                        }
                        div {
                            class: "celebrants__actions",
                            button {
                                onclick: {
                                    let id = celebrant.id.clone();
                                    move |_| on_navigate.call(Destination::EditCelebrant(id.clone()))
                                },
                                Icon { icon: FaPen, width: 12, height: 12 }
                                " Edit"
                            }
                            button {
                                class: "danger",
                                onclick: {
                                    let id = celebrant.id.clone();
                                    move |_| on_delete.call(id.clone())
                                },
                                Icon { icon: FaTrash, width: 12, height: 12 }
                                " Remove"
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "celebrants",
            header {
                class: "celebrants__header",
                div {
                    h1 { "Celebrants" }
                    p { "Keep heartfelt notes, favourite things, and milestones for the people you celebrate." }
                }
                NavLink { to: Destination::NewCelebrant, on_navigate: on_navigate, class: "celebrants__create", "+ Add celebrant" }
            }
            {body}
        }
    }
}
