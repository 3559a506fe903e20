use chrono::Local;
use dioxus::prelude::*;

use api::Role;

use crate::dialogs::{attempt, confirm_then, BrowserDialogs};
use crate::use_api;

/// Member table for admins.
#[component]
pub fn AdminUsersView() -> Element {
    let api = use_api();
    let fetch_api = api.clone();
    let mut users = use_resource(move || {
        let api = fetch_api.clone();
        async move { api.list_users().await }
    });

    let role_api = api.clone();
    let on_role = use_callback(move |(id, role): (String, Role)| {
        let api = role_api.clone();
        spawn(async move {
            let outcome = attempt(&BrowserDialogs, "Unable to update role", api.update_user_role(&id, role)).await;
            if outcome.is_done() {
                users.restart();
            }
        });
    });

    let on_delete = use_callback(move |id: String| {
        let api = api.clone();
        spawn(async move {
            let outcome = confirm_then(
                &BrowserDialogs,
                "Delete this user?",
                "Unable to delete user",
                api.delete_user(&id),
            )
            .await;
            if outcome.is_done() {
                users.restart();
            }
        });
    });

    let body = match &*users.read_unchecked() {
        None => rsx! { div { class: "page-loading", "Loading users..." } },
        Some(Err(e)) => {
            let message = e.user_message("Unable to fetch users");
            rsx! { div { class: "page-error", "{message}" } }
        }
        Some(Ok(members)) => rsx! {
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Joined" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for member in members.iter() {
                        tr {
                            key: "{member.id}",
                            td { "data-label": "Name", "{member.name}" }
                            td { "data-label": "Email", "{member.email}" }
                            td {
                                "data-label": "Role",
                                select {
                                    onchange: {
                                        let id = member.id.clone();
                                        move |evt: FormEvent| {
                                            if let Some(role) = Role::parse(&evt.value()) {
                                                on_role.call((id.clone(), role));
                                            }
                                        }
                                    },
                                    for role in Role::ALL {
                                        option {
                                            value: "{role.as_str()}",
                                            selected: role == member.role,
                                            "{role.label()}"
                                        }
                                    }
                                }
                            }
                            td {
                                "data-label": "Joined",
                                {member
                                    .created_at
                                    .map(|at| at.with_timezone(&Local).format("%x").to_string())
                                    .unwrap_or_default()}
                            }
                            td {
                                "data-label": "Actions",
                                button {
                                    onclick: {
                                        let id = member.id.clone();
                                        move |_| on_delete.call(id.clone())
                                    },
                                    "Remove"
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
            class: "admin-users",
            header {
                h1 { "Team management" }
                p { "Review members and update their roles whenever you need to." }
            }
            section {
                class: "admin-users__list",
                h2 { "Existing members" }
                {body}
            }
        }
    }
}
