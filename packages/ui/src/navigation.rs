//! App destinations. Shared views ask to go somewhere through an
//! `EventHandler<Destination>`; the platform crate maps each one onto its
//! router.

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Register,
    Logout,
    Dashboard,
    Events,
    NewEvent,
    EditEvent(String),
    EventMessages(String),
    Celebrants,
    NewCelebrant,
    EditCelebrant(String),
    Profile,
    AdminUsers,
    /// Previous history entry.
    Back,
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::Home => "/".to_string(),
            Destination::Login => "/login".to_string(),
            Destination::Register => "/register".to_string(),
            Destination::Logout => "/logout".to_string(),
            Destination::Dashboard => "/dashboard".to_string(),
            Destination::Events => "/events".to_string(),
            Destination::NewEvent => "/events/new".to_string(),
            Destination::EditEvent(id) => format!("/events/{id}/edit"),
            Destination::EventMessages(id) => format!("/events/{id}/messages"),
            Destination::Celebrants => "/celebrants".to_string(),
            Destination::NewCelebrant => "/celebrants/new".to_string(),
            Destination::EditCelebrant(id) => format!("/celebrants/{id}/edit"),
            Destination::Profile => "/profile".to_string(),
            Destination::AdminUsers => "/admin/users".to_string(),
            Destination::Back => "#".to_string(),
        }
    }
}

/// Anchor with a real `href` that navigates through the router.
#[component]
pub fn NavLink(
    to: Destination,
    on_navigate: EventHandler<Destination>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let href = to.path();
    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_navigate.call(to.clone());
            },
            {children}
        }
    }
}
