use dioxus::prelude::*;
use ui::views::{AdminUsersView, DashboardView, HomeView, NotFoundView, ProfileView};

use super::use_go;

#[component]
pub fn Home() -> Element {
    let go = use_go();
    rsx! { HomeView { on_navigate: go } }
}

#[component]
pub fn Dashboard() -> Element {
    let go = use_go();
    rsx! { DashboardView { on_navigate: go } }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ProfileView {} }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! { AdminUsersView {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let go = use_go();
    dioxus::logger::tracing::debug!("No route for /{}", segments.join("/"));
    rsx! { NotFoundView { on_navigate: go } }
}
