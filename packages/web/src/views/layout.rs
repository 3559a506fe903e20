//! Layout routes: the page shell and the two access guards.

use dioxus::prelude::*;
use ui::{guards, use_auth, Footer, Navbar};

use super::{redirect, use_go};
use crate::Route;

/// Navbar, page body and footer around every route.
#[component]
pub fn Shell() -> Element {
    let go = use_go();
    rsx! {
        div {
            class: "app-shell",
            Navbar { on_navigate: go }
            main {
                class: "app-shell__main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

/// Signed-in users only. Others go to login with the requested path kept.
#[component]
pub fn Protected() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let decision = guards::require_authenticated(&auth.read(), &route.to_string());
    if let Some(element) = redirect(use_navigator(), decision) {
        return element;
    }
    rsx! { Outlet::<Route> {} }
}

/// Admins only.
#[component]
pub fn AdminOnly() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let decision = guards::require_admin(&auth.read(), &route.to_string());
    if let Some(element) = redirect(use_navigator(), decision) {
        return element;
    }
    rsx! { Outlet::<Route> {} }
}
