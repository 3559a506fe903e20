use dioxus::prelude::*;
use ui::{guards, use_auth, views::{LoginView, LogoutView, RegisterView}};

use super::{redirect, use_go, use_signed_in};
use crate::Route;

#[component]
pub fn Login(from: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let go = use_go();
    let signed_in = use_signed_in();

    if let Some(element) = redirect(nav, guards::require_signed_out(&auth.read())) {
        return element;
    }
    rsx! {
        LoginView { from: from, on_navigate: go, on_signed_in: signed_in }
    }
}

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let go = use_go();
    let signed_in = use_signed_in();

    if let Some(element) = redirect(nav, guards::require_signed_out(&auth.read())) {
        return element;
    }
    rsx! {
        RegisterView { on_navigate: go, on_signed_in: signed_in }
    }
}

#[component]
pub fn Logout() -> Element {
    let nav = use_navigator();
    rsx! {
        LogoutView {
            on_done: move |_| {
                nav.replace(Route::Login { from: String::new() });
            },
        }
    }
}
