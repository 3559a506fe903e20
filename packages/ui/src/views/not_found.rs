use dioxus::prelude::*;

use crate::{Destination, NavLink};

#[component]
pub fn NotFoundView(on_navigate: EventHandler<Destination>) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "The page you are looking for might have been moved or removed." }
            NavLink { to: Destination::Home, on_navigate: on_navigate, class: "not-found__button", "Return home" }
        }
    }
}
