mod layout;
pub use layout::{AdminOnly, Protected, Shell};

mod auth;
pub use auth::{Login, Logout, Register};

mod events;
pub use events::{EditEvent, EventMessages, Events, NewEvent};

mod celebrants;
pub use celebrants::{Celebrants, EditCelebrant, NewCelebrant};

mod pages;
pub use pages::{AdminUsers, Dashboard, Home, NotFound, Profile};

use dioxus::prelude::*;
use dioxus::router::Navigator;
use ui::{Destination, GuardDecision};

use crate::Route;

/// Router entry for a destination. `None` for [`Destination::Back`].
pub(crate) fn route_for(destination: Destination) -> Option<Route> {
    let route = match destination {
        Destination::Home => Route::Home {},
        Destination::Login => Route::Login { from: String::new() },
        Destination::Register => Route::Register {},
        Destination::Logout => Route::Logout {},
        Destination::Dashboard => Route::Dashboard {},
        Destination::Events => Route::Events {},
        Destination::NewEvent => Route::NewEvent {},
        Destination::EditEvent(id) => Route::EditEvent { id },
        Destination::EventMessages(id) => Route::EventMessages { id },
        Destination::Celebrants => Route::Celebrants {},
        Destination::NewCelebrant => Route::NewCelebrant {},
        Destination::EditCelebrant(id) => Route::EditCelebrant { id },
        Destination::Profile => Route::Profile {},
        Destination::AdminUsers => Route::AdminUsers {},
        Destination::Back => return None,
    };
    Some(route)
}

/// Handler that pushes a destination onto the router history.
pub(crate) fn use_go() -> EventHandler<Destination> {
    let nav = use_navigator();
    use_callback(move |destination: Destination| match route_for(destination) {
        Some(route) => {
            nav.push(route);
        }
        None => nav.go_back(),
    })
}

/// Handler for a finished sign-in: continue to the given path, or the
/// dashboard when it is not one of ours.
pub(crate) fn use_signed_in() -> EventHandler<String> {
    let nav = use_navigator();
    use_callback(move |path: String| {
        let target = path.parse::<Route>().unwrap_or(Route::Dashboard {});
        nav.replace(target);
    })
}

/// Applies a guard decision. `None` means the page should render.
pub(crate) fn redirect(nav: Navigator, decision: GuardDecision) -> Option<Element> {
    match decision {
        GuardDecision::Render => None,
        GuardDecision::Wait => Some(rsx! {
            div { class: "page-loading", "Checking your session..." }
        }),
        GuardDecision::ToLogin { from } => {
            nav.replace(Route::Login { from });
            Some(rsx! {})
        }
        GuardDecision::ToDashboard => {
            nav.replace(Route::Dashboard {});
            Some(rsx! {})
        }
    }
}
