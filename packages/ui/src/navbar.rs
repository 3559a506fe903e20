use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::icons::{FaCalendar, FaHouse, FaRightFromBracket, FaUser, FaUserShield, FaUsers};
use crate::{use_auth, Destination, Icon, NavLink};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar. Links depend on whether someone is signed in and their role.
#[component]
pub fn Navbar(on_navigate: EventHandler<Destination>) -> Element {
    let auth = use_auth();
    let state = auth.read();
    let signed_in = state.is_authenticated();
    let is_admin = state.is_admin();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            NavLink { to: Destination::Home, on_navigate: on_navigate, class: "navbar__brand", "Se-Embe" }
            div {
                class: "navbar__links",
                NavLink { to: Destination::Home, on_navigate: on_navigate,
                    Icon { icon: FaHouse, width: 14, height: 14 }
                    " Home"
                }
                if signed_in {
                    NavLink { to: Destination::Dashboard, on_navigate: on_navigate, "Dashboard" }
                    NavLink { to: Destination::Events, on_navigate: on_navigate,
                        Icon { icon: FaCalendar, width: 14, height: 14 }
                        " Events"
                    }
                    NavLink { to: Destination::Celebrants, on_navigate: on_navigate,
                        Icon { icon: FaUsers, width: 14, height: 14 }
                        " Celebrants"
                    }
                    NavLink { to: Destination::Profile, on_navigate: on_navigate,
                        Icon { icon: FaUser, width: 14, height: 14 }
                        " Profile"
                    }
                }
                if is_admin {
                    NavLink { to: Destination::AdminUsers, on_navigate: on_navigate,
                        Icon { icon: FaUserShield, width: 14, height: 14 }
                        " Admin"
                    }
                }
            }
            div {
                class: "navbar__auth",
                if signed_in {
                    NavLink { to: Destination::Logout, on_navigate: on_navigate, class: "navbar__signout",
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        " Sign out"
                    }
                } else {
                    NavLink { to: Destination::Login, on_navigate: on_navigate, "Login" }
                    NavLink { to: Destination::Register, on_navigate: on_navigate, class: "navbar__cta", "Sign up" }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();
    rsx! {
        footer {
            class: "footer",
            p { "Built with care for every celebration © {year} Se-Embe" }
        }
    }
}
