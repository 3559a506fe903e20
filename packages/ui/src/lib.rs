//! This crate contains all shared UI for the workspace.
//!
//! Views are platform-neutral: they fetch through [`use_api`], act on the
//! session through [`use_session`] and ask for navigation with an
//! `EventHandler<Destination>` that the platform crate maps onto its router.
//! The pure pieces (guards, form conversions, filters, dashboard figures)
//! live in their own modules and are unit tested without a renderer.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_api, use_auth, use_session, AppClient, AppSession, AuthProvider};

pub mod dialogs;
pub mod filters;
pub mod forms;
pub mod guards;
pub use guards::GuardDecision;
pub mod summary;

mod navigation;
pub use navigation::{Destination, NavLink};

mod navbar;
pub use navbar::{Footer, Navbar};

pub mod views;
