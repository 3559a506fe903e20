use dioxus::prelude::*;

use ui::AuthProvider;
use views::{
    AdminOnly, AdminUsers, Celebrants, Dashboard, EditCelebrant, EditEvent, EventMessages,
    Events, Home, Login, Logout, NewCelebrant, NewEvent, NotFound, Profile, Protected, Register,
    Shell,
};

#[cfg(feature = "server")]
mod server;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login?:from")]
        Login { from: String },
        #[route("/register")]
        Register {},
        #[route("/logout")]
        Logout {},

        #[layout(Protected)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/events")]
            Events {},
            #[route("/events/new")]
            NewEvent {},
            #[route("/events/:id/edit")]
            EditEvent { id: String },
            #[route("/events/:id/messages")]
            EventMessages { id: String },
            #[route("/celebrants")]
            Celebrants {},
            #[route("/celebrants/new")]
            NewCelebrant {},
            #[route("/celebrants/:id/edit")]
            EditCelebrant { id: String },
            #[route("/profile")]
            Profile {},
        #[end_layout]

        #[layout(AdminOnly)]
            #[route("/admin/users")]
            AdminUsers {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> std::io::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    server::serve().await
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Seembe" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
