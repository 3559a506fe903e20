use dioxus::prelude::*;

use crate::use_session;

/// Signs out on mount, then calls `on_done`.
#[component]
pub fn LogoutView(on_done: EventHandler<()>) -> Element {
    let session = use_session();

    use_future(move || {
        let session = session.clone();
        async move {
            session.logout().await;
            on_done.call(());
        }
    });

    rsx! {
        div { class: "page-loading", role: "status", "Signing you out..." }
    }
}
