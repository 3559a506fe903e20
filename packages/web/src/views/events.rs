use dioxus::prelude::*;
use ui::views::{EventFormView, EventMessagesView, EventsView};

use super::use_go;

#[component]
pub fn Events() -> Element {
    let go = use_go();
    rsx! { EventsView { on_navigate: go } }
}

#[component]
pub fn NewEvent() -> Element {
    let go = use_go();
    rsx! { EventFormView { id: None, on_navigate: go } }
}

#[component]
pub fn EditEvent(id: String) -> Element {
    let go = use_go();
    // Keyed so switching between events remounts the form.
    rsx! { EventFormView { key: "{id}", id: Some(id.clone()), on_navigate: go } }
}

#[component]
pub fn EventMessages(id: String) -> Element {
    rsx! { EventMessagesView { key: "{id}", id: id.clone() } }
}
