use dioxus::prelude::*;
use ui::views::{CelebrantFormView, CelebrantsView};

use super::use_go;

#[component]
pub fn Celebrants() -> Element {
    let go = use_go();
    rsx! { CelebrantsView { on_navigate: go } }
}

#[component]
pub fn NewCelebrant() -> Element {
    let go = use_go();
    rsx! { CelebrantFormView { id: None, on_navigate: go } }
}

#[component]
pub fn EditCelebrant(id: String) -> Element {
    let go = use_go();
    rsx! { CelebrantFormView { key: "{id}", id: Some(id.clone()), on_navigate: go } }
}
