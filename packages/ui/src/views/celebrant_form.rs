use dioxus::prelude::*;

use api::models::KEY_DATE_KINDS;

use crate::forms::CelebrantForm;
use crate::{use_api, Destination};

/// Create (`id == None`) or edit a celebrant.
#[component]
pub fn CelebrantFormView(id: Option<String>, on_navigate: EventHandler<Destination>) -> Element {
    let api = use_api();
    let editing = id.is_some();
    let mut form = use_signal(CelebrantForm::default);
    let mut loading = use_signal(|| editing);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let load_id = id.clone();
    use_effect(move || {
        let Some(id) = load_id.clone() else {
            return;
        };
        let api = load_api.clone();
        spawn(async move {
            loading.set(true);
            match api.get_celebrant(&id).await {
                Ok(celebrant) => {
                    form.set(CelebrantForm::from_celebrant(&celebrant));
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message("Unable to load celebrant"))),
            }
            loading.set(false);
        });
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let id = id.clone();
        async move {
            saving.set(true);
            error.set(None);
            let fallback = if id.is_some() {
                "Unable to update celebrant"
            } else {
                "Unable to create celebrant"
            };
            let draft = form.read().to_draft();
            let result = match draft {
                Ok(draft) => match &id {
                    Some(id) => api.update_celebrant(id, &draft).await,
                    None => api.create_celebrant(&draft).await,
                },
                Err(e) => Err(e),
            };
            saving.set(false);
            match result {
                Ok(()) => on_navigate.call(Destination::Celebrants),
                Err(e) => error.set(Some(e.user_message(fallback))),
            }
        }
    };

    let heading = if editing { "Update celebrant profile" } else { "Add a new celebrant" };
    let subtitle = if editing {
        "Keep their preferences, key dates, and notes up to date."
    } else {
        "Store everything you need to deliver meaningful celebrations."
    };
    let rows = form.read().key_dates.clone();
    let can_remove = rows.len() > 1;

    rsx! {
        div {
            class: "celebrant-form",
            header {
                h1 { "{heading}" }
                p { "{subtitle}" }
            }
            if let Some(message) = error() {
                div { class: "page-error", "{message}" }
            }
            if loading() {
                div { class: "page-loading", "Preparing celebrant profile..." }
            } else {
                form {
                    class: "celebrant-form__form",
                    onsubmit: onsubmit,
                    label {
                        "Name"
                        input {
                            r#type: "text",
                            required: true,
                            value: "{form.read().name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                    }
                    label {
                        "Relationship"
                        input {
                            r#type: "text",
                            required: true,
                            placeholder: "e.g. Sister, VIP Client",
                            value: "{form.read().relationship}",
                            oninput: move |evt| form.write().relationship = evt.value(),
                        }
                    }
                    label {
                        "Photo URL (optional)"
                        input {
                            r#type: "url",
                            placeholder: "https://",
                            value: "{form.read().photo_url}",
                            oninput: move |evt| form.write().photo_url = evt.value(),
                        }
                    }
                    label {
                        "Favourite things / tags"
                        input {
                            r#type: "text",
                            placeholder: "Separate with commas",
                            value: "{form.read().tags}",
                            oninput: move |evt| form.write().tags = evt.value(),
                        }
                    }
                    div {
                        class: "celebrant-form__dates",
                        div {
                            class: "celebrant-form__dates-heading",
                            span { "Key dates" }
                            button {
                                r#type: "button",
                                onclick: move |_| form.write().add_key_date(),
                                "+ Add date"
                            }
                        }
                        for (index, row) in rows.into_iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "celebrant-form__date",
                                select {
                                    value: "{row.kind}",
                                    onchange: move |evt| {
                                        if let Some(row) = form.write().key_dates.get_mut(index) {
                                            row.kind = evt.value();
                                        }
                                    },
                                    for kind in KEY_DATE_KINDS {
                                        option { value: "{kind}", selected: row.kind == kind, "{kind}" }
                                    }
                                }
                                input {
                                    r#type: "date",
                                    value: "{row.date}",
                                    oninput: move |evt| {
                                        if let Some(row) = form.write().key_dates.get_mut(index) {
                                            row.date = evt.value();
                                        }
                                    },
                                }
                                label {
                                    class: "celebrant-form__date-recurring",
                                    input {
                                        r#type: "checkbox",
                                        checked: row.recurring,
                                        onchange: move |evt| {
                                            if let Some(row) = form.write().key_dates.get_mut(index) {
                                                row.recurring = evt.checked();
                                            }
                                        },
                                    }
                                    "Recurring"
                                }
                                if can_remove {
                                    button {
                                        r#type: "button",
                                        class: "danger",
                                        onclick: move |_| form.write().remove_key_date(index),
                                        "Remove"
                                    }
                                }
                            }
                        }
                    }
                    label {
                        "Celebration notes"
                        textarea {
                            rows: "4",
                            placeholder: "Gift ideas, favourite restaurants, conversation starters...",
                            value: "{form.read().notes}",
                            oninput: move |evt| form.write().notes = evt.value(),
                        }
                    }
                    div {
                        class: "celebrant-form__actions",
                        button {
                            r#type: "button",
                            class: "ghost",
                            disabled: saving(),
                            onclick: move |_| on_navigate.call(Destination::Back),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            disabled: saving(),
                            if saving() {
                                "Saving..."
                            } else if editing {
                                "Save changes"
                            } else {
                                "Create celebrant"
                            }
                        }
                    }
                }
            }
        }
    }
}
