use dioxus::prelude::*;
use snapform_core::Effects;
use snapform_core::mock;
use snapform_core::preview_rsx::labelled_field;
use snapform_editor::toast::use_effects;

/// What a respondent sees. The same fixed form is shown for every id.
#[component]
pub fn PublicForm(id: String) -> Element {
    let effects = use_effects();
    let (meta, fields) = use_hook(mock::public_form);

    rsx! {
        section {
            class: "container narrow",
            div {
                class: "sf-card public-form",
                "data-form-id": "{id}",
                h1 { class: "page-title", "{meta.title}" }
                p { class: "sf-muted", "{meta.description}" }
                div {
                    class: "sf-form-body",
                    for field in fields.iter() {
                        div { key: "{field.id()}", {labelled_field(field)} }
                    }
                    button {
                        class: "sf-btn primary",
                        onclick: move |_| effects.notify("Submitted", "Thanks! This is a mock submission."),
                        "Submit"
                    }
                }
            }
        }
    }
}
