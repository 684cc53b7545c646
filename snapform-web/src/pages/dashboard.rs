use dioxus::prelude::*;
use snapform_core::Effects;
use snapform_core::mock::{self, COLLAPSED_FORM_COUNT, FormSummary, TEMPLATES};
use snapform_editor::toast::use_effects;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let forms = use_hook(mock::forms);
    let mut show_all = use_signal(|| false);
    let mut open_menu = use_signal(|| None::<String>);

    let visible = mock::visible_forms(&forms, show_all()).to_vec();
    let can_expand = forms.len() > COLLAPSED_FORM_COUNT;

    rsx! {
        div {
            class: "container",
            section {
                class: "sf-card agent-card",
                h3 { "Create form with agent AI" }
                p {
                    class: "sf-muted",
                    "Describe the form you need and the agent drafts the fields. Coming soon, this preview is static."
                }
                div {
                    class: "control-row",
                    input { class: "sf-input", placeholder: "A feedback form for a coffee shop...", disabled: true }
                    button { class: "sf-btn secondary", disabled: true, "Generate" }
                }
            }

            section {
                class: "section",
                div {
                    class: "section-head",
                    h2 { "Your Forms" }
                    div {
                        class: "control-row",
                        if can_expand {
                            button {
                                class: "sf-btn ghost",
                                onclick: move |_| show_all.toggle(),
                                if show_all() { "Show Less" } else { "See All" }
                            }
                        }
                        Link { to: Route::Create {}, class: "sf-btn primary", "New Form" }
                    }
                }
                div {
                    class: "form-grid",
                    Link {
                        to: Route::Create {},
                        class: "sf-card create-card",
                        div { class: "plus", "+" }
                        span { "Create a new form" }
                    }
                    for form in visible {
                        FormTile {
                            key: "{form.id}",
                            form: form.clone(),
                            menu_open: open_menu.read().as_deref() == Some(form.id.as_str()),
                            on_toggle_menu: move |id: String| {
                                let next = if open_menu.peek().as_deref() == Some(id.as_str()) { None } else { Some(id) };
                                open_menu.set(next);
                            },
                        }
                    }
                }
            }

            section {
                class: "section",
                div { class: "section-head", h2 { "Templates" } }
                div {
                    class: "form-grid",
                    for template in TEMPLATES {
                        div {
                            key: "{template.id}",
                            class: "sf-card template-card",
                            h3 { "{template.title}" }
                            p { class: "sf-muted small", "Starter template" }
                            Link { to: Route::Create {}, class: "sf-btn outline", "Use Template" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FormTile(form: FormSummary, menu_open: bool, on_toggle_menu: EventHandler<String>) -> Element {
    let effects = use_effects();
    let id = form.id.clone();
    let delete_id = form.id.clone();

    rsx! {
        div {
            class: "sf-card form-tile",
            div {
                class: "tile-head",
                h3 { "{form.title}" }
                div {
                    class: "menu",
                    button {
                        class: "icon-btn",
                        aria_label: "Form actions",
                        onclick: move |_| on_toggle_menu.call(id.clone()),
                        "⋯"
                    }
                    if menu_open {
                        div {
                            class: "menu-content",
                            button {
                                class: "menu-item danger",
                                onclick: move |_| {
                                    effects.notify("Mock delete", "Nothing was deleted.");
                                    on_toggle_menu.call(delete_id.clone());
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
            p { class: "sf-muted small", "Updated {form.updated_at}" }
            div {
                class: "tile-actions",
                Link { to: Route::PublicForm { id: form.id.clone() }, class: "sf-btn outline", "View" }
                Link { to: Route::Edit { id: form.id.clone() }, class: "sf-btn outline", "Edit" }
                Link { to: Route::Analytics { id: form.id.clone() }, class: "sf-btn outline", "Analytics" }
            }
        }
    }
}
