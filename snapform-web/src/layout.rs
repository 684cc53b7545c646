use dioxus::prelude::*;
use snapform_core::{AppConfig, Effects};
use snapform_editor::toast::{ToastHost, use_effects};

use crate::Route;
use crate::theme::ThemeToggle;

/// Wraps every route: page content, footer, toasts.
#[component]
pub fn Frame() -> Element {
    rsx! {
        main { class: "page", Outlet::<Route> {} }
        Footer {}
        ToastHost {}
    }
}

/// Routes that carry the navigation bar.
#[component]
pub fn Shell() -> Element {
    rsx! {
        NavBar {}
        Outlet::<Route> {}
    }
}

#[component]
fn NavBar() -> Element {
    let config = use_context::<AppConfig>();
    let effects = use_effects();
    let navigator = use_navigator();
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "navbar",
            Link {
                to: Route::Dashboard {},
                class: "brand",
                div { class: "logo", "S" }
                span { "{config.brand}" }
            }
            div {
                class: "navbar-actions",
                ThemeToggle {}
                div {
                    class: "menu",
                    button {
                        class: "avatar",
                        aria_label: "Account menu",
                        onclick: move |_| menu_open.toggle(),
                        "U"
                    }
                    if menu_open() {
                        div {
                            class: "menu-content",
                            onclick: move |_| menu_open.set(false),
                            div { class: "menu-label", "My Account" }
                            hr { class: "sf-separator" }
                            Link { to: Route::Pricing {}, class: "menu-item", "Plans" }
                            button {
                                class: "menu-item",
                                onclick: move |_| {
                                    effects.notify("Logged out", "Mock logout, nothing to sign out of.");
                                    navigator.push(Route::Landing {});
                                },
                                "Logout"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        footer {
            class: "footer",
            p {
                "All rights reserved to {config.footer_owner}"
                a {
                    class: "icon-btn",
                    href: "#",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    aria_label: "{config.footer_owner} website",
                    "↗"
                }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section {
            class: "hero",
            h1 { "Page not found" }
            p { class: "sf-muted", "Nothing lives at /{path}." }
            Link { to: Route::Dashboard {}, class: "sf-btn primary", "Back to dashboard" }
        }
    }
}
