use dioxus::prelude::*;
use snapform_core::Effects;
use snapform_editor::toast::use_effects;

use crate::Route;

#[component]
pub fn Auth() -> Element {
    let effects = use_effects();

    rsx! {
        section {
            class: "hero",
            div {
                class: "sf-card auth-card",
                h3 { "Sign in to Snap-form" }
                p { class: "sf-muted", "Use any email. Nothing is sent anywhere." }
                input { class: "sf-input", r#type: "email", placeholder: "you@example.com" }
                button {
                    class: "sf-btn primary full",
                    onclick: move |_| effects.notify("Mock sign-in", "This is UI-only. No real authentication."),
                    "Continue with Google"
                }
                Link { to: Route::Dashboard {}, class: "sf-btn ghost full", "Skip to dashboard" }
            }
        }
    }
}
