use dioxus::prelude::*;
use snapform_core::AppConfig;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        section {
            class: "hero",
            div { class: "logo large", "S" }
            h1 { "{config.brand}" }
            p {
                class: "sf-muted tagline",
                "Build modern forms in minutes. Share instantly. Analyze responses with clean, insightful charts."
            }
            Link { to: Route::Auth {}, class: "sf-btn primary", "Get Started" }
        }
    }
}
