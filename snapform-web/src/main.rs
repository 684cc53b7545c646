#![allow(non_snake_case)]

mod layout;
mod pages;
mod theme;

use dioxus::prelude::*;
use snapform_core::AppConfig;
use snapform_editor::EDITOR_CSS;
use snapform_editor::toast::use_toast_provider;
use tracing::{info, warn};

use layout::{Frame, NotFound, Shell};
use pages::{Analytics, Auth, Create, Dashboard, Edit, Landing, PublicForm, Pricing};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_JSON: &str = include_str!("../snapform.json");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Frame)]
        #[route("/")]
        Landing {},
        #[route("/auth")]
        Auth {},
        #[route("/form/:id")]
        PublicForm { id: String },
        #[layout(Shell)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/create")]
            Create {},
            #[route("/edit/:id")]
            Edit { id: String },
            #[route("/form/:id/analytics")]
            Analytics { id: String },
            #[route("/profile")]
            Pricing {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn load_config() -> AppConfig {
    match AppConfig::from_json(CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            warn!("falling back to default config: {e}");
            AppConfig::default()
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    use_toast_provider(config.toast_duration_ms);
    theme::use_theme_provider();

    use_hook(|| info!(brand = %config.brand, "app started"));

    rsx! {
        document::Title { "{config.brand}" }
        document::Stylesheet { href: EDITOR_CSS }
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
