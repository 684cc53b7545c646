use dioxus::prelude::*;
use snapform_core::Effects;
use snapform_core::mock::{TIERS, TierEmphasis};
use snapform_editor::toast::use_effects;

#[component]
pub fn Pricing() -> Element {
    let effects = use_effects();

    rsx! {
        section {
            class: "container",
            h1 { class: "page-title", "Choose Your Plan" }
            p { class: "sf-muted", "Prices are illustrative. No payment is taken." }
            div {
                class: "tier-grid",
                for tier in TIERS {
                    div {
                        key: "{tier.name}",
                        class: if tier.emphasis == TierEmphasis::Primary { "sf-card tier featured" } else { "sf-card tier" },
                        h3 { "{tier.name}" }
                        div { class: "tier-price", "{tier.price}" }
                        ul {
                            class: "tier-features",
                            for feature in tier.features {
                                li { key: "{feature}", "{feature}" }
                            }
                        }
                        button {
                            class: match tier.emphasis {
                                TierEmphasis::Primary => "sf-btn primary full",
                                TierEmphasis::Secondary => "sf-btn secondary full",
                            },
                            onclick: move |_| effects.notify(tier.cta, "Mock checkout, no plan was changed."),
                            "{tier.cta}"
                        }
                    }
                }
            }
        }
    }
}
