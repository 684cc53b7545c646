use dioxus::prelude::*;
use snapform_editor::FormBuilderEditor;
use tracing::debug;

use crate::Route;

/// A fresh builder session.
#[component]
pub fn Create() -> Element {
    let navigator = use_navigator();

    rsx! {
        FormBuilderEditor {
            on_open_analytics: move |id: String| {
                navigator.push(Route::Analytics { id });
            }
        }
    }
}

/// Editing starts from the same seeded canvas; the id only drives navigation.
#[component]
pub fn Edit(id: String) -> Element {
    let navigator = use_navigator();
    use_hook(|| debug!(form = %id, "opening builder"));

    rsx! {
        FormBuilderEditor {
            on_open_analytics: move |_| {
                navigator.push(Route::Analytics { id: id.clone() });
            }
        }
    }
}
