use dioxus::prelude::*;
use snapform_editor::FormBuilderEditor;
use snapform_editor::toast::{ToastHost, use_toast_provider};

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    use_toast_provider(3000);

    rsx! {
        style {
            "body, html {{ margin: 0; padding: 0; min-height: 100%; width: 100%; }}"
        }
        FormBuilderEditor {
            on_open_analytics: move |form_id: String| {
                tracing::info!(%form_id, "analytics requested");
            }
        }
        ToastHost {}
    }
}
