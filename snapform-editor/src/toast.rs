use dioxus::prelude::*;
use snapform_core::Effects;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// Toast queue shared through context. Copyable, like the signals inside it.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
    duration_ms: u32,
}

impl Toasts {
    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items
    }

    pub fn push(&self, title: &str, description: &str) {
        let mut items = self.items;
        let mut next_id = self.next_id;

        let id = *next_id.peek();
        next_id.set(id + 1);
        items.write().push(Toast {
            id,
            title: title.to_string(),
            description: description.to_string(),
        });
        debug!(id, title, "toast shown");

        let duration_ms = self.duration_ms;
        let toasts = *self;
        spawn(async move {
            sleep_ms(duration_ms).await;
            toasts.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|t| t.id != id);
    }
}

/// Installs the toast queue for this subtree and returns it.
pub fn use_toast_provider(duration_ms: u32) -> Toasts {
    use_context_provider(|| Toasts {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
        duration_ms,
    })
}

/// [`Effects`] backed by the toast queue and the browser clipboard.
#[derive(Clone, Copy, PartialEq)]
pub struct UiEffects {
    toasts: Toasts,
}

impl UiEffects {
    pub fn new(toasts: Toasts) -> Self {
        Self { toasts }
    }
}

impl Effects for UiEffects {
    fn notify(&self, title: &str, description: &str) {
        self.toasts.push(title, description);
    }

    fn copy_to_clipboard(&self, text: &str) {
        let literal = match serde_json::to_string(text) {
            Ok(literal) => literal,
            Err(e) => {
                warn!("clipboard text did not encode: {e}");
                return;
            }
        };
        spawn(async move {
            let mut eval = document::eval(&format!(
                "await navigator.clipboard.writeText({literal}); dioxus.send(true);"
            ));
            if let Err(e) = eval.recv::<bool>().await {
                warn!("clipboard write failed: {e:?}");
            }
        });
    }
}

pub fn use_effects() -> UiEffects {
    UiEffects::new(use_context::<Toasts>())
}

async fn sleep_ms(ms: u32) {
    let mut eval = document::eval(&format!("setTimeout(() => dioxus.send(true), {ms});"));
    let _: Result<bool, _> = eval.recv().await;
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_context::<Toasts>();
    let items = toasts.items();

    rsx! {
        div {
            class: "toast-host",
            for toast in items.read().iter() {
                div {
                    key: "{toast.id}",
                    class: "toast",
                    role: "status",
                    div {
                        class: "toast-text",
                        strong { "{toast.title}" }
                        span { "{toast.description}" }
                    }
                    button {
                        class: "icon-btn",
                        aria_label: "Dismiss",
                        onclick: {
                            let id = toast.id;
                            move |_| toasts.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
