use dioxus::prelude::*;
use tracing::debug;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
export function stored_theme() {
    try { return localStorage.getItem('theme'); } catch (e) { return null; }
}
export function prefers_dark() {
    return !!(window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches);
}
export function set_dark_class(dark) {
    document.documentElement.classList.toggle('dark', dark);
}
export function store_theme(name) {
    try { localStorage.setItem('theme', name); } catch (e) {}
}
"#)]
extern "C" {
    fn stored_theme() -> Option<String>;
    fn prefers_dark() -> bool;
    fn set_dark_class(dark: bool);
    fn store_theme(name: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// A stored choice wins; otherwise follow the OS preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored {
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            _ if prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Resolves the theme once, applies it to the document root and shares it.
pub fn use_theme_provider() -> Signal<Theme> {
    use_context_provider(|| {
        let theme = Theme::resolve(stored_theme().as_deref(), prefers_dark());
        set_dark_class(theme.is_dark());
        debug!(theme = theme.as_str(), "theme resolved");
        Signal::new(theme)
    })
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let glyph = if theme.read().is_dark() { "☀" } else { "☾" };

    rsx! {
        button {
            class: "sf-btn ghost icon",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let next = theme.peek().toggled();
                set_dark_class(next.is_dark());
                store_theme(next.as_str());
                theme.set(next);
            },
            "{glyph}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_wins() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_os_preference() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(Some("sepia"), false), Theme::Light);
    }

    #[test]
    fn toggling_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }
}
