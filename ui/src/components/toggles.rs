use dioxus::prelude::*;
use tracing::info;

use crate::i18n::{use_i18n, Domain};
use crate::preferences::{use_language, use_theme};

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let i18n = use_i18n();
    let dark = theme.read().get().is_dark();

    rsx! {
        button {
            class: "icon-toggle",
            aria_label: i18n.domain(Domain::Navigation).t("theme-toggle-label"),
            aria_pressed: dark,
            onclick: move |_| {
                let next = theme.write().toggle();
                info!(theme = next.code(), "theme changed");
            },
            if dark { "☀" } else { "☾" }
        }
    }
}

/// Two-state ENG/ESP switch. The label names the active language.
#[component]
pub fn LanguageSwitch() -> Element {
    let mut language = use_language();
    let i18n = use_i18n();
    let text = i18n.domain(Domain::Navigation);

    rsx! {
        button {
            class: "language-switch",
            aria_label: text.t("language-toggle-label"),
            onclick: move |_| {
                let next = language.write().toggle();
                info!(lang = %next, "language changed");
            },
            span { class: "language-switch__code", {text.t("language-short")} }
        }
    }
}
