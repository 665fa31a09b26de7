use dioxus::prelude::*;
use tracing::debug;

use crate::components::{LanguageSwitch, ThemeToggle};
use crate::i18n::{use_i18n, Domain};
use crate::sections::{go_to_page, go_to_section, Page, PageView, SectionId};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Fixed top bar: brand, section links, page toggle and preference switches.
///
/// Section links always lead to the home page; the link for the active
/// section is highlighted while home is shown.
#[component]
pub fn AppNavbar(view: Signal<PageView>) -> Element {
    let i18n = use_i18n();
    let text = i18n.domain(Domain::Navigation);
    let (page, active) = {
        let current = view.read();
        (current.page(), current.active_section())
    };

    debug!(lang = %i18n.language(), ?page, ?active, "AppNavbar render");

    let (toggle_short, toggle_long, toggle_target) = match page {
        Page::Home => (
            text.t("business-automation"),
            text.t("business-automation-desktop"),
            Page::Automation,
        ),
        Page::Automation => (
            text.t("back-to-portfolio"),
            text.t("back-to-portfolio"),
            Page::Home,
        ),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                button {
                    class: "navbar__brand",
                    onclick: move |_| go_to_page(view, Page::Home),
                    span { class: "navbar__brand-user", {text.t("portfolio-user")} }
                    span { class: "navbar__brand-special", "@" }
                    span { class: "navbar__brand-host", {text.t("portfolio-host")} }
                    span { class: "navbar__brand-special", ":~$" }
                }

                nav { class: "navbar__links",
                    for section in SectionId::ORDERED {
                        button {
                            key: "{section.dom_id()}",
                            class: if page == Page::Home && section == active {
                                "navbar__link navbar__link--active"
                            } else {
                                "navbar__link"
                            },
                            onclick: move |_| go_to_section(view, section),
                            {text.t(section.nav_key())}
                        }
                    }
                }

                div { class: "navbar__actions",
                    button {
                        class: "navbar__page-toggle",
                        onclick: move |_| go_to_page(view, toggle_target),
                        span { class: "navbar__label--short", "{toggle_short}" }
                        span { class: "navbar__label--long", "{toggle_long}" }
                    }
                    ThemeToggle {}
                    LanguageSwitch {}
                }
            }
        }
    }
}
