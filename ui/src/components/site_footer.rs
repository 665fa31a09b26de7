use dioxus::prelude::*;

use crate::core::site;
use crate::i18n::{use_i18n, Domain};

#[component]
pub fn SiteFooter() -> Element {
    let i18n = use_i18n();
    let text = i18n.domain(Domain::Footer);
    let year = site::COPYRIGHT_YEAR;
    let owner = site::OWNER_NAME;

    rsx! {
        footer { class: "site-footer",
            p { class: "site-footer__thanks", {text.t("portfolio")} }
            p { class: "site-footer__built", {text.t("built")} }
            a {
                class: "site-footer__source",
                href: site::SOURCE_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                {text.t("source")}
            }
            p { class: "site-footer__rights",
                "© {year} {owner}. "
                {text.t("rights")}
            }
        }
    }
}
