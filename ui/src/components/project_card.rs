use dioxus::prelude::*;

use crate::content::{visible_badges, Project};
use crate::i18n::{use_i18n, Domain};

/// Non-featured cards collapse their technology list after this many badges.
const COMPACT_BADGES: usize = 3;

#[component]
pub fn ProjectCard(project: &'static Project) -> Element {
    let i18n = use_i18n();
    let text = i18n.domain(Domain::Projects);
    let lang = i18n.language();
    let limit = (!project.featured).then_some(COMPACT_BADGES);
    let (badges, hidden) = visible_badges(project.technologies, limit);

    rsx! {
        article {
            class: if project.featured { "card project-card project-card--featured" } else { "card project-card" },
            header { class: "project-card__header",
                h3 { class: "project-card__title", {project.title.get(lang)} }
                if project.featured {
                    span { class: "badge badge--primary", {text.t("featured")} }
                }
            }
            p { class: "project-card__description", {project.description.get(lang)} }
            div { class: "project-card__badges",
                for tech in badges {
                    span { key: "{tech}", class: "badge badge--outline", "{tech}" }
                }
                if hidden > 0 {
                    span { class: "badge badge--outline", "+{hidden}" }
                }
            }
            footer { class: "project-card__footer",
                div { class: "project-card__stats",
                    span { title: text.t("stars"), "★ {project.stars}" }
                    span { title: text.t("forks"), "⑂ {project.forks}" }
                }
                div { class: "project-card__links",
                    a {
                        class: "button button--ghost",
                        href: project.github_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {text.t("code")}
                    }
                    if let Some(live) = project.live_url {
                        a {
                            class: "button button--primary",
                            href: live,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            {text.t("live")}
                        }
                    }
                }
            }
        }
    }
}
