use dioxus::prelude::*;

use crate::components::ProjectCard;
use crate::content::{featured_projects, other_projects};
use crate::core::site;
use crate::i18n::{use_i18n, Domain};

#[component]
pub fn ProjectsSection() -> Element {
    let i18n = use_i18n();
    let text = i18n.domain(Domain::Projects);
    let mut show_all = use_signal(|| false);
    let others = other_projects();

    rsx! {
        div { class: "section",
            header { class: "section__header",
                h2 { class: "section__title gradient-text", {text.t("title")} }
                p { class: "section__subtitle", {text.t("subtitle")} }
            }

            div { class: "card-grid card-grid--two",
                for project in featured_projects() {
                    ProjectCard { key: "{project.id}", project }
                }
            }

            if show_all() {
                div { class: "card-grid card-grid--three",
                    for project in others.iter().copied() {
                        ProjectCard { key: "{project.id}", project }
                    }
                }
            }

            div { class: "section__actions",
                if !others.is_empty() {
                    button {
                        class: "button button--ghost",
                        onclick: move |_| show_all.toggle(),
                        if show_all() { {text.t("show-less")} } else { {text.t("show-more-projects")} }
                    }
                }
                a {
                    class: "button button--primary",
                    href: site::GITHUB_PROFILE_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {text.t("view-all-github")}
                }
            }
        }
    }
}
