use dioxus::prelude::*;

use crate::content::{automation_services, featured_automation_project, featured_automation_video};
use crate::core::site;
use crate::i18n::{use_i18n, Domain};

/// Business-automation landing: featured project and tutorial, service
/// cards and a consultation call to action.
#[component]
pub fn AutomationPage() -> Element {
    let i18n = use_i18n();
    let text = i18n.domain(Domain::Automation);
    let lang = i18n.language();
    let project = featured_automation_project();
    let video = featured_automation_video();
    let mailto = format!("mailto:{}", site::CONTACT_EMAIL);

    rsx! {
        div { class: "section page-automation",
            header { class: "section__header",
                h1 { class: "section__title gradient-text", {text.t("title")} }
                p { class: "section__subtitle", {text.t("subtitle")} }
            }

            div { class: "card-grid card-grid--two",
                article { class: "card automation-project",
                    span { class: "badge badge--primary", {text.t("featured-project")} }
                    h3 { {project.title.get(lang)} }
                    p { {project.description.get(lang)} }
                    div { class: "automation-project__metrics",
                        for metric in project.metrics {
                            div { key: "{metric.label.en}", class: "stats__item",
                                span { class: "stats__value", "{metric.value}" }
                                span { class: "stats__label", {metric.label.get(lang)} }
                            }
                        }
                    }
                    div { class: "project-card__badges",
                        for tech in project.technologies {
                            span { key: "{tech}", class: "badge badge--outline", "{tech}" }
                        }
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
                                {text.t("demo")}
                            }
                        }
                    }
                }

                article { class: "card video-card",
                    div { class: "video-card__media",
                        img {
                            class: "video-card__thumbnail",
                            src: video.thumbnail_url(),
                            alt: video.title.get(lang),
                            loading: "lazy",
                        }
                        span { class: "badge video-card__flag", {text.t("featured-tutorial")} }
                        span { class: "video-card__duration", "{video.duration}" }
                    }
                    div { class: "video-card__body",
                        h3 { class: "video-card__title", {video.title.get(lang)} }
                        p { class: "video-card__description", {video.description.get(lang)} }
                        a {
                            class: "button button--primary button--block",
                            href: video.youtube_url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            {text.t("watch-tutorial")}
                        }
                    }
                }
            }

            h2 { class: "section__heading", {text.t("services")} }
            div { class: "card-grid card-grid--three",
                for service in automation_services() {
                    article { key: "{service.title.en}", class: "card service-card",
                        span { class: "feature-card__icon", "{service.icon}" }
                        h3 { {service.title.get(lang)} }
                        p { {service.description.get(lang)} }
                        ul { class: "service-card__examples",
                            for example in service.examples {
                                li { key: "{example.en}", "→ " {example.get(lang)} }
                            }
                        }
                    }
                }
            }

            div { class: "cta",
                h2 { {text.t("cta-title")} }
                p { {text.t("cta-description")} }
                div { class: "section__actions",
                    a { class: "button button--primary", href: "{mailto}", {text.t("consultation")} }
                    a {
                        class: "button button--ghost",
                        href: site::GITHUB_PROFILE_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {text.t("more-examples")}
                    }
                }
            }
        }
    }
}
