use dioxus::prelude::*;

use crate::components::VideoCard;
use crate::content::{featured_videos, other_videos, slides, step_slide, VIDEOS_PER_SLIDE};
use crate::core::site;
use crate::i18n::{use_i18n, Domain};

#[component]
pub fn VideosSection() -> Element {
    let i18n = use_i18n();
    let text = i18n.domain(Domain::Videos);
    let mut slide = use_signal(|| 0usize);

    let more = other_videos();
    let pages = slides(&more, VIDEOS_PER_SLIDE);
    let count = pages.len();
    let current = slide().min(count.saturating_sub(1));
    let visible = pages.get(current).copied().unwrap_or_default();

    rsx! {
        div { class: "section",
            header { class: "section__header",
                h2 { class: "section__title gradient-text", {text.t("title")} }
                p { class: "section__subtitle", {text.t("subtitle")} }
            }

            div { class: "card-grid card-grid--three",
                for video in featured_videos() {
                    VideoCard { key: "{video.id}", video }
                }
            }

            if count > 0 {
                div { class: "carousel",
                    h3 { class: "carousel__title", {text.t("more-videos")} }
                    div { class: "carousel__track",
                        button {
                            class: "carousel__nav",
                            aria_label: text.t("previous"),
                            disabled: current == 0,
                            onclick: move |_| slide.set(step_slide(current, -1, count)),
                            "‹"
                        }
                        div { class: "card-grid card-grid--three",
                            for video in visible.iter().copied() {
                                VideoCard { key: "{video.id}", video }
                            }
                        }
                        button {
                            class: "carousel__nav",
                            aria_label: text.t("next"),
                            disabled: current + 1 >= count,
                            onclick: move |_| slide.set(step_slide(current, 1, count)),
                            "›"
                        }
                    }
                }
            }

            div { class: "section__actions",
                a {
                    class: "button button--primary",
                    href: site::VIDEOS_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {text.t("browse-all")}
                }
            }
        }
    }
}
