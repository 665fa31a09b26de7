use dioxus::prelude::*;

use crate::content::Video;
use crate::i18n::{use_i18n, Domain};

#[component]
pub fn VideoCard(video: &'static Video) -> Element {
    let i18n = use_i18n();
    let text = i18n.domain(Domain::Videos);
    let lang = i18n.language();
    let title = video.title.get(lang);

    rsx! {
        article { class: "card video-card",
            div { class: "video-card__media",
                img {
                    class: "video-card__thumbnail",
                    src: video.thumbnail_url(),
                    alt: title,
                    loading: "lazy",
                }
                span { class: "video-card__duration", "{video.duration}" }
            }
            div { class: "video-card__body",
                span { class: "badge badge--outline", "{video.category}" }
                h3 { class: "video-card__title", "{title}" }
                p { class: "video-card__description", {video.description.get(lang)} }
                div { class: "video-card__meta",
                    span { "{video.views} " {text.t("views")} }
                    span { "{video.duration}" }
                }
                a {
                    class: "button button--primary button--block",
                    href: video.youtube_url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {text.t("watch")}
                }
            }
        }
    }
}
