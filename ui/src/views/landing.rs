use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::embed::{self, PlayerCommand, PlayerMessage, HANDSHAKE_DELAY_MS};
use crate::core::platform::{self, use_events, Subscription};
use crate::core::site;
use crate::i18n::{use_i18n, Domain};
use crate::preferences::use_language;
use crate::sections::{go_to_section, PageView, SectionId};

const FEATURES: [(&str, &str, &str); 3] = [
    ("◆", "feature-ai-title", "feature-ai-desc"),
    ("▣", "feature-backend-title", "feature-backend-desc"),
    ("⇄", "feature-integration-title", "feature-integration-desc"),
];

fn send(command: PlayerCommand) {
    let Some(payload) = PlayerMessage::command(command).to_json() else {
        return;
    };
    if !platform::post_to_frame(site::LANDING_PLAYER_ID, &payload) {
        debug!(func = command.func(), "player frame not ready; command dropped");
    }
}

/// Keep exactly one `load` listener on the player frame. The frame is keyed
/// by language, so a language switch remounts it and the listener (plus any
/// pending handshake) is replaced.
fn use_player_handshake(mut playing: Signal<bool>, mut muted: Signal<bool>) {
    let language = use_language();
    let events = use_events();
    let slot = use_hook(|| Rc::new(RefCell::new(None::<Subscription>)));

    {
        let slot = slot.clone();
        use_drop(move || {
            slot.borrow_mut().take();
        });
    }

    use_effect(move || {
        let lang = language.read().get();
        let mut current = slot.borrow_mut();
        current.take();
        playing.set(true);
        muted.set(true);

        let pending = Rc::new(RefCell::new(None::<Subscription>));
        let timer = pending.clone();
        let load = events.element_event(site::LANDING_PLAYER_ID, "load", move || {
            *timer.borrow_mut() = Some(platform::after_delay(HANDSHAKE_DELAY_MS, || {
                if let Some(hello) = PlayerMessage::listening(site::LANDING_PLAYER_ID).to_json() {
                    platform::post_to_frame(site::LANDING_PLAYER_ID, &hello);
                }
            }));
        });

        debug!(%lang, attached = load.is_some(), "player load listener");
        *current = load.map(|load| {
            Subscription::new(move || {
                drop(load);
                pending.borrow_mut().take();
            })
        });
    });
}

#[component]
pub fn LandingSection(view: Signal<PageView>) -> Element {
    let i18n = use_i18n();
    let text = i18n.domain(Domain::Landing);
    let lang = i18n.language();

    let mut playing = use_signal(|| true);
    let mut muted = use_signal(|| true);
    use_player_handshake(playing, muted);

    let video_id = embed::intro_video_id(lang);
    let src = match embed::embed_url(video_id, platform::window_origin().as_deref()) {
        Ok(url) => url.to_string(),
        Err(err) => {
            warn!(%err, video_id, "could not build embed url");
            String::new()
        }
    };

    let toggle_play = move |_: MouseEvent| {
        let now = playing();
        send(PlayerCommand::toggle_playback(now));
        playing.set(!now);
    };
    let toggle_mute = move |_: MouseEvent| {
        let now = muted();
        send(PlayerCommand::toggle_sound(now));
        muted.set(!now);
    };

    rsx! {
        div { class: "landing",
            div { class: "landing__intro",
                p { class: "landing__greeting terminal-text", {text.t("greeting")} }
                h1 { class: "landing__title gradient-text", {text.t("title")} }
                h2 { class: "landing__subtitle", {text.t("subtitle")} }
                p { class: "landing__description", {text.t("description")} }
                div { class: "landing__actions",
                    button {
                        class: "button button--primary",
                        onclick: move |_| go_to_section(view, SectionId::Projects),
                        {text.t("view-projects")}
                    }
                    a {
                        class: "button button--ghost",
                        href: site::RESUME_PATH,
                        download: site::RESUME_DOWNLOAD_NAME,
                        {text.t("get-resume")}
                    }
                }
            }

            div { class: "landing__player card",
                iframe {
                    key: "{lang}",
                    id: site::LANDING_PLAYER_ID,
                    class: "landing__frame",
                    title: text.t("video-title"),
                    src: "{src}",
                    allow: "autoplay; encrypted-media; picture-in-picture",
                    allowfullscreen: true,
                }
                div { class: "landing__controls",
                    button { class: "icon-toggle", onclick: toggle_play,
                        if playing() { {text.t("pause")} } else { {text.t("play")} }
                    }
                    button { class: "icon-toggle", onclick: toggle_mute,
                        if muted() { {text.t("unmute")} } else { {text.t("mute")} }
                    }
                }
            }

            ul { class: "landing__features",
                for (icon, title, desc) in FEATURES {
                    li { key: "{title}", class: "card feature-card",
                        span { class: "feature-card__icon", "{icon}" }
                        h3 { {text.t(title)} }
                        p { {text.t(desc)} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::core::platform::test_support::CountingEvents;
    use crate::core::platform::{BrowserHost, Events};
    use crate::core::storage::MemoryStorage;
    use crate::preferences::LanguageStore;

    #[derive(Clone, Default)]
    struct PlayerHarness {
        language: Rc<Cell<Option<Signal<LanguageStore>>>>,
        playing: Rc<Cell<Option<Signal<bool>>>>,
    }

    fn player_app(harness: PlayerHarness) -> Element {
        let language = use_signal(|| {
            LanguageStore::init(Rc::new(MemoryStorage::new()), Rc::new(BrowserHost))
        });
        use_context_provider(|| language);
        let playing = use_signal(|| true);
        let muted = use_signal(|| true);
        harness.language.set(Some(language));
        harness.playing.set(Some(playing));
        use_player_handshake(playing, muted);
        rsx! { div {} }
    }

    fn settle(dom: &mut VirtualDom) {
        for _ in 0..3 {
            let _ = dom.render_immediate_to_vec();
            dom.process_events();
        }
    }

    #[test]
    fn language_switch_replaces_the_load_listener() {
        let events = Rc::new(CountingEvents::default());
        let harness = PlayerHarness::default();
        let mut dom = VirtualDom::new_with_props(player_app, harness.clone())
            .with_root_context(Events::new(events.clone()));
        dom.rebuild_in_place();
        settle(&mut dom);
        assert_eq!(events.counts(), (1, 0));

        let mut language = harness.language.get().expect("player mounted");
        let mut playing = harness.playing.get().expect("player mounted");
        dom.in_runtime(|| {
            playing.set(false);
            language.write().toggle();
        });
        settle(&mut dom);
        assert_eq!(events.counts(), (2, 1));
        assert!(dom.in_runtime(|| *playing.peek()));

        drop(dom);
        assert_eq!(events.counts(), (2, 2));
    }
}
