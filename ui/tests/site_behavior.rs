//! End-to-end checks through the public API: preference stores over shared
//! storage, section tracking, and translated copy for dynamically chosen keys.

use std::rc::Rc;

use ui::core::contact::ContactError;
use ui::core::platform::Host;
use ui::core::storage::MemoryStorage;
use ui::i18n::{Domain, Language, Translations};
use ui::preferences::{LanguageStore, Theme, ThemeStore};
use ui::sections::{Page, PageView, SectionExtent, SectionId};

struct SpanishDarkHost;

impl Host for SpanishDarkHost {
    fn locale_hint(&self) -> Option<String> {
        Some("es-PE".into())
    }

    fn prefers_dark(&self) -> bool {
        true
    }

    fn apply_theme(&self, _theme: Theme) {}
}

#[test]
fn second_session_restores_choices_from_storage() {
    let storage = Rc::new(MemoryStorage::new());
    let host: Rc<dyn Host> = Rc::new(SpanishDarkHost);

    let mut language = LanguageStore::init(storage.clone(), host.clone());
    let mut theme = ThemeStore::init(storage.clone(), host.clone());
    assert_eq!(language.get(), Language::Es);
    assert_eq!(theme.get(), Theme::Dark);

    language.set(Language::En);
    theme.toggle();

    let language = LanguageStore::init(storage.clone(), host.clone());
    let theme = ThemeStore::init(storage, host);
    assert_eq!(language.get(), Language::En);
    assert_eq!(theme.get(), Theme::Light);
}

#[test]
fn scrolling_home_then_visiting_automation() {
    let layout = |section: SectionId| {
        Some(match section {
            SectionId::Home => SectionExtent::new(0.0, 900.0),
            SectionId::Projects => SectionExtent::new(900.0, 1400.0),
            SectionId::Videos => SectionExtent::new(2300.0, 1100.0),
            SectionId::Contact => SectionExtent::new(3400.0, 1200.0),
        })
    };

    let mut view = PageView::default();
    assert!(view.on_scroll(2250.0, layout));
    assert_eq!(view.active_section(), SectionId::Videos);

    view.switch_to(Page::Automation);
    assert!(!view.on_scroll(3500.0, layout));
    assert_eq!(view.active_section(), SectionId::Home);
}

#[test]
fn dynamic_keys_resolve_in_both_languages() {
    let catalog = Translations::embedded().expect("embedded catalog");
    let dynamic: Vec<(Domain, &str)> = SectionId::ORDERED
        .iter()
        .map(|s| (Domain::Navigation, s.nav_key()))
        .chain(
            [
                ContactError::NameRequired,
                ContactError::EmailInvalid,
                ContactError::MessageRequired,
            ]
            .iter()
            .map(|e| (Domain::Contact, e.message_key())),
        )
        .chain(
            [
                "feature-ai-title",
                "feature-backend-title",
                "feature-integration-title",
            ]
            .into_iter()
            .map(|key| (Domain::Landing, key)),
        )
        .collect();

    for (domain, key) in dynamic {
        for language in Language::ALL {
            let text = catalog.t(domain, key, language);
            assert_ne!(text, key, "{domain:?}/{key} unresolved for {language}");
        }
    }
}

#[test]
fn language_label_names_the_active_language() {
    let catalog = Translations::embedded().expect("embedded catalog");
    assert_eq!(catalog.t(Domain::Navigation, "language-short", Language::En), "ENG");
    assert_eq!(catalog.t(Domain::Navigation, "language-short", Language::Es), "ESP");
}
