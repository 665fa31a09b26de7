//! User preference stores (display language, color theme).
//!
//! A store owns exactly one setting for the session. It is resolved once at
//! startup (persisted value, else a host-derived default), written back on
//! every change, and exposed to the component tree through context signals.
//!
//! Persistence is lossy: if storage rejects a write the in-memory value still
//! changes and the failure is only logged.

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::platform::{BrowserHost, Host};
use crate::core::site;
use crate::core::storage::{open_preference_storage, PreferenceStorage};
use crate::i18n::Language;

/// A two-valued setting a [`PreferenceStore`] can own.
pub trait Preference: Copy + Eq + fmt::Debug + 'static {
    const STORAGE_KEY: &'static str;

    fn code(self) -> &'static str;
    fn from_code(raw: &str) -> Option<Self>;
    /// Default when nothing valid is persisted.
    fn detect(host: &dyn Host) -> Self;
    fn opposite(self) -> Self;
    /// Side effect run at init and on every change.
    fn apply(self, _host: &dyn Host) {}
}

impl Preference for Language {
    const STORAGE_KEY: &'static str = site::LANGUAGE_STORAGE_KEY;

    fn code(self) -> &'static str {
        Language::code(self)
    }

    fn from_code(raw: &str) -> Option<Self> {
        Language::from_code(raw)
    }

    fn detect(host: &dyn Host) -> Self {
        host.locale_hint()
            .as_deref()
            .and_then(Language::from_locale)
            .unwrap_or(Language::DEFAULT)
    }

    fn opposite(self) -> Self {
        Language::opposite(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Preference for Theme {
    const STORAGE_KEY: &'static str = site::THEME_STORAGE_KEY;

    fn code(self) -> &'static str {
        Theme::code(self)
    }

    fn from_code(raw: &str) -> Option<Self> {
        Theme::from_code(raw)
    }

    fn detect(host: &dyn Host) -> Self {
        if host.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn opposite(self) -> Self {
        Theme::opposite(self)
    }

    fn apply(self, host: &dyn Host) {
        host.apply_theme(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("unsupported value `{value}` for preference `{key}`")]
    Unsupported { key: &'static str, value: String },
}

/// Single source of truth for one preference.
pub struct PreferenceStore<P: Preference> {
    value: P,
    storage: Rc<dyn PreferenceStorage>,
    host: Rc<dyn Host>,
}

impl<P: Preference> PreferenceStore<P> {
    /// Resolve the initial value and persist it so later sessions start stable.
    pub fn init(storage: Rc<dyn PreferenceStorage>, host: Rc<dyn Host>) -> Self {
        let persisted = storage.read(P::STORAGE_KEY).unwrap_or_else(|err| {
            warn!(key = P::STORAGE_KEY, %err, "could not read persisted preference");
            None
        });

        let value = match persisted.as_deref().map(|raw| (raw, P::from_code(raw))) {
            Some((_, Some(value))) => value,
            Some((raw, None)) => {
                debug!(key = P::STORAGE_KEY, raw, "discarding unsupported persisted preference");
                P::detect(host.as_ref())
            }
            None => P::detect(host.as_ref()),
        };

        let store = Self {
            value,
            storage,
            host,
        };
        store.persist();
        value.apply(store.host.as_ref());
        store
    }

    pub fn get(&self) -> P {
        self.value
    }

    /// Update and persist. Setting the current value again is a no-op apart
    /// from the (idempotent) write.
    pub fn set(&mut self, value: P) {
        let changed = value != self.value;
        self.value = value;
        self.persist();
        if changed {
            value.apply(self.host.as_ref());
        }
    }

    /// Set from a raw code. Unsupported codes are rejected and change nothing.
    pub fn set_code(&mut self, raw: &str) -> Result<P, PreferenceError> {
        let value = P::from_code(raw).ok_or_else(|| PreferenceError::Unsupported {
            key: P::STORAGE_KEY,
            value: raw.to_string(),
        })?;
        self.set(value);
        Ok(value)
    }

    pub fn toggle(&mut self) -> P {
        let next = self.value.opposite();
        self.set(next);
        next
    }

    fn persist(&self) {
        if let Err(err) = self.storage.write(P::STORAGE_KEY, self.value.code()) {
            warn!(key = P::STORAGE_KEY, %err, "preference not persisted; keeping in-memory value");
        }
    }
}

impl<P: Preference> fmt::Debug for PreferenceStore<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("key", &P::STORAGE_KEY)
            .field("value", &self.value)
            .finish()
    }
}

pub type LanguageStore = PreferenceStore<Language>;
pub type ThemeStore = PreferenceStore<Theme>;

/// Create both stores against browser storage and share them via context.
pub fn use_preferences_provider() {
    let storage = use_hook(open_preference_storage);
    let host = use_hook(|| Rc::new(BrowserHost) as Rc<dyn Host>);

    let language = {
        let storage = storage.clone();
        let host = host.clone();
        use_signal(move || LanguageStore::init(storage, host))
    };
    let theme = use_signal(move || ThemeStore::init(storage, host));

    use_context_provider(|| language);
    use_context_provider(|| theme);
}

pub fn use_language() -> Signal<LanguageStore> {
    use_context::<Signal<LanguageStore>>()
}

pub fn use_theme() -> Signal<ThemeStore> {
    use_context::<Signal<ThemeStore>>()
}
