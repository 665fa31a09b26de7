//! Internationalization (i18n) support for `folio-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `fluent` (one bundle per language per translation table)
//! - `i18n-embed` (host locale discovery)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en/<domain>.ftl   (fallback/reference)
//!   es/<domain>.ftl   (additional locale)
//! ```
//!
//! Each page region owns one translation table ([`Domain`]). Lookups never
//! fail: a message missing in the requested language resolves to the
//! English text, and an unknown key resolves to the key itself.
//!
//! Usage in a component (below `use_translations_provider()`):
//! ```ignore
//! let i18n = use_i18n();
//! let text = i18n.domain(Domain::Projects);
//! rsx! { h1 { {text.t("title")} } }
//! ```
//!
//! To add a new table: add a `Domain` variant, then the matching
//! `i18n/<lang>/<domain>.ftl` file for every language. The completeness
//! tests under `tests/` fail on missing files or keys.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;
use fluent::{FluentBundle, FluentResource};
use rust_embed::Embed;
use thiserror::Error;
use tracing::{debug, error};
use unic_langid::LanguageIdentifier;

/// Display languages supported by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// Fallback for lookups and for hosts with an unsupported locale.
    pub const DEFAULT: Language = Language::En;

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Parse a persisted language code. Only exact codes are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// Match a host locale (`"es-MX"`, `"en_US"`, `"ES"`) on its language subtag.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let primary = locale
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::from_code(&primary)
    }

    pub fn opposite(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    fn identifier(self) -> Result<LanguageIdentifier, I18nError> {
        self.code()
            .parse()
            .map_err(|_| I18nError::LanguageTag(self.code().to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One translation table per page region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Navigation,
    Landing,
    Projects,
    Videos,
    Contact,
    Automation,
    Footer,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Domain::Navigation,
        Domain::Landing,
        Domain::Projects,
        Domain::Videos,
        Domain::Contact,
        Domain::Automation,
        Domain::Footer,
    ];

    /// File stem of the table's `.ftl` file in every locale folder.
    pub fn file_stem(self) -> &'static str {
        match self {
            Domain::Navigation => "navigation",
            Domain::Landing => "landing",
            Domain::Projects => "projects",
            Domain::Videos => "videos",
            Domain::Contact => "contact",
            Domain::Automation => "automation",
            Domain::Footer => "footer",
        }
    }

    fn resource_path(self, language: Language) -> String {
        format!("{}/{}.ftl", language.code(), self.file_stem())
    }
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("missing embedded translation file `{0}`")]
    MissingResource(String),
    #[error("translation file `{0}` is not valid UTF-8")]
    Encoding(String),
    #[error("failed to parse `{origin}` ({count} syntax error(s))")]
    Parse { origin: String, count: usize },
    #[error("`{origin}` redefines {count} message(s)")]
    Conflict { origin: String, count: usize },
    #[error("invalid language tag `{0}`")]
    LanguageTag(String),
}

/// Key → per-language text, backed by one Fluent bundle per language.
#[derive(Default)]
pub struct TranslationTable {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from inline Fluent sources.
    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self, I18nError> {
        let mut table = Self::new();
        for (language, source) in sources {
            table.add_source(*language, &format!("inline:{language}"), source)?;
        }
        Ok(table)
    }

    /// Add the messages in `source` to `language`. `origin` names the source in errors.
    pub fn add_source(
        &mut self,
        language: Language,
        origin: &str,
        source: &str,
    ) -> Result<(), I18nError> {
        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            I18nError::Parse {
                origin: origin.to_string(),
                count: errors.len(),
            }
        })?;

        let bundle = match self.bundles.entry(language) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                let mut bundle = FluentBundle::new(vec![language.identifier()?]);
                bundle.set_use_isolating(false);
                entry.insert(bundle)
            }
        };

        bundle
            .add_resource(resource)
            .map_err(|errors| I18nError::Conflict {
                origin: origin.to_string(),
                count: errors.len(),
            })
    }

    pub fn contains(&self, key: &str, language: Language) -> bool {
        self.bundles
            .get(&language)
            .and_then(|bundle| bundle.get_message(key))
            .is_some_and(|message| message.value().is_some())
    }

    /// Text for `language`, else the default language, else `key` itself.
    pub fn resolve(&self, key: &str, language: Language) -> String {
        self.lookup(key, language)
            .or_else(|| self.lookup(key, Language::DEFAULT))
            .unwrap_or_else(|| key.to_string())
    }

    fn lookup(&self, key: &str, language: Language) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = Vec::new();
        let text = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            debug!(key, %language, count = errors.len(), "fluent formatting reported errors");
        }
        Some(text.into_owned())
    }
}

impl fmt::Debug for TranslationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut languages: Vec<_> = self.bundles.keys().collect();
        languages.sort();
        f.debug_struct("TranslationTable")
            .field("languages", &languages)
            .finish()
    }
}

/// Resolve `key` in `table` for `language`, with fallback to the default
/// language and finally to the key itself.
pub fn resolve(table: &TranslationTable, key: &str, language: Language) -> String {
    table.resolve(key, language)
}

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Language folders present in the embedded assets.
pub fn embedded_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Every translation table of the site.
#[derive(Debug, Default)]
pub struct Translations {
    tables: HashMap<Domain, TranslationTable>,
}

impl Translations {
    /// Load every table from the embedded `.ftl` files.
    pub fn embedded() -> Result<Self, I18nError> {
        let mut translations = Self::default();
        for domain in Domain::ALL {
            let mut table = TranslationTable::new();
            for language in Language::ALL {
                let path = domain.resource_path(language);
                let file = Localizations::get(&path)
                    .ok_or_else(|| I18nError::MissingResource(path.clone()))?;
                let source = std::str::from_utf8(file.data.as_ref())
                    .map_err(|_| I18nError::Encoding(path.clone()))?;
                table.add_source(language, &path, source)?;
            }
            translations.insert(domain, table);
        }
        Ok(translations)
    }

    pub fn insert(&mut self, domain: Domain, table: TranslationTable) {
        self.tables.insert(domain, table);
    }

    pub fn table(&self, domain: Domain) -> Option<&TranslationTable> {
        self.tables.get(&domain)
    }

    /// Resolve `key` in the `domain` table. A missing table echoes the key.
    pub fn t(&self, domain: Domain, key: &str, language: Language) -> String {
        match self.table(domain) {
            Some(table) => table.resolve(key, language),
            None => key.to_string(),
        }
    }
}

/// Locale the host asks for first, if it reports any.
pub fn requested_locale() -> Option<String> {
    requested_languages().first().map(|lang| lang.to_string())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// The active language bound to the loaded catalog.
#[derive(Clone)]
pub struct I18n {
    catalog: Rc<Translations>,
    language: Language,
}

impl I18n {
    pub fn new(catalog: Rc<Translations>, language: Language) -> Self {
        Self { catalog, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn domain(&self, domain: Domain) -> Text<'_> {
        Text {
            catalog: &self.catalog,
            domain,
            language: self.language,
        }
    }
}

/// Lookups into one table for one language.
#[derive(Clone, Copy)]
pub struct Text<'a> {
    catalog: &'a Translations,
    domain: Domain,
    language: Language,
}

impl Text<'_> {
    pub fn t(&self, key: &str) -> String {
        self.catalog.t(self.domain, key, self.language)
    }
}

/// Load the embedded catalog and share it with the component tree.
///
/// A broken catalog is logged and replaced by an empty one, in which every
/// lookup echoes its key.
pub fn use_translations_provider() -> Rc<Translations> {
    use_context_provider(|| {
        let catalog = Translations::embedded().unwrap_or_else(|err| {
            error!(%err, "failed to load translations; rendering message keys");
            Translations::default()
        });
        Rc::new(catalog)
    })
}

/// Catalog plus the current language. Re-renders the caller on language change.
pub fn use_i18n() -> I18n {
    let catalog = use_context::<Rc<Translations>>();
    let language = crate::preferences::use_language().read().get();
    I18n::new(catalog, language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TranslationTable {
        TranslationTable::from_sources(&[
            (Language::En, "title = Projects\ncode = Code\nonly-en = English only\n"),
            (Language::Es, "title = Proyectos\ncode = Código\n"),
        ])
        .expect("valid sample sources")
    }

    #[test]
    fn resolves_requested_language() {
        let table = sample_table();
        assert_eq!(resolve(&table, "title", Language::En), "Projects");
        assert_eq!(resolve(&table, "title", Language::Es), "Proyectos");
        assert_eq!(resolve(&table, "code", Language::Es), "Código");
    }

    #[test]
    fn missing_language_falls_back_to_default() {
        let table = sample_table();
        assert_eq!(resolve(&table, "only-en", Language::Es), "English only");
        assert!(table.contains("only-en", Language::En));
        assert!(!table.contains("only-en", Language::Es));
    }

    #[test]
    fn missing_key_echoes_key() {
        let table = sample_table();
        for language in Language::ALL {
            assert_eq!(resolve(&table, "nope", language), "nope");
            assert_eq!(resolve(&table, "", language), "");
            assert_eq!(resolve(&table, "not a key!", language), "not a key!");
        }
        assert_eq!(resolve(&TranslationTable::new(), "title", Language::Es), "title");
    }

    #[test]
    fn locale_detection_uses_language_subtag() {
        assert_eq!(Language::from_locale("es-MX"), Some(Language::Es));
        assert_eq!(Language::from_locale("ES_es"), Some(Language::Es));
        assert_eq!(Language::from_locale("en-US"), Some(Language::En));
        assert_eq!(Language::from_locale("fr-FR"), None);
        assert_eq!(Language::from_locale(""), None);
    }

    #[test]
    fn persisted_codes_must_match_exactly() {
        assert_eq!(Language::from_code("es"), Some(Language::Es));
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("es-ES"), None);
        assert_eq!(Language::from_code("english"), None);
        for padded in [" es", "es ", " es ", "en\n", "\ten", "ES", "En"] {
            assert_eq!(Language::from_code(padded), None, "{padded:?}");
        }
    }

    #[test]
    fn toggle_is_an_involution() {
        for language in Language::ALL {
            assert_eq!(language.opposite().opposite(), language);
            assert_ne!(language.opposite(), language);
        }
    }

    #[test]
    fn fallback_language_is_embedded() {
        let langs = embedded_languages();
        assert!(langs.iter().any(|l| l == "en"));
        assert!(langs.iter().any(|l| l == "es"));
    }

    #[test]
    fn embedded_catalog_loads_every_table() {
        let catalog = Translations::embedded().expect("embedded catalog");
        for domain in Domain::ALL {
            assert!(catalog.table(domain).is_some(), "missing {domain:?}");
        }
        assert_eq!(catalog.t(Domain::Projects, "title", Language::Es), "Proyectos");
        assert_eq!(catalog.t(Domain::Footer, "missing-key", Language::En), "missing-key");
    }

    #[test]
    fn duplicate_messages_are_rejected() {
        let mut table = TranslationTable::new();
        table.add_source(Language::En, "a.ftl", "title = One\n").unwrap();
        let err = table
            .add_source(Language::En, "b.ftl", "title = Two\n")
            .unwrap_err();
        assert!(matches!(err, I18nError::Conflict { count: 1, .. }));
    }
}
