//! Static, read-only content catalogs (projects, videos, automation services).
//!
//! Entries carry their own bilingual copy as [`LocalizedText`]; lookups follow
//! the same fallback rule as the translation tables (missing Spanish text
//! renders the English text).

mod automation;
mod projects;
mod videos;

pub use automation::{
    automation_services, featured_automation_project, featured_automation_video,
    AutomationMetric, AutomationProject, AutomationService, AutomationVideo,
};
pub use projects::{featured_projects, other_projects, Project, PROJECTS};
pub use videos::{featured_videos, other_videos, Video, VIDEOS, VIDEOS_PER_SLIDE};

use crate::i18n::Language;

/// Copy that is written in English and optionally translated.
///
/// Catalog entries are data, not UI chrome: their copy travels with the entry
/// instead of living under a Fluent key, so adding a project never touches the
/// `.ftl` tables. [`LocalizedText::get`] follows the same rule as
/// [`TranslationTable::resolve`](crate::i18n::TranslationTable::resolve):
/// requested language, then English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub es: Option<&'static str>,
}

impl LocalizedText {
    pub const fn new(en: &'static str, es: &'static str) -> Self {
        Self { en, es: Some(es) }
    }

    /// Same text in every language (product names, figures).
    pub const fn same(text: &'static str) -> Self {
        Self { en: text, es: None }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Es => self.es.unwrap_or(self.en),
        }
    }
}

/// Catalog entries partitioned into two display tiers.
pub trait Featured {
    fn is_featured(&self) -> bool;
}

/// Entries flagged as featured, in declaration order.
pub fn featured<T: Featured>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| item.is_featured()).collect()
}

/// Entries not flagged as featured, in declaration order.
pub fn others<T: Featured>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| !item.is_featured()).collect()
}

/// Split items into carousel slides of at most `per_slide` entries.
pub fn slides<T>(items: &[T], per_slide: usize) -> Vec<&[T]> {
    items.chunks(per_slide.max(1)).collect()
}

/// Move a carousel by `delta` slides, clamped to `[0, count)`.
pub fn step_slide(current: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(count - 1)
}

/// Badges shown on a card and the count hidden behind a `+N` badge.
pub fn visible_badges(technologies: &[&'static str], limit: Option<usize>) -> (Vec<&'static str>, usize) {
    match limit {
        Some(limit) if technologies.len() > limit => (
            technologies[..limit].to_vec(),
            technologies.len() - limit,
        ),
        _ => (technologies.to_vec(), 0),
    }
}
