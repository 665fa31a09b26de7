use std::collections::{BTreeSet, HashSet};

/// Each table, embedded for both locales. Register new tables here.
const TABLES: &[(&str, &str, &str)] = &[
    (
        "navigation",
        include_str!("../i18n/en/navigation.ftl"),
        include_str!("../i18n/es/navigation.ftl"),
    ),
    (
        "landing",
        include_str!("../i18n/en/landing.ftl"),
        include_str!("../i18n/es/landing.ftl"),
    ),
    (
        "projects",
        include_str!("../i18n/en/projects.ftl"),
        include_str!("../i18n/es/projects.ftl"),
    ),
    (
        "videos",
        include_str!("../i18n/en/videos.ftl"),
        include_str!("../i18n/es/videos.ftl"),
    ),
    (
        "contact",
        include_str!("../i18n/en/contact.ftl"),
        include_str!("../i18n/es/contact.ftl"),
    ),
    (
        "automation",
        include_str!("../i18n/en/automation.ftl"),
        include_str!("../i18n/es/automation.ftl"),
    ),
    (
        "footer",
        include_str!("../i18n/en/footer.ftl"),
        include_str!("../i18n/es/footer.ftl"),
    ),
];

/// Translation completeness: `es` provides at least the keys of `en`
/// for every table, and no file defines a key twice.
#[test]
fn spanish_tables_cover_english_keys() {
    let mut failures = Vec::new();

    for (table, en, es) in TABLES {
        assert_no_dup_keys(en, &format!("en/{table}"));
        assert_no_dup_keys(es, &format!("es/{table}"));

        let fallback_keys = extract_keys(en);
        assert!(!fallback_keys.is_empty(), "en/{table} contains no keys.");

        let keys = extract_keys(es);
        let missing: BTreeSet<_> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "es/{table} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(message_key).map(str::to_string).collect()
}

fn message_key(line: &str) -> Option<&str> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-') {
        return None;
    }
    let key = line[..line.find('=')?].trim();
    let valid = !key.is_empty() && !key.contains(char::is_whitespace) && !key.starts_with('[');
    valid.then_some(key)
}

/// Assert no duplicate key definitions in a single FTL file.
fn assert_no_dup_keys(src: &str, origin: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<_> = src
        .lines()
        .filter_map(message_key)
        .filter(|key| !seen.insert(*key))
        .collect();

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {origin}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
