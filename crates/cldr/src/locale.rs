//! Locale identifiers and inheritance chains.

use std::collections::HashMap;

/// The locale every fallback chain ends at.
pub const ROOT: &str = "root";

/// Normalize a CLDR locale or file stem (`pa_Arab`) to `pa-Arab`.
pub fn normalize(locale: &str) -> String {
    locale.replace('_', "-")
}

/// Explicit parent-locale overrides.
#[derive(Debug, Clone, Default)]
pub struct ParentLocales {
    parents: HashMap<String, String>,
}

impl ParentLocales {
    /// Locales whose data must not inherit from their language's
    /// default-script locale.
    pub const CURATED: &[(&str, &str)] = &[
        ("ky-Latn", ROOT),
        ("sd-Deva", ROOT),
        ("tg-Arab", ROOT),
        ("ug-Cyrl", ROOT),
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `locale` inherits directly from `parent`.
    pub fn insert(&mut self, locale: &str, parent: &str) {
        self.parents.insert(normalize(locale), normalize(parent));
    }

    /// Add the curated overrides on top of the loaded entries.
    pub fn with_curated(mut self) -> Self {
        for (locale, parent) in Self::CURATED {
            self.insert(locale, parent);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Immediate parent of `locale`, or `None` for the root itself.
    pub fn parent_of(&self, locale: &str) -> Option<String> {
        if locale == ROOT {
            return None;
        }
        if let Some(parent) = self.parents.get(locale) {
            return Some(parent.clone());
        }
        match locale.rsplit_once('-') {
            Some((stripped, _)) => Some(stripped.to_string()),
            None => Some(ROOT.to_string()),
        }
    }

    /// Walk from `locale` up to the root, yielding `locale` first and
    /// [`ROOT`] last.
    pub fn resolve_chain(&self, locale: &str) -> FallbackChain<'_> {
        FallbackChain { parents: self, next: Some(locale.to_string()), seen: Vec::new() }
    }
}

/// Lazy iterator over a locale and its ancestors.
#[derive(Debug, Clone)]
pub struct FallbackChain<'a> {
    parents: &'a ParentLocales,
    next: Option<String>,
    seen: Vec<String>,
}

impl FallbackChain<'_> {
    /// The non-root part of the chain, which is what data lookups walk.
    pub fn lookup_locales(self) -> impl Iterator<Item = String> {
        self.take_while(|locale| locale != ROOT)
    }
}

impl Iterator for FallbackChain<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current = self.next.take()?;
        self.next = self.parents.parent_of(&current).map(|parent| {
            // An override cycle would never reach the root.
            if parent == current || self.seen.contains(&parent) { ROOT.to_string() } else { parent }
        });
        self.seen.push(current.clone());
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chain(parents: &ParentLocales, locale: &str) -> Vec<String> {
        parents.resolve_chain(locale).collect()
    }

    #[test]
    fn test_strips_one_segment_at_a_time() {
        let parents = ParentLocales::new();
        assert_eq!(chain(&parents, "pa-Arab-PK"), ["pa-Arab-PK", "pa-Arab", "pa", "root"]);
    }

    #[test]
    fn test_explicit_parent_wins() {
        let mut parents = ParentLocales::new();
        parents.insert("pa_Arab", "root");
        assert_eq!(chain(&parents, "pa-Arab-PK"), ["pa-Arab-PK", "pa-Arab", "root"]);
    }

    #[test]
    fn test_curated_overrides() {
        let parents = ParentLocales::new().with_curated();
        assert_eq!(chain(&parents, "ky-Latn"), ["ky-Latn", "root"]);
        assert_eq!(chain(&parents, "ky-Cyrl"), ["ky-Cyrl", "ky", "root"]);
    }

    #[test]
    fn test_root_is_terminal() {
        let parents = ParentLocales::new();
        assert_eq!(chain(&parents, "root"), ["root"]);
        assert_eq!(chain(&parents, "en"), ["en", "root"]);
    }

    #[test]
    fn test_chain_length_bound() {
        let parents = ParentLocales::new();
        for locale in ["en", "sr-Latn", "pa-Arab-PK", "ca-ES-valencia"] {
            let steps = chain(&parents, locale).len() - 1;
            let separators = locale.matches('-').count();
            assert!(steps <= separators + 1, "{locale}: {steps} steps");
        }
    }

    #[test]
    fn test_root_appears_exactly_once() {
        let mut parents = ParentLocales::new();
        parents.insert("en-150", "en-001");
        parents.insert("en-001", "en");
        let locales = chain(&parents, "en-150");
        assert_eq!(locales, ["en-150", "en-001", "en", "root"]);
        assert_eq!(locales.iter().filter(|l| *l == ROOT).count(), 1);
    }

    #[test]
    fn test_override_cycle_terminates() {
        let mut parents = ParentLocales::new();
        parents.insert("xx-A", "xx-B");
        parents.insert("xx-B", "xx-A");
        assert_eq!(chain(&parents, "xx-A"), ["xx-A", "xx-B", "root"]);
    }

    #[test]
    fn test_lookup_locales_skip_root() {
        let parents = ParentLocales::new();
        let locales: Vec<String> = parents.resolve_chain("sr-Latn").lookup_locales().collect();
        assert_eq!(locales, ["sr-Latn", "sr"]);
    }
}
