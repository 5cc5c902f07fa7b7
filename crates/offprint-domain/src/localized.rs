//! Locale-keyed text values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text keyed by platform locale (e.g. `"en_US"`, `"pt_BR"`).
///
/// Backed by an ordered map so iterating over locales is deterministic.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Localized(BTreeMap<String, String>);

impl Localized {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-locale constructor
    pub fn with(locale: impl Into<String>, value: impl Into<String>) -> Self {
        let mut localized = Self::new();
        localized.set(locale, value);
        localized
    }

    pub fn set(&mut self, locale: impl Into<String>, value: impl Into<String>) {
        self.0.insert(locale.into(), value.into());
    }

    /// Builder variant of [`set`](Self::set)
    pub fn and(mut self, locale: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(locale, value);
        self
    }

    /// Value for the given locale. Empty strings count as absent.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0
            .get(locale)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// True when no locale carries a non-empty value
    pub fn is_empty(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Locale/value pairs in locale order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(locale, value)| (locale.as_str(), value.as_str()))
    }

    /// First non-empty value in locale order, with its locale
    pub fn first(&self) -> Option<(&str, &str)> {
        self.iter().find(|(_, value)| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_value_for_locale() {
        let localized = Localized::with("en_US", "Title").and("pt_BR", "Título");
        assert_eq!(localized.get("en_US"), Some("Title"));
        assert_eq!(localized.get("pt_BR"), Some("Título"));
        assert_eq!(localized.get("fr_FR"), None);
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let localized = Localized::with("en_US", "");
        assert_eq!(localized.get("en_US"), None);
        assert!(localized.is_empty());
    }

    #[test]
    fn test_iteration_is_locale_ordered() {
        let localized = Localized::with("pt_BR", "b").and("en_US", "a").and("fr_FR", "c");
        let locales: Vec<&str> = localized.iter().map(|(locale, _)| locale).collect();
        assert_eq!(locales, vec!["en_US", "fr_FR", "pt_BR"]);
    }

    #[test]
    fn test_first_skips_empty_values() {
        let localized = Localized::with("en_US", "").and("fr_FR", "Titre");
        assert_eq!(localized.first(), Some(("fr_FR", "Titre")));
    }
}
