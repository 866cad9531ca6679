//! Translator: localized string lookup with graceful fallback.
//!
//! A [`Translator`] binds a locale to a shared translation table and answers
//! key lookups with one-level fallback to the default locale. It never fails:
//! a key missing everywhere degrades to the key itself, a condition the
//! startup coverage check treats as a configuration error.

use crate::i18n::{Locale, TranslationTable};
use std::collections::BTreeMap;

/// Outcome of a single key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The bound locale defines the key
    Exact(&'static str),

    /// The bound locale is missing the key; the default locale supplied it
    Fallback(&'static str),

    /// Neither the bound locale nor the default defines the key
    Missing,
}

/// A translator bound to one locale.
///
/// Holds a reference to the shared table rather than an owning copy; cheap to
/// construct per request.
#[derive(Clone, Copy)]
pub struct Translator<'a> {
    locale: Locale,
    default: Locale,
    table: &'a TranslationTable,
}

/// Bind a locale to the built-in table and default locale.
///
/// Convenience for the common case; use [`Translator::with_table`] to inject
/// an alternate table in tests.
pub fn translate(locale: Locale) -> Translator<'static> {
    Translator::with_table(TranslationTable::get(), locale, Locale::default_locale())
}

impl<'a> Translator<'a> {
    /// Bind a locale and explicit default to a table.
    pub fn with_table(table: &'a TranslationTable, locale: Locale, default: Locale) -> Self {
        Self {
            locale,
            default,
            table,
        }
    }

    /// The locale this translator is bound to.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a key, reporting where the string came from.
    ///
    /// An empty string in the bound locale counts as missing and falls back,
    /// matching the site's treatment of blank entries as placeholders.
    pub fn lookup(&self, key: &str) -> Lookup {
        if let Some(value) = self
            .table
            .raw(self.locale.code(), key)
            .filter(|value| !value.is_empty())
        {
            return Lookup::Exact(value);
        }

        match self.table.raw(self.default.code(), key) {
            Some(value) => Lookup::Fallback(value),
            None => Lookup::Missing,
        }
    }

    /// Translate a key.
    ///
    /// Returns the bound locale's string, falling back to the default
    /// locale's, falling back to the key itself.
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        match self.lookup(key) {
            Lookup::Exact(value) | Lookup::Fallback(value) => value,
            Lookup::Missing => key,
        }
    }

    /// Build the full string bundle for the bound locale.
    ///
    /// Iterates the default locale's key set (the authoritative one) and
    /// translates each key. Returns the bundle together with the number of
    /// keys that fell back to the default locale.
    pub fn bundle(&self) -> (BTreeMap<&'static str, &'static str>, usize) {
        let mut strings = BTreeMap::new();
        let mut fallbacks = 0;

        for key in self.table.keys(self.default.code()) {
            match self.lookup(key) {
                Lookup::Exact(value) => {
                    strings.insert(key, value);
                }
                Lookup::Fallback(value) => {
                    strings.insert(key, value);
                    fallbacks += 1;
                }
                // Unreachable for keys drawn from the default locale
                Lookup::Missing => {}
            }
        }

        (strings, fallbacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleStrings;

    fn test_table() -> TranslationTable {
        TranslationTable::new(vec![
            LocaleStrings {
                locale: "en",
                strings: &[
                    ("nav.about", "About"),
                    ("nav.contact", "Contact"),
                    ("hero.cta", "Get Started"),
                ],
            },
            LocaleStrings {
                locale: "es",
                strings: &[("nav.about", "Sobre"), ("hero.cta", "")],
            },
        ])
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_exact_lookup() {
        let table = test_table();
        let t = Translator::with_table(&table, Locale::SPANISH, Locale::ENGLISH);
        assert_eq!(t.lookup("nav.about"), Lookup::Exact("Sobre"));
        assert_eq!(t.t("nav.about"), "Sobre");
    }

    #[test]
    fn test_missing_key_falls_back_to_default() {
        let table = test_table();
        let t = Translator::with_table(&table, Locale::SPANISH, Locale::ENGLISH);
        assert_eq!(t.lookup("nav.contact"), Lookup::Fallback("Contact"));
        assert_eq!(t.t("nav.contact"), "Contact");
    }

    #[test]
    fn test_empty_string_falls_back_to_default() {
        let table = test_table();
        let t = Translator::with_table(&table, Locale::SPANISH, Locale::ENGLISH);
        assert_eq!(t.lookup("hero.cta"), Lookup::Fallback("Get Started"));
    }

    #[test]
    fn test_default_locale_never_falls_back() {
        let table = test_table();
        let t = Translator::with_table(&table, Locale::ENGLISH, Locale::ENGLISH);
        assert_eq!(t.lookup("nav.about"), Lookup::Exact("About"));
    }

    #[test]
    fn test_missing_everywhere_degrades_to_key() {
        let table = test_table();
        let t = Translator::with_table(&table, Locale::SPANISH, Locale::ENGLISH);
        assert_eq!(t.lookup("nav.nowhere"), Lookup::Missing);
        assert_eq!(t.t("nav.nowhere"), "nav.nowhere");
    }

    #[test]
    fn test_lookup_idempotent() {
        let table = test_table();
        let t = Translator::with_table(&table, Locale::SPANISH, Locale::ENGLISH);
        assert_eq!(t.t("nav.contact"), t.t("nav.contact"));
    }

    // ==================== Built-in Table Tests ====================

    #[test]
    fn test_translate_builtin_spanish() {
        let t = translate(Locale::SPANISH);
        assert_eq!(t.t("nav.about"), "Sobre");
        assert_eq!(t.t("nav.services"), "Servicios");
    }

    #[test]
    fn test_translate_builtin_english() {
        let t = translate(Locale::ENGLISH);
        assert_eq!(t.t("nav.about"), "About");
    }

    // Concrete fallback scenario: es is missing a key that en defines
    #[test]
    fn test_spec_scenario_fallback_chain() {
        let table = TranslationTable::new(vec![
            LocaleStrings {
                locale: "en",
                strings: &[("nav.about", "About"), ("nav.contact", "Contact")],
            },
            LocaleStrings {
                locale: "es",
                strings: &[("nav.about", "Sobre")],
            },
        ]);
        let t = Translator::with_table(&table, Locale::SPANISH, Locale::ENGLISH);

        assert_eq!(t.t("nav.about"), "Sobre");
        assert_eq!(t.t("nav.contact"), "Contact");
    }

    // ==================== Bundle Tests ====================

    #[test]
    fn test_bundle_covers_default_key_set() {
        let table = test_table();
        let t = Translator::with_table(&table, Locale::SPANISH, Locale::ENGLISH);
        let (bundle, fallbacks) = t.bundle();

        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle["nav.about"], "Sobre");
        assert_eq!(bundle["nav.contact"], "Contact");
        assert_eq!(bundle["hero.cta"], "Get Started");
        // nav.contact is missing and hero.cta is blank for es
        assert_eq!(fallbacks, 2);
    }

    #[test]
    fn test_bundle_for_default_locale_has_no_fallbacks() {
        let table = test_table();
        let t = Translator::with_table(&table, Locale::ENGLISH, Locale::ENGLISH);
        let (bundle, fallbacks) = t.bundle();

        assert_eq!(bundle.len(), 3);
        assert_eq!(fallbacks, 0);
    }
}
