//! Translation table: Centralized localized UI strings.
//!
//! The table is a two-level mapping, locale code → (translation key → string),
//! compiled into the process as static data. The default locale's entry is
//! required to contain every key the site ever looks up; other locales may
//! have partial coverage and rely on the translator's fallback.

use std::sync::OnceLock;

/// All localized strings for one locale.
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    /// ISO 639-1 locale code this entry belongs to
    pub locale: &'static str,

    /// Key → string pairs, keys in `section.name` dot notation
    pub strings: &'static [(&'static str, &'static str)],
}

/// The complete translation table for the site.
///
/// Immutable after construction. Lookup is linear over a handful of locales
/// and a few dozen keys.
pub struct TranslationTable {
    entries: Vec<LocaleStrings>,
}

/// Global table instance (initialized lazily)
static TABLE: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// Get the global translation table instance.
    pub fn get() -> &'static TranslationTable {
        TABLE.get_or_init(|| TranslationTable {
            entries: vec![
                LocaleStrings {
                    locale: "en",
                    strings: ENGLISH_STRINGS,
                },
                LocaleStrings {
                    locale: "es",
                    strings: SPANISH_STRINGS,
                },
            ],
        })
    }

    /// Build a table from explicit per-locale entries.
    ///
    /// Intended for tests that need a table different from the built-in one.
    pub fn new(entries: Vec<LocaleStrings>) -> Self {
        Self { entries }
    }

    /// Look up a raw string for a locale, without any fallback.
    pub fn raw(&self, locale: &str, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.locale == locale)
            .and_then(|entry| {
                entry
                    .strings
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| *v)
            })
    }

    /// All locale codes present in the table, in declaration order.
    pub fn locales(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.locale).collect()
    }

    /// All keys defined for a locale, in declaration order.
    pub fn keys(&self, locale: &str) -> Vec<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.locale == locale)
            .map(|entry| entry.strings.iter().map(|(k, _)| *k).collect())
            .unwrap_or_default()
    }
}

// ==================== English Strings (default locale) ====================

/// English strings. This set is the source of truth: the coverage validator
/// requires every key of every other locale to appear here.
pub const ENGLISH_STRINGS: &[(&str, &str)] = &[
    // Navigation
    ("nav.services", "Services"),
    ("nav.about", "About"),
    ("nav.contact", "Contact"),
    // Hero section
    ("hero.title", "Astro Starter"),
    (
        "hero.subtitle",
        "Welcome to your new site. Start building something amazing!",
    ),
    ("hero.cta", "Get Started"),
    // About section
    ("about.title", "About This Project"),
    // Contact section
    ("contact.title", "Get in Touch"),
    (
        "contact.subtitle",
        "Have a question or want to work together? I'd love to hear from you.",
    ),
    ("contact.phone_label", "Phone / WhatsApp"),
    ("contact.email_label", "Email"),
    ("contact.cta", "Send a Message"),
    // Footer
    ("footer.rights", "All rights reserved."),
];

// ==================== Spanish Strings ====================

/// Spanish strings. Coverage may be partial; missing keys fall back to
/// English at lookup time.
pub const SPANISH_STRINGS: &[(&str, &str)] = &[
    // Navigation
    ("nav.services", "Servicios"),
    ("nav.about", "Sobre"),
    ("nav.contact", "Contacto"),
    // Hero section
    ("hero.title", "Astro Starter"),
    (
        "hero.subtitle",
        "Bienvenido a tu nuevo sitio. ¡Empieza a construir algo increíble!",
    ),
    ("hero.cta", "Comenzar"),
    // About section
    ("about.title", "Sobre Este Proyecto"),
    // Contact section
    ("contact.title", "Ponte en Contacto"),
    (
        "contact.subtitle",
        "¿Tienes una pregunta o quieres trabajar juntos? Me encantaría saber de ti.",
    ),
    ("contact.phone_label", "Teléfono / WhatsApp"),
    ("contact.email_label", "Correo"),
    ("contact.cta", "Enviar un Mensaje"),
    // Footer
    ("footer.rights", "Todos los derechos reservados."),
];

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Lookup Tests ====================

    #[test]
    fn test_raw_lookup_english() {
        let table = TranslationTable::get();
        assert_eq!(table.raw("en", "nav.about"), Some("About"));
        assert_eq!(table.raw("en", "nav.services"), Some("Services"));
    }

    #[test]
    fn test_raw_lookup_spanish() {
        let table = TranslationTable::get();
        assert_eq!(table.raw("es", "nav.about"), Some("Sobre"));
        assert_eq!(table.raw("es", "nav.contact"), Some("Contacto"));
    }

    #[test]
    fn test_raw_lookup_unknown_key() {
        let table = TranslationTable::get();
        assert_eq!(table.raw("en", "nav.missing"), None);
    }

    #[test]
    fn test_raw_lookup_unknown_locale() {
        let table = TranslationTable::get();
        assert_eq!(table.raw("fr", "nav.about"), None);
    }

    // ==================== Shape Tests ====================

    #[test]
    fn test_locales_match_registry() {
        let table = TranslationTable::get();
        assert_eq!(table.locales(), vec!["en", "es"]);
    }

    #[test]
    fn test_keys_for_english_not_empty() {
        let table = TranslationTable::get();
        let keys = table.keys("en");
        assert!(keys.contains(&"nav.services"));
        assert!(keys.contains(&"footer.rights"));
    }

    #[test]
    fn test_keys_for_unknown_locale_empty() {
        let table = TranslationTable::get();
        assert!(table.keys("fr").is_empty());
    }

    #[test]
    fn test_no_duplicate_keys_within_a_locale() {
        let table = TranslationTable::get();
        for locale in table.locales() {
            let mut keys = table.keys(locale);
            let total = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), total, "duplicate key in locale {}", locale);
        }
    }

    #[test]
    fn test_custom_table() {
        let table = TranslationTable::new(vec![LocaleStrings {
            locale: "de",
            strings: &[("nav.about", "Über")],
        }]);

        assert_eq!(table.raw("de", "nav.about"), Some("Über"));
        assert_eq!(table.raw("en", "nav.about"), None);
    }
}
