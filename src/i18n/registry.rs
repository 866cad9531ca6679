//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of all locales supported by the
//! site. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access, but every query method takes `&self` so tests
//! can construct alternate registries without process-wide side effects.

use serde::Serialize;
use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains all display metadata for a specific locale: its code, the label
/// shown in the language switcher, an optional flag glyph, and the BCP-47 tag
/// emitted in `<html lang>` attributes.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleConfig {
    /// ISO 639-1 locale code (e.g., "en", "es")
    pub code: &'static str,

    /// Display label for the language switcher (e.g., "English", "Spanish")
    pub label: &'static str,

    /// Optional flag glyph shown next to the label
    pub flag: Option<&'static str>,

    /// BCP-47 tag (e.g., "en-US", "es-ES")
    pub tag: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,
}

/// Registry of supported locales.
///
/// The registry is immutable after construction. There is no dynamic locale
/// registration: the supported set is fixed at build time.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    ///
    /// Initializes the built-in registry on first call and returns a reference
    /// to the singleton on subsequent calls.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: builtin_locales(),
        })
    }

    /// Build a registry from an explicit locale set.
    ///
    /// Intended for tests that need a registry different from the built-in
    /// one. The caller is responsible for marking exactly one entry default.
    pub fn new(locales: Vec<LocaleConfig>) -> Self {
        Self { locales }
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Check whether a code names a registered locale.
    ///
    /// This is the single validate-or-default predicate shared by
    /// [`resolve_path`](Self::resolve_path) and [`to_locale`](Self::to_locale).
    pub fn is_registered(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Get all registered locales, in declaration order.
    pub fn list(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Get the default locale configuration.
    ///
    /// The default locale is the fallback target for both path resolution and
    /// translation lookup. There should be exactly one.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple defaults are
    /// defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }
}

/// Built-in locale configurations.
///
/// Currently supports English (default) and Spanish.
fn builtin_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            label: "English",
            flag: Some("🇺🇸"),
            tag: "en-US",
            is_default: true,
        },
        LocaleConfig {
            code: "es",
            label: "Spanish",
            flag: Some("🇪🇸"),
            tag: "es-ES",
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("en");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "en");
        assert_eq!(config.label, "English");
        assert_eq!(config.flag, Some("🇺🇸"));
        assert_eq!(config.tag, "en-US");
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_spanish() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("es");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "es");
        assert_eq!(config.label, "Spanish");
        assert_eq!(config.tag, "es-ES");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("fr").is_none());
    }

    #[test]
    fn test_is_registered() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_registered("en"));
        assert!(registry.is_registered("es"));
        assert!(!registry.is_registered("fr"));
        assert!(!registry.is_registered(""));
    }

    #[test]
    fn test_list_contains_english_and_spanish() {
        let registry = LocaleRegistry::get();
        let all = registry.list();

        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|locale| locale.code == "en"));
        assert!(all.iter().any(|locale| locale.code == "es"));
    }

    #[test]
    fn test_default_locale_is_english() {
        let registry = LocaleRegistry::get();
        let default = registry.default_locale();

        assert_eq!(default.code, "en");
        assert!(default.is_default);
    }

    #[test]
    fn test_custom_registry_does_not_affect_global() {
        let custom = LocaleRegistry::new(vec![
            LocaleConfig {
                code: "de",
                label: "German",
                flag: None,
                tag: "de-DE",
                is_default: true,
            },
            LocaleConfig {
                code: "fr",
                label: "French",
                flag: Some("🇫🇷"),
                tag: "fr-FR",
                is_default: false,
            },
        ]);

        assert!(custom.is_registered("de"));
        assert!(!custom.is_registered("en"));
        assert_eq!(custom.default_locale().code, "de");

        // The global registry is untouched
        assert!(LocaleRegistry::get().is_registered("en"));
        assert!(!LocaleRegistry::get().is_registered("de"));
    }

    #[test]
    fn test_locale_config_clone() {
        let config = LocaleConfig {
            code: "en",
            label: "English",
            flag: None,
            tag: "en-US",
            is_default: true,
        };

        let cloned = config.clone();
        assert_eq!(config.code, cloned.code);
        assert_eq!(config.label, cloned.label);
    }
}
