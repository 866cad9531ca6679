//! Locale type: Flexible, validated locale representation.
//!
//! This module provides the `Locale` type, a copyable wrapper around a
//! registered locale code that validates against the registry on
//! construction.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use serde::Serialize;

/// A validated locale.
///
/// This type represents a locale that has been validated against the registry.
/// It ensures that only registered locales can be constructed; every value is
/// guaranteed to be a key of the built-in [`LocaleRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale {
    /// ISO 639-1 locale code (e.g., "en", "es")
    code: &'static str,
}

impl Locale {
    /// Constant for English, the default locale.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Constant for Spanish.
    pub const SPANISH: Locale = Locale { code: "es" };

    /// Create a Locale from a locale code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code names a registered locale
    /// * `Err` if the code is not found in the registry
    ///
    /// For the total validate-or-default variants, see
    /// [`LocaleRegistry::to_locale`] and [`LocaleRegistry::resolve_path`].
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            // Use the static str from the registry
            Some(config) => Ok(Locale { code: config.code }),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Build a Locale from a registry entry that has already been validated.
    pub(crate) fn from_registered(config: &LocaleConfig) -> Locale {
        Locale { code: config.code }
    }

    /// Get the default locale.
    ///
    /// This is the fallback target for both path resolution and translation
    /// lookup.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// Get the ISO 639-1 locale code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the locale code is not found in the registry. This should
    /// never happen if the Locale was constructed properly (via `from_code`,
    /// the constants, or the resolver).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the display label (e.g., "English", "Spanish").
    pub fn label(&self) -> &'static str {
        self.config().label
    }

    /// Get the flag glyph, if the locale defines one.
    pub fn flag(&self) -> Option<&'static str> {
        self.config().flag
    }

    /// Get the BCP-47 tag (e.g., "en-US").
    pub fn tag(&self) -> &'static str {
        self.config().tag
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
