//! Translation coverage validation.
//!
//! The translator's one-level fallback only works when the default locale
//! defines every key the site looks up. That property cannot be checked by
//! the type system, so it is verified once at startup: a key present in any
//! locale but missing from the default is an error, while partial coverage in
//! a non-default locale is only a warning (the fallback handles it).

use crate::i18n::{LocaleRegistry, TranslationTable};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Configuration errors that must fail startup
    pub errors: Vec<String>,

    /// Non-critical findings worth logging
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation table coverage and key hygiene.
pub struct CoverageValidator;

// Key format regex (cached for performance)
static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

impl CoverageValidator {
    /// Validate a translation table against a locale registry.
    ///
    /// Checks that:
    /// - the default locale has an entry in the table
    /// - every table locale is registered, and vice versa
    /// - the default locale's key set is a superset of every other locale's
    /// - keys follow `section.name` dot notation
    /// - no default-locale string is empty
    ///
    /// # Returns
    /// A `ValidationReport`; callers decide whether errors abort startup.
    pub fn validate(registry: &LocaleRegistry, table: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let default_code = registry.default_locale().code;
        let table_locales = table.locales();

        if !table_locales.contains(&default_code) {
            report.errors.push(format!(
                "Default locale '{}' has no entry in the translation table",
                default_code
            ));
            return report;
        }

        // Registry and table must agree on the locale set
        for locale in &table_locales {
            if !registry.is_registered(locale) {
                report.errors.push(format!(
                    "Table locale '{}' is not in the locale registry",
                    locale
                ));
            }
        }
        for locale in registry.list() {
            if !table_locales.contains(&locale.code) {
                report.warnings.push(format!(
                    "Registered locale '{}' has no translations; every lookup will fall back",
                    locale.code
                ));
            }
        }

        let default_keys = table.keys(default_code);

        // The default locale is the fallback of last resort: it must cover
        // every key any locale defines
        for locale in &table_locales {
            if *locale == default_code {
                continue;
            }
            for key in table.keys(locale) {
                if !default_keys.contains(&key) {
                    report.errors.push(format!(
                        "Key '{}' exists for '{}' but is missing from default locale '{}'",
                        key, locale, default_code
                    ));
                }
            }
        }

        // Partial coverage in non-default locales is expected but worth noting
        for locale in &table_locales {
            if *locale == default_code {
                continue;
            }
            let keys = table.keys(locale);
            for key in &default_keys {
                if !keys.contains(key) {
                    report
                        .warnings
                        .push(format!("Locale '{}' is missing key '{}'", locale, key));
                }
            }
        }

        // Key hygiene
        for locale in &table_locales {
            for key in table.keys(locale) {
                if !Self::is_valid_key(key) {
                    report.warnings.push(format!(
                        "Key '{}' in locale '{}' does not follow section.name notation",
                        key, locale
                    ));
                }
            }
        }

        // A blank default string silently blanks the UI in every locale
        for key in &default_keys {
            if table.raw(default_code, key) == Some("") {
                report.errors.push(format!(
                    "Default locale '{}' has an empty string for key '{}'",
                    default_code, key
                ));
            }
        }

        report
    }

    /// Check that a key follows `section.name` dot notation.
    fn is_valid_key(key: &str) -> bool {
        let regex = KEY_REGEX
            .get_or_init(|| Regex::new(r"^[a-z][a-z0-9]*(\.[a-z][a-z0-9_]*)+$").unwrap());
        regex.is_match(key)
    }
}
