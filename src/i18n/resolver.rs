//! Locale resolution: derive a valid locale from an inbound URL.
//!
//! Both entry points share the same validate-or-default policy: a candidate
//! code that is registered resolves to itself, anything else resolves to the
//! default locale. They differ only in how the candidate token is extracted
//! (first path segment vs. an already-isolated value). Neither can fail.

use crate::i18n::{Locale, LocaleRegistry};

/// Extract the candidate locale token from a URL path: the first non-empty
/// `/`-separated segment.
pub(crate) fn first_segment(path: &str) -> Option<&str> {
    path.split('/').find(|segment| !segment.is_empty())
}

impl LocaleRegistry {
    /// Resolve a locale from a URL path.
    ///
    /// Takes the first non-empty `/`-separated segment as the candidate code.
    /// `/es/about` resolves to Spanish; `/fr/about`, `/about`, `""`, and any
    /// malformed path all resolve to the default locale.
    ///
    /// Always returns a registered locale; never fails.
    pub fn resolve_path(&self, path: &str) -> Locale {
        self.validate_or_default(first_segment(path))
    }

    /// Resolve a locale from an optional bare token.
    ///
    /// `None` and the empty string resolve to the default locale; a registered
    /// code resolves to itself; anything else resolves to the default locale.
    ///
    /// Always returns a registered locale; never fails.
    pub fn to_locale(&self, value: Option<&str>) -> Locale {
        self.validate_or_default(value.filter(|v| !v.is_empty()))
    }

    /// The shared validate-or-default policy behind both entry points.
    fn validate_or_default(&self, candidate: Option<&str>) -> Locale {
        candidate
            .and_then(|code| self.get_by_code(code))
            .map(Locale::from_registered)
            .unwrap_or_else(|| Locale::from_registered(self.default_locale()))
    }
}
