//! i18n observability: resolution and fallback counters.
//!
//! Counts how often locales are resolved from inbound paths, how often
//! resolution fell back to the default locale, and how often string lookups
//! fell back. Purely additive; the resolver and translator stay side-effect
//! free and the HTTP layer records the events.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global i18n metrics singleton.
pub struct I18nMetrics {
    /// Number of locale resolutions served (path or token)
    resolutions: AtomicUsize,

    /// Number of resolutions that fell back to the default locale
    resolution_fallbacks: AtomicUsize,

    /// Number of string bundles served
    bundles: AtomicUsize,

    /// Number of individual keys that fell back to the default locale
    key_fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<I18nMetrics> = OnceLock::new();

impl I18nMetrics {
    /// Get the global i18n metrics instance.
    pub fn global() -> &'static I18nMetrics {
        METRICS.get_or_init(I18nMetrics::new)
    }

    /// Create a fresh, zeroed metrics instance.
    pub fn new() -> Self {
        Self {
            resolutions: AtomicUsize::new(0),
            resolution_fallbacks: AtomicUsize::new(0),
            bundles: AtomicUsize::new(0),
            key_fallbacks: AtomicUsize::new(0),
        }
    }

    /// Record a locale resolution.
    pub fn record_resolution(&self) {
        self.resolutions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a resolution that fell back to the default locale.
    pub fn record_resolution_fallback(&self) {
        self.resolution_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a served string bundle, with the number of keys that fell back.
    pub fn record_bundle(&self, key_fallbacks: usize) {
        self.bundles.fetch_add(1, Ordering::Relaxed);
        self.key_fallbacks.fetch_add(key_fallbacks, Ordering::Relaxed);
    }

    /// Get the current resolution count.
    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::Relaxed)
    }

    /// Get the current resolution fallback count.
    pub fn resolution_fallbacks(&self) -> usize {
        self.resolution_fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current bundle count.
    pub fn bundles(&self) -> usize {
        self.bundles.load(Ordering::Relaxed)
    }

    /// Get the current key fallback count.
    pub fn key_fallbacks(&self) -> usize {
        self.key_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolutions = self.resolutions();
        let fallbacks = self.resolution_fallbacks();
        // The two counters are incremented separately, so a concurrent
        // recorder can briefly make fallbacks exceed the resolutions read
        // above; saturate instead of underflowing
        let exact = resolutions.saturating_sub(fallbacks);
        let exact_rate = if resolutions > 0 {
            (exact as f64 / resolutions as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            resolutions,
            resolution_fallbacks: fallbacks,
            exact_resolution_rate: exact_rate,
            bundles: self.bundles(),
            key_fallbacks: self.key_fallbacks(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.resolutions.store(0, Ordering::Relaxed);
        self.resolution_fallbacks.store(0, Ordering::Relaxed);
        self.bundles.store(0, Ordering::Relaxed);
        self.key_fallbacks.store(0, Ordering::Relaxed);
    }
}

impl Default for I18nMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Metrics report containing current i18n statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of locale resolutions served
    pub resolutions: usize,

    /// Number of resolutions that fell back to the default locale
    pub resolution_fallbacks: usize,

    /// Share of resolutions that matched a registered locale (0-100)
    pub exact_resolution_rate: f64,

    /// Number of string bundles served
    pub bundles: usize,

    /// Number of individual keys that fell back to the default locale
    pub key_fallbacks: usize,
}
