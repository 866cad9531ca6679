//! Locale resolution and UI string translation for a marketing/resume site.
//!
//! The crate owns the site's i18n core: a fixed locale registry, total
//! validate-or-default locale resolution from URL paths, and key-based
//! string translation with one-level fallback to the default locale. A small
//! HTTP facade exposes the resolved locale and string bundles to the
//! page-rendering templates.

pub mod config;
pub mod content;
pub mod i18n;
pub mod server;
