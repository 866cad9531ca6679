//! Internationalization (i18n) module for the site.
//!
//! This module owns locale resolution and UI string translation. All
//! locale-related logic, localized strings, and validation live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their metadata
//! - `locale`: Type-safe Locale value validated against the registry
//! - `resolver`: Total validate-or-default resolution from URL paths and tokens
//! - `table`: Centralized localized strings
//! - `translator`: Key lookup with one-level fallback to the default locale
//! - `validator`: Startup coverage check for the translation table
//! - `metrics`: Resolution and fallback observability
//!
//! # Example
//!
//! ```rust,ignore
//! use site_i18n::i18n::{translate, LocaleRegistry};
//!
//! let locale = LocaleRegistry::get().resolve_path("/es/about");
//! let t = translate(locale);
//! assert_eq!(t.t("nav.about"), "Sobre");
//! ```

mod locale;
mod metrics;
mod registry;
mod resolver;
mod table;
mod translator;
mod validator;

pub(crate) use resolver::first_segment;

pub use locale::Locale;
pub use metrics::{I18nMetrics, MetricsReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use table::{LocaleStrings, TranslationTable};
pub use translator::{translate, Lookup, Translator};
pub use validator::{CoverageValidator, ValidationReport};
