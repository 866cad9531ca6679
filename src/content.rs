//! Site metadata consumed by navigation and head-tag rendering.
//!
//! Locale-independent data: identity, contact details, social handles, and
//! theme color. Localized copy lives in the i18n translation table instead.

use chrono::Datelike;
use serde::Serialize;
use std::borrow::Cow;

/// Postal address fields emitted in structured data.
#[derive(Debug, Clone, Serialize)]
pub struct Address {
    pub street: &'static str,
    pub locality: &'static str,
    pub country: &'static str,
}

/// Social profile handles and URLs.
#[derive(Debug, Clone, Serialize)]
pub struct Social {
    pub twitter: &'static str,
    pub instagram: &'static str,
    pub youtube: &'static str,
}

/// Identity and contact metadata for the site.
#[derive(Debug, Clone, Serialize)]
pub struct Site {
    pub name: &'static str,
    /// Canonical URL; `Cow` so a deploy can override it via `SITE_URL`
    pub url: Cow<'static, str>,
    pub description: &'static str,
    pub author: &'static str,
    pub email: &'static str,
    pub telephone: &'static str,
    pub address: Address,
    pub social: Social,
    pub theme_color: &'static str,
    pub keywords: &'static [&'static str],
}

/// The site's metadata, defined once at build time.
pub const SITE: Site = Site {
    name: "Astro Starter",
    url: Cow::Borrowed("https://example.com"),
    description: "A modern static-site starter template.",
    author: "Your Name",
    email: "your.email@example.com",
    telephone: "+1 234 567 890",
    address: Address {
        street: "123 Main St",
        locality: "Anytown",
        country: "USA",
    },
    social: Social {
        twitter: "@yourhandle",
        instagram: "https://www.instagram.com/yourhandle",
        youtube: "https://www.youtube.com/yourhandle",
    },
    // slate-800
    theme_color: "#1e293b",
    keywords: &["astro", "starter", "template"],
};

impl Site {
    /// Copy of the metadata with the deploy-time canonical URL applied.
    pub fn with_url(&self, url: impl Into<Cow<'static, str>>) -> Site {
        Site {
            url: url.into(),
            ..self.clone()
        }
    }
}

/// Footer copyright line for the current year.
///
/// The localized "all rights reserved" suffix comes from the translation
/// table; this function only owns the year and site name.
pub fn copyright_line(rights: &str) -> String {
    let year = chrono::Utc::now().year();
    format!("© {} {}. {}", year, SITE.name, rights)
}
