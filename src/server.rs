//! HTTP facade for the i18n core.
//!
//! Page-rendering templates supply a raw request path or a bare locale token
//! and receive back the resolved locale plus the translated string bundle to
//! embed in markup. The locale list feeds the language switcher; site
//! metadata feeds head tags and structured data.

use crate::config::Config;
use crate::content::{self, Site, SITE};
use crate::i18n::{
    first_segment, I18nMetrics, Locale, LocaleConfig, LocaleRegistry, MetricsReport,
    TranslationTable, Translator,
};
use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::collections::BTreeMap;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared handler state: the process-wide registry and table plus the site
/// metadata with the deploy-time URL applied.
#[derive(Clone)]
pub struct AppState {
    registry: &'static LocaleRegistry,
    table: &'static TranslationTable,
    site: Site,
}

impl AppState {
    fn from_config(config: &Config) -> Self {
        Self {
            registry: LocaleRegistry::get(),
            table: TranslationTable::get(),
            site: SITE.with_url(config.site_url.clone()),
        }
    }

    fn default_locale(&self) -> Locale {
        Locale::from_registered(self.registry.default_locale())
    }
}

/// Response for locale-list requests (language switcher data).
#[derive(Debug, Serialize)]
struct LocalesResponse {
    default: &'static str,
    locales: Vec<LocaleConfig>,
}

/// Response carrying a resolved locale and its translated string bundle.
#[derive(Debug, Serialize)]
struct StringsResponse {
    locale: Locale,
    label: &'static str,
    tag: &'static str,
    flag: Option<&'static str>,
    strings: BTreeMap<&'static str, &'static str>,
    copyright: String,
}

impl StringsResponse {
    fn build(state: &AppState, locale: Locale) -> Self {
        let translator = Translator::with_table(state.table, locale, state.default_locale());
        let (strings, fallbacks) = translator.bundle();
        I18nMetrics::global().record_bundle(fallbacks);

        let config = state
            .registry
            .get_by_code(locale.code())
            .expect("Resolved locale is always registered");

        Self {
            locale,
            label: config.label,
            tag: config.tag,
            flag: config.flag,
            copyright: content::copyright_line(translator.t("footer.rights")),
            strings,
        }
    }
}

/// Build the application router.
pub fn app(config: &Config) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/api/locales", get(list_locales))
        .route("/api/site", get(site_metadata))
        .route("/api/metrics", get(metrics))
        .route("/api/strings/:locale", get(strings_for_locale))
        .fallback(get(resolve_page))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::from_config(config))
}

/// Bind and serve until shutdown.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app(config))
        .await
        .context("Server error")?;
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn list_locales(State(state): State<AppState>) -> Json<LocalesResponse> {
    Json(LocalesResponse {
        default: state.registry.default_locale().code,
        locales: state.registry.list().to_vec(),
    })
}

async fn site_metadata(State(state): State<AppState>) -> Json<Site> {
    Json(state.site.clone())
}

async fn metrics() -> Json<MetricsReport> {
    Json(I18nMetrics::global().report())
}

/// Bundle for an already-isolated locale token, e.g. the language switcher's
/// selection. Unknown tokens silently resolve to the default locale.
async fn strings_for_locale(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Json<StringsResponse> {
    let resolved = state.registry.to_locale(Some(&locale));
    record_resolution(&state, resolved, Some(&locale));
    Json(StringsResponse::build(&state, resolved))
}

/// Bundle for an arbitrary page path, e.g. `/es/about`. The first path
/// segment is the locale candidate; anything unknown resolves to the default.
async fn resolve_page(State(state): State<AppState>, uri: Uri) -> Json<StringsResponse> {
    let path = uri.path();
    let resolved = state.registry.resolve_path(path);
    record_resolution(&state, resolved, first_segment(path));
    Json(StringsResponse::build(&state, resolved))
}

fn record_resolution(state: &AppState, resolved: Locale, candidate: Option<&str>) {
    let metrics = I18nMetrics::global();
    metrics.record_resolution();

    let exact = candidate.is_some_and(|code| state.registry.is_registered(code));
    if !exact {
        tracing::debug!(
            candidate = candidate.unwrap_or(""),
            resolved = resolved.code(),
            "Locale resolution fell back to default"
        );
        metrics.record_resolution_fallback();
    }
}
