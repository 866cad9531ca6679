use anyhow::{bail, Result};
use site_i18n::config::Config;
use site_i18n::i18n::{CoverageValidator, LocaleRegistry, TranslationTable};
use site_i18n::server;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_i18n=info".parse()?),
        )
        .init();

    info!("Starting site i18n service");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Verify translation coverage before serving anything: the default
    // locale must cover every key, or fallback cannot be guaranteed
    let report = CoverageValidator::validate(LocaleRegistry::get(), TranslationTable::get());
    for warning in &report.warnings {
        warn!("Translation coverage: {}", warning);
    }
    if report.has_errors() {
        for error in &report.errors {
            tracing::error!("Translation coverage: {}", error);
        }
        bail!("Translation table failed coverage validation");
    }

    info!(
        locales = LocaleRegistry::get().list().len(),
        default = LocaleRegistry::get().default_locale().code,
        "Locale registry loaded"
    );

    server::serve(&config).await
}
