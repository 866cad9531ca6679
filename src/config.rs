use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Site
    pub site_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Site
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| crate::content::SITE.url.to_string()),
        })
    }
}
