use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_NARRATIVE_BYTES: usize = 64 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on narrative/text size accepted by the JSON endpoints.
    pub max_narrative_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_narrative_bytes: DEFAULT_MAX_NARRATIVE_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_narrative_bytes: match lookup("MAX_NARRATIVE_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("MAX_NARRATIVE_BYTES must be a byte count, got '{raw}'"))?,
                None => defaults.max_narrative_bytes,
            },
        })
    }
}
