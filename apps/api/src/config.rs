use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5577;
const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 20;
const DEFAULT_SCORE_BASE: &str = "http://localhost:5500";

/// JD server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// `GEMINI_API_KEY`, falling back to `GENERATIVE_AI_API_KEY`. `None` disables external generation.
    pub gemini_api_key: Option<String>,
    pub generation_timeout_secs: u64,
    pub rust_log: String,
}

/// Settings handed to the composer at construction time.
#[derive(Debug, Clone, Default)]
pub struct ComposerConfig {
    pub external_api_key: Option<String>,
    pub external_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("DEV_JD_PORT", DEFAULT_PORT)?,
            gemini_api_key: optional_env("GEMINI_API_KEY")
                .or_else(|| optional_env("GENERATIVE_AI_API_KEY")),
            generation_timeout_secs: parse_env(
                "GENERATION_TIMEOUT_SECS",
                DEFAULT_GENERATION_TIMEOUT_SECS,
            )?,
            rust_log: rust_log(),
        })
    }

    pub fn composer(&self) -> ComposerConfig {
        ComposerConfig {
            external_api_key: self.gemini_api_key.clone(),
            external_timeout: Duration::from_secs(self.generation_timeout_secs),
        }
    }
}

/// Batch scorer configuration.
#[derive(Debug, Clone)]
pub struct RankConfig {
    pub database_url: String,
    /// Base URL of the scoring service, without a trailing slash.
    pub score_base_url: String,
    pub rust_log: String,
}

impl RankConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let score_base_url = optional_env("FLASK_SCORE_BASE")
            .unwrap_or_else(|| DEFAULT_SCORE_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(RankConfig {
            database_url: require_env("DATABASE_URL")?,
            score_base_url,
            rust_log: rust_log(),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads a variable, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

fn rust_log() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
}
