use std::path::PathBuf;

use anyhow::{Context, Result};

/// Service configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON lexicon snapshot replacing the built-in tables.
    pub lexicon_path: Option<PathBuf>,
    /// Upper bound on resumes in one ranking request.
    pub max_rank_candidates: usize,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            lexicon_path: None,
            max_rank_candidates: 50,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            lexicon_path: std::env::var("JOBFIT_LEXICON_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            max_rank_candidates: parse_env(
                "JOBFIT_MAX_RANK_CANDIDATES",
                defaults.max_rank_candidates,
            )?,
            max_body_bytes: parse_env("JOBFIT_MAX_BODY_BYTES", defaults.max_body_bytes)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
