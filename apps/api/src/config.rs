use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the job catalog snapshot, read once at startup.
    pub jobs_file: PathBuf,
    /// Optional course catalog path; the built-in catalog is used when unset.
    pub courses_file: Option<PathBuf>,
    /// Strict mode aborts startup when the job catalog cannot be loaded;
    /// otherwise the service starts with an empty catalog and answers 503.
    pub catalog_strict: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jobs_file: std::env::var("JOBS_FILE")
                .unwrap_or_else(|_| "jobs.json".to_string())
                .into(),
            courses_file: std::env::var("COURSES_FILE").ok().map(PathBuf::from),
            catalog_strict: std::env::var("CATALOG_STRICT")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
