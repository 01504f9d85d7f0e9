use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a local default, so a bare checkout runs as-is.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub resume_dir: PathBuf,
    pub port: u16,
    /// Upper bound for a single multipart submission, in bytes.
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_mb = env_or("MAX_UPLOAD_MB", "10")
            .parse::<usize>()
            .context("MAX_UPLOAD_MB must be a whole number of megabytes")?;

        Ok(Config {
            database_path: PathBuf::from(env_or("DATABASE_PATH", "job_applications.db")),
            resume_dir: PathBuf::from(env_or("RESUME_DIR", "resumes")),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
