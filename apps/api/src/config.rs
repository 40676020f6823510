use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Nothing is required; every variable has a default or is optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub cors_origin: String,
    /// JSON array of job roles seeded into the catalog at startup.
    pub job_roles_path: Option<PathBuf>,
    /// Replacement skill vocabulary, comma-separated in the environment.
    pub skill_vocabulary: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => 5000,
        };

        let skill_vocabulary = match get("SKILL_VOCABULARY") {
            Some(raw) => {
                let tokens = parse_token_list(&raw);
                if tokens.is_empty() {
                    bail!("SKILL_VOCABULARY must contain at least one skill");
                }
                Some(tokens)
            }
            None => None,
        };

        Ok(Config {
            port,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            cors_origin: get("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:5173".to_string()),
            job_roles_path: get("JOB_ROLES_PATH").map(PathBuf::from),
            skill_vocabulary,
        })
    }
}

fn parse_token_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
