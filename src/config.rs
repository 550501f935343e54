//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` via `dotenvy` first, so every value here can come
//! from either the process environment or a local `.env` file.

use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEBSITE_DIR: &str = "website";
pub const DEFAULT_OWNER: &str = "John Doe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Prebuilt static site served for every non-API path.
    pub website_dir: PathBuf,
    /// Portfolio owner's display name, used by the system prompt and the
    /// resume attachment.
    pub owner: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// - `PORT`: default 3000
    /// - `WEBSITE_DIR`: default `./website`
    /// - `PORTFOLIO_OWNER`: default `John Doe`
    #[must_use]
    pub fn from_env() -> Self {
        let website_dir = std::env::var("WEBSITE_DIR").map_or_else(|_| PathBuf::from(DEFAULT_WEBSITE_DIR), PathBuf::from);
        let owner = std::env::var("PORTFOLIO_OWNER")
            .ok()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| DEFAULT_OWNER.to_string());

        Self { port: env_parse("PORT", DEFAULT_PORT), website_dir, owner }
    }
}

/// Parse an env var, falling back to `default` when unset or malformed.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
