use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Idle time after which a visitor session is dropped.
    pub session_ttl: Duration,
    /// Simulated delivery delay for the contact form.
    pub contact_delay: Duration,
    pub avatar_max_bytes: usize,
    /// JSON content catalog. Built-in content is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_ttl: session_ttl(env_or("SESSION_TTL_SECS", 3600)?)?,
            contact_delay: Duration::from_millis(env_or("CONTACT_DELAY_MS", 1500)?),
            avatar_max_bytes: env_or("AVATAR_MAX_BYTES", 5 * 1024 * 1024)?,
            catalog_path: std::env::var("CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            session_ttl: Duration::from_secs(3600),
            contact_delay: Duration::from_millis(1500),
            avatar_max_bytes: 5 * 1024 * 1024,
            catalog_path: None,
        }
    }
}

/// A zero TTL would expire every session before its first read.
fn session_ttl(secs: u64) -> Result<Duration> {
    ensure!(secs > 0, "SESSION_TTL_SECS must be at least 1 second");
    Ok(Duration::from_secs(secs))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u16>("PORT", " 3000 ").unwrap(), 3000);
        assert_eq!(parse_value::<u64>("SESSION_TTL_SECS", "60").unwrap(), 60);
    }

    #[test]
    fn test_parse_value_error_names_variable() {
        let err = parse_value::<u16>("PORT", "eighty").unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(parse_value::<u16>("PORT", "70000").is_err());
    }

    #[test]
    fn test_zero_session_ttl_rejected() {
        let err = session_ttl(0).unwrap_err();
        assert!(err.to_string().contains("SESSION_TTL_SECS"));
        assert_eq!(session_ttl(1).unwrap(), Duration::from_secs(1));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert_eq!(config.contact_delay, Duration::from_millis(1500));
        assert_eq!(config.avatar_max_bytes, 5_242_880);
        assert!(config.catalog_path.is_none());
    }
}
