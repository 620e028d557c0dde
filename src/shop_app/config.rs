// shop_app/config.rs - Runtime configuration
//
// Everything comes from environment variables. Missing values fall back
// to local development defaults and are logged.

use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::{info, warn};

pub const DEFAULT_FEED_URL: &str = "http://localhost:8080/api/productos";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SESSION_FILE: &str = ".fastfood/session.json";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub feed_url: String,
    /// Local feed file; takes precedence over `feed_url` when set
    pub feed_file: Option<PathBuf>,
    pub feed_timeout: Duration,
    pub session_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            feed_file: None,
            feed_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            feed_url: lookup("PRODUCT_FEED_URL").unwrap_or_else(|| {
                info!("PRODUCT_FEED_URL not set, using default: {}", defaults.feed_url);
                defaults.feed_url.clone()
            }),
            feed_file: lookup("PRODUCT_FEED_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            feed_timeout: Duration::from_secs(parse_or(
                &lookup,
                "FEED_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )),
            session_file: lookup("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            default
        }),
        None => default,
    }
}
