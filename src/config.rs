use axum_extra::extract::cookie::Key;
use figment::{
    Figment, Provider,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::PortalError;

/// Minimum secret length accepted by `Key::derive_from`.
const MIN_SECRET_LEN: usize = 32;

const ENV_KEYS: &[&str] = &[
    "database_url",
    "session_secret",
    "port",
    "loglevel",
    "session_ttl_hours",
    "insecure_cookie",
    "max_connections",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub session_secret: String,
    pub port: u16,
    pub loglevel: String,
    pub session_ttl_hours: i64,
    pub insecure_cookie: bool,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://sms.db".to_string(),
            session_secret: "dev-secret".to_string(),
            port: 3000,
            loglevel: "info".to_string(),
            session_ttl_hours: 8,
            insecure_cookie: false,
            max_connections: 5,
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment (`DATABASE_URL`, `PORT`, ...).
    pub fn from_env() -> Result<Self, PortalError> {
        Self::from_provider(Env::raw().only(ENV_KEYS))
    }

    fn from_provider(provider: impl Provider) -> Result<Self, PortalError> {
        let cfg = Figment::from(Serialized::defaults(Config::default()))
            .merge(provider)
            .extract()?;
        Ok(cfg)
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_ttl_hours.max(1))
    }

    /// Key used to encrypt the session cookie.
    ///
    /// Short secrets fall back to a random per-process key; stored sessions
    /// survive a restart but the cookies pointing at them do not.
    pub fn cookie_key(&self) -> Key {
        if self.session_secret.len() >= MIN_SECRET_LEN {
            Key::derive_from(self.session_secret.as_bytes())
        } else {
            warn!(
                min_len = MIN_SECRET_LEN,
                "SESSION_SECRET too short; using a random cookie key for this process"
            );
            Key::generate()
        }
    }
}
