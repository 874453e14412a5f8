//! Process-wide settings, read once at startup and immutable afterwards.

use std::env;

/// Runtime configuration. Built from the environment (with `.env` support via
/// `dotenvy` in the binary) before anything else is constructed, then passed
/// by reference to the code that opens the pool and mounts the routers.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path prefix the versioned API is mounted under.
    pub api_prefix: String,
    /// Connection string for the SQLite store.
    pub database_url: String,
    /// Reserved for token issuance, which is not implemented; nothing reads
    /// this after startup.
    pub secret_key: String,
    /// Reserved for token issuance, same as `secret_key`.
    pub access_token_expire_minutes: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_prefix: "/api/v1".into(),
            database_url: "sqlite://./test.db".into(),
            secret_key: "YOUR_SECRET_KEY".into(),
            access_token_expire_minutes: 30,
        }
    }
}

impl Settings {
    /// Read settings from `API_PREFIX`, `DATABASE_URL`, `SECRET_KEY`, and
    /// `ACCESS_TOKEN_EXPIRE_MINUTES`, falling back to the defaults for any
    /// variable that is unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Settings::default();
        Settings {
            api_prefix: env::var("API_PREFIX").unwrap_or(defaults.api_prefix),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            secret_key: env::var("SECRET_KEY").unwrap_or(defaults.secret_key),
            access_token_expire_minutes: env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expire_minutes),
        }
    }
}
