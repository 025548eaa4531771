//! Environment snapshot.
//!
//! All environment reads happen here, once, at startup. The rest of the crate
//! only ever sees the resulting [`Config`] value.

use crate::error::{QubooError, Result};

pub const ENV_ACCESS_KEY: &str = "QUBOO_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "QUBOO_SECRET_KEY";
pub const ENV_PLAYER_USERNAME: &str = "QUBOO_PLAYER_USERNAME";
pub const ENV_GITLAB_USERNAME: &str = "GITLAB_USER_LOGIN";
pub const ENV_CIRCLE_USERNAME: &str = "CIRCLE_USERNAME";
pub const ENV_UNIQUE_ID: &str = "QUBOO_UNIQUE_ID";
pub const ENV_ALWAYS_USE_GIT: &str = "QUBOO_CONFIG_ALWAYS_USE_GIT";
pub const ENV_API_URL: &str = "QUBOO_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.quboo.io";

/// Static credentials sent as request headers.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

/// Everything the run needs from the environment, resolved once.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub player_username: Option<String>,
    pub gitlab_username: Option<String>,
    pub circle_username: Option<String>,
    pub unique_id: Option<String>,
    pub always_use_git: bool,
    pub api_url: String,
}

impl Config {
    /// Snapshot the process environment.
    ///
    /// Fails with [`QubooError::MissingCredentials`] before any subprocess or
    /// network activity if either key is absent or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Blank values are treated as absent everywhere, including credentials.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let access_key = get(ENV_ACCESS_KEY).ok_or(QubooError::MissingCredentials)?;
        let secret_key = get(ENV_SECRET_KEY).ok_or(QubooError::MissingCredentials)?;

        let always_use_git = get(ENV_ALWAYS_USE_GIT)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            credentials: Credentials {
                access_key,
                secret_key,
            },
            player_username: get(ENV_PLAYER_USERNAME),
            gitlab_username: get(ENV_GITLAB_USERNAME),
            circle_username: get(ENV_CIRCLE_USERNAME),
            unique_id: get(ENV_UNIQUE_ID),
            always_use_git,
            api_url: get(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}
