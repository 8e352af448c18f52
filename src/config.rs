use std::env;

use crate::error::{AppError, AppResult};

pub const BASE_URL_VAR: &str = "TDX_BASE_URL";
pub const USERNAME_VAR: &str = "TDX_USERNAME";
pub const PASSWORD_VAR: &str = "TDX_PASSWORD";
pub const APP_ID_VAR: &str = "TDX_APP_ID";

/// Connection settings for the upstream ticketing API, resolved once at
/// startup. No request can be formed without all four values, so a missing
/// one halts the run before any network call.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub app_id: u32,
}

impl Credentials {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves credentials through an injected lookup so the validation
    /// rules are testable without touching process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let base_url = required(&lookup, BASE_URL_VAR)?;
        let username = required(&lookup, USERNAME_VAR)?;
        let password = required(&lookup, PASSWORD_VAR)?;

        // A non-numeric app id is indistinguishable from an absent one.
        let app_id = lookup(APP_ID_VAR)
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|id| *id > 0)
            .ok_or_else(|| missing(APP_ID_VAR))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
            app_id,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> AppResult<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| missing(name))
}

fn missing(name: &str) -> AppError {
    AppError::Configuration(format!(
        "missing or invalid {name}; check the environment or .env file"
    ))
}
