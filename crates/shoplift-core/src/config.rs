use std::collections::HashMap;
use std::env::VarError;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_USER_AGENT: &str = "shoplift/0.1 (product-clone)";

/// Env-var values supplied by the caller that take precedence over the
/// process environment (e.g. CLI flags).
pub type ConfigOverrides = HashMap<&'static str, String>;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// Keys present in `overrides` win over the environment.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config(overrides: &ConfigOverrides) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(with_overrides(overrides, |key| std::env::var(key)))
}

/// Wraps `lookup` so that keys present in `overrides` are answered first.
pub fn with_overrides<'a, F>(
    overrides: &'a ConfigOverrides,
    lookup: F,
) -> impl Fn(&str) -> Result<String, VarError> + 'a
where
    F: Fn(&str) -> Result<String, VarError> + 'a,
{
    move |key| match overrides.get(key) {
        Some(value) => Ok(value.clone()),
        None => lookup(key),
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation live here so tests can drive them from a plain
/// `HashMap` and callers can layer overrides (e.g. CLI flags) on top of the
/// process environment.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("SHOPLIFT_ENV", "development"))?;

    let app_url = require("SHOPLIFT_APP_URL")?;
    if !(app_url.starts_with("http://") || app_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPLIFT_APP_URL".to_string(),
            reason: format!("expected an http(s) origin, got \"{app_url}\""),
        });
    }

    let session_token = lookup("SHOPLIFT_SESSION_TOKEN")
        .ok()
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty());
    if session_token.is_none() && !env.is_development() {
        return Err(ConfigError::MissingEnvVar(
            "SHOPLIFT_SESSION_TOKEN".to_string(),
        ));
    }

    let log_level = or_default("SHOPLIFT_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("SHOPLIFT_REQUEST_TIMEOUT_SECS", "0")?;
    let user_agent = or_default("SHOPLIFT_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        env,
        app_url,
        session_token,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test` or `production`.
pub(crate) fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SHOPLIFT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
