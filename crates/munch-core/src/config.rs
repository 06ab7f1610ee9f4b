use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config pointed at the public feed API.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_coordinate = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        Ok(raw.trim().to_string())
    };

    let env = parse_environment(&or_default("MUNCH_ENV", "development"))?;
    let bind_addr = parse("MUNCH_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("MUNCH_LOG_LEVEL", "info");

    let api_base_url = or_default("MUNCH_API_BASE_URL", "http://18.219.192.152:3052");
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "MUNCH_API_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{api_base_url}'"),
        });
    }

    let request_timeout_ms = parse_u64("MUNCH_REQUEST_TIMEOUT_MS", "5000")?;
    if request_timeout_ms == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MUNCH_REQUEST_TIMEOUT_MS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("MUNCH_USER_AGENT", "munch/0.1 (surplus-feed)");
    let default_latitude = parse_coordinate("MUNCH_DEFAULT_LATITUDE", "12.9234082")?;
    let default_longitude = parse_coordinate("MUNCH_DEFAULT_LONGITUDE", "77.6492223")?;
    let customer_id = parse_u64("MUNCH_CUSTOMER_ID", "172")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        api_base_url,
        request_timeout_ms,
        user_agent,
        default_latitude,
        default_longitude,
        customer_id,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MUNCH_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
