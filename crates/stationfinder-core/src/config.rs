use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_USER_AGENT: &str = "stationfinder/0.1 (parking-fuel-finder)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a working
/// config pointed at the public OSM services.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "timeout must be at least 1 second".to_string(),
            });
        }
        Ok(secs)
    };

    let bind_addr = parse_addr("STATIONFINDER_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STATIONFINDER_LOG_LEVEL", "info");
    let areas_path = lookup("STATIONFINDER_AREAS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let geocoder_url = or_default("STATIONFINDER_GEOCODER_URL", DEFAULT_GEOCODER_URL);
    let overpass_url = or_default("STATIONFINDER_OVERPASS_URL", DEFAULT_OVERPASS_URL);
    let user_agent = or_default("STATIONFINDER_USER_AGENT", DEFAULT_USER_AGENT);
    let geocoder_timeout_secs = parse_secs("STATIONFINDER_GEOCODER_TIMEOUT_SECS", "10")?;
    let overpass_timeout_secs = parse_secs("STATIONFINDER_OVERPASS_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        areas_path,
        geocoder_url,
        overpass_url,
        user_agent,
        geocoder_timeout_secs,
        overpass_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
