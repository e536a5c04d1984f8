use crate::app_config::{AppConfig, SearchLocale};
use crate::types::GeoPoint;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
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

    let parse_f64_opt = |var: &str| -> Result<Option<f64>, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<f64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(None),
        }
    };

    let search_api_key = require("SEARCHAPI_API_KEY")?;
    let vision_api_key = require("GEMINI_API_KEY")?;
    let routing_api_key = lookup("ORS_API_KEY").ok();
    let catalog_api_key = lookup("UPC_CATALOG_API_KEY").ok();

    let vision_model = or_default("SHOPSIGHT_VISION_MODEL", "gemini-1.5-flash");

    let search_locale = SearchLocale {
        location: or_default("SHOPSIGHT_SEARCH_LOCATION", "Winnipeg, Manitoba, Canada"),
        google_domain: or_default("SHOPSIGHT_GOOGLE_DOMAIN", "google.ca"),
        gl: or_default("SHOPSIGHT_SEARCH_GL", "ca"),
        hl: or_default("SHOPSIGHT_SEARCH_HL", "en"),
    };

    let search_max_results = parse_usize("SHOPSIGHT_SEARCH_MAX_RESULTS", "10")?;
    let request_timeout_secs = parse_u64("SHOPSIGHT_REQUEST_TIMEOUT_SECS", "10")?;
    let country_boundary = or_default("SHOPSIGHT_COUNTRY_BOUNDARY", "CA");
    let retailers_path = PathBuf::from(or_default(
        "SHOPSIGHT_RETAILERS_PATH",
        "./config/retailers.yaml",
    ));
    let default_city = lookup("SHOPSIGHT_DEFAULT_CITY").ok();

    // Both coordinates or neither; half a position is a config mistake.
    let origin_lat = parse_f64_opt("SHOPSIGHT_ORIGIN_LATITUDE")?;
    let origin_lon = parse_f64_opt("SHOPSIGHT_ORIGIN_LONGITUDE")?;
    let static_origin = match (origin_lat, origin_lon) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint {
            latitude,
            longitude,
        }),
        (None, None) => None,
        _ => {
            return Err(ConfigError::InvalidEnvVar {
                var: "SHOPSIGHT_ORIGIN_LATITUDE".to_string(),
                reason: "latitude and longitude must be set together".to_string(),
            })
        }
    };

    Ok(AppConfig {
        search_api_key,
        vision_api_key,
        routing_api_key,
        catalog_api_key,
        vision_model,
        search_locale,
        search_max_results,
        request_timeout_secs,
        country_boundary,
        retailers_path,
        default_city,
        static_origin,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
