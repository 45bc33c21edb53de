use crate::app_config::{AppConfig, Environment};
use crate::location::Bounds;
use crate::ConfigError;

pub const DEFAULT_GRAPHQL_URL: &str = "https://ntdia-nestjs-api-production.up.railway.app/graphql";
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";
/// Keffi, Nasarawa.
pub const DEFAULT_SEARCH_BOUNDS: &str = "8.8225,7.835,8.9125,7.905";
/// Place opened when the browser starts.
pub const DEFAULT_PLACE_ID: &str = "ChIJ-9QZWvnjURARxBElh4Wj6gw";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
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
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank values count as unset.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
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

    let env = parse_environment(&or_default("SCHOOLMAP_ENV", "development"))?;
    let log_level = or_default("SCHOOLMAP_LOG_LEVEL", "info");
    let graphql_url = or_default("SCHOOLMAP_GRAPHQL_URL", DEFAULT_GRAPHQL_URL);
    let places_base_url = or_default("SCHOOLMAP_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let google_api_key = optional("SCHOOLMAP_GOOGLE_API_KEY");

    let request_timeout_secs = parse_u64("SCHOOLMAP_REQUEST_TIMEOUT_SECS", "30")?;
    let lookup_timeout_secs = parse_u64("SCHOOLMAP_LOOKUP_TIMEOUT_SECS", "15")?;
    if lookup_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SCHOOLMAP_LOOKUP_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("SCHOOLMAP_USER_AGENT", "schoolmap/0.1 (school-locator)");
    let photo_max_height = parse_u32("SCHOOLMAP_PHOTO_MAX_HEIGHT", "400")?;

    let search_country = or_default("SCHOOLMAP_SEARCH_COUNTRY", "ng").to_lowercase();
    if search_country.len() != 2 || !search_country.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ConfigError::InvalidEnvVar {
            var: "SCHOOLMAP_SEARCH_COUNTRY".to_string(),
            reason: format!("expected a two-letter country code, got '{search_country}'"),
        });
    }

    let search_bounds = Bounds::parse(&or_default("SCHOOLMAP_SEARCH_BOUNDS", DEFAULT_SEARCH_BOUNDS))
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "SCHOOLMAP_SEARCH_BOUNDS".to_string(),
            reason,
        })?;

    // Unset falls back to the built-in place; set but blank disables it.
    let default_place_id = match lookup("SCHOOLMAP_DEFAULT_PLACE_ID") {
        Ok(v) => Some(v.trim().to_string()).filter(|v| !v.is_empty()),
        Err(_) => Some(DEFAULT_PLACE_ID.to_string()),
    };

    Ok(AppConfig {
        env,
        log_level,
        graphql_url,
        places_base_url,
        google_api_key,
        request_timeout_secs,
        lookup_timeout_secs,
        user_agent,
        photo_max_height,
        search_country,
        search_bounds,
        default_place_id,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SCHOOLMAP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
