use super::error::ConfigError;
use std::{env, time::Duration};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/test";
pub const DEFAULT_COUNTRY: &str = "in";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Which place provider backs autocomplete and geocoding.
#[derive(Debug, Clone, PartialEq)]
pub enum MapsConfig {
    Google { api_key: String },
    Offline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub maps: MapsConfig,
    pub country: String,
    pub timeout: Duration,
}

impl AppConfig {
    /// Reads the configuration from the process environment (`.env` included
    /// when the caller loaded it with dotenvy).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let backend_url = non_empty("BUSFINDER_BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: "BUSFINDER_BACKEND_URL",
                reason: format!("expected an http(s) URL, got {}", backend_url),
            });
        }

        let maps = match non_empty("GOOGLE_MAPS_API_KEY") {
            Some(api_key) => MapsConfig::Google { api_key },
            None => MapsConfig::Offline,
        };

        let country = non_empty("BUSFINDER_COUNTRY")
            .map(|c| c.to_lowercase())
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

        let timeout_secs = match non_empty("BUSFINDER_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "BUSFINDER_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(AppConfig {
            backend_url,
            maps,
            country,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
