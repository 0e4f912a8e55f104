use serde::Deserialize;
use thiserror::Error;

// Error body some backends return alongside a non-2xx status
#[derive(Deserialize, Debug)]
pub struct BackendErrorPayload {
    #[serde(alias = "message")]
    pub error: String,
}

/// Failures of the geolocation, geocoding and autocomplete collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("No results for {0}")]
    NoResults(String),

    // Structured status from the Google web services
    #[error("API Error ({status}): {message}")]
    Api { status: String, message: String },

    #[error("Provider request failed: {0}")]
    Request(String),

    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(err.to_string())
    }
}

/// Failures of the route-search request.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16, message: Option<String> },

    #[error("Underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} is not valid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Crate-level error for callers that do not care which collaborator failed.
#[derive(Error, Debug)]
pub enum BusFinderError {
    #[error("Invalid input: {0}")]
    UserInput(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
