//! Error types for weather lookups and evaluation judges

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors raised while serving a single weather request
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Geocoding returned no results
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// Network failure or malformed provider payload
    #[error("Weather provider unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Tool input rejected before invocation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WeatherError {
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::UpstreamUnavailable(message.into())
    }

    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::UpstreamUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        Self::UpstreamUnavailable(format!("malformed payload: {err}"))
    }
}

impl From<WeatherError> for McpError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::InvalidInput(_) | WeatherError::LocationNotFound(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            WeatherError::UpstreamUnavailable(_) => {
                McpError::internal_error(err.to_string(), None)
            }
        }
    }
}

/// Errors raised by an evaluation judge
#[derive(Error, Debug)]
pub enum JudgeError {
    /// Required judge settings are missing
    #[error("Judge is not configured: {0}")]
    Config(String),

    /// The judge could not be reached
    #[error("Judge request failed: {0}")]
    Transport(String),

    /// The judge answered with something that does not match the verdict schema
    #[error("Malformed judge output: {0}")]
    MalformedJudgeOutput(String),
}

impl From<reqwest::Error> for JudgeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
