//! Runtime settings read from the environment

use std::env;

use crate::constants::{
    AGENT_MODEL, AGENT_STORAGE_URL, JUDGE_API_BASE, JUDGE_MODEL, OPEN_METEO_API_BASE,
    OPEN_METEO_GEOCODING_BASE, USER_AGENT,
};

#[derive(Debug, Clone)]
pub struct Settings {
    pub geocoding_url: String,
    pub forecast_url: String,
    pub user_agent: String,
    pub judge: JudgeSettings,
    pub agent_model: String,
    pub agent_storage_url: String,
}

#[derive(Debug, Clone)]
pub struct JudgeSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            geocoding_url: OPEN_METEO_GEOCODING_BASE.to_string(),
            forecast_url: OPEN_METEO_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            judge: JudgeSettings {
                api_url: JUDGE_API_BASE.to_string(),
                api_key: None,
                model: JUDGE_MODEL.to_string(),
            },
            agent_model: AGENT_MODEL.to_string(),
            agent_storage_url: AGENT_STORAGE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings, falling back to defaults for unset variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str, fallback: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
        };

        Self {
            geocoding_url: get("WEATHER_GEOCODING_URL", defaults.geocoding_url),
            forecast_url: get("WEATHER_FORECAST_URL", defaults.forecast_url),
            user_agent: get("WEATHER_USER_AGENT", defaults.user_agent),
            judge: JudgeSettings {
                api_url: get("JUDGE_API_URL", defaults.judge.api_url),
                api_key: lookup("JUDGE_API_KEY").filter(|k| !k.trim().is_empty()),
                model: get("JUDGE_MODEL", defaults.judge.model),
            },
            agent_model: get("AGENT_MODEL", defaults.agent_model),
            agent_storage_url: get("AGENT_STORAGE_URL", defaults.agent_storage_url),
        }
    }
}
