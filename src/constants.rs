/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-assistant/0.1.0";

/// Open-Meteo geocoding API base URL
pub const OPEN_METEO_GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// Open-Meteo forecast API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Fields requested for instantaneous observations
pub const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,wind_gusts_10m,precipitation,uv_index,weather_code";

/// Fields requested for the daily forecast
pub const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weather_code,precipitation_probability_max,wind_speed_10m_max,uv_index_max";

/// OpenAI-compatible endpoint used by the evaluation judge
pub const JUDGE_API_BASE: &str = "https://api.openai.com/v1";

/// Default judge model
pub const JUDGE_MODEL: &str = "gpt-4o-mini";

/// Default model the agent definition binds to
pub const AGENT_MODEL: &str = "gpt-4o-mini";

/// Default conversation memory store
pub const AGENT_STORAGE_URL: &str = "file:weather-agent.db";

/// Forecast day-count bounds and default
pub const MIN_FORECAST_DAYS: u8 = 1;
pub const MAX_FORECAST_DAYS: u8 = 7;
pub const DEFAULT_FORECAST_DAYS: u8 = 3;
