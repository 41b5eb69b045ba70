use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FORECAST_DAYS;

// ============================================================================
// Open-Meteo API Models
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub current: CurrentData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
    pub apparent_temperature: f64,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: f64,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: f64,
    #[serde(rename = "wind_gusts_10m")]
    pub wind_gusts: f64,
    pub precipitation: f64,
    #[serde(default)]
    pub uv_index: Option<f64>,
    pub weather_code: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyResponse {
    pub daily: DailyData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<f64>,
    pub weather_code: Vec<i32>,
    pub precipitation_probability_max: Vec<f64>,
    #[serde(rename = "wind_speed_10m_max")]
    pub wind_speed_max: Vec<f64>,
    pub uv_index_max: Vec<f64>,
}

// ============================================================================
// Normalized Weather Records
// ============================================================================

/// A geocoded place, resolved once per request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Self {
            name: result.name,
            country: result.country.unwrap_or_default(),
            latitude: result.latitude,
            longitude: result.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_gust: f64,
    pub precipitation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv_index: Option<f64>,
    pub conditions: String,
    pub location: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: String,
    pub high: f64,
    pub low: f64,
    pub conditions: String,
    pub precipitation_chance: f64,
    pub wind_speed: f64,
    pub uv_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub location: String,
    pub country: String,
    pub forecast: Vec<ForecastDay>,
}

// ============================================================================
// Derived Recommendations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecommendation {
    pub activity: String,
    pub suitability: Suitability,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indoor_alternative: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityReport {
    pub location: String,
    pub current_conditions: String,
    pub temperature: f64,
    pub recommendations: Vec<ActivityRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClothingRecommendation {
    pub layers: Vec<String>,
    pub accessories: Vec<String>,
    pub footwear: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClothingReport {
    pub location: String,
    pub temperature: f64,
    pub conditions: String,
    pub recommendations: ClothingRecommendation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Extreme,
    Severe,
    Moderate,
    Minor,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    pub severity: Severity,
    pub event: String,
    pub description: String,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertReport {
    pub location: String,
    pub country: String,
    pub alerts: Vec<AlertRecord>,
    pub has_alerts: bool,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetCurrentWeatherRequest {
    /// City name, e.g. "Paris" or "New York"
    pub location: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// City name
    pub location: String,
    /// Number of forecast days (1-7, defaults to 3)
    #[serde(default = "default_forecast_days")]
    #[schemars(range(min = 1, max = 7))]
    pub days: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetActivitiesRequest {
    /// City name
    pub location: String,
    /// Optional interests, e.g. ["outdoor", "culture"]
    #[serde(default)]
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// City name
    pub location: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetClothingRequest {
    /// City name
    pub location: String,
    /// Planned activity, e.g. "hiking"
    #[serde(default)]
    pub activity: Option<String>,
}

fn default_forecast_days() -> u8 {
    DEFAULT_FORECAST_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_request_defaults_to_three_days() {
        let request: GetForecastRequest =
            serde_json::from_str(r#"{"location": "Oslo"}"#).unwrap();
        assert_eq!(request.days, 3);
    }

    #[test]
    fn test_missing_country_becomes_empty() {
        let result: GeocodingResult =
            serde_json::from_str(r#"{"name": "Nowhere", "latitude": 1.0, "longitude": 2.0}"#)
                .unwrap();
        let location = Location::from(result);
        assert_eq!(location.country, "");
    }

    #[test]
    fn test_record_serializes_camel_case_and_skips_missing_uv() {
        let record = WeatherRecord {
            temperature: 10.0,
            feels_like: 8.0,
            humidity: 70.0,
            wind_speed: 5.0,
            wind_gust: 9.0,
            precipitation: 0.0,
            uv_index: None,
            conditions: "Overcast".into(),
            location: "Bergen".into(),
            country: "Norway".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("feelsLike").is_some());
        assert!(value.get("uvIndex").is_none());
    }
}
