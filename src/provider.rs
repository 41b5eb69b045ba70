//! Outbound access to the geocoding and weather-data providers

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::Settings;
use crate::constants::{CURRENT_FIELDS, DAILY_FIELDS};
use crate::error::{Result, WeatherError};
use crate::models::{CurrentResponse, DailyResponse, GeocodingResponse, GeocodingResult, Location};

/// Source of geocoding results and raw weather observations
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Looks up a place name, best match first
    async fn geocode(&self, name: &str) -> Result<Vec<GeocodingResult>>;

    /// Instantaneous observations at a location
    async fn current(&self, location: &Location) -> Result<CurrentResponse>;

    /// Daily aggregates for the next `days` days
    async fn daily(&self, location: &Location, days: u8) -> Result<DailyResponse>;
}

/// Open-Meteo backed provider; no API key required
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    geocoding_base: String,
    forecast_base: String,
}

impl OpenMeteoClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            geocoding_base: settings.geocoding_url.trim_end_matches('/').to_string(),
            forecast_base: settings.forecast_url.trim_end_matches('/').to_string(),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: for<'de> Deserialize<'de>>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(WeatherError::upstream(format!(
                "Request failed with status: {}",
                response.status()
            )));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice::<T>(&body)?)
    }

    fn url(base: &str, path: &str, params: &[(&str, String)]) -> Result<Url> {
        Url::parse_with_params(&format!("{base}/{path}"), params)
            .map_err(|e| WeatherError::upstream(format!("invalid provider url: {e}")))
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn geocode(&self, name: &str) -> Result<Vec<GeocodingResult>> {
        let url = Self::url(
            &self.geocoding_base,
            "search",
            &[("name", name.to_string()), ("count", "1".to_string())],
        )?;
        let response = self.make_request::<GeocodingResponse>(url).await?;
        Ok(response.results.unwrap_or_default())
    }

    async fn current(&self, location: &Location) -> Result<CurrentResponse> {
        let url = Self::url(
            &self.forecast_base,
            "forecast",
            &[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ],
        )?;
        self.make_request(url).await
    }

    async fn daily(&self, location: &Location, days: u8) -> Result<DailyResponse> {
        let url = Self::url(
            &self.forecast_base,
            "forecast",
            &[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("forecast_days", days.to_string()),
                ("timezone", "auto".to_string()),
            ],
        )?;
        self.make_request(url).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::models::{CurrentData, DailyData};

    /// Canned provider answering every lookup with the same payloads
    pub struct StaticProvider {
        pub places: Vec<GeocodingResult>,
        pub current: CurrentData,
        pub daily: DailyData,
    }

    impl StaticProvider {
        pub fn paris_clear() -> Self {
            Self {
                places: vec![GeocodingResult {
                    name: "Paris".into(),
                    latitude: 48.8534,
                    longitude: 2.3488,
                    country: Some("France".into()),
                }],
                current: CurrentData {
                    temperature: 22.0,
                    apparent_temperature: 21.0,
                    humidity: 55.0,
                    wind_speed: 9.0,
                    wind_gusts: 18.0,
                    precipitation: 0.0,
                    uv_index: Some(5.0),
                    weather_code: 0,
                },
                daily: DailyData {
                    time: vec!["2026-10-18".into(), "2026-10-19".into(), "2026-10-20".into()],
                    temperature_max: vec![22.0, 19.5, 17.0],
                    temperature_min: vec![12.0, 11.0, 9.5],
                    weather_code: vec![0, 3, 63],
                    precipitation_probability_max: vec![0.0, 20.0, 80.0],
                    wind_speed_max: vec![12.0, 15.0, 25.0],
                    uv_index_max: vec![5.0, 3.5, 1.0],
                },
            }
        }
    }

    #[async_trait]
    impl WeatherProvider for StaticProvider {
        async fn geocode(&self, _name: &str) -> Result<Vec<GeocodingResult>> {
            Ok(self.places.clone())
        }

        async fn current(&self, _location: &Location) -> Result<CurrentResponse> {
            Ok(CurrentResponse {
                current: self.current.clone(),
            })
        }

        async fn daily(&self, _location: &Location, days: u8) -> Result<DailyResponse> {
            let n = usize::from(days);
            let d = &self.daily;
            Ok(DailyResponse {
                daily: DailyData {
                    time: d.time.iter().take(n).cloned().collect(),
                    temperature_max: d.temperature_max.iter().take(n).copied().collect(),
                    temperature_min: d.temperature_min.iter().take(n).copied().collect(),
                    weather_code: d.weather_code.iter().take(n).copied().collect(),
                    precipitation_probability_max: d
                        .precipitation_probability_max
                        .iter()
                        .take(n)
                        .copied()
                        .collect(),
                    wind_speed_max: d.wind_speed_max.iter().take(n).copied().collect(),
                    uv_index_max: d.uv_index_max.iter().take(n).copied().collect(),
                },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_place_name() {
        let url = OpenMeteoClient::url(
            "https://geocoding-api.open-meteo.com/v1",
            "search",
            &[("name", "São Paulo".to_string()), ("count", "1".to_string())],
        )
        .unwrap();
        assert_eq!(url.path(), "/v1/search");
        assert!(url.query().unwrap().contains("name=S%C3%A3o+Paulo"));
        assert!(url.query().unwrap().contains("count=1"));
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let settings = Settings {
            forecast_url: "http://localhost:8080/v1/".into(),
            ..Settings::default()
        };
        let client = OpenMeteoClient::new(&settings).unwrap();
        assert_eq!(client.forecast_base, "http://localhost:8080/v1");
    }
}
