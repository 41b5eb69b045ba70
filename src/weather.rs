//! Geocoding resolution and the current / forecast fetchers

use std::sync::Arc;

use crate::conditions::weather_code_to_description;
use crate::error::{Result, WeatherError};
use crate::models::{CurrentData, DailyData, Forecast, ForecastDay, Location, WeatherRecord};
use crate::provider::WeatherProvider;

/// Entry point for every weather lookup; holds no per-request state
#[derive(Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Resolves a free-text place name, taking the provider's first match
    pub async fn resolve(&self, place: &str) -> Result<Location> {
        tracing::debug!("Geocoding location name: {}", place);

        let location = self
            .provider
            .geocode(place)
            .await?
            .into_iter()
            .next()
            .map(Location::from)
            .ok_or_else(|| WeatherError::LocationNotFound(place.to_string()))?;

        tracing::debug!(
            "Found location: {} ({:.4}, {:.4})",
            location.name,
            location.latitude,
            location.longitude
        );
        Ok(location)
    }

    pub async fn fetch_current(&self, place: &str) -> Result<WeatherRecord> {
        let location = self.resolve(place).await?;
        let response = self.provider.current(&location).await?;
        Ok(current_record(response.current, location))
    }

    pub async fn fetch_forecast(&self, place: &str, days: u8) -> Result<Forecast> {
        let location = self.resolve(place).await?;
        let response = self.provider.daily(&location, days).await?;

        Ok(Forecast {
            forecast: forecast_days(response.daily),
            location: location.name,
            country: location.country,
        })
    }
}

fn current_record(current: CurrentData, location: Location) -> WeatherRecord {
    WeatherRecord {
        temperature: current.temperature,
        feels_like: current.apparent_temperature,
        humidity: current.humidity,
        wind_speed: current.wind_speed,
        wind_gust: current.wind_gusts,
        precipitation: current.precipitation,
        uv_index: current.uv_index,
        conditions: weather_code_to_description(current.weather_code).to_string(),
        location: location.name,
        country: location.country,
    }
}

/// Zips the provider's parallel daily arrays, one entry per date.
/// Array lengths are trusted to match; a short array truncates the result.
fn forecast_days(daily: DailyData) -> Vec<ForecastDay> {
    daily
        .time
        .into_iter()
        .zip(daily.temperature_max)
        .zip(daily.temperature_min)
        .zip(daily.weather_code)
        .zip(daily.precipitation_probability_max)
        .zip(daily.wind_speed_max)
        .zip(daily.uv_index_max)
        .map(
            |((((((date, high), low), code), precipitation_chance), wind_speed), uv_index)| {
                ForecastDay {
                    date,
                    high,
                    low,
                    conditions: weather_code_to_description(code).to_string(),
                    precipitation_chance,
                    wind_speed,
                    uv_index,
                }
            },
        )
        .collect()
}
