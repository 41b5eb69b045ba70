//! Typed tool adapters: validate input, then run the fetcher or engine

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Serialize};

use crate::activities::recommend_activities;
use crate::alerts::synthesize_alerts;
use crate::clothing::recommend_clothing;
use crate::constants::{MAX_FORECAST_DAYS, MIN_FORECAST_DAYS};
use crate::error::{Result, WeatherError};
use crate::models::{
    ActivityReport, AlertReport, ClothingReport, Forecast, GetActivitiesRequest, GetAlertsRequest,
    GetClothingRequest, GetCurrentWeatherRequest, GetForecastRequest, WeatherRecord,
};
use crate::weather::WeatherService;

/// A tool with a typed input schema and a typed output
#[async_trait]
pub trait WeatherTool: Send + Sync {
    type Input: DeserializeOwned + JsonSchema + Send + 'static;
    type Output: Serialize + Send;

    /// Name the tool is registered under
    const NAME: &'static str;

    /// Rejects or normalizes input before any network call is made
    fn validate(&self, input: Self::Input) -> Result<Self::Input>;

    async fn run(&self, service: &WeatherService, input: Self::Input) -> Result<Self::Output>;

    async fn invoke(&self, service: &WeatherService, input: Self::Input) -> Result<Self::Output> {
        let input = self.validate(input)?;
        self.run(service, input).await
    }
}

fn require_location(location: String) -> Result<String> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(WeatherError::invalid("location must not be empty"));
    }
    Ok(trimmed.to_string())
}

pub struct CurrentWeatherTool;

#[async_trait]
impl WeatherTool for CurrentWeatherTool {
    type Input = GetCurrentWeatherRequest;
    type Output = WeatherRecord;

    const NAME: &'static str = "get-current-weather";

    fn validate(&self, input: Self::Input) -> Result<Self::Input> {
        Ok(GetCurrentWeatherRequest {
            location: require_location(input.location)?,
        })
    }

    async fn run(&self, service: &WeatherService, input: Self::Input) -> Result<Self::Output> {
        service.fetch_current(&input.location).await
    }
}

pub struct ForecastTool;

#[async_trait]
impl WeatherTool for ForecastTool {
    type Input = GetForecastRequest;
    type Output = Forecast;

    const NAME: &'static str = "get-weather-forecast";

    fn validate(&self, input: Self::Input) -> Result<Self::Input> {
        if !(MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS).contains(&input.days) {
            return Err(WeatherError::invalid(format!(
                "days must be between {MIN_FORECAST_DAYS} and {MAX_FORECAST_DAYS}, got {}",
                input.days
            )));
        }
        Ok(GetForecastRequest {
            location: require_location(input.location)?,
            days: input.days,
        })
    }

    async fn run(&self, service: &WeatherService, input: Self::Input) -> Result<Self::Output> {
        service.fetch_forecast(&input.location, input.days).await
    }
}

pub struct ActivitiesTool;

#[async_trait]
impl WeatherTool for ActivitiesTool {
    type Input = GetActivitiesRequest;
    type Output = ActivityReport;

    const NAME: &'static str = "get-activity-recommendations";

    fn validate(&self, input: Self::Input) -> Result<Self::Input> {
        Ok(GetActivitiesRequest {
            location: require_location(input.location)?,
            interests: input.interests,
        })
    }

    async fn run(&self, service: &WeatherService, input: Self::Input) -> Result<Self::Output> {
        let weather = service.fetch_current(&input.location).await?;
        let recommendations = recommend_activities(&weather, input.interests.as_deref());

        Ok(ActivityReport {
            location: weather.location,
            current_conditions: weather.conditions,
            temperature: weather.temperature,
            recommendations,
        })
    }
}

pub struct AlertsTool;

#[async_trait]
impl WeatherTool for AlertsTool {
    type Input = GetAlertsRequest;
    type Output = AlertReport;

    const NAME: &'static str = "get-weather-alerts";

    fn validate(&self, input: Self::Input) -> Result<Self::Input> {
        Ok(GetAlertsRequest {
            location: require_location(input.location)?,
        })
    }

    async fn run(&self, service: &WeatherService, input: Self::Input) -> Result<Self::Output> {
        let weather = service.fetch_current(&input.location).await?;
        let alerts = synthesize_alerts(&weather);

        Ok(AlertReport {
            has_alerts: !alerts.is_empty(),
            alerts,
            location: weather.location,
            country: weather.country,
        })
    }
}

pub struct ClothingTool;

#[async_trait]
impl WeatherTool for ClothingTool {
    type Input = GetClothingRequest;
    type Output = ClothingReport;

    const NAME: &'static str = "get-clothing-recommendations";

    fn validate(&self, input: Self::Input) -> Result<Self::Input> {
        Ok(GetClothingRequest {
            location: require_location(input.location)?,
            activity: input.activity,
        })
    }

    async fn run(&self, service: &WeatherService, input: Self::Input) -> Result<Self::Output> {
        let weather = service.fetch_current(&input.location).await?;
        let recommendations = recommend_clothing(&weather, input.activity.as_deref());

        Ok(ClothingReport {
            location: weather.location,
            temperature: weather.temperature,
            conditions: weather.conditions,
            recommendations,
        })
    }
}

/// Names of every registered tool, in registration order
pub const TOOL_NAMES: [&str; 5] = [
    CurrentWeatherTool::NAME,
    ForecastTool::NAME,
    ActivitiesTool::NAME,
    AlertsTool::NAME,
    ClothingTool::NAME,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_days_out_of_range_rejected() {
        for days in [0, 8, 30] {
            let err = ForecastTool
                .validate(GetForecastRequest {
                    location: "Oslo".into(),
                    days,
                })
                .unwrap_err();
            assert!(matches!(err, WeatherError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_forecast_days_in_range_accepted() {
        for days in 1..=7 {
            let input = ForecastTool
                .validate(GetForecastRequest {
                    location: " Oslo ".into(),
                    days,
                })
                .unwrap();
            assert_eq!(input.days, days);
            assert_eq!(input.location, "Oslo");
        }
    }

    #[test]
    fn test_blank_location_rejected() {
        let err = AlertsTool
            .validate(GetAlertsRequest {
                location: "   ".into(),
            })
            .unwrap_err();
        assert!(matches!(err, WeatherError::InvalidInput(_)));
    }
}
