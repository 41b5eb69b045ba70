//! Synthetic alerts derived from a single current reading.
//!
//! There is no official warning feed behind this; the rules only look at the
//! instantaneous precipitation and wind values.

use crate::models::{AlertRecord, Severity, WeatherRecord};

const HEAVY_RAIN_THRESHOLD: f64 = 20.0;
const HIGH_WIND_THRESHOLD: f64 = 30.0;

pub fn synthesize_alerts(weather: &WeatherRecord) -> Vec<AlertRecord> {
    let mut alerts = Vec::new();

    if weather.precipitation > HEAVY_RAIN_THRESHOLD {
        alerts.push(AlertRecord {
            severity: Severity::Moderate,
            event: "Heavy Rain".to_string(),
            description: format!(
                "Heavy precipitation of {:.1} mm is currently being observed",
                weather.precipitation
            ),
            instructions: "Avoid low-lying areas and allow extra travel time".to_string(),
        });
    }

    if weather.wind_speed > HIGH_WIND_THRESHOLD {
        alerts.push(AlertRecord {
            severity: Severity::Severe,
            event: "High Winds".to_string(),
            description: format!(
                "Sustained winds of {:.1} km/h with gusts up to {:.1} km/h",
                weather.wind_speed, weather.wind_gust
            ),
            instructions: "Secure loose objects and avoid exposed areas".to_string(),
        });
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(precipitation: f64, wind_speed: f64) -> WeatherRecord {
        WeatherRecord {
            temperature: 12.0,
            feels_like: 10.0,
            humidity: 80.0,
            wind_speed,
            wind_gust: wind_speed * 1.5,
            precipitation,
            uv_index: Some(2.0),
            conditions: "Heavy rain".into(),
            location: "Bergen".into(),
            country: "Norway".into(),
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(synthesize_alerts(&reading(20.0, 30.0)).is_empty());
    }

    #[test]
    fn test_just_above_rain_threshold() {
        let alerts = synthesize_alerts(&reading(20.01, 10.0));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].event, "Heavy Rain");
        assert_eq!(alerts[0].severity, Severity::Moderate);
    }

    #[test]
    fn test_rain_listed_before_wind() {
        let alerts = synthesize_alerts(&reading(35.0, 45.0));
        let events: Vec<_> = alerts.iter().map(|a| a.event.as_str()).collect();
        assert_eq!(events, ["Heavy Rain", "High Winds"]);
        assert_eq!(alerts[1].severity, Severity::Severe);
    }
}
