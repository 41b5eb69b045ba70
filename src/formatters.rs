use crate::models::{Forecast, WeatherRecord};
use crate::scorers::ScoreResult;

/// Formats current conditions into a human-readable string
pub fn format_current(record: &WeatherRecord) -> String {
    let mut output = format!(
        "Current Weather: {}, {}\n\n  Conditions: {}\n  Temperature: {:.1}\u{00b0}C (feels like {:.1}\u{00b0}C)\n  Humidity: {:.0}%\n  Wind: {:.1} km/h (gusts {:.1} km/h)\n  Precipitation: {:.1} mm\n",
        record.location,
        record.country,
        record.conditions,
        record.temperature,
        record.feels_like,
        record.humidity,
        record.wind_speed,
        record.wind_gust,
        record.precipitation
    );
    if let Some(uv) = record.uv_index {
        output.push_str(&format!("  UV Index: {:.1}\n", uv));
    }
    output
}

/// Formats a daily forecast into a human-readable string
pub fn format_forecast(forecast: &Forecast) -> String {
    let mut output = format!("Weather Forecast: {}, {}\n\n", forecast.location, forecast.country);

    for day in &forecast.forecast {
        output.push_str(&format!(
            "{}:\n  Temperature: {:.1}\u{00b0}C - {:.1}\u{00b0}C\n  Conditions: {}\n  Chance of precipitation: {:.0}%\n  Wind Speed: {:.1} km/h\n  UV Index: {:.1}\n\n",
            day.date,
            day.low,
            day.high,
            day.conditions,
            day.precipitation_chance,
            day.wind_speed,
            day.uv_index
        ));
    }
    output
}

/// Formats scorer results as an aligned table
pub fn format_scores(results: &[ScoreResult]) -> String {
    let mut output = String::from("Evaluation Scores:\n\n");
    for result in results {
        output.push_str(&format!(
            "  {:<34} {:.2}\n    {}\n",
            result.scorer, result.score, result.reasoning
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForecastDay;

    #[test]
    fn test_format_current_omits_missing_uv() {
        let record = WeatherRecord {
            temperature: 22.0,
            feels_like: 21.4,
            humidity: 55.0,
            wind_speed: 9.0,
            wind_gust: 18.0,
            precipitation: 0.0,
            uv_index: None,
            conditions: "Clear sky".into(),
            location: "Paris".into(),
            country: "France".into(),
        };
        let text = format_current(&record);
        assert!(text.starts_with("Current Weather: Paris, France"));
        assert!(text.contains("Temperature: 22.0\u{00b0}C (feels like 21.4\u{00b0}C)"));
        assert!(!text.contains("UV Index"));
    }

    #[test]
    fn test_format_forecast_lists_each_day() {
        let forecast = Forecast {
            location: "Oslo".into(),
            country: "Norway".into(),
            forecast: vec![
                ForecastDay {
                    date: "2026-10-18".into(),
                    high: 9.0,
                    low: 2.0,
                    conditions: "Overcast".into(),
                    precipitation_chance: 40.0,
                    wind_speed: 20.0,
                    uv_index: 1.0,
                },
                ForecastDay {
                    date: "2026-10-19".into(),
                    high: 7.5,
                    low: 1.0,
                    conditions: "Slight rain".into(),
                    precipitation_chance: 85.0,
                    wind_speed: 28.0,
                    uv_index: 0.5,
                },
            ],
        };
        let text = format_forecast(&forecast);
        assert!(text.contains("2026-10-18:\n  Temperature: 2.0\u{00b0}C - 9.0\u{00b0}C"));
        assert!(text.contains("Chance of precipitation: 85%"));
    }
}
