//! Activity suitability derived from the current reading

use crate::models::{ActivityRecommendation, Suitability, WeatherRecord};

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Degrees a reading must sit inside both bounds to rate "excellent"
const COMFORT_MARGIN: f64 = 5.0;

/// Precipitation (mm) above which a rating drops to "fair"
const WET_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activity {
    Hiking,
    Beach,
    Skiing,
    Museum,
    Shopping,
    Restaurant,
    Cycling,
}

enum ConditionFilter {
    Any,
    Only(&'static [&'static str]),
}

struct CatalogEntry {
    activity: Activity,
    min_temp: f64,
    max_temp: f64,
    conditions: ConditionFilter,
}

const FAIR_SKIES: &[&str] = &["Clear sky", "Mainly clear", "Partly cloudy", "Overcast"];

static CATALOG: [CatalogEntry; 7] = [
    CatalogEntry {
        activity: Activity::Hiking,
        min_temp: 5.0,
        max_temp: 28.0,
        conditions: ConditionFilter::Only(FAIR_SKIES),
    },
    CatalogEntry {
        activity: Activity::Beach,
        min_temp: 15.0,
        max_temp: 35.0,
        conditions: ConditionFilter::Only(&["Clear sky", "Mainly clear"]),
    },
    CatalogEntry {
        activity: Activity::Skiing,
        min_temp: -20.0,
        max_temp: 5.0,
        conditions: ConditionFilter::Only(&[
            "Clear sky",
            "Mainly clear",
            "Partly cloudy",
            "Overcast",
            "Slight snow fall",
            "Moderate snow fall",
            "Snow grains",
            "Slight snow showers",
        ]),
    },
    CatalogEntry {
        activity: Activity::Museum,
        min_temp: -10.0,
        max_temp: 25.0,
        conditions: ConditionFilter::Any,
    },
    CatalogEntry {
        activity: Activity::Shopping,
        min_temp: -10.0,
        max_temp: 25.0,
        conditions: ConditionFilter::Any,
    },
    CatalogEntry {
        activity: Activity::Restaurant,
        min_temp: -10.0,
        max_temp: 26.0,
        conditions: ConditionFilter::Any,
    },
    CatalogEntry {
        activity: Activity::Cycling,
        min_temp: 10.0,
        max_temp: 30.0,
        conditions: ConditionFilter::Only(FAIR_SKIES),
    },
];

impl Activity {
    fn name(self) -> &'static str {
        match self {
            Activity::Hiking => "Hiking",
            Activity::Beach => "Beach",
            Activity::Skiing => "Skiing",
            Activity::Museum => "Museum",
            Activity::Shopping => "Shopping",
            Activity::Restaurant => "Restaurant",
            Activity::Cycling => "Cycling",
        }
    }

    fn reason(self) -> &'static str {
        match self {
            Activity::Hiking => "Good temperature and dry skies for trails",
            Activity::Beach => "Warm and sunny enough to enjoy the shore",
            Activity::Skiing => "Cold enough to keep the slopes in good shape",
            Activity::Museum => "A comfortable indoor option in any weather",
            Activity::Shopping => "Indoor browsing unaffected by the weather",
            Activity::Restaurant => "A relaxed meal works in any conditions",
            Activity::Cycling => "Mild temperatures and calm skies for riding",
        }
    }

    /// Indoor stand-in for outdoor activities; indoor ones have none
    fn indoor_alternative(self) -> Option<&'static str> {
        match self {
            Activity::Hiking => Some("Indoor climbing gym"),
            Activity::Beach => Some("Indoor swimming pool"),
            Activity::Skiing => Some("Indoor ski slope"),
            Activity::Cycling => Some("Spin class"),
            Activity::Museum | Activity::Shopping | Activity::Restaurant => None,
        }
    }
}

impl CatalogEntry {
    fn admits(&self, temperature: f64, conditions: &str) -> bool {
        let in_range = temperature >= self.min_temp && temperature <= self.max_temp;
        let weather_ok = match self.conditions {
            ConditionFilter::Any => true,
            ConditionFilter::Only(allowed) => allowed.contains(&conditions),
        };
        in_range && weather_ok
    }

    fn suitability(&self, temperature: f64, precipitation: f64) -> Suitability {
        if temperature >= self.min_temp + COMFORT_MARGIN
            && temperature <= self.max_temp - COMFORT_MARGIN
        {
            Suitability::Excellent
        } else if precipitation > WET_THRESHOLD {
            Suitability::Fair
        } else {
            Suitability::Good
        }
    }
}

/// Rates catalog activities against the current reading.
///
/// Results keep catalog order and are capped at [`MAX_RECOMMENDATIONS`].
/// `interests` is accepted for callers but does not influence the result.
pub fn recommend_activities(
    weather: &WeatherRecord,
    interests: Option<&[String]>,
) -> Vec<ActivityRecommendation> {
    if let Some(interests) = interests {
        tracing::debug!("Ignoring activity interests: {:?}", interests);
    }

    CATALOG
        .iter()
        .filter(|entry| entry.admits(weather.temperature, &weather.conditions))
        .take(MAX_RECOMMENDATIONS)
        .map(|entry| ActivityRecommendation {
            activity: entry.activity.name().to_string(),
            suitability: entry.suitability(weather.temperature, weather.precipitation),
            reason: entry.activity.reason().to_string(),
            indoor_alternative: entry.activity.indoor_alternative().map(str::to_string),
        })
        .collect()
}
