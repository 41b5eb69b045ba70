//! Clothing advice from temperature, precipitation and planned activity

use crate::models::{ClothingRecommendation, WeatherRecord};

const RAIN_THRESHOLD: f64 = 5.0;

const DEFAULT_NOTES: &str = "Dress comfortably for the conditions";
const RAIN_NOTES: &str = "Rain expected, bring waterproof gear";

struct Tier {
    below: f64,
    layers: &'static [&'static str],
    accessories: &'static [&'static str],
    footwear: &'static str,
}

/// Checked in order; the first `temperature < below` wins
static TIERS: [Tier; 4] = [
    Tier {
        below: 0.0,
        layers: &["Thermal base layer", "Warm sweater", "Insulated winter coat"],
        accessories: &["Winter hat", "Gloves", "Scarf"],
        footwear: "Insulated waterproof boots",
    },
    Tier {
        below: 10.0,
        layers: &["Long-sleeve shirt", "Sweater or fleece", "Warm jacket"],
        accessories: &["Light hat", "Light gloves"],
        footwear: "Closed-toe shoes or boots",
    },
    Tier {
        below: 20.0,
        layers: &["Long-sleeve shirt", "Light jacket"],
        accessories: &["Sunglasses"],
        footwear: "Sneakers or casual shoes",
    },
    Tier {
        below: f64::INFINITY,
        layers: &["T-shirt", "Shorts or light trousers"],
        accessories: &["Sunglasses", "Sun hat", "Sunscreen"],
        footwear: "Breathable sneakers or sandals",
    },
];

fn tier_for(temperature: f64) -> &'static Tier {
    TIERS
        .iter()
        .find(|tier| temperature < tier.below)
        .unwrap_or(&TIERS[TIERS.len() - 1])
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn recommend_clothing(
    weather: &WeatherRecord,
    activity: Option<&str>,
) -> ClothingRecommendation {
    let tier = tier_for(weather.temperature);

    let mut recommendation = ClothingRecommendation {
        layers: owned(tier.layers),
        accessories: owned(tier.accessories),
        footwear: tier.footwear.to_string(),
        notes: DEFAULT_NOTES.to_string(),
    };

    if weather.precipitation > RAIN_THRESHOLD {
        recommendation.layers.push("Waterproof rain jacket".to_string());
        recommendation.accessories.push("Umbrella".to_string());
        recommendation.notes = RAIN_NOTES.to_string();
    }

    let hiking = activity.is_some_and(|a| a.to_lowercase().contains("hiking"));
    if hiking {
        recommendation.footwear = "Hiking boots with good ankle support".to_string();
        recommendation
            .accessories
            .extend(owned(&["Daypack", "Water bottle", "Trail map"]));
    }

    recommendation
}
