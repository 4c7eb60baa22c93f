//! Preference scoring for catalog plants
//!
//! An additive heuristic: each matched preference adds a small fixed bonus,
//! inactive or out-of-stock products take a penalty. Scores rank plants
//! relative to each other during selection and are never displayed raw.

use gardenkit_core::{Preferences, Product, StylePreference, SunPreference};

/// Neutral filler color that does not count as "colorful"
const DRAB_PRIMARY: &str = "#EDEDED";

/// Score a plant against user preferences
pub fn score_plant(plant: &Product, preferences: &Preferences) -> i32 {
    let mut score = 0;

    // Sun compatibility; part-sun tolerates most sites
    score += match preferences.sun {
        SunPreference::FullSun if plant.sun_full => 3,
        SunPreference::PartSun if plant.sun_part => 3,
        SunPreference::Shade if plant.sun_shade => 3,
        _ if plant.sun_part => 1,
        _ => 0,
    };

    match preferences.style {
        StylePreference::Pollinator => {
            if plant.is_keystone {
                score += 3;
            }
            if plant.bloom_months.len() > 2 {
                score += 1;
            }
        }
        StylePreference::Tidy => {
            if !plant.has_spread_warning() {
                score += 2;
            }
            if plant.is_grass {
                score += 1;
            }
        }
        StylePreference::Color => {
            if plant.color_primary.as_deref().is_some_and(|c| c != DRAB_PRIMARY) {
                score += 2;
            }
        }
        StylePreference::LowMaint => {
            if plant.sun_full {
                score += 1;
            }
        }
    }

    // Height band
    let avg_height = plant.avg_height();
    score += match preferences.height_pref {
        gardenkit_core::HeightPreference::Low if avg_height <= 24.0 => 2,
        gardenkit_core::HeightPreference::Mixed => 1,
        gardenkit_core::HeightPreference::Tall if avg_height >= 30.0 => 2,
        _ => 0,
    };

    if plant.is_keystone {
        score += 2;
    }

    // Must-include category requests
    for category in &preferences.must_include {
        let matched = match category.as_str() {
            "milkweed" => scientific_contains(plant, "Asclepias"),
            "grasses" => plant.is_grass_like(),
            "asters" => scientific_contains(plant, "Symphyotrichum"),
            "goldenrod" => scientific_contains(plant, "Solidago"),
            _ => false,
        };
        if matched {
            score += 5;
        }
    }

    // Availability
    if plant.active && plant.in_stock {
        score += 3;
    } else if !plant.active {
        score -= 10;
    } else {
        score -= 5;
    }

    score
}

fn scientific_contains(plant: &Product, genus: &str) -> bool {
    plant.scientific_name.as_deref().is_some_and(|name| name.contains(genus))
}
