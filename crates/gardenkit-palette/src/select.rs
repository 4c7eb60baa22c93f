//! Palette selection under ecological constraints
//!
//! Picks 8-10 species from the scored catalog: up to two keystones first,
//! then up to two grasses/sedges, then the highest-scored remainder under
//! a per-genus cap, topped up for bloom-season coverage. Score ties break
//! by catalog order (stable sort), so selection is fully deterministic.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use gardenkit_core::{PaletteEntry, PlantRole, Preferences, Product};

use crate::score::score_plant;

/// Bloom season buckets used for coverage checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloomSeason {
    Spring,
    Summer,
    Fall,
}

impl BloomSeason {
    pub const ALL: [BloomSeason; 3] = [BloomSeason::Spring, BloomSeason::Summer, BloomSeason::Fall];
}

/// Seasons covered by a set of bloom months (1-12)
pub fn bloom_seasons(months: &[u32]) -> HashSet<BloomSeason> {
    let mut seasons = HashSet::new();
    for &m in months {
        match m {
            3..=5 => {
                seasons.insert(BloomSeason::Spring);
            }
            6..=8 => {
                seasons.insert(BloomSeason::Summer);
            }
            9..=11 => {
                seasons.insert(BloomSeason::Fall);
            }
            _ => {}
        }
    }
    seasons
}

/// Knobs for palette selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionOptions {
    pub target_count: usize,
    pub max_count: usize,
    pub max_per_genus: usize,
    pub min_bloom_seasons: usize,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self { target_count: 8, max_count: 10, max_per_genus: 2, min_bloom_seasons: 2 }
    }
}

/// Classify a plant into its layout role from catalog characteristics
pub fn determine_role(plant: &Product) -> PlantRole {
    if plant.is_grass_like() {
        return PlantRole::Grass;
    }

    let avg_height = plant.avg_height();

    if plant.is_keystone || avg_height >= 36.0 {
        PlantRole::Anchor
    } else if avg_height <= 18.0 {
        PlantRole::Filler
    } else {
        PlantRole::Mid
    }
}

/// Shape a catalog product into a palette entry
pub fn format_plant_for_palette(plant: &Product) -> PaletteEntry {
    format_with_score(plant, None)
}

fn format_with_score(plant: &Product, score: Option<i32>) -> PaletteEntry {
    let role = match plant.role {
        Some(r) if r.is_planting_role() => r,
        _ => determine_role(plant),
    };

    PaletteEntry {
        sku: plant.sku.clone(),
        name: plant.name.clone(),
        scientific_name: plant.scientific_name.clone(),
        role,
        spacing_in: plant.spacing_or_default(),
        height_min: plant.height_min_in,
        height_max: plant.height_max_in,
        bloom_months: plant.bloom_months.clone(),
        color: plant.color_primary.clone(),
        is_keystone: plant.is_keystone,
        is_grass: plant.is_grass_like(),
        score,
    }
}

/// Select a plant palette for the given preferences
///
/// A thin catalog yields a palette smaller than `target_count`; an empty
/// catalog yields an empty palette. Neither is an error.
pub fn select_palette(
    catalog: &[Product],
    preferences: &Preferences,
    options: &SelectionOptions,
) -> Vec<PaletteEntry> {
    let active: Vec<&Product> = catalog.iter().filter(|p| p.active).collect();

    let mut scored: Vec<(&Product, i32)> =
        active.iter().map(|p| (*p, score_plant(p, preferences))).collect();
    // Stable sort keeps catalog order on ties
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut selected: Vec<(&Product, i32)> = Vec::new();
    let mut genus_counts: HashMap<&str, usize> = HashMap::new();
    let mut keystone_count = 0usize;
    let mut grass_count = 0usize;
    let mut seasons: HashSet<BloomSeason> = HashSet::new();

    // Keystones first, capped at 2 and bounded by the genus cap
    for &(plant, score) in &scored {
        if selected.len() >= options.max_count {
            break;
        }
        if !plant.is_keystone || keystone_count >= 2 {
            continue;
        }
        let genus = plant.genus();
        if *genus_counts.get(genus).unwrap_or(&0) >= options.max_per_genus {
            continue;
        }

        selected.push((plant, score));
        *genus_counts.entry(genus).or_insert(0) += 1;
        keystone_count += 1;
        seasons.extend(bloom_seasons(&plant.bloom_months));
    }

    // Grasses and sedges, capped at 2 (not counted against the genus cap)
    for &(plant, score) in &scored {
        if selected.len() >= options.max_count {
            break;
        }
        if !plant.is_grass_like() || grass_count >= 2 {
            continue;
        }
        if selected.iter().any(|(s, _)| s.sku == plant.sku) {
            continue;
        }

        selected.push((plant, score));
        grass_count += 1;
        seasons.extend(bloom_seasons(&plant.bloom_months));
    }

    // Fill to target by score, skipping duplicates, honoring the genus cap
    for &(plant, score) in &scored {
        if selected.len() >= options.target_count {
            break;
        }
        if selected.iter().any(|(s, _)| s.sku == plant.sku) {
            continue;
        }
        let genus = plant.genus();
        if *genus_counts.get(genus).unwrap_or(&0) >= options.max_per_genus {
            continue;
        }

        selected.push((plant, score));
        *genus_counts.entry(genus).or_insert(0) += 1;
        seasons.extend(bloom_seasons(&plant.bloom_months));
    }

    // Top up bloom-season coverage while room remains
    if seasons.len() < options.min_bloom_seasons && selected.len() < options.max_count {
        let needed: Vec<BloomSeason> =
            BloomSeason::ALL.iter().copied().filter(|s| !seasons.contains(s)).collect();

        for season in needed {
            if selected.len() >= options.max_count {
                break;
            }

            let candidate = scored.iter().find(|(p, _)| {
                !selected.iter().any(|(s, _)| s.sku == p.sku)
                    && bloom_seasons(&p.bloom_months).contains(&season)
            });

            if let Some(&(plant, score)) = candidate {
                selected.push((plant, score));
                seasons.insert(season);
            }
        }
    }

    debug!(
        selected = selected.len(),
        keystones = keystone_count,
        grasses = grass_count,
        seasons = seasons.len(),
        "palette selected"
    );

    selected.iter().map(|&(plant, score)| format_with_score(plant, Some(score))).collect()
}
