//! Species assignment to generated slots
//!
//! Walks the slot list and picks a species for each position. Orderly
//! style processes slots back-to-front (ascending y) for a planted-rows
//! feel; wild style shuffles them for a naturalistic scatter. A candidate
//! species is excluded when placing it would put two of the same SKU
//! within 1.5x its spacing; if every candidate is excluded the slot stays
//! unplanted rather than crowding a species against itself.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use gardenkit_core::{round_tenth, PaletteEntry, Placement, PlantRole, Point};

use crate::rng::LayoutRng;
use crate::slots::Slot;

/// Arrangement character of the generated layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantingStyle {
    /// Naturalistic scatter: slots are shuffled before assignment
    Wild,
    /// Back-to-front rows: slots sorted by ascending y
    Orderly,
}

impl Default for PlantingStyle {
    fn default() -> Self {
        Self::Wild
    }
}

/// Knobs for species assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignOptions {
    /// Same-species separation as a multiple of the species spacing
    pub min_same_species_distance: f64,
    pub style: PlantingStyle,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self { min_same_species_distance: 1.5, style: PlantingStyle::Wild }
    }
}

/// Assign palette species to slots, producing final placements
///
/// An empty palette produces no placements. Coordinates round to 0.1in;
/// the stored radius is half the species spacing.
pub fn assign_plants_to_slots(
    slots: &[Slot],
    palette: &[PaletteEntry],
    options: &AssignOptions,
    rng: &mut LayoutRng,
) -> Vec<Placement> {
    if palette.is_empty() {
        return Vec::new();
    }

    let mut palette_by_role: HashMap<PlantRole, Vec<&PaletteEntry>> = HashMap::new();
    for plant in palette {
        palette_by_role.entry(plant.role).or_default().push(plant);
    }
    let all_plants: Vec<&PaletteEntry> = palette.iter().collect();

    let mut sorted_slots: Vec<&Slot> = slots.iter().collect();
    match options.style {
        PlantingStyle::Orderly => {
            sorted_slots.sort_by(|a, b| a.y.total_cmp(&b.y));
        }
        PlantingStyle::Wild => {
            rng.shuffle(&mut sorted_slots);
        }
    }

    let mut placements: Vec<Placement> = Vec::new();

    for slot in sorted_slots {
        let candidates = match palette_by_role.get(&slot.role) {
            Some(pool) if !pool.is_empty() => pool.as_slice(),
            _ => all_plants.as_slice(),
        };

        let valid: Vec<&PaletteEntry> = candidates
            .iter()
            .filter(|plant| {
                let min_dist = plant.spacing_or(slot.spacing) * options.min_same_species_distance;
                !placements.iter().any(|p| {
                    p.sku == plant.sku
                        && Point::new(slot.x, slot.y).distance_to(&Point::new(p.x, p.y)) < min_dist
                })
            })
            .copied()
            .collect();

        // Every candidate would crowd its own species: leave the slot open
        if valid.is_empty() {
            continue;
        }

        let plant = valid[rng.pick_index(valid.len())];

        placements.push(Placement {
            x: round_tenth(slot.x),
            y: round_tenth(slot.y),
            sku: plant.sku.clone(),
            r: plant.spacing_or(slot.spacing) / 2.0,
        });
    }

    placements
}

/// Count placements per SKU
pub fn count_plants_by_sku(placements: &[Placement]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for p in placements {
        *counts.entry(p.sku.clone()).or_insert(0) += 1;
    }
    counts
}
