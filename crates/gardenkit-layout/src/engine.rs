//! Layout generation engine
//!
//! Composes the geometry kernel, keep-out resolver, slot generator, and
//! placement assigner into one end-to-end call: traced pixel boundary in,
//! inch-space placements and area accounting out. Validation happens at
//! this boundary; the pure functions below it assume clean input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use gardenkit_core::{
    polygon_area, round_tenth, ExistingPlant, GeometryError, PaletteEntry, Placement, Point,
    PxPoint, Result, Scale,
};

use crate::assign::{assign_plants_to_slots, count_plants_by_sku, AssignOptions, PlantingStyle};
use crate::keepout::existing_area_sqin;
use crate::rng::LayoutRng;
use crate::slots::{generate_plant_slots, SlotConfig};

/// Square inches per square foot
const SQIN_PER_SQFT: f64 = 144.0;

/// Inputs to one layout generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Traced bed boundary in pixel space
    pub boundary_px: Vec<PxPoint>,
    /// Calibrated scale factor
    pub px_per_in: f64,
    /// Selected species palette
    pub palette: Vec<PaletteEntry>,
    #[serde(default)]
    pub style: PlantingStyle,
    /// Keep-out zones, already resolved to inch space
    #[serde(default)]
    pub existing_plants: Vec<ExistingPlant>,
    /// RNG seed; fixed seed reproduces the layout exactly
    #[serde(default = "default_seed")]
    pub seed: u32,
    #[serde(default)]
    pub slot_config: Option<SlotConfig>,
}

fn default_seed() -> u32 {
    42
}

/// Output of one layout generation run
///
/// Areas are rounded to 0.1 sqft, the persisted contract. Plantable area
/// can go negative when keep-out zones overlap or exceed the bed; that is
/// reported as-is and logged, not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub bed_polygon_in: Vec<Point>,
    pub placements: Vec<Placement>,
    pub counts: BTreeMap<String, u32>,
    pub bed_area_sqft: f64,
    pub existing_area_sqft: f64,
    pub plantable_area_sqft: f64,
    pub total_plants: usize,
    pub existing_plants_count: usize,
}

/// Generate a complete planting layout
///
/// Errors only on caller contract violations: a boundary with fewer than
/// 3 points, a non-positive scale factor, or a non-positive spacing in
/// the slot config. An over-constrained bed (keep-out everywhere, spacing
/// too large) is not an error; it yields zero placements.
pub fn generate_layout(params: &LayoutParams) -> Result<LayoutResult> {
    if params.boundary_px.len() < 3 {
        return Err(GeometryError::DegenerateBoundary { count: params.boundary_px.len() }.into());
    }

    let scale = Scale::new(params.px_per_in)?;

    let slot_config = params.slot_config.unwrap_or_default();
    let min_spacing = slot_config.min_spacing();
    if !min_spacing.is_finite() || min_spacing <= 0.0 {
        return Err(GeometryError::InvalidSpacing { value: min_spacing }.into());
    }

    let boundary_in = scale.to_inches(&params.boundary_px);

    let area_sqft = polygon_area(&boundary_in) / SQIN_PER_SQFT;
    let existing_sqft = existing_area_sqin(&params.existing_plants) / SQIN_PER_SQFT;
    let plantable_sqft = area_sqft - existing_sqft;
    if plantable_sqft < 0.0 {
        warn!(
            bed_area_sqft = area_sqft,
            existing_area_sqft = existing_sqft,
            "keep-out zones exceed bed area; plantable area is negative"
        );
    }

    let mut rng = LayoutRng::new(params.seed);

    let slots =
        generate_plant_slots(&boundary_in, &slot_config, &params.existing_plants, &mut rng);
    debug!(slots = slots.len(), "generated candidate slots");

    let assign_options = AssignOptions { style: params.style, ..Default::default() };
    let placements =
        assign_plants_to_slots(&slots, &params.palette, &assign_options, &mut rng);
    let counts = count_plants_by_sku(&placements);

    debug!(
        placements = placements.len(),
        species = counts.len(),
        bed_area_sqft = area_sqft,
        "layout generated"
    );

    Ok(LayoutResult {
        bed_polygon_in: boundary_in,
        total_plants: placements.len(),
        existing_plants_count: params.existing_plants.len(),
        placements,
        counts,
        bed_area_sqft: round_tenth(area_sqft),
        existing_area_sqft: round_tenth(existing_sqft),
        plantable_area_sqft: round_tenth(plantable_sqft),
    })
}
