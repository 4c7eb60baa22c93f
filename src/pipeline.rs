//! End-to-end design generation
//!
//! The pure composition behind the "generate my garden" action: select a
//! palette from preferences, resolve keep-out zones to inch space,
//! generate the layout, and price the result. Persistence and job status
//! transitions stay with the orchestration layer outside this workspace;
//! everything here is a deterministic function of its inputs.

use serde::{Deserialize, Serialize};
use tracing::info;

use gardenkit_core::{
    CatalogIndex, ExistingPlant, PaletteEntry, Preferences, Product, PxPoint, Quote, Result,
    RolloutSheet, Scale, StylePreference,
};
use gardenkit_layout::{generate_layout, LayoutParams, LayoutResult, PlantingStyle};
use gardenkit_palette::{select_palette, SelectionOptions};

use crate::quote::build_quote;

/// Inputs gathered by the time a design job reaches generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateInputs {
    pub boundary_px: Vec<PxPoint>,
    pub px_per_in: f64,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub existing_plants: Vec<ExistingPlant>,
    /// RNG seed; production callers seed from entropy, tests fix it
    #[serde(default)]
    pub seed: u32,
}

/// Everything the generation step produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOutcome {
    pub palette: Vec<PaletteEntry>,
    pub layout: LayoutResult,
    pub quote: Quote,
}

/// The tidy style plants in rows; everything else scatters
fn planting_style(preferences: &Preferences) -> PlantingStyle {
    if preferences.style == StylePreference::Tidy {
        PlantingStyle::Orderly
    } else {
        PlantingStyle::Wild
    }
}

/// Generate a complete design: palette, layout, and quote
///
/// Non-plant catalog rows (kits, sheets) are excluded from selection. An
/// empty or thin catalog flows through as a short or empty palette and a
/// sparse layout rather than an error; only contract violations (bad
/// boundary, bad scale) error.
pub fn generate_design(
    inputs: &GenerateInputs,
    catalog: &[Product],
    sheets: &[RolloutSheet],
) -> Result<GenerateOutcome> {
    let plantable: Vec<Product> = catalog
        .iter()
        .filter(|p| p.active && p.role.map_or(true, |r| r.is_planting_role()))
        .cloned()
        .collect();

    let palette =
        select_palette(&plantable, &inputs.preferences, &SelectionOptions::default());

    let scale = Scale::new(inputs.px_per_in)?;
    let existing_in = scale.existing_to_inches(&inputs.existing_plants);

    let layout = generate_layout(&LayoutParams {
        boundary_px: inputs.boundary_px.clone(),
        px_per_in: inputs.px_per_in,
        palette: palette.clone(),
        style: planting_style(&inputs.preferences),
        existing_plants: existing_in,
        seed: inputs.seed,
        slot_config: None,
    })?;

    let index = CatalogIndex::new(catalog);
    let quote = build_quote(&layout.counts, &index, sheets, layout.bed_area_sqft);

    info!(
        species = palette.len(),
        plants = layout.total_plants,
        bed_area_sqft = layout.bed_area_sqft,
        subtotal = quote.subtotal,
        "design generated"
    );

    Ok(GenerateOutcome { palette, layout, quote })
}
