//! On-screen overlay data
//!
//! Converts the generated inch-space layout back into pixel space so the
//! photo canvas collaborator can draw placements and keep-out zones over
//! the user's photo. Rendering itself happens on the other side of the
//! boundary; this module only produces positioned, colored records plus
//! the shared style block.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use gardenkit_core::{ExistingPlant, Placement, PxPoint, Scale};

/// Fallback circle color when a SKU has no palette color
const DEFAULT_PLANT_COLOR: &str = "#4CAF50";

/// One plant circle in photo pixel space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayPlant {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub sku: String,
    pub color: String,
}

/// Stroke/fill styling shared with the canvas collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    pub boundary_color: String,
    pub boundary_width: f64,
    pub plant_fill: String,
    pub plant_stroke: String,
    pub plant_stroke_width: f64,
    pub existing_fill: String,
    pub existing_stroke: String,
    pub existing_stroke_width: f64,
    pub existing_dash: [f64; 2],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            boundary_color: "rgba(46, 125, 50, 0.6)".to_string(),
            boundary_width: 3.0,
            plant_fill: "rgba(76, 175, 80, 0.4)".to_string(),
            plant_stroke: "#4CAF50".to_string(),
            plant_stroke_width: 2.0,
            existing_fill: "rgba(255, 152, 0, 0.2)".to_string(),
            existing_stroke: "#E65100".to_string(),
            existing_stroke_width: 3.0,
            existing_dash: [10.0, 5.0],
        }
    }
}

/// Pixel-space overlay for the photo canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayData {
    pub boundary: Vec<PxPoint>,
    pub plants: Vec<OverlayPlant>,
    pub existing_plants: Vec<ExistingPlant>,
    pub style: OverlayStyle,
}

/// Build overlay data from a generated layout
pub fn generate_overlay_data(
    bed_polygon_px: &[PxPoint],
    placements: &[Placement],
    existing_plants: &[ExistingPlant],
    scale: Scale,
    sku_to_color: &HashMap<String, String>,
) -> OverlayData {
    let plants = placements
        .iter()
        .map(|p| OverlayPlant {
            x: scale.length_to_px(p.x),
            y: scale.length_to_px(p.y),
            r: scale.length_to_px(p.r),
            sku: p.sku.clone(),
            color: sku_to_color
                .get(&p.sku)
                .cloned()
                .unwrap_or_else(|| DEFAULT_PLANT_COLOR.to_string()),
        })
        .collect();

    let existing = existing_plants
        .iter()
        .map(|ex| {
            let mut out = ex.clone();
            out.center_px = ex.center_in.map(|c| scale.point_to_px(c));
            out.radius_px = Some(scale.length_to_px(ex.radius_in()));
            out
        })
        .collect();

    OverlayData {
        boundary: bed_polygon_px.to_vec(),
        plants,
        existing_plants: existing,
        style: OverlayStyle::default(),
    }
}
