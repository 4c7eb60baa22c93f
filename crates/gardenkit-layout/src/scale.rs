//! Scale calibration from user measurements
//!
//! Two alternate procedures derive pixels-per-inch from the traced
//! boundary: declared bed length/width, or two clicked reference points a
//! known real-world distance apart. Both recompute the bed area from the
//! polygon itself (not from the declared rectangle) so freehand traces
//! price correctly, and both round their outputs (2 decimals for the
//! factor, 1 for square feet), a persisted and redisplayed contract that
//! must stay bit-for-bit reproducible.

use serde::{Deserialize, Serialize};

use gardenkit_core::{
    bounding_box, distance, polygon_area, round_hundredth, round_tenth, GeometryError, PxPoint,
    Result, Scale,
};

/// Calibration output, rounded per the persistence contract
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleResult {
    pub px_per_in: f64,
    pub bed_area_sqft: f64,
}

fn area_sqft(boundary_px: &[PxPoint], scale: Scale) -> f64 {
    polygon_area(&scale.to_inches(boundary_px)) / 144.0
}

/// Derive scale from the declared bed length and width
///
/// Averages the factors implied by the bounding-box height/length and
/// width/width pairs. This assumes an axis-aligned trace; a rotated
/// rectangle produces a biased factor, which is tolerated for freehand
/// tracing rather than validated.
pub fn scale_from_dimensions(
    boundary_px: &[PxPoint],
    length_in: f64,
    width_in: f64,
) -> Result<ScaleResult> {
    if boundary_px.len() < 3 {
        return Err(GeometryError::DegenerateBoundary { count: boundary_px.len() }.into());
    }
    if !length_in.is_finite() || length_in <= 0.0 || !width_in.is_finite() || width_in <= 0.0 {
        return Err(GeometryError::InvalidDimensions { length_in, width_in }.into());
    }

    let bounds = bounding_box(boundary_px);
    let px_per_in_from_length = bounds.height() / length_in;
    let px_per_in_from_width = bounds.width() / width_in;

    let scale = Scale::new((px_per_in_from_length + px_per_in_from_width) / 2.0)?;

    Ok(ScaleResult {
        px_per_in: round_hundredth(scale.px_per_in()),
        bed_area_sqft: round_tenth(area_sqft(boundary_px, scale)),
    })
}

/// Derive scale from two clicked reference points
pub fn scale_from_two_points(
    point1: PxPoint,
    point2: PxPoint,
    distance_in: f64,
    boundary_px: &[PxPoint],
) -> Result<ScaleResult> {
    if boundary_px.len() < 3 {
        return Err(GeometryError::DegenerateBoundary { count: boundary_px.len() }.into());
    }
    if !distance_in.is_finite() || distance_in <= 0.0 {
        return Err(GeometryError::InvalidDistance { value: distance_in }.into());
    }

    let px_distance = distance(point1, point2);
    let scale = Scale::new(px_distance / distance_in)?;

    Ok(ScaleResult {
        px_per_in: round_hundredth(scale.px_per_in()),
        bed_area_sqft: round_tenth(area_sqft(boundary_px, scale)),
    })
}
