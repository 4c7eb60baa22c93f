//! Keep-out zone resolution
//!
//! Decides whether a candidate planting point is blocked by a preserved
//! existing plant. The exclusion radius is the plant's own radius plus its
//! clearance buffer plus the candidate plant's radius; the comparison is
//! strict, so a point exactly on the exclusion boundary is allowed.

use gardenkit_core::{distance, ExistingPlant, Point};

/// True if the point falls inside any existing plant's keep-out zone
///
/// Records without a resolved inch-space center are skipped; a missing
/// radius defaults to 18in. Side-effect free.
pub fn is_blocked(point: Point, existing_plants: &[ExistingPlant], candidate_radius: f64) -> bool {
    existing_plants.iter().any(|ex| {
        let Some(center) = ex.center_in else {
            return false;
        };
        let keep_out_radius = ex.radius_in() + ex.buffer_in + candidate_radius;
        distance(point, center) < keep_out_radius
    })
}

/// Total area occupied by existing plants, in square inches
///
/// Sums the plant radii only; the clearance buffer is a planting
/// constraint, not occupied ground.
pub fn existing_area_sqin(existing_plants: &[ExistingPlant]) -> f64 {
    existing_plants
        .iter()
        .map(|ex| {
            let r = ex.radius_in();
            std::f64::consts::PI * r * r
        })
        .sum()
}
