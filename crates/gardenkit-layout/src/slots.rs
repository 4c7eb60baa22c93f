//! Hexagonal-grid slot generation
//!
//! Fills the bed polygon with candidate planting positions, one grid pass
//! per plant role from the widest spacing down: anchor, mid, grass,
//! filler. Each pass rejects candidates outside the polygon, inside the
//! edge margin, or blocked by a keep-out zone, then discards points that
//! crowd a slot accepted by an earlier (larger) role. Processing the
//! largest spacing first gives anchors first pick of open ground.

use serde::{Deserialize, Serialize};

use gardenkit_core::{
    bounding_box, distance, distance_to_polygon_edge, point_in_polygon, ExistingPlant, PlantRole,
    Point,
};

use crate::keepout::is_blocked;
use crate::rng::LayoutRng;

/// Fraction of a role's spacing a new slot must keep from accepted slots
const CROWDING_FACTOR: f64 = 0.75;

/// A candidate planting position, not yet assigned a species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub x: f64,
    pub y: f64,
    pub role: PlantRole,
    pub spacing: f64,
}

/// Grid parameters for one plant role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleSpacing {
    /// Lattice pitch in inches
    pub spacing: f64,
    /// Informational target share of the bed; not enforced here
    pub share: f64,
    /// Minimum distance from the bed edge in inches
    pub edge_margin: f64,
}

/// Per-role grid configuration for a slot generation pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub anchor: RoleSpacing,
    pub mid: RoleSpacing,
    pub filler: RoleSpacing,
    pub grass: RoleSpacing,
    /// Jitter amplitude as a fraction of spacing, for a less mechanical look
    pub jitter: f64,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            anchor: RoleSpacing { spacing: 24.0, share: 0.15, edge_margin: 2.0 },
            mid: RoleSpacing { spacing: 18.0, share: 0.50, edge_margin: 1.5 },
            filler: RoleSpacing { spacing: 14.0, share: 0.25, edge_margin: 1.0 },
            grass: RoleSpacing { spacing: 18.0, share: 0.10, edge_margin: 1.5 },
            jitter: 0.15,
        }
    }
}

impl SlotConfig {
    /// Roles in generation priority order, widest spacing first
    pub const ROLE_ORDER: [PlantRole; 4] =
        [PlantRole::Anchor, PlantRole::Mid, PlantRole::Grass, PlantRole::Filler];

    pub fn for_role(&self, role: PlantRole) -> Option<RoleSpacing> {
        match role {
            PlantRole::Anchor => Some(self.anchor),
            PlantRole::Mid => Some(self.mid),
            PlantRole::Filler => Some(self.filler),
            PlantRole::Grass => Some(self.grass),
            _ => None,
        }
    }

    /// Smallest role spacing, for validating the whole config at once
    pub fn min_spacing(&self) -> f64 {
        self.anchor
            .spacing
            .min(self.mid.spacing)
            .min(self.filler.spacing)
            .min(self.grass.spacing)
    }
}

/// Generate hex-lattice candidate points inside a polygon
///
/// Row pitch is `spacing * sqrt(3)/2` with alternate rows offset by half
/// the spacing. Jitter perturbs each candidate before the containment,
/// edge-margin, and keep-out tests, so a jittered point near the edge can
/// legitimately fall out.
pub fn generate_hex_grid(
    polygon: &[Point],
    spacing: f64,
    edge_margin: f64,
    jitter: f64,
    existing_plants: &[ExistingPlant],
    rng: &mut LayoutRng,
) -> Vec<Point> {
    let mut points = Vec::new();
    let bounds = bounding_box(polygon);

    let row_height = spacing * 3.0_f64.sqrt() / 2.0;
    let candidate_radius = spacing / 2.0;

    let mut row = 0u32;
    let mut y = bounds.min_y;
    while y <= bounds.max_y {
        let x_offset = if row % 2 == 1 { spacing / 2.0 } else { 0.0 };

        let mut x = bounds.min_x + x_offset;
        while x <= bounds.max_x {
            let mut px = x;
            let mut py = y;

            if jitter > 0.0 {
                px += (rng.next_f64() - 0.5) * spacing * jitter;
                py += (rng.next_f64() - 0.5) * spacing * jitter;
            }

            let candidate = Point::new(px, py);
            if point_in_polygon(candidate, polygon)
                && distance_to_polygon_edge(candidate, polygon) >= edge_margin
                && !is_blocked(candidate, existing_plants, candidate_radius)
            {
                points.push(candidate);
            }

            x += spacing;
        }

        y += row_height;
        row += 1;
    }

    points
}

/// Generate slots for every role, widest spacing first
///
/// A candidate within `0.75 * spacing` of any already-accepted slot is
/// discarded; this is what keeps larger and smaller plants from
/// colliding across roles.
pub fn generate_plant_slots(
    polygon: &[Point],
    config: &SlotConfig,
    existing_plants: &[ExistingPlant],
    rng: &mut LayoutRng,
) -> Vec<Slot> {
    let mut all_slots: Vec<Slot> = Vec::new();
    let mut used_points: Vec<Point> = Vec::new();

    for role in SlotConfig::ROLE_ORDER {
        let Some(role_config) = config.for_role(role) else {
            continue;
        };

        let grid_points = generate_hex_grid(
            polygon,
            role_config.spacing,
            role_config.edge_margin,
            config.jitter,
            existing_plants,
            rng,
        );

        let min_dist = role_config.spacing * CROWDING_FACTOR;

        for point in grid_points {
            let too_close = used_points.iter().any(|used| distance(point, *used) < min_dist);
            if !too_close {
                all_slots.push(Slot {
                    x: point.x,
                    y: point.y,
                    role,
                    spacing: role_config.spacing,
                });
                used_points.push(point);
            }
        }
    }

    all_slots
}
