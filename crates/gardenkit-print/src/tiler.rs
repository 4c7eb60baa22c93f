//! Stencil tiling for beds wider than one sheet
//!
//! Two phases. First the geometry is normalized to portrait: when the bed
//! is wider than tall, everything rotates 90 degrees clockwise and shifts
//! back to non-negative coordinates (paper feeds long-edge-first, so
//! portrait sheets waste less material). The `rotated` flag is surfaced on
//! every tile so the installer knows to turn the printed sheet back.
//! Second, if the bed still exceeds one sheet's usable width, it splits
//! into overlapping lettered tiles: placements and keep-outs are filtered
//! per window and re-offset, and the boundary is clipped with a
//! single-axis Sutherland-Hodgman pass.

use serde::{Deserialize, Serialize};
use tracing::debug;

use gardenkit_core::{bounding_box, ExistingPlant, Placement, Point};

use crate::svg::{generate_print_svg, tile_letter, PrintOptions, PrintParams};

/// One printable sheet of the stencil
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Sheet letter: 'A', 'B', ...
    pub tile: String,
    /// Geometry was rotated 90 degrees clockwise for portrait printing
    pub rotated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_x: Option<f64>,
    /// Self-contained SVG 1.1 document
    pub svg: String,
}

/// Rotate 90 degrees clockwise: (x, y) -> (y, -x)
fn rotate_point(p: Point) -> Point {
    Point::new(p.y, -p.x)
}

struct WorkingGeometry {
    polygon: Vec<Point>,
    placements: Vec<Placement>,
    existing: Vec<ExistingPlant>,
    rotated: bool,
}

/// Normalize geometry to portrait orientation with non-negative coordinates
fn normalize_to_portrait(params: &PrintParams) -> WorkingGeometry {
    let bounds = bounding_box(params.bed_polygon_in);
    let needs_rotation = bounds.width() > bounds.height();

    let mut polygon: Vec<Point> = params.bed_polygon_in.to_vec();
    let mut placements: Vec<Placement> = params.placements.to_vec();
    let mut existing: Vec<ExistingPlant> = params.existing_plants.to_vec();

    if needs_rotation {
        polygon = polygon.iter().map(|p| rotate_point(*p)).collect();
        for p in &mut placements {
            let rotated = rotate_point(Point::new(p.x, p.y));
            p.x = rotated.x;
            p.y = rotated.y;
        }
        for ex in &mut existing {
            ex.center_in = ex.center_in.map(rotate_point);
        }

        let new_bounds = bounding_box(&polygon);
        let shift_x = -new_bounds.min_x;
        let shift_y = -new_bounds.min_y;

        for p in &mut polygon {
            p.x += shift_x;
            p.y += shift_y;
        }
        for p in &mut placements {
            p.x += shift_x;
            p.y += shift_y;
        }
        for ex in &mut existing {
            ex.center_in = ex.center_in.map(|c| Point::new(c.x + shift_x, c.y + shift_y));
        }
    }

    WorkingGeometry { polygon, placements, existing, rotated: needs_rotation }
}

/// Clip a polygon to a vertical strip, interpolating edge crossings
///
/// Single-axis Sutherland-Hodgman: vertices inside the window are kept
/// (clamped), and each edge crossing the window boundary gains an
/// interpolated vertex at the crossing.
pub fn clip_polygon_to_tile(polygon: &[Point], min_x: f64, max_x: f64) -> Vec<Point> {
    let mut clipped = Vec::new();
    let n = polygon.len();

    for i in 0..n {
        let curr = polygon[i];
        let next = polygon[(i + 1) % n];

        let curr_in = curr.x >= min_x && curr.x <= max_x;
        let next_in = next.x >= min_x && next.x <= max_x;

        if curr_in {
            clipped.push(Point::new(curr.x.clamp(min_x, max_x), curr.y));
        }

        if curr_in != next_in {
            let boundary_x = if curr_in {
                if next.x < min_x {
                    min_x
                } else {
                    max_x
                }
            } else if curr.x < min_x {
                min_x
            } else {
                max_x
            };
            let t = (boundary_x - curr.x) / (next.x - curr.x);
            let intersect_y = curr.y + t * (next.y - curr.y);
            clipped.push(Point::new(boundary_x, intersect_y));
        }
    }

    clipped
}

/// Render the stencil as one or more portrait sheets
///
/// A bed that fits one sheet produces a single untiled tile 'A'. Wider
/// beds split into `ceil(bedWidth / (usable - overlap))` tiles whose
/// windows overlap by `overlap_in` for physical alignment.
pub fn generate_tiled_svgs(params: &PrintParams, options: &PrintOptions) -> Vec<Tile> {
    let working = normalize_to_portrait(params);

    let bounds = bounding_box(&working.polygon);
    let bed_width = bounds.width();
    let usable_width = options.usable_width_in();

    if bed_width <= usable_width {
        let tile_params = PrintParams {
            bed_polygon_in: &working.polygon,
            placements: &working.placements,
            existing_plants: &working.existing,
            sku_to_label: params.sku_to_label,
        };
        let tile_options = PrintOptions { tile: false, ..options.clone() };
        return vec![Tile {
            tile: tile_letter(0).to_string(),
            rotated: working.rotated,
            start_x: None,
            end_x: None,
            svg: generate_print_svg(&tile_params, &tile_options),
        }];
    }

    let tile_width = usable_width - options.overlap_in;
    let tile_count = (bed_width / tile_width).ceil() as usize;
    debug!(bed_width, tile_count, rotated = working.rotated, "tiling stencil");

    let mut tiles = Vec::with_capacity(tile_count);

    for t in 0..tile_count {
        let tile_start_x = t as f64 * tile_width;
        let tile_end_x = tile_start_x + usable_width;

        let tile_placements: Vec<Placement> = working
            .placements
            .iter()
            .filter(|p| p.x >= tile_start_x - p.r && p.x <= tile_end_x + p.r)
            .map(|p| Placement { x: p.x - tile_start_x, ..p.clone() })
            .collect();

        let tile_existing: Vec<ExistingPlant> = working
            .existing
            .iter()
            .filter(|ex| {
                let Some(center) = ex.center_in else {
                    return false;
                };
                let r = ex.radius_in();
                center.x >= tile_start_x - r && center.x <= tile_end_x + r
            })
            .map(|ex| {
                let mut out = ex.clone();
                out.center_in =
                    ex.center_in.map(|c| Point::new(c.x - tile_start_x, c.y));
                out
            })
            .collect();

        let tile_polygon: Vec<Point> =
            clip_polygon_to_tile(&working.polygon, tile_start_x, tile_end_x)
                .iter()
                .map(|p| Point::new(p.x - tile_start_x, p.y))
                .collect();

        let tile_params = PrintParams {
            bed_polygon_in: &tile_polygon,
            placements: &tile_placements,
            existing_plants: &tile_existing,
            sku_to_label: params.sku_to_label,
        };
        let tile_options =
            PrintOptions { tile: false, show_tile_guides: false, ..options.clone() };

        tiles.push(Tile {
            tile: tile_letter(t).to_string(),
            rotated: working.rotated,
            start_x: Some(tile_start_x),
            end_x: Some(tile_end_x.min(bed_width)),
            svg: generate_print_svg(&tile_params, &tile_options),
        });
    }

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn rect(width: f64, height: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
            Point::new(width, height),
            Point::new(0.0, height),
        ]
    }

    #[test]
    fn test_clip_keeps_interior() {
        let polygon = rect(100.0, 50.0);
        let clipped = clip_polygon_to_tile(&polygon, 20.0, 60.0);
        assert!(clipped.len() >= 3);
        for p in &clipped {
            assert!(p.x >= 20.0 && p.x <= 60.0);
        }
    }

    #[test]
    fn test_clip_interpolates_crossings() {
        // Triangle crossing the window's right edge
        let triangle =
            vec![Point::new(0.0, 0.0), Point::new(40.0, 20.0), Point::new(0.0, 40.0)];
        let clipped = clip_polygon_to_tile(&triangle, 0.0, 20.0);
        // Crossing the x=20 boundary on both slanted edges
        assert!(clipped.iter().any(|p| p.x == 20.0 && (p.y - 10.0).abs() < 1e-9));
        assert!(clipped.iter().any(|p| p.x == 20.0 && (p.y - 30.0).abs() < 1e-9));
    }

    #[test]
    fn test_clip_outside_window_is_empty() {
        let polygon = rect(10.0, 10.0);
        let clipped = clip_polygon_to_tile(&polygon, 50.0, 80.0);
        assert!(clipped.is_empty());
    }

    #[test]
    fn test_narrow_bed_single_tile() {
        let polygon = rect(20.0, 40.0);
        let labels = HashMap::new();
        let params = PrintParams {
            bed_polygon_in: &polygon,
            placements: &[],
            existing_plants: &[],
            sku_to_label: &labels,
        };

        let tiles = generate_tiled_svgs(&params, &PrintOptions::default());
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].tile, "A");
        assert!(!tiles[0].rotated);
        assert!(tiles[0].start_x.is_none());
    }

    #[test]
    fn test_wide_bed_rotates_to_portrait() {
        // 40in wide x 20in tall fits one sheet only after rotation
        let polygon = rect(40.0, 20.0);
        let labels = HashMap::new();
        let params = PrintParams {
            bed_polygon_in: &polygon,
            placements: &[],
            existing_plants: &[],
            sku_to_label: &labels,
        };

        let tiles = generate_tiled_svgs(&params, &PrintOptions::default());
        assert_eq!(tiles.len(), 1);
        assert!(tiles[0].rotated);
    }

    #[test]
    fn test_rotation_maps_placements() {
        let polygon = rect(40.0, 20.0);
        let placements = vec![Placement { x: 30.0, y: 5.0, sku: "A".to_string(), r: 2.0 }];
        let labels = HashMap::new();
        let params = PrintParams {
            bed_polygon_in: &polygon,
            placements: &placements,
            existing_plants: &[],
            sku_to_label: &labels,
        };

        let working = normalize_to_portrait(&params);
        assert!(working.rotated);
        // (30, 5) -> (5, -30) -> shifted by +40 in y -> (5, 10)
        assert_eq!(working.placements[0].x, 5.0);
        assert_eq!(working.placements[0].y, 10.0);
        // All coordinates non-negative after the shift
        let bounds = bounding_box(&working.polygon);
        assert!(bounds.min_x >= 0.0 && bounds.min_y >= 0.0);
        // Portrait: taller than wide
        assert!(bounds.height() > bounds.width());
    }

    #[test]
    fn test_tile_serializes_with_external_names() {
        let tile = Tile {
            tile: "B".to_string(),
            rotated: true,
            start_x: Some(22.0),
            end_x: Some(45.0),
            svg: "<svg/>".to_string(),
        };
        let json = serde_json::to_value(&tile).unwrap();
        assert_eq!(json["tile"], "B");
        assert_eq!(json["startX"], 22.0);
        assert_eq!(json["endX"], 45.0);

        // Untiled sheets omit the window fields entirely
        let untiled = Tile {
            tile: "A".to_string(),
            rotated: false,
            start_x: None,
            end_x: None,
            svg: "<svg/>".to_string(),
        };
        let json = serde_json::to_value(&untiled).unwrap();
        assert!(json.get("startX").is_none());
    }

    #[test]
    fn test_tile_windows_and_letters() {
        // 60in wide portrait bed on 24in paper: usable 23, stride 22
        let polygon = rect(60.0, 90.0);
        let labels = HashMap::new();
        let params = PrintParams {
            bed_polygon_in: &polygon,
            placements: &[],
            existing_plants: &[],
            sku_to_label: &labels,
        };

        let tiles = generate_tiled_svgs(&params, &PrintOptions::default());
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].tile, "A");
        assert_eq!(tiles[1].tile, "B");
        assert_eq!(tiles[2].tile, "C");

        assert_eq!(tiles[0].start_x, Some(0.0));
        assert_eq!(tiles[0].end_x, Some(23.0));
        assert_eq!(tiles[1].start_x, Some(22.0));
        assert_eq!(tiles[2].end_x, Some(60.0)); // clamped to bed width
    }
}
