//! Print stencil SVG generation
//!
//! Renders one self-contained SVG 1.1 document per sheet: dashed bed
//! boundary, "EXISTING - CUT" circles for preserved plants, solid plant
//! circles with center dots, crosshairs and SKU labels, tile-seam guides,
//! and a legend. Every geometric quantity is scaled by `dpi` when
//! converting inches to SVG user units, so printing at that DPI with no
//! scaling yields true-to-size output. This is the only place the DPI
//! parameter is consumed.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use gardenkit_core::{bounding_box, Bounds, ExistingPlant, Placement, Point};

/// Inputs shared by single-sheet and tiled rendering
#[derive(Debug, Clone, Copy)]
pub struct PrintParams<'a> {
    /// Bed boundary in inch space
    pub bed_polygon_in: &'a [Point],
    pub placements: &'a [Placement],
    pub existing_plants: &'a [ExistingPlant],
    /// Short display label per SKU; missing SKUs fall back to the first
    /// three characters, uppercased
    pub sku_to_label: &'a HashMap<String, String>,
}

/// Rendering options for print output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintOptions {
    pub paper_width_in: f64,
    /// Allow splitting wide beds across multiple sheets
    pub tile: bool,
    pub dpi: f64,
    pub show_boundary: bool,
    pub show_labels: bool,
    pub show_crosshairs: bool,
    pub show_legend: bool,
    pub show_tile_guides: bool,
    pub show_existing_plants: bool,
    pub margin_in: f64,
    /// Overlap between adjacent tiles for physical re-assembly
    pub overlap_in: f64,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            paper_width_in: 24.0,
            tile: true,
            dpi: 300.0,
            show_boundary: true,
            show_labels: true,
            show_crosshairs: true,
            show_legend: true,
            show_tile_guides: true,
            show_existing_plants: true,
            margin_in: 0.5,
            overlap_in: 1.0,
        }
    }
}

impl PrintOptions {
    /// Sheet width available for bed geometry after margins
    pub fn usable_width_in(&self) -> f64 {
        self.paper_width_in - self.margin_in * 2.0
    }
}

pub(crate) fn tile_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Display label for a SKU
pub fn label_for_sku(sku_to_label: &HashMap<String, String>, sku: &str) -> String {
    sku_to_label
        .get(sku)
        .cloned()
        .unwrap_or_else(|| sku.chars().take(3).collect::<String>().to_uppercase())
}

fn bounds_or_zero(polygon: &[Point]) -> Bounds {
    if polygon.is_empty() {
        Bounds { min_x: 0.0, max_x: 0.0, min_y: 0.0, max_y: 0.0 }
    } else {
        bounding_box(polygon)
    }
}

/// Render one print sheet as a self-contained SVG document
///
/// A polygon with fewer than 3 points renders no boundary path but still
/// produces a valid document; a tile window can legitimately clip the bed
/// away entirely.
pub fn generate_print_svg(params: &PrintParams, options: &PrintOptions) -> String {
    let bounds = bounds_or_zero(params.bed_polygon_in);
    let bed_width = bounds.width();
    let bed_height = bounds.height();

    let usable_width = options.usable_width_in();
    let needs_tiling = options.tile && bed_width > usable_width;
    let tile_count = if needs_tiling {
        (bed_width / (usable_width - options.overlap_in)).ceil().max(1.0) as usize
    } else {
        1
    };

    let px_per_in = options.dpi;
    // Typography is specified in points; 72pt per inch of paper
    let pt = |points: f64| points * px_per_in / 72.0;

    let svg_width = if needs_tiling {
        options.paper_width_in * px_per_in
    } else {
        (bed_width + options.margin_in * 2.0) * px_per_in
    };
    let legend_height_in = if options.show_legend { 3.0 } else { 0.0 };
    let svg_height = (bed_height + options.margin_in * 2.0 + legend_height_in) * px_per_in;

    let offset_x = -bounds.min_x;
    let offset_y = -bounds.min_y;

    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{svg_width}" height="{svg_height}"
     viewBox="0 0 {svg_width} {svg_height}">

  <defs>
    <style>
      .bed-boundary {{ fill: none; stroke: #2E7D32; stroke-width: 2; stroke-dasharray: 10,5; }}
      .plant-circle {{ fill: rgba(76, 175, 80, 0.2); stroke: #4CAF50; stroke-width: 1.5; }}
      .plant-center {{ fill: #1B5E20; }}
      .crosshair {{ stroke: #666; stroke-width: 0.5; }}
      .plant-label {{ font-family: Arial, sans-serif; font-size: {label_size}px; fill: #333; text-anchor: middle; }}
      .legend-text {{ font-family: Arial, sans-serif; font-size: {legend_size}px; fill: #333; }}
      .legend-title {{ font-family: Arial, sans-serif; font-size: {label_size}px; fill: #1B5E20; font-weight: bold; }}
      .tile-guide {{ stroke: #FF5722; stroke-width: 2; stroke-dasharray: 15,10; }}
      .tile-label {{ font-family: Arial, sans-serif; font-size: {tile_size}px; fill: #FF5722; font-weight: bold; }}
      .existing-circle {{ fill: rgba(255, 152, 0, 0.1); stroke: #E65100; stroke-width: 3; stroke-dasharray: 12,6; }}
      .existing-label {{ font-family: Arial, sans-serif; font-size: {existing_size}px; fill: #E65100; text-anchor: middle; font-weight: bold; }}
      .scissors-icon {{ fill: #E65100; }}
    </style>

    <symbol id="scissors" viewBox="0 0 24 24">
      <path d="M9.64 7.64c.23-.5.36-1.05.36-1.64 0-2.21-1.79-4-4-4S2 3.79 2 6s1.79 4 4 4c.59 0 1.14-.13 1.64-.36L10 12l-2.36 2.36C7.14 14.13 6.59 14 6 14c-2.21 0-4 1.79-4 4s1.79 4 4 4 4-1.79 4-4c0-.59-.13-1.14-.36-1.64L12 14l7 7h3v-1L9.64 7.64zM6 8c-1.1 0-2-.89-2-2s.9-2 2-2 2 .89 2 2-.9 2-2 2zm0 12c-1.1 0-2-.89-2-2s.9-2 2-2 2 .89 2 2-.9 2-2 2zm6-7.5c-.28 0-.5-.22-.5-.5s.22-.5.5-.5.5.22.5.5-.22.5-.5.5zM19 3l-6 6 2 2 7-7V3h-2z"/>
    </symbol>
  </defs>

  <g id="print-content" transform="translate({margin_px}, {margin_px})">
"#,
        svg_width = svg_width,
        svg_height = svg_height,
        label_size = pt(12.0),
        legend_size = pt(10.0),
        tile_size = pt(14.0),
        existing_size = pt(11.0),
        margin_px = options.margin_in * px_per_in,
    );

    if options.show_boundary && params.bed_polygon_in.len() >= 3 {
        let mut path = String::new();
        for (i, p) in params.bed_polygon_in.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(
                path,
                "{} {} {} ",
                cmd,
                (p.x + offset_x) * px_per_in,
                (p.y + offset_y) * px_per_in
            );
        }
        path.push('Z');
        let _ = writeln!(svg, "    <path class=\"bed-boundary\" d=\"{}\" />", path);
    }

    if options.show_existing_plants && !params.existing_plants.is_empty() {
        svg.push_str("\n    <!-- EXISTING PLANTS - CUT OUT -->\n");

        for ex in params.existing_plants {
            let Some(center) = ex.center_in else {
                continue;
            };

            let cx = (center.x + offset_x) * px_per_in;
            let cy = (center.y + offset_y) * px_per_in;
            let r = ex.radius_in() * px_per_in;

            let _ = writeln!(
                svg,
                "    <circle class=\"existing-circle\" cx=\"{}\" cy=\"{}\" r=\"{}\" />",
                cx, cy, r
            );
            let _ = writeln!(
                svg,
                "    <text class=\"existing-label\" x=\"{}\" y=\"{}\">EXISTING</text>",
                cx,
                cy - pt(5.0)
            );
            let _ = writeln!(
                svg,
                "    <text class=\"existing-label\" x=\"{}\" y=\"{}\">&#9986; CUT</text>",
                cx,
                cy + pt(12.0)
            );

            let icon_size = pt(18.0);
            let _ = writeln!(
                svg,
                "    <use href=\"#scissors\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" class=\"scissors-icon\" />",
                cx - icon_size / 2.0,
                cy + pt(18.0),
                icon_size,
                icon_size
            );
        }
    }

    svg.push_str("\n    <!-- NEW PLANTS -->\n");
    for plant in params.placements {
        let cx = (plant.x + offset_x) * px_per_in;
        let cy = (plant.y + offset_y) * px_per_in;
        let r = plant.r * px_per_in;

        let _ = writeln!(
            svg,
            "    <circle class=\"plant-circle\" cx=\"{}\" cy=\"{}\" r=\"{}\" />",
            cx, cy, r
        );
        let _ = writeln!(
            svg,
            "    <circle class=\"plant-center\" cx=\"{}\" cy=\"{}\" r=\"{}\" />",
            cx,
            cy,
            pt(3.0)
        );

        if options.show_crosshairs {
            let cross = pt(6.0);
            let _ = writeln!(
                svg,
                "    <line class=\"crosshair\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" />",
                cx - cross,
                cy,
                cx + cross,
                cy
            );
            let _ = writeln!(
                svg,
                "    <line class=\"crosshair\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" />",
                cx,
                cy - cross,
                cx,
                cy + cross
            );
        }

        if options.show_labels {
            let label = label_for_sku(params.sku_to_label, &plant.sku);
            let _ = writeln!(
                svg,
                "    <text class=\"plant-label\" x=\"{}\" y=\"{}\">{}</text>",
                cx,
                cy + r + pt(12.0),
                label
            );
        }
    }

    if needs_tiling && options.show_tile_guides {
        // Preview guides only; real tiles get their own documents
        let tile_width = (bed_width + options.overlap_in) / tile_count as f64;
        for t in 1..tile_count {
            let tile_x = (tile_width * t as f64 - options.overlap_in / 2.0) * px_per_in;
            let _ = writeln!(
                svg,
                "    <line class=\"tile-guide\" x1=\"{}\" y1=\"0\" x2=\"{}\" y2=\"{}\" />",
                tile_x,
                tile_x,
                bed_height * px_per_in
            );
            let _ = writeln!(
                svg,
                "    <text class=\"tile-label\" x=\"{}\" y=\"{}\">&#8592; Tile {} | Tile {} &#8594;</text>",
                tile_x,
                -pt(10.0),
                tile_letter(t - 1),
                tile_letter(t)
            );
        }
    }

    svg.push_str("  </g>\n");

    if options.show_legend {
        let legend_y = (bed_height + options.margin_in + 0.5) * px_per_in;

        let mut unique_skus: Vec<&str> = Vec::new();
        for p in params.placements {
            if !unique_skus.contains(&p.sku.as_str()) {
                unique_skus.push(&p.sku);
            }
        }

        let _ = writeln!(
            svg,
            "  <g id=\"legend\" transform=\"translate({}, {})\">",
            options.margin_in * px_per_in,
            legend_y
        );
        svg.push_str("    <text class=\"legend-title\" x=\"0\" y=\"0\">Plant Key:</text>\n");

        for (i, sku) in unique_skus.iter().enumerate() {
            let label = label_for_sku(params.sku_to_label, sku);
            let count = params.placements.iter().filter(|p| p.sku == *sku).count();
            let col = i % 4;
            let row = i / 4;
            let x = col as f64 * pt(150.0);
            let y = (row + 1) as f64 * pt(18.0);

            let _ = writeln!(
                svg,
                "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"rgba(76, 175, 80, 0.3)\" stroke=\"#4CAF50\" />",
                x + pt(6.0),
                y - pt(4.0),
                pt(6.0)
            );
            let _ = writeln!(
                svg,
                "    <text class=\"legend-text\" x=\"{}\" y=\"{}\">{} = {} (&#215;{})</text>",
                x + pt(16.0),
                y,
                label,
                sku,
                count
            );
        }

        if !params.existing_plants.is_empty() {
            let existing_row = unique_skus.len() / 4 + 1;
            let existing_y = (existing_row + 1) as f64 * pt(18.0);

            let _ = writeln!(
                svg,
                "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"rgba(255, 152, 0, 0.2)\" stroke=\"#E65100\" stroke-dasharray=\"3,2\" />",
                pt(6.0),
                existing_y - pt(4.0),
                pt(6.0)
            );
            let _ = writeln!(
                svg,
                "    <text class=\"legend-text\" x=\"{}\" y=\"{}\" fill=\"#E65100\">EXISTING = Cut around these (&#215;{})</text>",
                pt(16.0),
                existing_y,
                params.existing_plants.len()
            );
        }

        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>");
    svg
}
