//! # Gardenkit Print
//!
//! Print-ready stencil output for the Gardenkit design pipeline: renders
//! DPI-accurate SVG sheets from the generated layout, normalizing wide
//! beds to portrait and splitting them into overlapping lettered tiles
//! for physical re-assembly. Also produces pixel-space overlay data for
//! the on-screen photo canvas.

pub mod overlay;
pub mod svg;
pub mod tiler;

pub use overlay::{generate_overlay_data, OverlayData, OverlayPlant, OverlayStyle};
pub use svg::{generate_print_svg, label_for_sku, PrintOptions, PrintParams};
pub use tiler::{clip_polygon_to_tile, generate_tiled_svgs, Tile};
