//! # Gardenkit Palette
//!
//! Species selection for the Gardenkit design pipeline: scores catalog
//! plants against user preferences, selects an 8-10 species palette under
//! ecological constraints (keystone and grass minimums, genus cap,
//! bloom-season coverage), and offers one-click palette adjustments.

pub mod adjust;
pub mod score;
pub mod select;

pub use adjust::{adjust_palette, PaletteAdjustment};
pub use score::score_plant;
pub use select::{
    bloom_seasons, determine_role, format_plant_for_palette, select_palette, BloomSeason,
    SelectionOptions,
};
