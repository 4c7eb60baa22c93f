//! # Gardenkit
//!
//! A native-plant garden design pipeline: trace a planting bed on a yard
//! photo, calibrate it to real-world inches, and generate a buildable
//! layout: a species palette, non-overlapping plant placements around
//! preserved vegetation, a priced quote, and print-ready scaled stencils.
//!
//! ## Architecture
//!
//! Gardenkit is organized as a workspace with focused crates:
//!
//! 1. **gardenkit-core** - Data model, polygon geometry, scale calibration
//! 2. **gardenkit-palette** - Species scoring and palette selection
//! 3. **gardenkit-layout** - Hex-grid slot generation and plant placement
//! 4. **gardenkit-print** - DPI-accurate SVG stencils and tiling
//! 5. **gardenkit** - Facade re-exports, quoting, and the generation pipeline
//!
//! The whole core is synchronous pure computation: every call is
//! parameterized by its full input, randomness flows through an injected
//! seed, and identical inputs reproduce identical designs. Photo upload,
//! AI vision detection, persistence, checkout, and UI live on the other
//! side of the data contracts re-exported here.

pub mod pipeline;
pub mod quote;

pub use pipeline::{generate_design, GenerateInputs, GenerateOutcome};
pub use quote::build_quote;

pub use gardenkit_core::{
    bounding_box, distance, distance_point_to_segment, distance_to_polygon_edge,
    point_in_polygon, polygon_area, validate_existing_plants, Bounds, BudgetTier, CatalogIndex,
    DesignJob, DesignStatus, DetectionSuggestion, Error, ExistingKind, ExistingPlant,
    GeometryError, HeightPreference, PaletteEntry, Placement, PlantRole, PlantSource, Point,
    Preferences, Product, PxPoint, Quote, QuoteLine, Result, RolloutSheet, Scale, ScaleMode,
    SizePreset, StylePreference, SunPreference, ValidationOutcome,
};

pub use gardenkit_palette::{
    adjust_palette, determine_role, score_plant, select_palette, BloomSeason, PaletteAdjustment,
    SelectionOptions,
};

pub use gardenkit_layout::{
    assign_plants_to_slots, count_plants_by_sku, generate_hex_grid, generate_layout,
    generate_plant_slots, is_blocked, scale_from_dimensions, scale_from_two_points,
    AssignOptions, LayoutParams, LayoutResult, LayoutRng, PlantingStyle, RoleSpacing,
    ScaleResult, Slot, SlotConfig,
};

pub use gardenkit_print::{
    generate_overlay_data, generate_print_svg, generate_tiled_svgs, OverlayData, PrintOptions,
    PrintParams, Tile,
};
