//! # Gardenkit Core
//!
//! Core data model and pure geometry for the Gardenkit design pipeline.
//! Provides the unit-tagged point types, polygon math, scale calibration,
//! existing-plant keep-out records, plant catalog shapes, and design-job
//! aggregate used by the palette, layout, and print crates.

pub mod catalog;
pub mod error;
pub mod existing;
pub mod geom;
pub mod job;
pub mod scale;

pub use catalog::{CatalogIndex, PaletteEntry, PlantRole, Product, RolloutSheet, DEFAULT_SPACING_IN};
pub use error::{Error, GeometryError, Result};
pub use existing::{
    validate_existing_plants, DetectionSuggestion, ExistingKind, ExistingPlant, PlantSource,
    SizePreset, ValidationOutcome, DEFAULT_BUFFER_IN, DEFAULT_RADIUS_IN,
};
pub use geom::{
    bounding_box, distance, distance_point_to_segment, distance_to_polygon_edge, point_in_polygon,
    polygon_area, Bounds, Coord, Point, PxPoint,
};
pub use job::{
    BudgetTier, DesignJob, DesignStatus, HeightPreference, Placement, Preferences, Quote,
    QuoteLine, ScaleMode, StylePreference, SunPreference,
};
pub use scale::{round_hundredth, round_tenth, Scale};
