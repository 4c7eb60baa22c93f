//! # Gardenkit Layout
//!
//! Layout generation for the Gardenkit design pipeline: calibrates the
//! traced boundary to inches, fills the bed with hexagonal-grid plant
//! slots around keep-out zones, and assigns palette species to slots
//! under same-species separation constraints. All randomness flows
//! through an injected seedable source, so every layout is reproducible.

pub mod assign;
pub mod engine;
pub mod keepout;
pub mod rng;
pub mod scale;
pub mod slots;

pub use assign::{assign_plants_to_slots, count_plants_by_sku, AssignOptions, PlantingStyle};
pub use engine::{generate_layout, LayoutParams, LayoutResult};
pub use keepout::{existing_area_sqin, is_blocked};
pub use rng::LayoutRng;
pub use scale::{scale_from_dimensions, scale_from_two_points, ScaleResult};
pub use slots::{generate_hex_grid, generate_plant_slots, RoleSpacing, Slot, SlotConfig};
