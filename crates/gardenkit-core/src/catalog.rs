//! Plant catalog records
//!
//! The catalog is owned by an external product collaborator and treated as
//! read-only reference data here. [`Product`] mirrors that collaborator's
//! snake_case wire shape; [`PaletteEntry`] is the camelCase shape a design
//! job persists after palette selection. [`CatalogIndex`] gives O(1) SKU
//! lookup, built once per pipeline call instead of scanning the product
//! array repeatedly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default plant spacing when a product carries none, in inches
pub const DEFAULT_SPACING_IN: f64 = 18.0;

/// Plant-size/function tier used for slot generation and species matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantRole {
    /// Tall structural species, placed first at the widest spacing
    Anchor,
    /// Mid-height flowering species, the bulk of the bed
    Mid,
    /// Low front-of-bed species
    Filler,
    /// Grasses and sedges
    Grass,
    /// Non-plant catalog entry (plant kit), never placed
    Kit,
    /// Non-plant catalog entry (roll-out sheet), never placed
    Sheet,
}

impl PlantRole {
    /// Roles that occupy a position in the bed
    pub fn is_planting_role(&self) -> bool {
        matches!(self, PlantRole::Anchor | PlantRole::Mid | PlantRole::Filler | PlantRole::Grass)
    }
}

/// One plant product from the external catalog collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    #[serde(default)]
    pub wix_product_id: String,
    pub name: String,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub price: f64,
    pub active: bool,
    pub in_stock: bool,
    #[serde(default = "default_spacing")]
    pub spacing_in: f64,
    #[serde(default)]
    pub height_min_in: Option<f64>,
    #[serde(default)]
    pub height_max_in: Option<f64>,
    #[serde(default)]
    pub sun_full: bool,
    #[serde(default)]
    pub sun_part: bool,
    #[serde(default)]
    pub sun_shade: bool,
    #[serde(default)]
    pub is_keystone: bool,
    #[serde(default)]
    pub is_grass: bool,
    #[serde(default)]
    pub is_sedge: bool,
    #[serde(default)]
    pub is_evergreen: bool,
    #[serde(default)]
    pub bloom_months: Vec<u32>,
    #[serde(default)]
    pub color_primary: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub role: Option<PlantRole>,
}

fn default_spacing() -> f64 {
    DEFAULT_SPACING_IN
}

impl Product {
    /// Average of the height band, with 18/30in defaults for missing ends
    pub fn avg_height(&self) -> f64 {
        (self.height_min_in.unwrap_or(18.0) + self.height_max_in.unwrap_or(30.0)) / 2.0
    }

    /// First word of the scientific name, the genus for the selection cap
    pub fn genus(&self) -> &str {
        self.scientific_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or("Unknown")
    }

    /// Grasses and sedges count together for palette constraints
    pub fn is_grass_like(&self) -> bool {
        self.is_grass || self.is_sedge
    }

    /// True if any catalog warning mentions spreading
    pub fn has_spread_warning(&self) -> bool {
        self.warnings.iter().any(|w| w.contains("spread"))
    }

    /// Spacing with the catalog default applied to zero/unset values
    pub fn spacing_or_default(&self) -> f64 {
        if self.spacing_in > 0.0 {
            self.spacing_in
        } else {
            DEFAULT_SPACING_IN
        }
    }
}

/// One species selected into a design's palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEntry {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub scientific_name: Option<String>,
    pub role: PlantRole,
    pub spacing_in: f64,
    #[serde(default)]
    pub height_min: Option<f64>,
    #[serde(default)]
    pub height_max: Option<f64>,
    #[serde(default)]
    pub bloom_months: Vec<u32>,
    #[serde(default)]
    pub color: Option<String>,
    pub is_keystone: bool,
    pub is_grass: bool,
    #[serde(default)]
    pub score: Option<i32>,
}

impl PaletteEntry {
    /// Spacing with the catalog default applied to zero/unset values
    pub fn spacing_or(&self, fallback: f64) -> f64 {
        if self.spacing_in > 0.0 {
            self.spacing_in
        } else {
            fallback
        }
    }
}

/// Pricing tier for the physical roll-out installation sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolloutSheet {
    pub id: String,
    pub name: String,
    pub min_sqft: f64,
    pub max_sqft: f64,
    pub price: f64,
    #[serde(default)]
    pub wix_product_id: Option<String>,
    pub active: bool,
}

/// SKU-keyed view over a product catalog
///
/// Built once at the start of an orchestrator call and passed down, so
/// per-placement lookups stay O(1).
#[derive(Debug, Clone)]
pub struct CatalogIndex<'a> {
    by_sku: HashMap<&'a str, &'a Product>,
}

impl<'a> CatalogIndex<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        let by_sku = products.iter().map(|p| (p.sku.as_str(), p)).collect();
        Self { by_sku }
    }

    pub fn get(&self, sku: &str) -> Option<&'a Product> {
        self.by_sku.get(sku).copied()
    }

    pub fn len(&self) -> usize {
        self.by_sku.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sku.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str, scientific: &str) -> Product {
        Product {
            sku: sku.to_string(),
            wix_product_id: String::new(),
            name: sku.to_string(),
            scientific_name: Some(scientific.to_string()),
            price: 12.0,
            active: true,
            in_stock: true,
            spacing_in: 18.0,
            height_min_in: Some(24.0),
            height_max_in: Some(36.0),
            sun_full: true,
            sun_part: false,
            sun_shade: false,
            is_keystone: false,
            is_grass: false,
            is_sedge: false,
            is_evergreen: false,
            bloom_months: vec![6, 7],
            color_primary: None,
            warnings: vec![],
            role: None,
        }
    }

    #[test]
    fn test_genus_extraction() {
        let p = product("ASC-TUB", "Asclepias tuberosa");
        assert_eq!(p.genus(), "Asclepias");

        let mut unnamed = product("X", "");
        unnamed.scientific_name = None;
        assert_eq!(unnamed.genus(), "Unknown");
    }

    #[test]
    fn test_avg_height_defaults() {
        let mut p = product("X", "Genus species");
        p.height_min_in = None;
        p.height_max_in = None;
        assert_eq!(p.avg_height(), 24.0);
    }

    #[test]
    fn test_spread_warning() {
        let mut p = product("X", "Genus species");
        p.warnings = vec!["spreads aggressively".to_string()];
        assert!(p.has_spread_warning());
        p.warnings = vec!["deer resistant".to_string()];
        assert!(!p.has_spread_warning());
    }

    #[test]
    fn test_catalog_index() {
        let products = vec![product("A-1", "Aster one"), product("B-2", "Bouteloua two")];
        let index = CatalogIndex::new(&products);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("B-2").unwrap().sku, "B-2");
        assert!(index.get("C-3").is_none());
    }

    #[test]
    fn test_product_deserializes_sparse_catalog_row() {
        let json = r#"{
            "sku": "SOL-SPE",
            "name": "Showy Goldenrod",
            "scientific_name": "Solidago speciosa",
            "active": true,
            "in_stock": false,
            "spacing_in": 16,
            "is_keystone": true,
            "bloom_months": [8, 9, 10]
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.genus(), "Solidago");
        assert!(p.is_keystone);
        assert!(!p.in_stock);
        assert_eq!(p.spacing_in, 16.0);
        assert!(p.role.is_none());
    }

    #[test]
    fn test_role_classes() {
        assert!(PlantRole::Anchor.is_planting_role());
        assert!(PlantRole::Grass.is_planting_role());
        assert!(!PlantRole::Kit.is_planting_role());
        assert!(!PlantRole::Sheet.is_planting_role());
    }
}
