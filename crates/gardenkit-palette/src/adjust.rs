//! One-click palette variants
//!
//! After the initial selection the user can nudge the palette in a
//! direction without regenerating from scratch: swap spreaders for compact
//! plants, drab bloomers for colorful ones, non-keystones for keystones,
//! or append evergreen structure.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use gardenkit_core::{CatalogIndex, PaletteEntry, Product};

use crate::select::format_plant_for_palette;

/// Palette cap when appending evergreens
const MAX_ADJUSTED_COUNT: usize = 12;

/// Colors treated as "not colorful" when swapping for bloom color
const DRAB_COLORS: [&str; 3] = ["#EDEDED", "#FFFFFF", "#808080"];

/// Requested palette adjustment direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteAdjustment {
    Tidier,
    MoreColor,
    MoreNative,
    MoreEvergreen,
}

/// Produce an adjusted copy of a palette
///
/// `catalog` is the full product list the palette was selected from;
/// replacements come from plants not already in the palette.
pub fn adjust_palette(
    base_palette: &[PaletteEntry],
    catalog: &[Product],
    adjustment: PaletteAdjustment,
) -> Vec<PaletteEntry> {
    let current_skus: HashSet<&str> = base_palette.iter().map(|p| p.sku.as_str()).collect();
    let index = CatalogIndex::new(catalog);
    let mut adjusted: Vec<PaletteEntry> = base_palette.to_vec();

    match adjustment {
        PaletteAdjustment::Tidier => {
            // Swap spreaders for compact plants, one for one
            let spreaders: Vec<String> = adjusted
                .iter()
                .filter(|p| index.get(&p.sku).is_some_and(|prod| prod.has_spread_warning()))
                .map(|p| p.sku.clone())
                .collect();

            let compact: Vec<&Product> = catalog
                .iter()
                .filter(|p| {
                    !current_skus.contains(p.sku.as_str()) && !p.has_spread_warning() && p.active
                })
                .take(spreaders.len())
                .collect();

            for (spreader_sku, replacement) in spreaders.iter().zip(compact) {
                if let Some(idx) = adjusted.iter().position(|p| &p.sku == spreader_sku) {
                    adjusted[idx] = format_plant_for_palette(replacement);
                }
            }
        }
        PaletteAdjustment::MoreColor => {
            let colorful: Vec<&Product> = catalog
                .iter()
                .filter(|p| {
                    !current_skus.contains(p.sku.as_str())
                        && p.active
                        && p.color_primary
                            .as_deref()
                            .is_some_and(|c| !DRAB_COLORS.contains(&c))
                })
                .take(2)
                .collect();

            let less_colorful: Vec<String> = adjusted
                .iter()
                .filter(|p| match p.color.as_deref() {
                    None => true,
                    Some(c) => c == "#EDEDED" || c == "#FFFFFF",
                })
                .map(|p| p.sku.clone())
                .collect();

            for (drab_sku, replacement) in less_colorful.iter().zip(colorful) {
                if let Some(idx) = adjusted.iter().position(|p| &p.sku == drab_sku) {
                    adjusted[idx] = format_plant_for_palette(replacement);
                }
            }
        }
        PaletteAdjustment::MoreNative => {
            let keystones: Vec<&Product> = catalog
                .iter()
                .filter(|p| !current_skus.contains(p.sku.as_str()) && p.is_keystone && p.active)
                .take(2)
                .collect();

            let non_keystones: Vec<String> =
                adjusted.iter().filter(|p| !p.is_keystone).map(|p| p.sku.clone()).collect();

            for (plain_sku, replacement) in non_keystones.iter().zip(keystones) {
                if let Some(idx) = adjusted.iter().position(|p| &p.sku == plain_sku) {
                    adjusted[idx] = format_plant_for_palette(replacement);
                }
            }
        }
        PaletteAdjustment::MoreEvergreen => {
            let evergreens: Vec<&Product> = catalog
                .iter()
                .filter(|p| !current_skus.contains(p.sku.as_str()) && p.is_evergreen && p.active)
                .take(2)
                .collect();

            for evergreen in evergreens {
                if adjusted.len() < MAX_ADJUSTED_COUNT {
                    adjusted.push(format_plant_for_palette(evergreen));
                }
            }
        }
    }

    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(sku: &str) -> Product {
        Product {
            sku: sku.to_string(),
            wix_product_id: String::new(),
            name: sku.to_string(),
            scientific_name: Some(format!("{} species", sku)),
            price: 12.0,
            active: true,
            in_stock: true,
            spacing_in: 18.0,
            height_min_in: Some(24.0),
            height_max_in: Some(30.0),
            sun_full: true,
            sun_part: false,
            sun_shade: false,
            is_keystone: false,
            is_grass: false,
            is_sedge: false,
            is_evergreen: false,
            bloom_months: vec![7],
            color_primary: None,
            warnings: vec![],
            role: None,
        }
    }

    #[test]
    fn test_tidier_swaps_spreaders() {
        let mut spreader = plant("SPREAD-1");
        spreader.warnings = vec!["spreads by runners".to_string()];
        let keeper = plant("KEEP-1");
        let compact = plant("COMPACT-1");

        let catalog = vec![spreader.clone(), keeper.clone(), compact];
        let palette =
            vec![format_plant_for_palette(&spreader), format_plant_for_palette(&keeper)];

        let adjusted = adjust_palette(&palette, &catalog, PaletteAdjustment::Tidier);
        assert_eq!(adjusted.len(), 2);
        assert!(adjusted.iter().any(|p| p.sku == "COMPACT-1"));
        assert!(!adjusted.iter().any(|p| p.sku == "SPREAD-1"));
        assert!(adjusted.iter().any(|p| p.sku == "KEEP-1"));
    }

    #[test]
    fn test_more_color_replaces_drab() {
        let mut drab = plant("DRAB-1");
        drab.color_primary = Some("#EDEDED".to_string());
        let mut bright = plant("BRIGHT-1");
        bright.color_primary = Some("#B04A98".to_string());

        let catalog = vec![drab.clone(), bright];
        let palette = vec![format_plant_for_palette(&drab)];

        let adjusted = adjust_palette(&palette, &catalog, PaletteAdjustment::MoreColor);
        assert_eq!(adjusted.len(), 1);
        assert_eq!(adjusted[0].sku, "BRIGHT-1");
    }

    #[test]
    fn test_more_native_prefers_keystones() {
        let plain = plant("PLAIN-1");
        let mut keystone = plant("KEY-1");
        keystone.is_keystone = true;

        let catalog = vec![plain.clone(), keystone];
        let palette = vec![format_plant_for_palette(&plain)];

        let adjusted = adjust_palette(&palette, &catalog, PaletteAdjustment::MoreNative);
        assert_eq!(adjusted.len(), 1);
        assert_eq!(adjusted[0].sku, "KEY-1");
        assert!(adjusted[0].is_keystone);
    }

    #[test]
    fn test_more_evergreen_appends() {
        let base = plant("BASE-1");
        let mut evergreen = plant("EVER-1");
        evergreen.is_evergreen = true;

        let catalog = vec![base.clone(), evergreen];
        let palette = vec![format_plant_for_palette(&base)];

        let adjusted = adjust_palette(&palette, &catalog, PaletteAdjustment::MoreEvergreen);
        assert_eq!(adjusted.len(), 2);
        assert_eq!(adjusted[1].sku, "EVER-1");
    }

    #[test]
    fn test_adjustment_serde_names() {
        assert_eq!(
            serde_json::to_string(&PaletteAdjustment::MoreColor).unwrap(),
            "\"more_color\""
        );
        let parsed: PaletteAdjustment = serde_json::from_str("\"tidier\"").unwrap();
        assert_eq!(parsed, PaletteAdjustment::Tidier);
    }

    #[test]
    fn test_no_candidates_leaves_palette_unchanged() {
        let base = plant("BASE-1");
        let catalog = vec![base.clone()];
        let palette = vec![format_plant_for_palette(&base)];

        let adjusted = adjust_palette(&palette, &catalog, PaletteAdjustment::MoreEvergreen);
        assert_eq!(adjusted, palette);
    }
}
