//! Quote construction
//!
//! Prices a generated layout: one line per SKU from the placement counts
//! times the catalog price, plus a roll-out sheet line chosen from the
//! active tier whose square-footage range contains the bed. Quotes are
//! derived data, recomputed on demand from counts and the catalog.

use std::collections::BTreeMap;

use tracing::debug;

use gardenkit_core::{CatalogIndex, Quote, QuoteLine, RolloutSheet};

/// Wix product backing the custom-sized sheet fallback
const CUSTOM_SHEET_WIX_ID: &str = "f59f5685-9bcf-199e-af1e-7c539332f064";

fn custom_sheet_line(bed_area_sqft: f64) -> QuoteLine {
    let price = (bed_area_sqft * 0.5).ceil() + 25.0;
    QuoteLine {
        sku: "sheet-custom".to_string(),
        name: "Custom Roll-Out Sheet".to_string(),
        quantity: 1,
        unit_price: price,
        line_total: price,
        wix_product_id: CUSTOM_SHEET_WIX_ID.to_string(),
    }
}

/// Build a priced quote from placement counts
///
/// SKUs missing from the catalog are skipped. When no active sheet tier
/// covers the bed area, a custom sheet is priced at
/// `ceil(sqft * 0.5) + 25`.
pub fn build_quote(
    counts: &BTreeMap<String, u32>,
    catalog: &CatalogIndex,
    sheets: &[RolloutSheet],
    bed_area_sqft: f64,
) -> Quote {
    let mut plant_lines: Vec<QuoteLine> = Vec::new();
    let mut plants_subtotal = 0.0;

    for (sku, &quantity) in counts {
        let Some(product) = catalog.get(sku) else {
            debug!(sku, "skipping quote line for unknown SKU");
            continue;
        };

        let line_total = product.price * quantity as f64;
        plants_subtotal += line_total;

        plant_lines.push(QuoteLine {
            sku: sku.clone(),
            name: product.name.clone(),
            quantity,
            unit_price: product.price,
            line_total,
            wix_product_id: product.wix_product_id.clone(),
        });
    }

    let sheet_line = sheets
        .iter()
        .find(|s| s.active && s.min_sqft <= bed_area_sqft && s.max_sqft >= bed_area_sqft)
        .map(|sheet| QuoteLine {
            sku: sheet.id.clone(),
            name: sheet.name.clone(),
            quantity: 1,
            unit_price: sheet.price,
            line_total: sheet.price,
            wix_product_id: sheet.wix_product_id.clone().unwrap_or_default(),
        })
        .unwrap_or_else(|| custom_sheet_line(bed_area_sqft));

    let subtotal = plants_subtotal + sheet_line.line_total;

    Quote { plants: plant_lines, sheet: sheet_line, subtotal, tax_estimate: None, total: subtotal }
}
