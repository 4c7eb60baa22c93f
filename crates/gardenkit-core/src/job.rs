//! Design-job aggregate data
//!
//! The design job is the persisted aggregate root owning everything a user
//! accumulates on the way to a purchasable garden: photo metadata, traced
//! boundary and scale, confirmed keep-out zones, preferences, and the
//! generated palette/layout/quote. Only the data shapes live here;
//! lifecycle transitions belong to the orchestration layer outside this
//! workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::PaletteEntry;
use crate::existing::ExistingPlant;
use crate::geom::PxPoint;
use std::collections::BTreeMap;

/// Workflow status of a design job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignStatus {
    Draft,
    PhotoUploaded,
    BoundarySet,
    ExistingConfirmed,
    PreferencesSet,
    Generating,
    Ready,
    Error,
    Purchased,
}

impl Default for DesignStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// Sun exposure at the planting site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SunPreference {
    FullSun,
    PartSun,
    Shade,
}

impl Default for SunPreference {
    fn default() -> Self {
        Self::FullSun
    }
}

/// Garden character the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreference {
    Pollinator,
    Tidy,
    Color,
    LowMaint,
}

impl Default for StylePreference {
    fn default() -> Self {
        Self::Pollinator
    }
}

/// Preferred plant height band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightPreference {
    Low,
    Mixed,
    Tall,
}

impl Default for HeightPreference {
    fn default() -> Self {
        Self::Mixed
    }
}

/// Spending tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Low,
    Mid,
    High,
}

/// How the trace was calibrated to real-world inches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    LengthWidth,
    TwoPoint,
}

/// User preferences driving palette selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub sun: SunPreference,
    #[serde(default)]
    pub style: StylePreference,
    #[serde(default)]
    pub height_pref: HeightPreference,
    #[serde(default)]
    pub budget_tier: Option<BudgetTier>,
    /// Free-form category requests: "milkweed", "grasses", "asters", "goldenrod"
    #[serde(default)]
    pub must_include: Vec<String>,
}

/// A final plant position in inch space
///
/// The authoritative output of layout generation; coordinates are rounded
/// to 0.1 inch and the radius is half the species spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub sku: String,
    pub r: f64,
}

/// One priced line of a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub sku: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
    pub wix_product_id: String,
}

/// Priced breakdown of a generated design
///
/// Derived data: recomputed from placement counts and catalog prices on
/// demand, never a source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub plants: Vec<QuoteLine>,
    pub sheet: QuoteLine,
    pub subtotal: f64,
    #[serde(default)]
    pub tax_estimate: Option<f64>,
    pub total: f64,
}

/// The persisted design-job aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignJob {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub status: DesignStatus,

    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub ecoregion_id: Option<String>,

    #[serde(default)]
    pub preferences: Option<Preferences>,

    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub photo_width: Option<u32>,
    #[serde(default)]
    pub photo_height: Option<u32>,

    #[serde(default)]
    pub boundary_px: Option<Vec<PxPoint>>,
    #[serde(default)]
    pub scale_mode: Option<ScaleMode>,
    #[serde(default)]
    pub length_in: Option<f64>,
    #[serde(default)]
    pub width_in: Option<f64>,
    #[serde(default)]
    pub px_per_in: Option<f64>,
    #[serde(default)]
    pub bed_area_sqft: Option<f64>,

    #[serde(default)]
    pub existing_plants: Vec<ExistingPlant>,

    #[serde(default)]
    pub palette: Option<Vec<PaletteEntry>>,
    #[serde(default)]
    pub layout: Option<Vec<Placement>>,
    #[serde(default)]
    pub counts: Option<BTreeMap<String, u32>>,
    #[serde(default)]
    pub quote: Option<Quote>,

    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub generation_version: Option<u32>,
    #[serde(default)]
    pub regenerate_count: Option<u32>,
}

impl DesignJob {
    /// A fresh draft job with a new id
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            status: DesignStatus::Draft,
            zip: None,
            ecoregion_id: None,
            preferences: None,
            photo_url: None,
            photo_width: None,
            photo_height: None,
            boundary_px: None,
            scale_mode: None,
            length_in: None,
            width_in: None,
            px_per_in: None,
            bed_area_sqft: None,
            existing_plants: Vec::new(),
            palette: None,
            layout: None,
            counts: None,
            quote: None,
            error_message: None,
            generation_version: None,
            regenerate_count: None,
        }
    }
}

impl Default for DesignJob {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_is_draft() {
        let job = DesignJob::new();
        assert_eq!(job.status, DesignStatus::Draft);
        assert!(job.boundary_px.is_none());
        assert!(job.existing_plants.is_empty());
    }

    #[test]
    fn test_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&DesignStatus::PhotoUploaded).unwrap(),
            "\"photo_uploaded\""
        );
        let status: DesignStatus = serde_json::from_str("\"existing_confirmed\"").unwrap();
        assert_eq!(status, DesignStatus::ExistingConfirmed);
    }

    #[test]
    fn test_preferences_defaults() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs.sun, SunPreference::FullSun);
        assert_eq!(prefs.style, StylePreference::Pollinator);
        assert_eq!(prefs.height_pref, HeightPreference::Mixed);
        assert!(prefs.must_include.is_empty());
    }

    #[test]
    fn test_quote_line_serde_names() {
        let line = QuoteLine {
            sku: "ASC-TUB".to_string(),
            name: "Butterfly Weed".to_string(),
            quantity: 4,
            unit_price: 12.5,
            line_total: 50.0,
            wix_product_id: "wix-1".to_string(),
        };
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"unitPrice\""));
        assert!(json.contains("\"wixProductId\""));
    }
}
