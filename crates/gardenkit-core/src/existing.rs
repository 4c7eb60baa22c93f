//! Existing-plant keep-out records
//!
//! Pre-existing shrubs and trees the design must plant around. Records
//! arrive either from an AI vision collaborator (approximate, unlocked
//! pending user confirmation) or directly from the user (locked). The
//! wire format is the collaborator's camelCase shape, tolerant of
//! partially-specified detections via serde defaults.
//!
//! Validation is itemized and never fails as a whole: invalid entries are
//! reported, valid ones are normalized and returned for the caller to
//! decide with.

use serde::{Deserialize, Serialize};

use crate::geom::{Point, PxPoint};

/// Default keep-out radius when a detection carries none, in inches
pub const DEFAULT_RADIUS_IN: f64 = 18.0;

/// Default clearance buffer around an existing plant, in inches
pub const DEFAULT_BUFFER_IN: f64 = 2.0;

/// Valid keep-out radius range, in inches
pub const RADIUS_RANGE_IN: (f64, f64) = (6.0, 120.0);

/// What kind of vegetation a keep-out zone preserves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistingKind {
    ExistingShrub,
    ExistingTree,
    ExistingPerennial,
}

impl Default for ExistingKind {
    fn default() -> Self {
        Self::ExistingShrub
    }
}

/// Where an existing-plant record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantSource {
    /// AI vision detection, approximate until the user confirms
    Ai,
    /// Entered or edited by the user directly
    User,
}

impl Default for PlantSource {
    fn default() -> Self {
        Self::User
    }
}

/// A circular keep-out zone around a preserved plant
///
/// The effective exclusion radius during placement is
/// `radius_in + buffer_in` plus the candidate plant's own radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingPlant {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub kind: ExistingKind,
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default)]
    pub center_px: Option<PxPoint>,
    #[serde(default)]
    pub center_in: Option<Point>,
    #[serde(default)]
    pub radius_px: Option<f64>,
    #[serde(default)]
    pub radius_in: Option<f64>,
    #[serde(default = "default_buffer")]
    pub buffer_in: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub source: PlantSource,
    #[serde(default = "default_locked")]
    pub locked: bool,
}

fn default_label() -> String {
    "Existing plant".to_string()
}

fn default_buffer() -> f64 {
    DEFAULT_BUFFER_IN
}

fn default_locked() -> bool {
    true
}

impl ExistingPlant {
    /// A user-specified keep-out zone at an inch-space center
    pub fn new(center_in: Point, radius_in: f64) -> Self {
        Self {
            id: String::new(),
            kind: ExistingKind::default(),
            label: default_label(),
            center_px: None,
            center_in: Some(center_in),
            radius_px: None,
            radius_in: Some(radius_in),
            buffer_in: DEFAULT_BUFFER_IN,
            confidence: None,
            source: PlantSource::User,
            locked: true,
        }
    }

    /// A detection at a pixel-space center, pending scale resolution
    pub fn at_px(center_px: PxPoint, radius_px: f64) -> Self {
        Self {
            id: String::new(),
            kind: ExistingKind::default(),
            label: default_label(),
            center_px: Some(center_px),
            center_in: None,
            radius_px: Some(radius_px),
            radius_in: None,
            buffer_in: DEFAULT_BUFFER_IN,
            confidence: None,
            source: PlantSource::Ai,
            locked: false,
        }
    }

    /// Keep-out radius in inches, defaulting when unspecified
    pub fn radius_in(&self) -> f64 {
        self.radius_in.unwrap_or(DEFAULT_RADIUS_IN)
    }
}

/// Quick preset sizes offered by the editing UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Small,
    Medium,
    Large,
    XLarge,
}

impl SizePreset {
    pub const ALL: [SizePreset; 4] =
        [SizePreset::Small, SizePreset::Medium, SizePreset::Large, SizePreset::XLarge];

    pub fn radius_in(&self) -> f64 {
        match self {
            SizePreset::Small => 12.0,
            SizePreset::Medium => 18.0,
            SizePreset::Large => 24.0,
            SizePreset::XLarge => 36.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizePreset::Small => "Small (12\")",
            SizePreset::Medium => "Medium (18\")",
            SizePreset::Large => "Large (24\")",
            SizePreset::XLarge => "X-Large (36\")",
        }
    }
}

/// One raw suggestion from the AI vision collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionSuggestion {
    #[serde(default)]
    pub center_px: Option<PxPoint>,
    #[serde(default)]
    pub center_in: Option<Point>,
    #[serde(default)]
    pub radius_px: Option<f64>,
    #[serde(default)]
    pub radius_in: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Outcome of existing-plant validation
///
/// Never an error: invalid entries land in `errors`, valid ones in
/// `cleaned`. The caller decides whether to proceed with the cleaned
/// subset or reject the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: Vec<String>,
    pub cleaned: Vec<ExistingPlant>,
}

fn sequential_id(index: usize) -> String {
    format!("ex_{:03}", index + 1)
}

/// Wrap raw detection suggestions into storable records
///
/// Ids are assigned sequentially, confidence defaults to 0.5, and the
/// records stay unlocked until the user confirms them.
pub fn format_detections(suggestions: &[DetectionSuggestion], source: PlantSource) -> Vec<ExistingPlant> {
    suggestions
        .iter()
        .enumerate()
        .map(|(index, s)| ExistingPlant {
            id: sequential_id(index),
            kind: ExistingKind::ExistingShrub,
            label: s.description.clone().unwrap_or_else(default_label),
            center_px: s.center_px,
            center_in: s.center_in,
            radius_px: s.radius_px,
            radius_in: Some(s.radius_in.unwrap_or(DEFAULT_RADIUS_IN)),
            buffer_in: DEFAULT_BUFFER_IN,
            confidence: Some(s.confidence.unwrap_or(0.5)),
            source,
            locked: false,
        })
        .collect()
}

/// Merge user edits over AI suggestions
///
/// Edited records win over the suggestion with the same id; everything in
/// the merged set is locked for the remainder of the design job.
pub fn merge_existing_plants(
    ai_suggestions: &[ExistingPlant],
    user_edits: &[ExistingPlant],
) -> Vec<ExistingPlant> {
    let edited_ids: std::collections::HashSet<&str> =
        user_edits.iter().map(|e| e.id.as_str()).collect();

    let mut merged = Vec::with_capacity(ai_suggestions.len() + user_edits.len());

    for edit in user_edits {
        let mut plant = edit.clone();
        plant.locked = true;
        merged.push(plant);
    }

    for suggestion in ai_suggestions {
        if !edited_ids.contains(suggestion.id.as_str()) {
            let mut plant = suggestion.clone();
            plant.locked = true;
            merged.push(plant);
        }
    }

    merged
}

/// Validate a batch of existing-plant records
///
/// Every entry must carry a finite center (inch or pixel space) and a
/// positive radius, with the inch radius inside [6, 120]. Valid entries
/// are normalized: sequential ids and defaults filled in.
pub fn validate_existing_plants(existing_plants: &[ExistingPlant]) -> ValidationOutcome {
    let mut errors = Vec::new();
    let mut cleaned: Vec<ExistingPlant> = Vec::new();

    for (i, plant) in existing_plants.iter().enumerate() {
        let center_valid = match (plant.center_in, plant.center_px) {
            (Some(c), _) => c.x.is_finite() && c.y.is_finite(),
            (None, Some(c)) => c.x.is_finite() && c.y.is_finite(),
            (None, None) => false,
        };
        if !center_valid {
            errors.push(format!("Plant {}: missing or invalid center", i));
            continue;
        }

        let radius = plant.radius_in.or(plant.radius_px);
        match radius {
            Some(r) if r.is_finite() && r > 0.0 => {}
            _ => {
                errors.push(format!("Plant {}: missing or invalid radius", i));
                continue;
            }
        }

        // Range check on the inch radius; a pixel-only radius is estimated
        // at 10px per inch until real scale resolution.
        let radius_in = plant
            .radius_in
            .or(plant.radius_px.map(|px| px / 10.0))
            .unwrap_or(DEFAULT_RADIUS_IN);
        if radius_in < RADIUS_RANGE_IN.0 || radius_in > RADIUS_RANGE_IN.1 {
            errors.push(format!("Plant {}: radius out of range (6-120 inches)", i));
            continue;
        }

        cleaned.push(ExistingPlant {
            id: if plant.id.is_empty() { sequential_id(cleaned.len()) } else { plant.id.clone() },
            kind: plant.kind,
            label: if plant.label.is_empty() { default_label() } else { plant.label.clone() },
            center_in: plant.center_in,
            center_px: plant.center_px,
            radius_in: Some(plant.radius_in.unwrap_or(DEFAULT_RADIUS_IN)),
            radius_px: plant.radius_px,
            buffer_in: plant.buffer_in,
            confidence: plant.confidence,
            source: plant.source,
            locked: plant.locked,
        });
    }

    ValidationOutcome { valid: errors.is_empty(), errors, cleaned }
}
