// End-to-end layout generation scenarios: a 10ft x 8ft bed traced at a
// known scale, with and without a central keep-out zone.

use gardenkit_core::{distance, ExistingPlant, PaletteEntry, PlantRole, Point, PxPoint};
use gardenkit_layout::{
    generate_layout, scale_from_dimensions, LayoutParams, PlantingStyle,
};

const PX_PER_IN: f64 = 4.0;

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// 10ft x 8ft rectangle traced at 4 px/in: 480 x 384 px
fn traced_bed() -> Vec<PxPoint> {
    vec![
        PxPoint::new(0.0, 0.0),
        PxPoint::new(480.0, 0.0),
        PxPoint::new(480.0, 384.0),
        PxPoint::new(0.0, 384.0),
    ]
}

fn palette() -> Vec<PaletteEntry> {
    let entry = |sku: &str, role: PlantRole, spacing: f64| PaletteEntry {
        sku: sku.to_string(),
        name: sku.to_string(),
        scientific_name: None,
        role,
        spacing_in: spacing,
        height_min: None,
        height_max: None,
        bloom_months: vec![6, 7],
        color: None,
        is_keystone: false,
        is_grass: false,
        score: None,
    };
    vec![
        entry("ANC-1", PlantRole::Anchor, 24.0),
        entry("ANC-2", PlantRole::Anchor, 24.0),
        entry("MID-1", PlantRole::Mid, 18.0),
        entry("MID-2", PlantRole::Mid, 18.0),
        entry("MID-3", PlantRole::Mid, 18.0),
        entry("GRS-1", PlantRole::Grass, 18.0),
        entry("FIL-1", PlantRole::Filler, 14.0),
        entry("FIL-2", PlantRole::Filler, 14.0),
    ]
}

fn params(style: PlantingStyle, existing: Vec<ExistingPlant>) -> LayoutParams {
    LayoutParams {
        boundary_px: traced_bed(),
        px_per_in: PX_PER_IN,
        palette: palette(),
        style,
        existing_plants: existing,
        seed: 42,
        slot_config: None,
    }
}

#[test]
fn orderly_bed_without_keep_outs() {
    init_logging();
    let scale = scale_from_dimensions(&traced_bed(), 96.0, 120.0).unwrap();
    assert_eq!(scale.px_per_in, PX_PER_IN);

    let result = generate_layout(&params(PlantingStyle::Orderly, vec![])).unwrap();

    assert_eq!(result.bed_area_sqft, 80.0);
    assert_eq!(result.existing_area_sqft, 0.0);
    assert_eq!(result.plantable_area_sqft, 80.0);
    assert!(result.total_plants > 0);
    assert_eq!(result.existing_plants_count, 0);

    // Orderly style plants back-to-front
    for pair in result.placements.windows(2) {
        assert!(pair[0].y <= pair[1].y, "orderly placements not sorted by y");
    }

    // All placements inside the 120in x 96in bed, within spacing tolerance
    for p in &result.placements {
        assert!(p.x >= -1.0 && p.x <= 121.0, "x out of bed: {}", p.x);
        assert!(p.y >= -1.0 && p.y <= 97.0, "y out of bed: {}", p.y);
    }
}

#[test]
fn keep_out_zone_is_respected() {
    init_logging();
    // One existing shrub at bed center (60, 48)in, radius 24, buffer 2
    let shrub = ExistingPlant::new(Point::new(60.0, 48.0), 24.0);
    let result = generate_layout(&params(PlantingStyle::Orderly, vec![shrub])).unwrap();

    // pi * 24^2 / 144 = 12.566..., rounded to 12.6
    assert!((result.existing_area_sqft - 12.6).abs() < 1e-9);
    assert!((result.plantable_area_sqft - 67.4).abs() < 1e-9);
    assert_eq!(result.existing_plants_count, 1);

    // No placement center within the 26in exclusion radius
    let center = Point::new(60.0, 48.0);
    for p in &result.placements {
        let d = distance(Point::new(p.x, p.y), center);
        assert!(d >= 26.0 - 0.1, "placement at {:.1},{:.1} is {:.1}in from shrub", p.x, p.y, d);
    }
}

#[test]
fn same_species_separation_holds() {
    let palette = palette();
    let result = generate_layout(&params(PlantingStyle::Wild, vec![])).unwrap();

    for (i, a) in result.placements.iter().enumerate() {
        for b in result.placements.iter().skip(i + 1) {
            if a.sku != b.sku {
                continue;
            }
            let spacing = palette.iter().find(|e| e.sku == a.sku).unwrap().spacing_in;
            let d = distance(Point::new(a.x, a.y), Point::new(b.x, b.y));
            // Coordinates were rounded to 0.1in after the separation test
            assert!(
                d >= spacing * 1.5 - 0.2,
                "two {} placements {:.1}in apart (spacing {})",
                a.sku,
                d,
                spacing
            );
        }
    }
}

#[test]
fn fixed_seed_reproduces_layout() {
    let a = generate_layout(&params(PlantingStyle::Wild, vec![])).unwrap();
    let b = generate_layout(&params(PlantingStyle::Wild, vec![])).unwrap();
    assert_eq!(a, b);

    let mut other = params(PlantingStyle::Wild, vec![]);
    other.seed = 43;
    let c = generate_layout(&other).unwrap();
    assert_ne!(a.placements, c.placements);
}

#[test]
fn fully_blocked_bed_is_a_valid_outcome() {
    // Keep-out covering the whole bed: no room to plant, not an error
    let shrub = ExistingPlant::new(Point::new(60.0, 48.0), 120.0);
    let result = generate_layout(&params(PlantingStyle::Wild, vec![shrub])).unwrap();
    assert_eq!(result.total_plants, 0);
    assert!(result.placements.is_empty());
    assert!(result.plantable_area_sqft < 0.0);
}
