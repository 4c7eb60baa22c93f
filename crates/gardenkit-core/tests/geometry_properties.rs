// Property tests for the polygon geometry kernel

use gardenkit_core::{
    bounding_box, point_in_polygon, polygon_area, Point, PxPoint, Scale,
};
use proptest::prelude::*;

fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x + w, y + h),
        Point::new(x, y + h),
    ]
}

proptest! {
    #[test]
    fn rectangle_area_matches_formula(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        w in 0.1f64..400.0,
        h in 0.1f64..400.0,
    ) {
        let area = polygon_area(&rectangle(x, y, w, h));
        prop_assert!((area - w * h).abs() < 1e-6 * w * h.max(1.0));
    }

    #[test]
    fn rectangle_center_is_inside(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        w in 0.1f64..400.0,
        h in 0.1f64..400.0,
    ) {
        let rect = rectangle(x, y, w, h);
        prop_assert!(point_in_polygon(Point::new(x + w / 2.0, y + h / 2.0), &rect));
        // Points clearly beyond the bounding box are outside
        prop_assert!(!point_in_polygon(Point::new(x + w * 2.0 + 1.0, y + h / 2.0), &rect));
    }

    #[test]
    fn containment_implies_bounding_box(
        px in -600.0f64..600.0,
        py in -600.0f64..600.0,
        w in 0.1f64..400.0,
        h in 0.1f64..400.0,
    ) {
        let rect = rectangle(-200.0, -150.0, w, h);
        let p = Point::new(px, py);
        if point_in_polygon(p, &rect) {
            let bounds = bounding_box(&rect);
            prop_assert!(px >= bounds.min_x && px <= bounds.max_x);
            prop_assert!(py >= bounds.min_y && py <= bounds.max_y);
        }
    }

    #[test]
    fn scale_conversion_round_trips(
        px_per_in in 0.5f64..50.0,
        x in 0.0f64..5000.0,
        y in 0.0f64..5000.0,
    ) {
        let scale = Scale::new(px_per_in).unwrap();
        let original = PxPoint::new(x, y);
        let back = scale.point_to_px(scale.point_to_inches(original));
        prop_assert!((back.x - original.x).abs() < 1e-6);
        prop_assert!((back.y - original.y).abs() < 1e-6);
    }

    #[test]
    fn area_scales_with_square_of_factor(
        px_per_in in 1.0f64..20.0,
        w in 10.0f64..2000.0,
        h in 10.0f64..2000.0,
    ) {
        let scale = Scale::new(px_per_in).unwrap();
        let boundary_px = vec![
            PxPoint::new(0.0, 0.0),
            PxPoint::new(w, 0.0),
            PxPoint::new(w, h),
            PxPoint::new(0.0, h),
        ];
        let area_px = polygon_area(&boundary_px);
        let area_in = polygon_area(&scale.to_inches(&boundary_px));
        let expected = area_px / (px_per_in * px_per_in);
        prop_assert!((area_in - expected).abs() < 1e-6 * expected.max(1.0));
    }
}
