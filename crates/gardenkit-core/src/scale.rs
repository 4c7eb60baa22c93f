//! Pixel-to-inch scale factor
//!
//! [`Scale`] is the single crossing point between traced pixel space and
//! real-world inch space. Construction validates the factor, so a zero or
//! non-finite pixels-per-inch value cannot flow into downstream division.
//! No other module recomputes this conversion.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::existing::{ExistingPlant, DEFAULT_RADIUS_IN};
use crate::geom::{Point, PxPoint};

/// Validated pixels-per-inch scale factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Scale {
    px_per_in: f64,
}

impl Scale {
    /// Create a scale factor, rejecting zero, negative, or non-finite values
    pub fn new(px_per_in: f64) -> Result<Self, GeometryError> {
        if !px_per_in.is_finite() || px_per_in <= 0.0 {
            return Err(GeometryError::InvalidScale { value: px_per_in });
        }
        Ok(Self { px_per_in })
    }

    pub fn px_per_in(&self) -> f64 {
        self.px_per_in
    }

    /// Convert one pixel-space point to inch space
    pub fn point_to_inches(&self, p: PxPoint) -> Point {
        Point::new(p.x / self.px_per_in, p.y / self.px_per_in)
    }

    /// Convert a traced pixel boundary to inch space
    pub fn to_inches(&self, points: &[PxPoint]) -> Vec<Point> {
        points.iter().map(|p| self.point_to_inches(*p)).collect()
    }

    /// Convert a pixel length to inches
    pub fn length_to_inches(&self, px: f64) -> f64 {
        px / self.px_per_in
    }

    /// Convert an inch-space point back to pixel space (screen overlays)
    pub fn point_to_px(&self, p: Point) -> PxPoint {
        PxPoint::new(p.x * self.px_per_in, p.y * self.px_per_in)
    }

    /// Convert an inch length back to pixels
    pub fn length_to_px(&self, inches: f64) -> f64 {
        inches * self.px_per_in
    }

    /// Resolve existing-plant records to inch space
    ///
    /// Pixel-space centers and radii are converted; records that already
    /// carry inch-space values keep them. A record with no radius at all
    /// gets the 18in default.
    pub fn existing_to_inches(&self, plants: &[ExistingPlant]) -> Vec<ExistingPlant> {
        plants
            .iter()
            .map(|ex| {
                let mut out = ex.clone();
                if let Some(center_px) = ex.center_px {
                    out.center_in = Some(self.point_to_inches(center_px));
                }
                out.radius_in = match ex.radius_px {
                    Some(radius_px) => Some(self.length_to_inches(radius_px)),
                    None => Some(ex.radius_in.unwrap_or(DEFAULT_RADIUS_IN)),
                };
                out
            })
            .collect()
    }
}

impl TryFrom<f64> for Scale {
    type Error = GeometryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Scale::new(value)
    }
}

impl From<Scale> for f64 {
    fn from(scale: Scale) -> f64 {
        scale.px_per_in
    }
}

/// Round to 2 decimal places (persisted `px_per_in` contract)
pub fn round_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place (persisted square-feet and coordinate contract)
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_factors() {
        assert!(Scale::new(0.0).is_err());
        assert!(Scale::new(-2.0).is_err());
        assert!(Scale::new(f64::NAN).is_err());
        assert!(Scale::new(f64::INFINITY).is_err());
        assert!(Scale::new(4.0).is_ok());
    }

    #[test]
    fn test_boundary_conversion() {
        let scale = Scale::new(10.0).unwrap();
        let boundary = vec![PxPoint::new(100.0, 50.0), PxPoint::new(0.0, 20.0)];
        let inches = scale.to_inches(&boundary);
        assert_eq!(inches[0], Point::new(10.0, 5.0));
        assert_eq!(inches[1], Point::new(0.0, 2.0));
    }

    #[test]
    fn test_round_trip() {
        let scale = Scale::new(3.5).unwrap();
        let p = Point::new(12.0, 7.5);
        let back = scale.point_to_inches(scale.point_to_px(p));
        assert!((back.x - p.x).abs() < 1e-12);
        assert!((back.y - p.y).abs() < 1e-12);
    }

    #[test]
    fn test_existing_plant_conversion() {
        let scale = Scale::new(10.0).unwrap();
        let mut plant = ExistingPlant::at_px(PxPoint::new(500.0, 400.0), 80.0);
        plant.buffer_in = 3.0;

        let converted = scale.existing_to_inches(std::slice::from_ref(&plant));
        assert_eq!(converted[0].center_in, Some(Point::new(50.0, 40.0)));
        assert_eq!(converted[0].radius_in, Some(8.0));
        assert_eq!(converted[0].buffer_in, 3.0);
    }

    #[test]
    fn test_existing_plant_radius_default() {
        let scale = Scale::new(10.0).unwrap();
        let mut plant = ExistingPlant::at_px(PxPoint::new(100.0, 100.0), 50.0);
        plant.radius_px = None;
        plant.radius_in = None;

        let converted = scale.existing_to_inches(std::slice::from_ref(&plant));
        assert_eq!(converted[0].radius_in, Some(DEFAULT_RADIUS_IN));
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round_hundredth(3.14159), 3.14);
        assert_eq!(round_hundredth(2.676), 2.68);
        assert_eq!(round_tenth(79.96), 80.0);
        assert_eq!(round_tenth(12.34), 12.3);
    }
}
