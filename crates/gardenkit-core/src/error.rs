//! Error handling for Gardenkit
//!
//! The core distinguishes caller contract violations (degenerate boundary,
//! zero scale factor, non-positive spacing) from data-shape problems.
//! Contract violations surface as errors from entry points; data-shape
//! problems are expressed as empty/zero results and never error.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry contract error type
///
/// Represents caller contract violations detected at pipeline entry points.
/// The pure geometry functions themselves do not validate; callers are
/// expected to reject these inputs before invoking them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Boundary polygon has fewer than 3 points
    #[error("Boundary must have at least 3 points, got {count}")]
    DegenerateBoundary {
        /// Number of points supplied.
        count: usize,
    },

    /// Scale factor is zero, negative, or non-finite
    #[error("Scale factor must be positive and finite, got {value}")]
    InvalidScale {
        /// The rejected pixels-per-inch value.
        value: f64,
    },

    /// Plant spacing is zero, negative, or non-finite
    #[error("Spacing must be positive and finite, got {value}")]
    InvalidSpacing {
        /// The rejected spacing value in inches.
        value: f64,
    },

    /// Declared bed dimension is zero, negative, or non-finite
    #[error("Bed dimensions must be positive, got {length_in}in x {width_in}in")]
    InvalidDimensions {
        /// Declared bed length in inches.
        length_in: f64,
        /// Declared bed width in inches.
        width_in: f64,
    },

    /// Reference distance for two-point calibration is not usable
    #[error("Reference distance must be positive and finite, got {value}")]
    InvalidDistance {
        /// The rejected distance value in inches.
        value: f64,
    },
}

/// Top-level error type for Gardenkit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry contract violation
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl Error {
    /// Returns true if this is a geometry contract violation
    pub fn is_geometry(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type alias for Gardenkit operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::DegenerateBoundary { count: 2 };
        assert_eq!(err.to_string(), "Boundary must have at least 3 points, got 2");

        let err = GeometryError::InvalidScale { value: 0.0 };
        assert_eq!(err.to_string(), "Scale factor must be positive and finite, got 0");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = GeometryError::InvalidSpacing { value: -1.0 }.into();
        assert!(err.is_geometry());
    }
}
