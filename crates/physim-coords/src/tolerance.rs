//! Comparison tolerances for coordinates and angles.

use physim_angle::AngleMeasure;

use crate::point::{CartesianPoint, Coordinates2D, Coordinates3D};

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Linear distance tolerance, in the caller's length unit.
    pub linear: f64,
    /// Angular tolerance in degrees.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 linear, 1e-12 degrees angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-12,
    };

    /// Check if two plane points are coincident within tolerance.
    pub fn points_equal_2d(&self, a: &Coordinates2D, b: &Coordinates2D) -> bool {
        a.distance_to(b) < self.linear
    }

    /// Check if two space points are coincident within tolerance.
    pub fn points_equal_3d(&self, a: &Coordinates3D, b: &Coordinates3D) -> bool {
        a.distance_to(b) < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two angles, of any units, are effectively equal.
    ///
    /// Angles a whole number of turns apart are not considered equal.
    pub fn angles_equal<A: AngleMeasure, B: AngleMeasure>(&self, a: &A, b: &B) -> bool {
        (a.raw_degrees() - b.raw_degrees()).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
