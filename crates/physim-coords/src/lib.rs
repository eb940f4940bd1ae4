#![warn(missing_docs)]

//! Coordinate systems for the physim teaching simulations.
//!
//! A point can be held in one of four representations: 2D Cartesian,
//! 3D Cartesian, polar (radius and angle) and spherical (radius, polar
//! angle from +z and azimuthal angle from +x). Every representation can
//! produce and consume Cartesian coordinates and measure the Euclidean
//! distance to a Cartesian point.
//!
//! # Example
//!
//! ```
//! use physim_coords::{Coordinates2D, CoordinatesSystem, Polar};
//! use physim_angle::AngleInDegrees;
//!
//! let polar = Polar::from_angle_and_radius(AngleInDegrees::new(90.0), 2.0).unwrap();
//! let distance = polar.distance_to_point(&Coordinates2D::new(0.0, 0.0));
//! assert!((distance - 2.0).abs() < 1e-12);
//! ```

mod cartesian;
mod point;
mod polar;
mod spherical;
mod system;
mod tolerance;

pub use cartesian::{Cartesian2D, Cartesian3D};
pub use point::{CartesianPoint, Coordinates2D, Coordinates3D};
pub use polar::Polar;
pub use spherical::Spherical;
pub use system::{CoordinatesSystem, CoordinatesSystem2D, CoordinatesSystem3D};
pub use tolerance::Tolerance;

use physim_angle::AngleError;
use thiserror::Error;

/// Errors from building or mutating a coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinatesError {
    /// A polar or spherical radius was negative (or NaN).
    #[error("radius cannot be negative: {0}")]
    NegativeRadius(f64),

    /// An angle operation failed.
    #[error(transparent)]
    Angle(#[from] AngleError),
}

/// Result type for coordinate system operations.
pub type Result<T> = std::result::Result<T, CoordinatesError>;

/// Validate a polar or spherical radius.
pub(crate) fn check_radius(radius: f64) -> Result<f64> {
    if radius >= 0.0 {
        Ok(radius)
    } else {
        Err(CoordinatesError::NegativeRadius(radius))
    }
}
