#![warn(missing_docs)]

//! Geometry and unit algebra for the physim teaching simulations.
//!
//! Re-exports the angle algebra ([`physim_angle`]) and the coordinate
//! systems ([`physim_coords`]) so simulation code needs one dependency.
//!
//! # Example
//!
//! ```
//! use physim::prelude::*;
//!
//! let launch = AngleInDegrees::new(30.0) + AngleInGrads::new(50.0);
//! let muzzle = Polar::from_angle_and_radius(launch, 2.0).unwrap();
//! let target = Coordinates2D::new(10.0, 0.0);
//! assert!(muzzle.distance_to_point(&target) > 8.0);
//! ```

pub use physim_angle;
pub use physim_coords;

pub use physim_angle::{AngleError, DynAngle, StepsPerTurn};
pub use physim_coords::{CoordinatesError, Tolerance};

/// Everything a simulation usually needs in scope.
pub mod prelude {
    pub use physim_angle::{
        Angle, AngleInBinaryDegrees, AngleInDegrees, AngleInGrads, AngleInHexacontades,
        AngleInMinutes, AngleInQuadrants, AngleInRadians, AngleInSeconds, AngleInSextants,
        AngleInTurns, AngleMeasure, AngleUnit,
    };
    pub use physim_coords::{
        Cartesian2D, Cartesian3D, CartesianPoint, Coordinates2D, Coordinates3D, CoordinatesSystem,
        CoordinatesSystem2D, CoordinatesSystem3D, Polar, Spherical,
    };
}
