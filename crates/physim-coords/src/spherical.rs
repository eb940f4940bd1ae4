//! Spherical coordinates, physics convention.
//!
//! The polar angle θ is measured from the positive z-axis and the azimuthal
//! angle φ in the xy-plane from the positive x-axis.

use physim_angle::{Angle, AngleInRadians, AngleUnit, Radians};

use crate::point::Coordinates3D;
use crate::system::CoordinatesSystem;
use crate::{check_radius, Result};

/// A point in space held as `(r, θ, φ)`.
///
/// The radius is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    radius: f64,
    polar_angle: AngleInRadians,
    azimuthal_angle: AngleInRadians,
}

impl Spherical {
    /// The origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a radius and two angles in any units.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoordinatesError::NegativeRadius`] if `radius < 0`.
    pub fn from_radius_polar_and_azimuthal_angle<P: AngleUnit, A: AngleUnit>(
        radius: f64,
        polar_angle: Angle<P>,
        azimuthal_angle: Angle<A>,
    ) -> Result<Self> {
        Ok(Self {
            radius: check_radius(radius)?,
            polar_angle: polar_angle.to::<Radians>(),
            azimuthal_angle: azimuthal_angle.to::<Radians>(),
        })
    }

    /// Create from a radius and two angles given as raw radians.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoordinatesError::NegativeRadius`] if `radius < 0`.
    pub fn from_raw_radians(radius: f64, polar_angle: f64, azimuthal_angle: f64) -> Result<Self> {
        Self::from_radius_polar_and_azimuthal_angle(
            radius,
            AngleInRadians::new(polar_angle),
            AngleInRadians::new(azimuthal_angle),
        )
    }

    /// Create from a Cartesian point.
    pub fn from_coordinates(coordinates: Coordinates3D) -> Self {
        let mut system = Self::default();
        system.set_location_from(&coordinates);
        system
    }

    /// Distance from the origin.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the radius. The stored radius is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoordinatesError::NegativeRadius`] if `radius < 0`.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    /// Angle from the positive z-axis.
    pub fn polar_angle(&self) -> AngleInRadians {
        self.polar_angle
    }

    /// Set the polar angle, given in any unit.
    pub fn set_polar_angle<U: AngleUnit>(&mut self, angle: Angle<U>) {
        self.polar_angle = angle.to();
    }

    /// Angle in the xy-plane from the positive x-axis.
    pub fn azimuthal_angle(&self) -> AngleInRadians {
        self.azimuthal_angle
    }

    /// Set the azimuthal angle, given in any unit.
    pub fn set_azimuthal_angle<U: AngleUnit>(&mut self, angle: Angle<U>) {
        self.azimuthal_angle = angle.to();
    }
}

impl CoordinatesSystem for Spherical {
    type Point = Coordinates3D;

    fn cartesian_coordinates(&self) -> Coordinates3D {
        let (polar_sin, polar_cos) = self.polar_angle.raw().sin_cos();
        let (azimuth_sin, azimuth_cos) = self.azimuthal_angle.raw().sin_cos();

        Coordinates3D::new(
            self.radius * polar_sin * azimuth_cos,
            self.radius * polar_sin * azimuth_sin,
            self.radius * polar_cos,
        )
    }

    /// `r = |p|`, `θ = acos(z / r)`, `φ = atan2(y, x)`.
    ///
    /// At the origin both angles are zero. A point with a NaN component maps
    /// to the origin.
    fn set_location_from(&mut self, point: &Coordinates3D) {
        let radius = point.norm();
        if radius.is_nan() {
            log::warn!("spherical conversion of {point:?}, mapped to the origin");
            *self = Self::default();
            return;
        }
        if radius == 0.0 {
            log::debug!("spherical conversion at the origin, angles set to zero");
            *self = Self::default();
            return;
        }
        let polar = (point.z / radius).clamp(-1.0, 1.0).acos();
        let azimuth = point.y.atan2(point.x);

        self.radius = radius;
        self.polar_angle = AngleInRadians::new(polar);
        self.azimuthal_angle = AngleInRadians::new(azimuth);
    }
}
