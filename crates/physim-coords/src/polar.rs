//! Polar coordinates: radius and angle from the positive x-axis.

use physim_angle::{Angle, AngleInRadians, AngleUnit, Radians};

use crate::point::{CartesianPoint, Coordinates2D};
use crate::system::CoordinatesSystem;
use crate::{check_radius, Result};

/// A point in the plane held as `(r, θ)`.
///
/// The radius is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    radius: f64,
    angle: AngleInRadians,
}

impl Polar {
    /// The origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an angle in any unit and a radius.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoordinatesError::NegativeRadius`] if `radius < 0`.
    pub fn from_angle_and_radius<U: AngleUnit>(angle: Angle<U>, radius: f64) -> Result<Self> {
        Ok(Self {
            radius: check_radius(radius)?,
            angle: angle.to::<Radians>(),
        })
    }

    /// Create from a Cartesian point.
    pub fn from_coordinates(coordinates: Coordinates2D) -> Self {
        Self::cartesian_to_polar(&coordinates)
    }

    /// `x = r·cos θ`, `y = r·sin θ`.
    pub fn polar_to_cartesian(polar: &Polar) -> Coordinates2D {
        let theta = polar.angle.raw();
        Coordinates2D::new(polar.radius * theta.cos(), polar.radius * theta.sin())
    }

    /// `r = |p|`, `θ = ±acos(x / r)` with the sign of `y`.
    ///
    /// At the origin the direction is undefined and the angle is zero. A point
    /// with a NaN component has no location and also maps to the origin.
    pub fn cartesian_to_polar(coordinates: &Coordinates2D) -> Polar {
        let radius = Coordinates2D::origin().distance_to(coordinates);
        if radius.is_nan() {
            log::warn!("polar conversion of {coordinates:?}, mapped to the origin");
            return Polar::default();
        }
        if radius == 0.0 {
            log::debug!("polar conversion at the origin, angle set to zero");
            return Polar::default();
        }
        let theta = (coordinates.x / radius).clamp(-1.0, 1.0).acos();
        let theta = if coordinates.y >= 0.0 { theta } else { -theta };
        Polar {
            radius,
            angle: AngleInRadians::new(theta),
        }
    }

    /// The angle from the positive x-axis.
    pub fn angle(&self) -> AngleInRadians {
        self.angle
    }

    /// Set the angle, given in any unit.
    pub fn set_angle<U: AngleUnit>(&mut self, angle: Angle<U>) {
        self.angle = angle.to();
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
}

impl CoordinatesSystem for Polar {
    type Point = Coordinates2D;

    fn cartesian_coordinates(&self) -> Coordinates2D {
        Self::polar_to_cartesian(self)
    }

    fn set_location_from(&mut self, point: &Coordinates2D) {
        *self = Self::cartesian_to_polar(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoordinatesError;
    use approx::assert_relative_eq;
    use physim_angle::AngleInDegrees;
    use std::f64::consts::PI;

    #[test]
    fn test_default_is_origin() {
        let polar = Polar::new();
        assert_eq!(polar.radius(), 0.0);
        assert_eq!(polar.angle().raw(), 0.0);
    }

    #[test]
    fn test_from_angle_and_radius() {
        assert!(Polar::from_angle_and_radius(AngleInRadians::new(2.0), 3.4).is_ok());
        assert!(Polar::from_angle_and_radius(AngleInRadians::new(-3.14), 0.0).is_ok());
        assert_eq!(
            Polar::from_angle_and_radius(AngleInRadians::new(34.22), -32.12),
            Err(CoordinatesError::NegativeRadius(-32.12))
        );
        assert_eq!(
            Polar::from_angle_and_radius(AngleInDegrees::new(10.0), -1.0),
            Err(CoordinatesError::NegativeRadius(-1.0))
        );
    }

    #[test]
    fn test_from_angle_in_other_unit() {
        let polar = Polar::from_angle_and_radius(AngleInDegrees::new(180.0), 1.0).unwrap();
        assert_relative_eq!(polar.angle().raw(), PI, max_relative = 1e-15);
    }

    #[test]
    fn test_set_radius_rejects_negative() {
        let mut polar = Polar::from_angle_and_radius(AngleInRadians::new(1.0), 2.0).unwrap();
        assert!(polar.set_radius(-0.5).is_err());
        assert_eq!(polar.radius(), 2.0);
        assert!(polar.set_radius(f64::NAN).is_err());
        polar.set_radius(7.0).unwrap();
        assert_eq!(polar.radius(), 7.0);
    }

    #[test]
    fn test_distance_to_point() {
        let one = Polar::from_coordinates(Coordinates2D::new(0.0, 0.0));
        let two = Polar::from_coordinates(Coordinates2D::new(3.0, 4.0));
        let three = Polar::from_coordinates(Coordinates2D::new(7.3, 6.1));
        let four = Polar::from_coordinates(Coordinates2D::new(5.22, 4.34));
        let cases = [
            (one, two, 5.0),
            (one, three, 9.51314879522022403),
            (one, four, 6.78851972082279511),
            (two, three, 4.78539444560215955),
            (two, four, 2.24588512618076706),
            (three, four, 2.72470181854822419),
        ];
        for (from, to, expected) in cases {
            let distance = from.distance_to_point(&to.cartesian_coordinates());
            assert_relative_eq!(distance, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_cartesian_coordinates() {
        let one = Polar::from_angle_and_radius(AngleInRadians::new(2.3 * PI), 3.21).unwrap();
        let two = Polar::from_angle_and_radius(AngleInRadians::new(1.63 * PI), 32.3).unwrap();

        let c1 = one.cartesian_coordinates();
        assert_relative_eq!(c1.x, 1.8867906598588415, max_relative = 1e-12);
        assert_relative_eq!(c1.y, 2.5969445519435790, max_relative = 1e-12);

        let c2 = two.cartesian_coordinates();
        assert_relative_eq!(c2.x, 12.827876867503392, max_relative = 1e-12);
        assert_relative_eq!(c2.y, -29.643474409592599, max_relative = 1e-12);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let one = Polar::from_angle_and_radius(AngleInRadians::new(2.21 * PI), 23.21).unwrap();
        let two = Polar::from_angle_and_radius(AngleInRadians::new(1.41 * PI), 8.23).unwrap();

        let c1 = Polar::polar_to_cartesian(&one);
        assert_relative_eq!(c1.x, 18.339497837239804, max_relative = 1e-12);
        assert_relative_eq!(c1.y, 14.225572715285544, max_relative = 1e-12);

        let c2 = Polar::polar_to_cartesian(&two);
        assert_relative_eq!(c2.x, -2.2960968027028525, max_relative = 1e-12);
        assert_relative_eq!(c2.y, -7.9032170331212424, max_relative = 1e-12);
    }

    #[test]
    fn test_cartesian_to_polar() {
        let cases = [
            ((3.23, 4.53), 5.56361393340695415, 0.951382611616222559),
            ((6.32, -2.3), 6.72550369860875179, 5.93416023856049564),
            ((322.33, 2.32), 322.338349099203522, 0.0071974682420346088),
            ((34.33, 66.31), 74.6697060393303008, 1.09307357666142394),
        ];
        for (point, radius, angle) in cases {
            let polar = Polar::cartesian_to_polar(&Coordinates2D::from(point));
            assert_relative_eq!(polar.radius(), radius, max_relative = 1e-12);
            assert_relative_eq!(polar.angle().normalized_raw(), angle, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_cartesian_to_polar_at_origin() {
        let polar = Polar::cartesian_to_polar(&Coordinates2D::new(0.0, 0.0));
        assert_eq!(polar.radius(), 0.0);
        assert_eq!(polar.angle().raw(), 0.0);
        assert!(!polar.cartesian_coordinates().x.is_nan());
    }

    #[test]
    fn test_cartesian_to_polar_nan_maps_to_origin() {
        for point in [(f64::NAN, 1.0), (2.0, f64::NAN)] {
            let polar = Polar::from_coordinates(Coordinates2D::from(point));
            assert_eq!(polar, Polar::new());
        }
        let mut polar = Polar::from_angle_and_radius(AngleInRadians::new(1.0), 3.0).unwrap();
        polar.set_location_from(&Coordinates2D::new(f64::NAN, f64::NAN));
        assert_eq!(polar.radius(), 0.0);
    }

    #[test]
    fn test_set_location_from() {
        let mut polar = Polar::new();
        polar.set_location_from(&Coordinates2D::new(34.33, 66.31));
        assert_relative_eq!(polar.radius(), 74.6697060393303008, max_relative = 1e-12);
        assert_relative_eq!(
            polar.angle().normalized_raw(),
            1.09307357666142394,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_round_trip_through_cartesian() {
        let points = [
            (1.0, 0.0),
            (-1.0, 0.0),
            (0.0, -2.5),
            (-3.7, 4.2),
            (-0.001, -1000.0),
            (53.2, 43.33),
        ];
        for (x, y) in points {
            let point = Coordinates2D::new(x, y);
            let back = Polar::from_coordinates(point).cartesian_coordinates();
            assert_relative_eq!(back, point, epsilon = 1e-9, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_set_angle_any_unit() {
        let mut polar = Polar::from_angle_and_radius(AngleInRadians::zero(), 2.0).unwrap();
        polar.set_angle(AngleInDegrees::new(90.0));
        let c = polar.cartesian_coordinates();
        assert_relative_eq!(c.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 2.0, max_relative = 1e-12);
    }
}
