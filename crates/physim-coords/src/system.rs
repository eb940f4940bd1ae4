//! The shared coordinate-system contract and the per-dimension sum types.

use crate::point::{CartesianPoint, Coordinates2D, Coordinates3D};
use crate::{Cartesian2D, Cartesian3D, Polar, Spherical};

/// A representation of a point that can be converted to and from Cartesian
/// coordinates.
pub trait CoordinatesSystem {
    /// The Cartesian point type of this system's space.
    type Point: CartesianPoint;

    /// The point in Cartesian form. Never mutates `self`.
    fn cartesian_coordinates(&self) -> Self::Point;

    /// Replace the stored location with the given Cartesian point.
    fn set_location_from(&mut self, point: &Self::Point);

    /// Euclidean distance to a Cartesian point.
    fn distance_to_point(&self, point: &Self::Point) -> f64 {
        self.cartesian_coordinates().distance_to(point)
    }
}

/// A point in the plane held in either 2D representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinatesSystem2D {
    /// Cartesian `(x, y)`.
    Cartesian(Cartesian2D),
    /// Polar `(r, θ)`.
    Polar(Polar),
}

impl CoordinatesSystem for CoordinatesSystem2D {
    type Point = Coordinates2D;

    fn cartesian_coordinates(&self) -> Coordinates2D {
        match self {
            Self::Cartesian(c) => c.cartesian_coordinates(),
            Self::Polar(p) => p.cartesian_coordinates(),
        }
    }

    fn set_location_from(&mut self, point: &Coordinates2D) {
        match self {
            Self::Cartesian(c) => c.set_location_from(point),
            Self::Polar(p) => p.set_location_from(point),
        }
    }
}

impl From<Cartesian2D> for CoordinatesSystem2D {
    fn from(c: Cartesian2D) -> Self {
        Self::Cartesian(c)
    }
}

impl From<Polar> for CoordinatesSystem2D {
    fn from(p: Polar) -> Self {
        Self::Polar(p)
    }
}

/// A point in space held in either 3D representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinatesSystem3D {
    /// Cartesian `(x, y, z)`.
    Cartesian(Cartesian3D),
    /// Spherical `(r, θ, φ)`.
    Spherical(Spherical),
}

impl CoordinatesSystem for CoordinatesSystem3D {
    type Point = Coordinates3D;

    fn cartesian_coordinates(&self) -> Coordinates3D {
        match self {
            Self::Cartesian(c) => c.cartesian_coordinates(),
            Self::Spherical(s) => s.cartesian_coordinates(),
        }
    }

    fn set_location_from(&mut self, point: &Coordinates3D) {
        match self {
            Self::Cartesian(c) => c.set_location_from(point),
            Self::Spherical(s) => s.set_location_from(point),
        }
    }
}

impl From<Cartesian3D> for CoordinatesSystem3D {
    fn from(c: Cartesian3D) -> Self {
        Self::Cartesian(c)
    }
}

impl From<Spherical> for CoordinatesSystem3D {
    fn from(s: Spherical) -> Self {
        Self::Spherical(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use physim_angle::AngleInDegrees;

    #[test]
    fn test_mixed_2d_systems_agree() {
        let systems: Vec<CoordinatesSystem2D> = vec![
            Cartesian2D::from_xy(0.0, 2.0).into(),
            Polar::from_angle_and_radius(AngleInDegrees::new(90.0), 2.0)
                .unwrap()
                .into(),
        ];
        let target = Coordinates2D::new(0.0, -1.0);
        for system in &systems {
            assert_relative_eq!(system.distance_to_point(&target), 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_set_location_keeps_variant() {
        let mut system = CoordinatesSystem2D::from(Polar::default());
        system.set_location_from(&Coordinates2D::new(3.0, 4.0));
        match system {
            CoordinatesSystem2D::Polar(p) => assert_relative_eq!(p.radius(), 5.0),
            CoordinatesSystem2D::Cartesian(_) => panic!("variant changed"),
        }
        assert_relative_eq!(
            system.cartesian_coordinates(),
            Coordinates2D::new(3.0, 4.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_mixed_3d_systems_agree() {
        let point = Coordinates3D::new(62.73, 49.33, 37.99);
        let cartesian = CoordinatesSystem3D::from(Cartesian3D::from_coordinates(point));
        let spherical = CoordinatesSystem3D::from(Spherical::from_coordinates(point));
        let other = Coordinates3D::new(-1.0, 2.0, -3.0);
        assert_relative_eq!(
            cartesian.distance_to_point(&other),
            spherical.distance_to_point(&other),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            spherical.cartesian_coordinates(),
            point,
            max_relative = 1e-12
        );
    }
}
