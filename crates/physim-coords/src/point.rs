//! Plain Cartesian coordinate pairs and triples.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use nalgebra::{Point2, Point3, Vector2, Vector3};
use physim_angle::AngleInRadians;

/// A Cartesian point that coordinate systems convert to and from.
pub trait CartesianPoint: Copy + PartialEq + fmt::Debug {
    /// The origin of the space.
    fn origin() -> Self;

    /// Euclidean distance to `other`.
    fn distance_to(&self, other: &Self) -> f64;
}

// =============================================================================
// 2D
// =============================================================================

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates2D {
    /// Abscissa.
    pub x: f64,
    /// Ordinate.
    pub y: f64,
}

impl Coordinates2D {
    /// Create a point from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// As a nalgebra point.
    pub fn to_point(self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// As a nalgebra position vector.
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Direction of the segment from `self` to `other`, in `[0, 2π)`.
    ///
    /// Coincident points give a zero angle.
    pub fn direction_to(&self, other: &Self) -> AngleInRadians {
        let delta = other.to_vector() - self.to_vector();
        AngleInRadians::new(delta.y.atan2(delta.x)).normalized()
    }
}

impl CartesianPoint for Coordinates2D {
    fn origin() -> Self {
        Self::default()
    }

    fn distance_to(&self, other: &Self) -> f64 {
        nalgebra::distance(&self.to_point(), &other.to_point())
    }
}

impl From<Point2<f64>> for Coordinates2D {
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Coordinates2D> for Point2<f64> {
    fn from(c: Coordinates2D) -> Self {
        c.to_point()
    }
}

impl From<Vector2<f64>> for Coordinates2D {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Coordinates2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl AbsDiffEq for Coordinates2D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Coordinates2D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Coordinates2D {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}

// =============================================================================
// 3D
// =============================================================================

/// A point in space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates3D {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Coordinates3D {
    /// Create a point from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// As a nalgebra point.
    pub fn to_point(self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    /// As a nalgebra position vector.
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }
}

impl CartesianPoint for Coordinates3D {
    fn origin() -> Self {
        Self::default()
    }

    fn distance_to(&self, other: &Self) -> f64 {
        nalgebra::distance(&self.to_point(), &other.to_point())
    }
}

impl From<Point3<f64>> for Coordinates3D {
    fn from(p: Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Coordinates3D> for Point3<f64> {
    fn from(c: Coordinates3D) -> Self {
        c.to_point()
    }
}

impl From<Vector3<f64>> for Coordinates3D {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<(f64, f64, f64)> for Coordinates3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl AbsDiffEq for Coordinates3D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Coordinates3D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Coordinates3D {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_nalgebra_round_trip() {
        let c = Coordinates2D::new(-46.23, -75432.44);
        let p: Point2<f64> = c.into();
        assert_eq!(Coordinates2D::from(p), c);

        let c3 = Coordinates3D::new(-6.59, 67.22, 2.78);
        let p3: Point3<f64> = c3.into();
        assert_eq!(Coordinates3D::from(p3), c3);
        assert_eq!(Coordinates3D::from(c3.to_vector()), c3);
    }

    #[test]
    fn test_from_vector_and_tuple() {
        let c = Coordinates2D::from(Vector2::new(53.2, -43.33));
        assert_eq!(c, Coordinates2D::new(53.2, -43.33));
        assert_eq!(Coordinates2D::from(c.to_vector()), c);
        assert_eq!(Coordinates2D::from((53.2, -43.33)), c);

        let c3 = Coordinates3D::from(Vector3::new(68.3, -88.0, 45.55));
        assert_eq!(c3, Coordinates3D::new(68.3, -88.0, 45.55));
        assert_eq!(Coordinates3D::from((68.3, -88.0, 45.55)), c3);
    }

    #[test]
    fn test_distance_2d() {
        let a = Coordinates2D::new(0.0, 0.0);
        let b = Coordinates2D::new(3.0, 4.0);
        assert_relative_eq!(a.distance_to(&b), 5.0);
        assert_relative_eq!(b.norm(), 5.0);
    }

    #[test]
    fn test_distance_3d() {
        let a = Coordinates3D::origin();
        let b = Coordinates3D::new(2.0, 3.0, 6.0);
        assert_relative_eq!(a.distance_to(&b), 7.0);
        assert_relative_eq!(b.distance_to(&a), 7.0);
    }

    #[test]
    fn test_direction_to_each_quadrant() {
        let origin = Coordinates2D::origin();
        let cases = [
            ((1.0, 0.0), 0.0),
            ((1.0, 1.0), PI / 4.0),
            ((0.0, 1.0), PI / 2.0),
            ((-1.0, 1.0), 3.0 * PI / 4.0),
            ((-1.0, 0.0), PI),
            ((-1.0, -1.0), 5.0 * PI / 4.0),
            ((0.0, -1.0), 3.0 * PI / 2.0),
            ((1.0, -1.0), 7.0 * PI / 4.0),
        ];
        for (to, expected) in cases {
            let angle = origin.direction_to(&Coordinates2D::from(to));
            assert_relative_eq!(angle.raw(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_direction_to_coincident_points() {
        let p = Coordinates2D::new(6.4, 5.4);
        assert_eq!(p.direction_to(&p).raw(), 0.0);
    }
}
