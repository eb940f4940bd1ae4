//! Cartesian systems: identity transform to and from Cartesian form.

use crate::point::{Coordinates2D, Coordinates3D};
use crate::system::CoordinatesSystem;

/// A point in the plane held as `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartesian2D {
    location: Coordinates2D,
}

impl Cartesian2D {
    /// The origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from components.
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self::from_coordinates(Coordinates2D::new(x, y))
    }

    /// Create from a Cartesian point.
    pub fn from_coordinates(coordinates: Coordinates2D) -> Self {
        Self {
            location: coordinates,
        }
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.location.x
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.location.y
    }

    /// Set the x component.
    pub fn set_x(&mut self, x: f64) {
        self.location.x = x;
    }

    /// Set the y component.
    pub fn set_y(&mut self, y: f64) {
        self.location.y = y;
    }
}

impl CoordinatesSystem for Cartesian2D {
    type Point = Coordinates2D;

    fn cartesian_coordinates(&self) -> Coordinates2D {
        self.location
    }

    fn set_location_from(&mut self, point: &Coordinates2D) {
        self.location = *point;
    }
}

/// A point in space held as `(x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartesian3D {
    location: Coordinates3D,
}

impl Cartesian3D {
    /// The origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from components.
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::from_coordinates(Coordinates3D::new(x, y, z))
    }

    /// Create from a Cartesian point.
    pub fn from_coordinates(coordinates: Coordinates3D) -> Self {
        Self {
            location: coordinates,
        }
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.location.x
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.location.y
    }

    /// Z component.
    pub fn z(&self) -> f64 {
        self.location.z
    }

    /// Set the x component.
    pub fn set_x(&mut self, x: f64) {
        self.location.x = x;
    }

    /// Set the y component.
    pub fn set_y(&mut self, y: f64) {
        self.location.y = y;
    }

    /// Set the z component.
    pub fn set_z(&mut self, z: f64) {
        self.location.z = z;
    }
}

impl CoordinatesSystem for Cartesian3D {
    type Point = Coordinates3D;

    fn cartesian_coordinates(&self) -> Coordinates3D {
        self.location
    }

    fn set_location_from(&mut self, point: &Coordinates3D) {
        self.location = *point;
    }
}
