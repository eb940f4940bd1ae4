//! Angles whose unit is chosen at runtime.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::angle::{normalize_degrees, AngleMeasure};
use crate::unit::{Degrees, StepsPerTurn};
use crate::{Angle, AngleError, AngleUnit, Result};

/// An angle in a unit described only by its step count.
///
/// Used where the unit is not one of the fixed [`AngleUnit`] markers, e.g.
/// a dial with 12 or 32 divisions. The step count is validated once at
/// construction and never changes afterwards.
#[derive(Debug, Clone, Copy)]
pub struct DynAngle {
    degrees: f64,
    steps: StepsPerTurn,
}

impl DynAngle {
    /// Create an angle from `raw` steps of a unit with `steps_per_turn` steps.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AngleError::InvalidStepsPerTurn`] if `steps_per_turn`
    /// is not strictly positive.
    pub fn new(raw: f64, steps_per_turn: f64) -> Result<Self> {
        let steps = StepsPerTurn::new(steps_per_turn)?;
        Ok(Self::with_steps(raw, steps))
    }

    /// Create an angle from `raw` steps of an already validated unit.
    pub fn with_steps(raw: f64, steps: StepsPerTurn) -> Self {
        Self {
            degrees: steps.raw_to_degrees(raw),
            steps,
        }
    }

    /// Express any angle in the unit described by `steps`.
    pub fn from_measure<A: AngleMeasure>(angle: &A, steps: StepsPerTurn) -> Self {
        Self {
            degrees: angle.raw_degrees(),
            steps,
        }
    }

    /// The unit descriptor of this angle.
    pub fn steps_per_turn(&self) -> StepsPerTurn {
        self.steps
    }

    /// Reduce the stored value in place into `[0, 360)` degrees.
    pub fn normalize(&mut self) {
        self.degrees = normalize_degrees(self.degrees);
    }

    /// A normalized copy of this angle, in the same unit.
    pub fn normalized(&self) -> Self {
        Self {
            degrees: normalize_degrees(self.degrees),
            steps: self.steps,
        }
    }

    /// Value in this angle's step space, not normalized.
    pub fn raw(&self) -> f64 {
        self.steps.degrees_to_raw(self.degrees)
    }

    /// Normalize in place, then return the value in this angle's step space.
    pub fn normalized_raw(&mut self) -> f64 {
        self.normalize();
        self.raw()
    }

    /// This angle as an [`Angle<Degrees>`](crate::AngleInDegrees).
    pub fn in_degrees(&self) -> Angle<Degrees> {
        Angle::from_degrees(self.degrees)
    }

    /// This angle re-expressed in a fixed unit.
    pub fn to<U: AngleUnit>(&self) -> Angle<U> {
        Angle::from_degrees(self.degrees)
    }

    /// Value in degrees, not normalized.
    pub fn raw_degrees(&self) -> f64 {
        self.degrees
    }

    /// Divide by a scalar, failing on a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`AngleError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(AngleError::DivisionByZero);
        }
        Ok(Self {
            degrees: self.degrees / divisor,
            steps: self.steps,
        })
    }

    /// Divide in place by a scalar. The angle is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`AngleError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div_assign(&mut self, divisor: f64) -> Result<()> {
        *self = self.checked_div(divisor)?;
        Ok(())
    }
}

impl AngleMeasure for DynAngle {
    fn raw_degrees(&self) -> f64 {
        self.degrees
    }
}

impl<A: AngleMeasure> PartialEq<A> for DynAngle {
    fn eq(&self, other: &A) -> bool {
        self.degrees == other.raw_degrees()
    }
}

impl<A: AngleMeasure> PartialOrd<A> for DynAngle {
    fn partial_cmp(&self, other: &A) -> Option<Ordering> {
        self.degrees.partial_cmp(&other.raw_degrees())
    }
}

/// Compares canonical values only; the step counts may differ.
impl AbsDiffEq for DynAngle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.degrees.abs_diff_eq(&other.degrees, epsilon)
    }
}

impl RelativeEq for DynAngle {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.degrees.relative_eq(&other.degrees, epsilon, max_relative)
    }
}

impl fmt::Display for DynAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw(), f)?;
        write!(f, " (1/{} turn)", self.steps.get())
    }
}

impl<A: AngleMeasure> Add<A> for DynAngle {
    type Output = DynAngle;
    fn add(mut self, rhs: A) -> DynAngle {
        self.degrees += rhs.raw_degrees();
        self
    }
}

impl<A: AngleMeasure> Sub<A> for DynAngle {
    type Output = DynAngle;
    fn sub(mut self, rhs: A) -> DynAngle {
        self.degrees -= rhs.raw_degrees();
        self
    }
}

impl<A: AngleMeasure> AddAssign<A> for DynAngle {
    fn add_assign(&mut self, rhs: A) {
        self.degrees += rhs.raw_degrees();
    }
}

impl<A: AngleMeasure> SubAssign<A> for DynAngle {
    fn sub_assign(&mut self, rhs: A) {
        self.degrees -= rhs.raw_degrees();
    }
}

impl Mul<f64> for DynAngle {
    type Output = DynAngle;
    fn mul(mut self, multiplier: f64) -> DynAngle {
        self.degrees *= multiplier;
        self
    }
}

impl Mul<DynAngle> for f64 {
    type Output = DynAngle;
    fn mul(self, angle: DynAngle) -> DynAngle {
        angle * self
    }
}

impl MulAssign<f64> for DynAngle {
    fn mul_assign(&mut self, multiplier: f64) {
        self.degrees *= multiplier;
    }
}

/// # Panics
///
/// Panics if `divisor` is zero. Use [`DynAngle::checked_div`] to handle that
/// case.
impl Div<f64> for DynAngle {
    type Output = DynAngle;
    fn div(mut self, divisor: f64) -> DynAngle {
        assert!(divisor != 0.0, "attempt to divide an angle by zero");
        self.degrees /= divisor;
        self
    }
}

/// # Panics
///
/// Panics if `divisor` is zero. Use [`DynAngle::checked_div_assign`] to
/// handle that case.
impl DivAssign<f64> for DynAngle {
    fn div_assign(&mut self, divisor: f64) {
        assert!(divisor != 0.0, "attempt to divide an angle by zero");
        self.degrees /= divisor;
    }
}
