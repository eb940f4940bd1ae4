//! The unit-typed [`Angle`] and its arithmetic.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::unit::{Degrees, Radians, StepsPerTurn};
use crate::{AngleError, AngleUnit, Result, DEGREES_IN_TURN};

/// Anything that can report its value in canonical degrees.
///
/// Cross-unit arithmetic and comparison accept any `AngleMeasure` on the
/// right-hand side.
pub trait AngleMeasure {
    /// Value in degrees, not normalized.
    fn raw_degrees(&self) -> f64;
}

/// Reduce a degree value into `[0, 360)`.
///
/// Non-finite values cannot be reduced and are returned unchanged.
pub(crate) fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        log::warn!("cannot normalize non-finite angle ({degrees} degrees)");
        return degrees;
    }
    let reduced = degrees.rem_euclid(DEGREES_IN_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly one turn
    if reduced >= DEGREES_IN_TURN {
        0.0
    } else {
        reduced
    }
}

/// An angle expressed in the unit `U`.
///
/// The value is stored in canonical degrees and is unrestricted: it may be
/// negative or exceed one turn until [`Angle::normalize`] is called.
#[derive(Clone, Copy)]
pub struct Angle<U: AngleUnit> {
    degrees: f64,
    unit: PhantomData<U>,
}

impl<U: AngleUnit> Angle<U> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an angle from a value in `U`'s own step space.
    pub fn new(raw: f64) -> Self {
        Self::from_degrees(StepsPerTurn::of::<U>().raw_to_degrees(raw))
    }

    /// Create an angle from a value in degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees,
            unit: PhantomData,
        }
    }

    /// The zero angle.
    pub fn zero() -> Self {
        Self::from_degrees(0.0)
    }

    /// Re-express this angle in another unit. The canonical value is kept.
    pub fn to<V: AngleUnit>(self) -> Angle<V> {
        Angle::from_degrees(self.degrees)
    }

    /// Copy the canonical value of `other`, keeping this angle's unit.
    pub fn assign_from<A: AngleMeasure>(&mut self, other: &A) {
        self.degrees = other.raw_degrees();
    }

    // =========================================================================
    // Normalization
    // =========================================================================

    /// Reduce the stored value in place into one turn, `[0, 360)` degrees.
    pub fn normalize(&mut self) {
        self.degrees = normalize_degrees(self.degrees);
    }

    /// A normalized copy of this angle. `self` is left untouched.
    pub fn normalized(&self) -> Self {
        Self::from_degrees(normalize_degrees(self.degrees))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Value in `U`'s step space, not normalized.
    pub fn raw(&self) -> f64 {
        StepsPerTurn::of::<U>().degrees_to_raw(self.degrees)
    }

    /// Normalize in place, then return the value in `U`'s step space.
    ///
    /// Repeated calls return the same value.
    pub fn normalized_raw(&mut self) -> f64 {
        self.normalize();
        self.raw()
    }

    /// This angle as an [`Angle<Degrees>`](crate::AngleInDegrees).
    pub fn in_degrees(&self) -> Angle<Degrees> {
        self.to()
    }

    /// Value in degrees, not normalized.
    pub fn raw_degrees(&self) -> f64 {
        self.degrees
    }

    /// Value in radians, not normalized.
    pub fn radians(&self) -> f64 {
        self.to::<Radians>().raw()
    }

    /// Sine of this angle.
    pub fn sin(&self) -> f64 {
        self.radians().sin()
    }

    /// Cosine of this angle.
    pub fn cos(&self) -> f64 {
        self.radians().cos()
    }

    /// Tangent of this angle.
    pub fn tan(&self) -> f64 {
        self.radians().tan()
    }

    /// Steps per turn of `U`.
    pub fn steps_per_turn(&self) -> StepsPerTurn {
        StepsPerTurn::of::<U>()
    }

    // =========================================================================
    // Fallible arithmetic
    // =========================================================================

    /// Divide by a scalar, failing on a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`AngleError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            return Err(AngleError::DivisionByZero);
        }
        Ok(Self::from_degrees(self.degrees / divisor))
    }

    /// Divide in place by a scalar, failing on a zero divisor.
    ///
    /// The angle is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`AngleError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div_assign(&mut self, divisor: f64) -> Result<()> {
        *self = self.checked_div(divisor)?;
        Ok(())
    }
}

impl<U: AngleUnit> AngleMeasure for Angle<U> {
    fn raw_degrees(&self) -> f64 {
        self.degrees
    }
}

impl<U: AngleUnit> Default for Angle<U> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U: AngleUnit> fmt::Debug for Angle<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Angle")
            .field("unit", &U::NAME)
            .field("raw", &self.raw())
            .field("degrees", &self.degrees)
            .finish()
    }
}

impl<U: AngleUnit> fmt::Display for Angle<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw(), f)?;
        write!(f, " {}", U::SYMBOL)
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl<U: AngleUnit, A: AngleMeasure> PartialEq<A> for Angle<U> {
    fn eq(&self, other: &A) -> bool {
        self.degrees == other.raw_degrees()
    }
}

impl<U: AngleUnit, A: AngleMeasure> PartialOrd<A> for Angle<U> {
    fn partial_cmp(&self, other: &A) -> Option<Ordering> {
        self.degrees.partial_cmp(&other.raw_degrees())
    }
}

impl<U: AngleUnit> AbsDiffEq for Angle<U> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.degrees.abs_diff_eq(&other.degrees, epsilon)
    }
}

impl<U: AngleUnit> RelativeEq for Angle<U> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.degrees.relative_eq(&other.degrees, epsilon, max_relative)
    }
}

impl<U: AngleUnit> UlpsEq for Angle<U> {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.degrees.ulps_eq(&other.degrees, epsilon, max_ulps)
    }
}

// =============================================================================
// Operator overloads
// =============================================================================

/// Sum of two angles of any units, expressed in the left operand's unit.
impl<U: AngleUnit, A: AngleMeasure> Add<A> for Angle<U> {
    type Output = Angle<U>;
    fn add(self, rhs: A) -> Angle<U> {
        Angle::from_degrees(self.degrees + rhs.raw_degrees())
    }
}

/// Difference of two angles of any units, expressed in the left operand's unit.
impl<U: AngleUnit, A: AngleMeasure> Sub<A> for Angle<U> {
    type Output = Angle<U>;
    fn sub(self, rhs: A) -> Angle<U> {
        Angle::from_degrees(self.degrees - rhs.raw_degrees())
    }
}

impl<U: AngleUnit, A: AngleMeasure> AddAssign<A> for Angle<U> {
    fn add_assign(&mut self, rhs: A) {
        self.degrees += rhs.raw_degrees();
    }
}

impl<U: AngleUnit, A: AngleMeasure> SubAssign<A> for Angle<U> {
    fn sub_assign(&mut self, rhs: A) {
        self.degrees -= rhs.raw_degrees();
    }
}

impl<U: AngleUnit> Neg for Angle<U> {
    type Output = Angle<U>;
    fn neg(self) -> Angle<U> {
        Angle::from_degrees(-self.degrees)
    }
}

/// Scale by a dimensionless multiplier.
impl<U: AngleUnit> Mul<f64> for Angle<U> {
    type Output = Angle<U>;
    fn mul(self, multiplier: f64) -> Angle<U> {
        Angle::from_degrees(self.degrees * multiplier)
    }
}

/// Scale by a dimensionless multiplier: `k * angle`.
impl<U: AngleUnit> Mul<Angle<U>> for f64 {
    type Output = Angle<U>;
    fn mul(self, angle: Angle<U>) -> Angle<U> {
        angle * self
    }
}

impl<U: AngleUnit> MulAssign<f64> for Angle<U> {
    fn mul_assign(&mut self, multiplier: f64) {
        self.degrees *= multiplier;
    }
}

/// Divide by a dimensionless divisor.
///
/// # Panics
///
/// Panics if `divisor` is zero. Use [`Angle::checked_div`] to handle that case.
impl<U: AngleUnit> Div<f64> for Angle<U> {
    type Output = Angle<U>;
    fn div(self, divisor: f64) -> Angle<U> {
        assert!(divisor != 0.0, "attempt to divide an angle by zero");
        Angle::from_degrees(self.degrees / divisor)
    }
}

/// # Panics
///
/// Panics if `divisor` is zero. Use [`Angle::checked_div_assign`] to handle
/// that case.
impl<U: AngleUnit> DivAssign<f64> for Angle<U> {
    fn div_assign(&mut self, divisor: f64) {
        assert!(divisor != 0.0, "attempt to divide an angle by zero");
        self.degrees /= divisor;
    }
}
