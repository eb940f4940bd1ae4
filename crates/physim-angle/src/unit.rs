//! Angle units and the step-count descriptor that defines them.

use std::f64::consts::TAU;
use std::fmt;

use crate::angle::Angle;
use crate::{AngleError, Result};

// =============================================================================
// Unit descriptor
// =============================================================================

/// Number of unit steps that make one full turn (360 for degrees, 2π for
/// radians, 400 for grads, ...).
///
/// Always strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StepsPerTurn(f64);

impl StepsPerTurn {
    /// Validate a step count.
    ///
    /// # Errors
    ///
    /// Returns [`AngleError::InvalidStepsPerTurn`] if `steps` is zero,
    /// negative, NaN or infinite.
    pub fn new(steps: f64) -> Result<Self> {
        if steps > 0.0 && steps.is_finite() {
            Ok(Self(steps))
        } else {
            Err(AngleError::InvalidStepsPerTurn(steps))
        }
    }

    /// Descriptor of a fixed unit.
    pub fn of<U: AngleUnit>() -> Self {
        Self(U::STEPS_PER_TURN)
    }

    /// The raw step count.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Convert a value in this unit's step space to degrees.
    pub(crate) fn raw_to_degrees(self, raw: f64) -> f64 {
        raw * crate::DEGREES_IN_TURN / self.0
    }

    /// Convert degrees to a value in this unit's step space.
    pub(crate) fn degrees_to_raw(self, degrees: f64) -> f64 {
        let steps_per_degree = self.0 / crate::DEGREES_IN_TURN;
        degrees * steps_per_degree
    }
}

impl fmt::Display for StepsPerTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} steps/turn", self.0)
    }
}

// =============================================================================
// Fixed unit set
// =============================================================================

/// A fixed angle unit known at compile time.
///
/// Implemented by the ten zero-sized unit markers of this crate. The set is
/// closed: arbitrary step counts go through [`crate::DynAngle`] instead.
pub trait AngleUnit: Copy + Default + fmt::Debug + 'static + private::Sealed {
    /// Unit steps in one full turn. Strictly positive.
    const STEPS_PER_TURN: f64;
    /// Human readable unit name.
    const NAME: &'static str;
    /// Short symbol used by `Display`.
    const SYMBOL: &'static str;
}

mod private {
    pub trait Sealed {}
}

macro_rules! angle_units {
    ($( $(#[$meta:meta])* $unit:ident, $alias:ident, $steps:expr, $name:literal, $symbol:literal; )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $unit;

            impl private::Sealed for $unit {}

            impl AngleUnit for $unit {
                const STEPS_PER_TURN: f64 = $steps;
                const NAME: &'static str = $name;
                const SYMBOL: &'static str = $symbol;
            }

            #[doc = concat!("An angle expressed in ", $name, ".")]
            pub type $alias = Angle<$unit>;
        )*
    };
}

angle_units! {
    /// One step per turn.
    Turns, AngleInTurns, 1.0, "turns", "tr";
    /// Four right angles per turn.
    Quadrants, AngleInQuadrants, 4.0, "quadrants", "quad";
    /// Six steps of 60° per turn.
    Sextants, AngleInSextants, 6.0, "sextants", "sext";
    /// 2π steps per turn.
    Radians, AngleInRadians, TAU, "radians", "rad";
    /// Sixty steps of 6° per turn.
    Hexacontades, AngleInHexacontades, 60.0, "hexacontades", "hc";
    /// 256 steps per turn.
    BinaryDegrees, AngleInBinaryDegrees, 256.0, "binary degrees", "brad";
    /// The canonical unit, 360 steps per turn.
    Degrees, AngleInDegrees, 360.0, "degrees", "deg";
    /// 400 gradians per turn.
    Grads, AngleInGrads, 400.0, "grads", "gon";
    /// Minutes of arc, 60 per degree.
    Minutes, AngleInMinutes, 360.0 * 60.0, "minutes", "arcmin";
    /// Seconds of arc, 3600 per degree.
    Seconds, AngleInSeconds, 360.0 * 60.0 * 60.0, "seconds", "arcsec";
}
