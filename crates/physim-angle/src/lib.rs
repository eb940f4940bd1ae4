#![warn(missing_docs)]

//! Angle algebra for the physim teaching simulations.
//!
//! An angle is a single real number kept in one canonical unit (degrees)
//! and tagged at the type level with the unit it is expressed in. Ten
//! fixed units are provided: turns, quadrants, sextants, radians,
//! hexacontades, binary degrees, degrees, grads, minutes and seconds.
//! Arithmetic between angles of different units converts through the
//! canonical value, so no call site has to convert by hand.
//!
//! # Example
//!
//! ```
//! use physim_angle::{AngleInMinutes, AngleInSextants};
//!
//! let sum = AngleInSextants::new(2.0) + AngleInMinutes::new(3600.0);
//! assert!((sum.raw_degrees() - 180.0).abs() < 1e-12);
//! assert!((sum.raw() - 3.0).abs() < 1e-12);
//! ```
//!
//! # Division
//!
//! The `/` and `/=` operators panic on a zero divisor. Where the divisor
//! comes from input, use [`Angle::checked_div`] or [`DynAngle::checked_div`],
//! which return [`AngleError::DivisionByZero`] instead.
//!
//! ```
//! use physim_angle::{AngleError, AngleInGrads};
//!
//! let right = AngleInGrads::new(100.0);
//! assert_eq!(right.checked_div(0.0), Err(AngleError::DivisionByZero));
//! let half = right.checked_div(2.0)?;
//! assert!((half.raw() - 50.0).abs() < 1e-12);
//! # Ok::<(), AngleError>(())
//! ```

mod angle;
mod dyn_angle;
mod unit;

pub use angle::{Angle, AngleMeasure};
pub use dyn_angle::DynAngle;
pub use unit::{
    AngleInBinaryDegrees, AngleInDegrees, AngleInGrads, AngleInHexacontades, AngleInMinutes,
    AngleInQuadrants, AngleInRadians, AngleInSeconds, AngleInSextants, AngleInTurns, AngleUnit,
    BinaryDegrees, Degrees, Grads, Hexacontades, Minutes, Quadrants, Radians, Seconds, Sextants,
    StepsPerTurn, Turns,
};

use thiserror::Error;

/// Number of canonical units (degrees) in one full turn.
pub const DEGREES_IN_TURN: f64 = 360.0;

/// Errors from angle construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AngleError {
    /// A unit descriptor was given a step count that is not strictly positive.
    #[error("invalid steps per turn: {0} (must be higher than 0)")]
    InvalidStepsPerTurn(f64),

    /// An angle was divided by zero.
    #[error("angle divided by zero")]
    DivisionByZero,
}

/// Result type for angle operations.
pub type Result<T> = std::result::Result<T, AngleError>;
