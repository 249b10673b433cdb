//! Target operating point for the voltage solver.

use std::fmt;

use thiserror::Error;
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Torque},
    torque::newton_meter,
};

use crate::support::constraint::{ConstraintError, NonNegative, ensure_finite};

/// Target shaft speed and load torque.
///
/// Fields are plain numbers because they usually come straight from user
/// input; [`solve`](super::solve) validates them before use.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoltageQuery {
    /// Target shaft speed in revolutions per minute.
    pub rpm: f64,

    /// Load torque in newton meters.
    pub torque: f64,
}

impl VoltageQuery {
    /// Creates a query from typed quantities.
    #[must_use]
    pub fn new(speed: AngularVelocity, torque: Torque) -> Self {
        Self {
            rpm: speed.get::<revolution_per_minute>(),
            torque: torque.get::<newton_meter>(),
        }
    }

    /// Parses a query from text fields, as typed into a form.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if either field is not a number, or is negative
    /// or non-finite.
    pub fn parse(rpm: &str, torque: &str) -> Result<Self, InvalidInput> {
        let query = Self {
            rpm: parse_field(QueryField::Rpm, rpm)?,
            torque: parse_field(QueryField::Torque, torque)?,
        };
        query.validate()?;
        Ok(query)
    }

    /// Checks that both fields are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::OutOfRange`] naming the first offending field.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        check_field(QueryField::Rpm, self.rpm)?;
        check_field(QueryField::Torque, self.torque)?;
        Ok(())
    }
}

/// Identifies a [`VoltageQuery`] field in an [`InvalidInput`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    Rpm,
    Torque,
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rpm => f.write_str("rpm"),
            Self::Torque => f.write_str("torque"),
        }
    }
}

/// Reason a [`VoltageQuery`] was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The field text is not a number.
    #[error("{field} is not a number")]
    Unparseable { field: QueryField },

    /// The field is a number outside `[0, ∞)`.
    #[error("{field} is out of range")]
    OutOfRange {
        field: QueryField,
        #[source]
        source: ConstraintError,
    },
}

impl InvalidInput {
    /// Returns the rejected field.
    #[must_use]
    pub fn field(&self) -> QueryField {
        match self {
            Self::Unparseable { field } | Self::OutOfRange { field, .. } => *field,
        }
    }
}

fn parse_field(field: QueryField, text: &str) -> Result<f64, InvalidInput> {
    text.trim()
        .parse()
        .map_err(|_| InvalidInput::Unparseable { field })
}

fn check_field(field: QueryField, value: f64) -> Result<(), InvalidInput> {
    NonNegative::new(value)
        .and_then(|value| ensure_finite(value.into_inner()))
        .map(|_| ())
        .map_err(|source| InvalidInput::OutOfRange { field, source })
}
