//! Type-level numeric constraints with zero runtime cost.
//!
//! Motor parameters and query inputs carry sign requirements (a resistance
//! must be strictly positive, a target torque must not be negative). The types
//! in this module check those requirements once, at construction, so code
//! holding a constrained value never has to check again.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//! Each marker also provides an associated `new()` constructor
//! (e.g., `StrictlyPositive::new(5.0)`).
//!
//! # Extending
//!
//! You can define custom numeric invariants by implementing [`Constraint<T>`]
//! for your own zero-sized marker types.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    NotFinite,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use twine_dc_motor::support::constraint::{Constrained, StrictlyPositive};
///
/// let samples = Constrained::<usize, StrictlyPositive>::new(100).unwrap();
/// assert_eq!(samples.into_inner(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Checks that a float is finite, after any sign constraint has been applied.
///
/// Sign markers accept positive infinity, which no physical motor quantity can
/// take, so callers that need a usable magnitude chain this check.
///
/// # Errors
///
/// Returns [`ConstraintError::NotANumber`] for `NaN` and
/// [`ConstraintError::NotFinite`] for either infinity.
pub fn ensure_finite(value: f64) -> ConstraintResult<f64> {
    if value.is_nan() {
        Err(ConstraintError::NotANumber)
    } else if value.is_infinite() {
        Err(ConstraintError::NotFinite)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass() {
        assert_eq!(ensure_finite(0.0), Ok(0.0));
        assert_eq!(ensure_finite(-3.5), Ok(-3.5));
    }

    #[test]
    fn non_finite_values_are_classified() {
        assert_eq!(ensure_finite(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(ensure_finite(f64::INFINITY), Err(ConstraintError::NotFinite));
        assert_eq!(
            ensure_finite(f64::NEG_INFINITY),
            Err(ConstraintError::NotFinite)
        );
    }
}
