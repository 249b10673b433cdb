use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Motor parameters used as divisors (resistance, torque constant, back-EMF
/// constant) and the curve sample count carry this constraint.
///
/// # Examples
///
/// ```
/// use twine_dc_motor::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};
///
/// // Generic constructor:
/// let r = Constrained::<_, StrictlyPositive>::new(ElectricalResistance::new::<ohm>(0.12)).unwrap();
/// assert_eq!(r.into_inner().get::<ohm>(), 0.12);
///
/// // Associated constructor:
/// let n = StrictlyPositive::new(100_usize).unwrap();
/// assert_eq!(n.into_inner(), 100);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0_usize).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
