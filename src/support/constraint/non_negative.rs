use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Target speeds and load torques carry this constraint: standing still or
/// running unloaded are valid operating points, running backwards is not.
///
/// # Examples
///
/// ```
/// use twine_dc_motor::support::constraint::{Constrained, NonNegative};
///
/// // Generic constructor:
/// let rpm = Constrained::<_, NonNegative>::new(5500.0).unwrap();
/// assert_eq!(rpm.into_inner(), 5500.0);
///
/// // Associated constructor:
/// let torque = NonNegative::new(0.0).unwrap();
/// assert_eq!(torque.into_inner(), 0.0);
///
/// // Error cases:
/// assert!(NonNegative::new(-1.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Torque, torque::newton_meter};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonNegative>::new(2.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(-0.0).is_ok());
        assert_eq!(
            NonNegative::new(-2.0).unwrap_err(),
            ConstraintError::Negative
        );
        assert_eq!(
            NonNegative::new(f64::NEG_INFINITY).unwrap_err(),
            ConstraintError::Negative
        );
        assert_eq!(
            NonNegative::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }

    #[test]
    fn torques() {
        let torque = Torque::new::<newton_meter>(0.05);
        assert!(NonNegative::new(torque).is_ok());

        let torque = Torque::new::<newton_meter>(0.0);
        assert!(NonNegative::new(torque).is_ok());

        let torque = Torque::new::<newton_meter>(-0.05);
        assert!(NonNegative::new(torque).is_err());
    }
}
