//! Motor parameter set shared by every DC motor calculation.

use num_traits::Zero;
use thiserror::Error;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricCurrent, ElectricPotential, ElectricalResistance},
    magnetic_flux::weber,
};

use crate::support::{
    constraint::{Constrained, ConstraintError, StrictlyPositive, ensure_finite},
    units::MotorConstant,
};

/// Error returned when a motor parameter violates its constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid motor parameter `{parameter}`")]
pub struct ParameterError {
    /// Name of the offending parameter.
    pub parameter: &'static str,

    /// The violated constraint.
    #[source]
    pub source: ConstraintError,
}

/// Electrical and sampling constants of a brushed DC motor.
///
/// Every quantity is strictly positive and finite, which is checked once in
/// [`MotorParameters::new`].
/// The resistance and both motor constants are used as divisors, so a value
/// of this type can always be evaluated without dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorParameters {
    max_voltage: Constrained<ElectricPotential, StrictlyPositive>,
    resistance: Constrained<ElectricalResistance, StrictlyPositive>,
    torque_constant: Constrained<MotorConstant, StrictlyPositive>,
    back_emf_constant: Constrained<MotorConstant, StrictlyPositive>,
    no_load_current: Constrained<ElectricCurrent, StrictlyPositive>,
    sample_count: Constrained<usize, StrictlyPositive>,
}

impl MotorParameters {
    /// Creates a validated motor parameter set.
    ///
    /// - `max_voltage`: supply ceiling the motor is rated for.
    /// - `resistance`: armature resistance.
    /// - `torque_constant`: torque per unit armature current.
    /// - `back_emf_constant`: back-EMF per unit shaft speed.
    /// - `no_load_current`: current drawn at `max_voltage` with no load.
    /// - `sample_count`: number of speed intervals in a generated curve.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] naming the first parameter that is zero,
    /// negative, infinite, or not a number.
    pub fn new(
        max_voltage: ElectricPotential,
        resistance: ElectricalResistance,
        torque_constant: MotorConstant,
        back_emf_constant: MotorConstant,
        no_load_current: ElectricCurrent,
        sample_count: usize,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            max_voltage: positive_finite(
                "max_voltage",
                max_voltage,
                max_voltage.get::<volt>(),
            )?,
            resistance: positive_finite("resistance", resistance, resistance.get::<ohm>())?,
            torque_constant: positive_finite(
                "torque_constant",
                torque_constant,
                torque_constant.get::<weber>(),
            )?,
            back_emf_constant: positive_finite(
                "back_emf_constant",
                back_emf_constant,
                back_emf_constant.get::<weber>(),
            )?,
            no_load_current: positive_finite(
                "no_load_current",
                no_load_current,
                no_load_current.get::<ampere>(),
            )?,
            sample_count: StrictlyPositive::new(sample_count).map_err(|source| {
                ParameterError {
                    parameter: "sample_count",
                    source,
                }
            })?,
        })
    }

    /// Parameters of a generic R550 brushed motor rated for 12 V.
    #[must_use]
    pub fn r550() -> Self {
        Self::new(
            ElectricPotential::new::<volt>(12.0),
            ElectricalResistance::new::<ohm>(0.12),
            MotorConstant::new::<weber>(0.0104),
            MotorConstant::new::<weber>(0.0104),
            ElectricCurrent::new::<ampere>(1.5),
            100,
        )
        .expect("R550 constants are positive and finite")
    }

    /// Returns a copy of these parameters with a different curve resolution.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if `sample_count` is zero.
    pub fn with_sample_count(self, sample_count: usize) -> Result<Self, ParameterError> {
        Ok(Self {
            sample_count: StrictlyPositive::new(sample_count).map_err(|source| {
                ParameterError {
                    parameter: "sample_count",
                    source,
                }
            })?,
            ..self
        })
    }

    /// Supply voltage ceiling.
    #[must_use]
    pub fn max_voltage(&self) -> ElectricPotential {
        *self.max_voltage.as_ref()
    }

    /// Armature resistance.
    #[must_use]
    pub fn resistance(&self) -> ElectricalResistance {
        *self.resistance.as_ref()
    }

    /// Torque per unit armature current.
    #[must_use]
    pub fn torque_constant(&self) -> MotorConstant {
        *self.torque_constant.as_ref()
    }

    /// Back-EMF per unit shaft speed.
    #[must_use]
    pub fn back_emf_constant(&self) -> MotorConstant {
        *self.back_emf_constant.as_ref()
    }

    /// No-load current at [`max_voltage`](Self::max_voltage).
    #[must_use]
    pub fn no_load_current(&self) -> ElectricCurrent {
        *self.no_load_current.as_ref()
    }

    /// Number of speed intervals in a generated curve.
    ///
    /// A curve holds one more point than this.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        *self.sample_count.as_ref()
    }
}

impl Default for MotorParameters {
    fn default() -> Self {
        Self::r550()
    }
}

fn positive_finite<T: PartialOrd + Zero>(
    parameter: &'static str,
    value: T,
    magnitude: f64,
) -> Result<Constrained<T, StrictlyPositive>, ParameterError> {
    let to_error = |source| ParameterError { parameter, source };
    let value = StrictlyPositive::new(value).map_err(to_error)?;
    ensure_finite(magnitude).map_err(to_error)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn params_with_resistance(ohms: f64) -> Result<MotorParameters, ParameterError> {
        MotorParameters::new(
            ElectricPotential::new::<volt>(12.0),
            ElectricalResistance::new::<ohm>(ohms),
            MotorConstant::new::<weber>(0.0104),
            MotorConstant::new::<weber>(0.0104),
            ElectricCurrent::new::<ampere>(1.5),
            100,
        )
    }

    #[test]
    fn r550_constants() {
        let params = MotorParameters::r550();

        assert_relative_eq!(params.max_voltage().get::<volt>(), 12.0);
        assert_relative_eq!(params.resistance().get::<ohm>(), 0.12);
        assert_relative_eq!(params.torque_constant().get::<weber>(), 0.0104);
        assert_relative_eq!(params.back_emf_constant().get::<weber>(), 0.0104);
        assert_relative_eq!(params.no_load_current().get::<ampere>(), 1.5);
        assert_eq!(params.sample_count(), 100);
        assert_eq!(MotorParameters::default(), params);
    }

    #[test]
    fn rejects_zero_resistance() {
        let err = params_with_resistance(0.0).unwrap_err();
        assert_eq!(err.parameter, "resistance");
        assert_eq!(err.source, ConstraintError::Zero);
    }

    #[test]
    fn rejects_non_finite_resistance() {
        let err = params_with_resistance(f64::INFINITY).unwrap_err();
        assert_eq!(err.source, ConstraintError::NotFinite);

        let err = params_with_resistance(f64::NAN).unwrap_err();
        assert_eq!(err.source, ConstraintError::NotANumber);

        let err = params_with_resistance(-0.12).unwrap_err();
        assert_eq!(err.source, ConstraintError::Negative);
    }

    #[test]
    fn rejects_zero_sample_count() {
        let err = MotorParameters::r550().with_sample_count(0).unwrap_err();
        assert_eq!(err.parameter, "sample_count");
        assert_eq!(err.source, ConstraintError::Zero);

        let params = MotorParameters::r550().with_sample_count(10).unwrap();
        assert_eq!(params.sample_count(), 10);
    }
}
