//! Plain-number motor configuration.

use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricCurrent, ElectricPotential, ElectricalResistance},
    magnetic_flux::weber,
};

use crate::support::units::MotorConstant;

use super::{MotorParameters, ParameterError};

/// Motor constants as plain numbers in SI units.
///
/// This is the shape a deployment stores its motor in (a config file, a form,
/// a table of presets). Convert it with [`MotorParameters::try_from`] to get a
/// validated parameter set.
///
/// With the `serde` feature enabled the type is (de)serializable and rejects
/// unknown fields.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct MotorConfig {
    /// Supply voltage ceiling, V.
    pub max_voltage: f64,

    /// Armature resistance, Ω.
    pub resistance: f64,

    /// Torque constant, N·m/A.
    pub torque_constant: f64,

    /// Back-EMF constant, V/(rad/s).
    pub back_emf_constant: f64,

    /// No-load current at `max_voltage`, A.
    pub no_load_current: f64,

    /// Number of speed intervals in a generated curve.
    pub sample_count: usize,
}

impl Default for MotorConfig {
    fn default() -> Self {
        MotorParameters::r550().into()
    }
}

impl TryFrom<MotorConfig> for MotorParameters {
    type Error = ParameterError;

    fn try_from(config: MotorConfig) -> Result<Self, Self::Error> {
        MotorParameters::new(
            ElectricPotential::new::<volt>(config.max_voltage),
            ElectricalResistance::new::<ohm>(config.resistance),
            MotorConstant::new::<weber>(config.torque_constant),
            MotorConstant::new::<weber>(config.back_emf_constant),
            ElectricCurrent::new::<ampere>(config.no_load_current),
            config.sample_count,
        )
    }
}

impl From<MotorParameters> for MotorConfig {
    fn from(params: MotorParameters) -> Self {
        Self {
            max_voltage: params.max_voltage().get::<volt>(),
            resistance: params.resistance().get::<ohm>(),
            torque_constant: params.torque_constant().get::<weber>(),
            back_emf_constant: params.back_emf_constant().get::<weber>(),
            no_load_current: params.no_load_current().get::<ampere>(),
            sample_count: params.sample_count(),
        }
    }
}
