//! Inverse solve for the supply voltage behind a target operating point.

use std::fmt;

use tracing::debug;
use uom::si::{
    electric_current::ampere, electric_potential::volt, electrical_resistance::ohm,
    f64::ElectricPotential, magnetic_flux::weber,
};

use super::{InvalidInput, MotorParameters, VoltageQuery, circuit::rpm_to_rad_per_sec};

/// Outcome of a [`solve`] call.
///
/// The three variants let a caller tell an answer, an unreachable answer,
/// and a rejected query apart without inspecting numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoltageResult {
    /// The required voltage is within the motor's rating.
    Required(ElectricPotential),

    /// The required voltage is above the motor's rating.
    ExceedsMaximum {
        /// Voltage the operating point would need.
        required: ElectricPotential,

        /// The motor's maximum voltage.
        maximum: ElectricPotential,
    },

    /// The query was rejected before solving.
    InvalidInput(InvalidInput),
}

impl VoltageResult {
    /// Returns the voltage if it is within the motor's rating.
    #[must_use]
    pub fn voltage(&self) -> Option<ElectricPotential> {
        match self {
            Self::Required(voltage) => Some(*voltage),
            Self::ExceedsMaximum { .. } | Self::InvalidInput(_) => None,
        }
    }

    /// Returns the computed voltage, whether or not it is reachable.
    #[must_use]
    pub fn required(&self) -> Option<ElectricPotential> {
        match self {
            Self::Required(required) | Self::ExceedsMaximum { required, .. } => Some(*required),
            Self::InvalidInput(_) => None,
        }
    }
}

impl fmt::Display for VoltageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(voltage) => write!(f, "{:.2} V required", voltage.get::<volt>()),
            Self::ExceedsMaximum { required, maximum } => write!(
                f,
                "Exceeds limitations. Required voltage is {:.2}V, which is over the {}V maximum.",
                required.get::<volt>(),
                maximum.get::<volt>()
            ),
            Self::InvalidInput(_) => {
                f.write_str("Please enter valid, positive numbers for RPM and Torque.")
            }
        }
    }
}

/// Solves for the supply voltage that sustains a target speed and torque.
///
/// Inverts the armature circuit in closed form:
///
/// ```text
/// ω = rpm · 2π / 60
/// I = T / Kt + I_nl
/// V = I · R + Ke · ω
/// ```
///
/// `I_nl` is the rated no-load current, not the voltage-scaled value the
/// curve generator uses, because the voltage is the unknown here.
/// This function never fails; invalid queries produce
/// [`VoltageResult::InvalidInput`].
#[must_use]
pub fn solve(query: VoltageQuery, params: &MotorParameters) -> VoltageResult {
    if let Err(err) = query.validate() {
        debug!(rpm = query.rpm, torque = query.torque, %err, "rejected voltage query");
        return VoltageResult::InvalidInput(err);
    }

    let omega = rpm_to_rad_per_sec(query.rpm);
    let required_current = query.torque / params.torque_constant().get::<weber>()
        + params.no_load_current().get::<ampere>();
    let back_emf = params.back_emf_constant().get::<weber>() * omega;
    let required_voltage = required_current * params.resistance().get::<ohm>() + back_emf;

    let required = ElectricPotential::new::<volt>(required_voltage);
    let maximum = params.max_voltage();

    if required > maximum {
        debug!(
            required = required_voltage,
            maximum = maximum.get::<volt>(),
            "required voltage exceeds the motor rating"
        );
        return VoltageResult::ExceedsMaximum { required, maximum };
    }

    VoltageResult::Required(required)
}
