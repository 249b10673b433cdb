//! Steady-state speed of a motor driving a known load.
//!
//! At a fixed supply voltage the motor torque falls linearly with speed; the
//! loaded operating point is where that torque equals the load torque.
//! This module finds it by bisection on shaft speed over the motor's
//! achievable range, using the same circuit (and voltage-scaled no-load
//! current) as the performance curve.

mod config;
mod error;
mod problem;

pub use config::LoadedSpeedConfig;
pub use error::LoadedSpeedError;

use tracing::debug;
use twine_solvers::equation::bisection;
use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Torque},
    torque::newton_meter,
};

use crate::support::constraint::{NonNegative, ensure_finite};

use super::{MotorParameters, OperatingPoint, circuit::Circuit};

use problem::{CircuitModel, LoadBalance};

/// Solves for the operating point at which the motor carries `load`.
///
/// A zero load returns the unloaded top-speed point.
///
/// # Errors
///
/// Returns [`LoadedSpeedError`] if the voltage or load is invalid, if the load
/// exceeds the stall torque at `voltage`, or if the solver fails to converge.
pub fn loaded_speed(
    voltage: ElectricPotential,
    load: Torque,
    params: &MotorParameters,
    config: LoadedSpeedConfig,
) -> Result<OperatingPoint, LoadedSpeedError> {
    let supply = voltage.get::<volt>();
    if !supply.is_finite() || supply <= 0.0 {
        return Err(LoadedSpeedError::InvalidVoltage { voltage });
    }

    let load = NonNegative::new(load.get::<newton_meter>())
        .and_then(|load| ensure_finite(load.into_inner()))
        .map_err(LoadedSpeedError::InvalidLoad)?;

    let circuit = Circuit::at_voltage(supply, params);
    let max_omega = circuit.max_omega();

    let stall = circuit.at_omega(0.0);
    if load > stall.torque {
        debug!(load, stall_torque = stall.torque, "load stalls the motor");
        return Err(LoadedSpeedError::Stalled {
            stall_torque: Torque::new::<newton_meter>(stall.torque),
        });
    }

    if load == 0.0 {
        return Ok(OperatingPoint::from_sample(&circuit.at_omega(max_omega)));
    }

    let model = CircuitModel::new(circuit);
    let problem = LoadBalance::new(load);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, max_omega],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Torque only overflows near standstill at extreme voltages, where
            // the motor torque far exceeds any finite load.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(LoadedSpeedError::MaxIters {
            residual: Torque::new::<newton_meter>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(OperatingPoint::from_sample(&solution.snapshot.output))
}
