use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{ElectricPotential, Torque};

use crate::support::constraint::ConstraintError;

/// Errors that can occur while solving for the loaded operating speed.
#[derive(Debug, Error)]
pub enum LoadedSpeedError {
    /// The supply voltage is not strictly positive and finite.
    #[error("supply voltage must be positive and finite: {voltage:?}")]
    InvalidVoltage { voltage: ElectricPotential },

    /// The load torque is negative or non-finite.
    #[error("invalid load torque")]
    InvalidLoad(#[source] ConstraintError),

    /// The load exceeds what the motor produces at standstill.
    #[error("load exceeds stall torque: stall_torque={stall_torque:?}")]
    Stalled {
        /// Torque available at zero speed for the supplied voltage.
        stall_torque: Torque,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best torque residual achieved.
        residual: Torque,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
