//! Problem formulation for the loaded-speed search.

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use uom::si::{angular_velocity::radian_per_second, f64::AngularVelocity};

use crate::models::electrical::dc_motor::core::circuit::{Circuit, Sample};

/// Circuit evaluation failed to produce a finite torque.
#[derive(Debug, Clone, Copy, Error)]
#[error("non-finite torque at {omega} rad/s")]
pub(super) struct NonFiniteTorque {
    omega: f64,
}

/// Model adapter exposing shaft speed as the sole input of a fixed-voltage circuit.
pub(super) struct CircuitModel {
    circuit: Circuit,
}

impl CircuitModel {
    pub(super) fn new(circuit: Circuit) -> Self {
        Self { circuit }
    }
}

impl Model for CircuitModel {
    type Input = AngularVelocity;
    type Output = Sample;
    type Error = NonFiniteTorque;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let omega = input.get::<radian_per_second>();
        let sample = self.circuit.at_omega(omega);

        if sample.torque.is_finite() {
            Ok(sample)
        } else {
            Err(NonFiniteTorque { omega })
        }
    }
}

/// Equation problem balancing motor torque against a load.
///
/// Computes the residual as `motor_torque - load_torque` in N·m.
/// The residual falls with speed, from the stall margin at zero to minus the
/// load at the unloaded top speed.
pub(super) struct LoadBalance {
    load_torque: f64,
}

impl LoadBalance {
    pub(super) fn new(load_torque: f64) -> Self {
        Self { load_torque }
    }
}

impl EquationProblem<1> for LoadBalance {
    type Input = AngularVelocity;
    type Output = Sample;
    type Error = std::convert::Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(AngularVelocity::new::<radian_per_second>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.torque - self.load_torque])
    }
}
