//! Brushed DC motor models.
//!
//! This module provides [`twine_core::Model`] implementations for a brushed DC
//! motor described by [`MotorParameters`]:
//!
//! - [`PerformanceCurve`]: supply voltage to a [`Curve`] of operating points.
//! - [`RequiredVoltage`]: target speed and torque to a [`VoltageResult`].
//! - [`LoadedSpeed`]: supply voltage and load torque to the loaded [`OperatingPoint`].
//!
//! Each adapter is a thin wrapper around a free function ([`generate`],
//! [`solve`], [`loaded_speed`]) that can also be called directly.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_dc_motor::models::electrical::dc_motor::{
//!     MotorParameters, PerformanceCurve, RequiredVoltage, VoltageQuery,
//! };
//! use uom::si::{electric_potential::volt, f64::ElectricPotential};
//!
//! let params = MotorParameters::r550();
//!
//! let curve = PerformanceCurve::new(params)
//!     .call(&ElectricPotential::new::<volt>(6.0))
//!     .unwrap();
//! assert_eq!(curve.len(), params.sample_count() + 1);
//!
//! let query = VoltageQuery::parse("5500", "0.05").unwrap();
//! let result = RequiredVoltage::new(params).call(&query).unwrap();
//! assert_eq!(result.to_string(), "6.75 V required");
//! ```

mod core;

pub use self::core::{
    Curve, InvalidInput, LoadedSpeedConfig, LoadedSpeedError, MotorConfig, MotorParameters,
    OperatingPoint, ParameterError, QueryField, Series, VoltageQuery, VoltageResult, generate,
    loaded_speed, solve,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{ElectricPotential, Torque};

/// Performance curve of a motor as a function of supply voltage.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceCurve {
    params: MotorParameters,
}

impl PerformanceCurve {
    /// Creates the model for a motor.
    #[must_use]
    pub fn new(params: MotorParameters) -> Self {
        Self { params }
    }

    /// Returns the motor parameters.
    #[must_use]
    pub fn params(&self) -> &MotorParameters {
        &self.params
    }
}

impl Model for PerformanceCurve {
    type Input = ElectricPotential;
    type Output = Curve;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(generate(*input, &self.params))
    }
}

/// Supply voltage a motor needs for a target speed and torque.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredVoltage {
    params: MotorParameters,
}

impl RequiredVoltage {
    /// Creates the model for a motor.
    #[must_use]
    pub fn new(params: MotorParameters) -> Self {
        Self { params }
    }

    /// Returns the motor parameters.
    #[must_use]
    pub fn params(&self) -> &MotorParameters {
        &self.params
    }
}

impl Model for RequiredVoltage {
    type Input = VoltageQuery;
    type Output = VoltageResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(solve(*input, &self.params))
    }
}

/// Supply voltage and load torque for a [`LoadedSpeed`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadPoint {
    /// Supply voltage across the armature.
    pub voltage: ElectricPotential,

    /// Constant load torque the shaft must carry.
    pub torque: Torque,
}

/// Steady-state operating point of a motor driving a load.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadedSpeed {
    params: MotorParameters,
    config: LoadedSpeedConfig,
}

impl LoadedSpeed {
    /// Creates the model for a motor with the default solver configuration.
    #[must_use]
    pub fn new(params: MotorParameters) -> Self {
        Self {
            params,
            config: LoadedSpeedConfig::default(),
        }
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_config(self, config: LoadedSpeedConfig) -> Self {
        Self { config, ..self }
    }

    /// Returns the motor parameters.
    #[must_use]
    pub fn params(&self) -> &MotorParameters {
        &self.params
    }
}

impl Model for LoadedSpeed {
    type Input = LoadPoint;
    type Output = OperatingPoint;
    type Error = LoadedSpeedError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        loaded_speed(input.voltage, input.torque, &self.params, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_potential::volt, torque::newton_meter};

    #[test]
    fn adapters_delegate_to_core() {
        let params = MotorParameters::r550();
        let voltage = ElectricPotential::new::<volt>(10.0);

        let curve = PerformanceCurve::new(params).call(&voltage).unwrap();
        assert_eq!(curve, generate(voltage, &params));

        let query = VoltageQuery {
            rpm: 4000.0,
            torque: 0.1,
        };
        let result = RequiredVoltage::new(params).call(&query).unwrap();
        assert_eq!(result, solve(query, &params));
    }

    #[test]
    fn loaded_speed_adapter() {
        let model = LoadedSpeed::default();
        let point = model
            .call(&LoadPoint {
                voltage: ElectricPotential::new::<volt>(12.0),
                torque: Torque::new::<newton_meter>(0.5),
            })
            .unwrap();

        assert_relative_eq!(point.torque(), 0.5);
        assert!(point.rpm() > 0.0);
        assert_eq!(model.params(), &MotorParameters::r550());
    }

    #[test]
    fn loaded_speed_adapter_reports_stall() {
        let model = LoadedSpeed::new(MotorParameters::r550());
        let result = model.call(&LoadPoint {
            voltage: ElectricPotential::new::<volt>(3.0),
            torque: Torque::new::<newton_meter>(0.5),
        });

        assert!(matches!(result, Err(LoadedSpeedError::Stalled { .. })));
    }
}
