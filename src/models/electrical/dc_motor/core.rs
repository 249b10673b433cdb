//! Steady-state brushed DC motor modeling.
//!
//! The motor is a linear armature circuit with constant resistance, a torque
//! constant, a back-EMF constant, and a no-load current:
//!
//! ```text
//! V = I·R + Ke·ω
//! T = Kt·(I - I_nl)
//! ```
//!
//! Three calculations are built on it: a performance curve sweep at a supply
//! voltage, a closed-form solve for the voltage behind a target operating
//! point, and a bisection search for the speed at which the motor carries a
//! given load.

mod circuit;
mod config;
mod curve;
mod loaded_speed;
mod params;
mod point;
mod query;
mod required_voltage;

pub use config::MotorConfig;
pub use curve::{Curve, generate};
pub use loaded_speed::{LoadedSpeedConfig, LoadedSpeedError, loaded_speed};
pub use params::{MotorParameters, ParameterError};
pub use point::{OperatingPoint, Series};
pub use query::{InvalidInput, QueryField, VoltageQuery};
pub use required_voltage::{VoltageResult, solve};
