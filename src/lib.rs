//! # Twine DC Motor
//!
//! Steady-state brushed DC motor models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The motor is described by a linear armature circuit: a constant
//! resistance, a torque constant, a back-EMF constant, and a no-load current.
//! From these the crate can
//!
//! - sweep the achievable speed range at a supply voltage and report torque,
//!   current, output power, and efficiency at each speed, and
//! - invert the circuit to find the supply voltage needed for a target speed
//!   and torque.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use twine_dc_motor::models::electrical::dc_motor::{
//!     MotorParameters, VoltageQuery, VoltageResult, generate, solve,
//! };
//! use uom::si::{electric_potential::volt, f64::ElectricPotential};
//!
//! let params = MotorParameters::r550();
//!
//! let curve = generate(ElectricPotential::new::<volt>(12.0), &params);
//! assert_eq!(curve.len(), 101);
//! assert_eq!(curve.points()[0].rpm(), 0.0);
//!
//! let result = solve(VoltageQuery { rpm: 5500.0, torque: 0.05 }, &params);
//! assert!(matches!(result, VoltageResult::Required(_)));
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
