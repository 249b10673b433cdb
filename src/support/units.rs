//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., voltage, current, torque).
//! This module provides quantities that are useful for modeling but aren't included in [`uom`].
//!
//! ## Motor constants
//!
//! The torque constant (N·m/A) and the back-EMF constant (V·s/rad) of a DC motor
//! share one SI dimension, which [`uom`] only exposes as magnetic flux.
//! [`MotorConstant`] names that dimension so motor parameters read naturally:
//!
//! ```
//! use twine_dc_motor::support::units::MotorConstant;
//! use uom::si::magnetic_flux::weber;
//!
//! // 1 Wb is exactly 1 N·m/A and 1 V·s/rad.
//! let kt = MotorConstant::new::<weber>(0.0104);
//! assert_eq!(kt.get::<weber>(), 0.0104);
//! ```

mod quantities;

pub use quantities::MotorConstant;
