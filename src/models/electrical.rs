//! Electrical machine models.
//!
//! This module contains steady-state models of electric motors.

pub mod dc_motor;
