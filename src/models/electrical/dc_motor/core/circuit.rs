//! Linear armature circuit evaluated at a fixed supply voltage.

use std::f64::consts::PI;

use uom::si::{
    electric_current::ampere, electric_potential::volt, electrical_resistance::ohm,
    magnetic_flux::weber,
};

use super::MotorParameters;

/// Converts shaft speed from revolutions per minute to radians per second.
pub(super) fn rpm_to_rad_per_sec(rpm: f64) -> f64 {
    rpm * (2.0 * PI) / 60.0
}

/// Converts shaft speed from radians per second to revolutions per minute.
pub(super) fn rad_per_sec_to_rpm(omega: f64) -> f64 {
    omega * 60.0 / (2.0 * PI)
}

/// Unrounded motor state at one shaft speed.
///
/// Values are in rpm, A, N·m, W, and a unitless fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Sample {
    pub(super) rpm: f64,
    pub(super) current: f64,
    pub(super) torque: f64,
    pub(super) power: f64,
    pub(super) efficiency: f64,
}

/// Steady-state circuit `V = I·R + Ke·ω`, `T = Kt·(I - I_nl)`, at one voltage.
///
/// The no-load current is scaled linearly from its rated value at the motor's
/// maximum voltage, so friction and iron losses shrink with the supply.
#[derive(Debug, Clone, Copy)]
pub(super) struct Circuit {
    voltage: f64,
    resistance: f64,
    torque_constant: f64,
    back_emf_constant: f64,
    no_load_current: f64,
}

impl Circuit {
    /// Builds the circuit for a strictly positive, finite supply voltage in volts.
    pub(super) fn at_voltage(voltage: f64, params: &MotorParameters) -> Self {
        let no_load_current = (voltage / params.max_voltage().get::<volt>())
            * params.no_load_current().get::<ampere>();

        Self {
            voltage,
            resistance: params.resistance().get::<ohm>(),
            torque_constant: params.torque_constant().get::<weber>(),
            back_emf_constant: params.back_emf_constant().get::<weber>(),
            no_load_current,
        }
    }

    /// Top speed with no load, in rad/s.
    ///
    /// Zero when the no-load voltage drop alone exceeds the supply.
    pub(super) fn max_omega(&self) -> f64 {
        let omega =
            (self.voltage - self.no_load_current * self.resistance) / self.back_emf_constant;
        omega.max(0.0)
    }

    /// Evaluates the circuit at a shaft speed given in rpm.
    pub(super) fn at_rpm(&self, rpm: f64) -> Sample {
        self.sample(rpm, rpm_to_rad_per_sec(rpm))
    }

    /// Evaluates the circuit at a shaft speed given in rad/s.
    pub(super) fn at_omega(&self, omega: f64) -> Sample {
        self.sample(rad_per_sec_to_rpm(omega), omega)
    }

    fn sample(&self, rpm: f64, omega: f64) -> Sample {
        let back_emf = self.back_emf_constant * omega;

        // Back-EMF can formally exceed the supply at the top-speed sample.
        let current = ((self.voltage - back_emf) / self.resistance).max(0.0);
        let torque = (self.torque_constant * (current - self.no_load_current)).max(0.0);

        let power_out = torque * omega;
        let power_in = self.voltage * current;

        // Both powers overflow together at extreme voltages, giving inf / inf.
        let efficiency = if power_in > 0.0 {
            power_out / power_in
        } else {
            0.0
        };
        let efficiency = if efficiency.is_finite() {
            efficiency.clamp(0.0, 1.0)
        } else {
            0.0
        };

        Sample {
            rpm,
            current,
            torque,
            power: power_out,
            efficiency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn speed_conversions() {
        assert_relative_eq!(rpm_to_rad_per_sec(60.0), 2.0 * PI);
        assert_relative_eq!(rad_per_sec_to_rpm(2.0 * PI), 60.0);
        assert_relative_eq!(rpm_to_rad_per_sec(5500.0), 575.958, epsilon = 1e-3);
    }

    #[test]
    fn no_load_current_scales_with_voltage() {
        let params = MotorParameters::r550();

        assert_relative_eq!(Circuit::at_voltage(12.0, &params).no_load_current, 1.5);
        assert_relative_eq!(Circuit::at_voltage(6.0, &params).no_load_current, 0.75);
    }

    #[test]
    fn stall_at_rated_voltage() {
        let circuit = Circuit::at_voltage(12.0, &MotorParameters::r550());
        let stall = circuit.at_rpm(0.0);

        assert_relative_eq!(stall.current, 100.0, epsilon = 1e-9);
        assert_relative_eq!(stall.torque, 0.0104 * 98.5, epsilon = 1e-12);
        assert_relative_eq!(stall.power, 0.0);
        assert_relative_eq!(stall.efficiency, 0.0);
    }

    #[test]
    fn top_speed_has_no_torque() {
        let circuit = Circuit::at_voltage(12.0, &MotorParameters::r550());
        let max_omega = circuit.max_omega();
        assert_relative_eq!(max_omega, (12.0 - 1.5 * 0.12) / 0.0104, epsilon = 1e-9);

        let top = circuit.at_omega(max_omega);
        assert_relative_eq!(top.current, 1.5, epsilon = 1e-9);
        assert_relative_eq!(top.torque, 0.0, epsilon = 1e-12);
        assert_relative_eq!(top.rpm, rad_per_sec_to_rpm(max_omega));
    }

    #[test]
    fn overflowing_powers_give_zero_efficiency() {
        let circuit = Circuit::at_voltage(1e300, &MotorParameters::r550());
        let sample = circuit.at_omega(0.5 * circuit.max_omega());

        assert!(sample.power.is_infinite());
        assert_relative_eq!(sample.efficiency, 0.0);
    }

    #[test]
    fn current_never_negative_beyond_top_speed() {
        let circuit = Circuit::at_voltage(12.0, &MotorParameters::r550());
        let overspeed = circuit.at_omega(2.0 * circuit.max_omega());

        assert_relative_eq!(overspeed.current, 0.0);
        assert_relative_eq!(overspeed.torque, 0.0);
        assert_relative_eq!(overspeed.efficiency, 0.0);
    }
}
