//! Property-based tests for performance curves and the voltage solver.
//!
//! Uses proptest to verify invariants that hold for every supply voltage and
//! every target operating point:
//! - Non-positive voltages give a flat zero curve of the usual length
//! - Curve speeds start at zero and never decrease
//! - Torque, current, and power are non-negative; efficiency lies in [0, 1]
//! - Invalid solver queries are reported, never panicked on

use proptest::prelude::*;
use twine_dc_motor::models::electrical::dc_motor::{
    MotorConfig, MotorParameters, OperatingPoint, VoltageQuery, VoltageResult, generate, solve,
};
use uom::si::{electric_potential::volt, f64::ElectricPotential};

fn volts(value: f64) -> ElectricPotential {
    ElectricPotential::new::<volt>(value)
}

/// Plausible small brushed motors around the R550 defaults.
fn motor() -> impl Strategy<Value = MotorParameters> {
    (
        1.0..48.0_f64,
        0.01..5.0_f64,
        0.001..0.1_f64,
        0.01..5.0_f64,
        1usize..200,
    )
        .prop_map(
            |(max_voltage, resistance, motor_constant, no_load_current, sample_count)| {
                MotorParameters::try_from(MotorConfig {
                    max_voltage,
                    resistance,
                    torque_constant: motor_constant,
                    back_emf_constant: motor_constant,
                    no_load_current,
                    sample_count,
                })
                .expect("strategy only produces positive finite parameters")
            },
        )
}

/// Positive finite supply voltages, log-uniform from 10 mV up to `f64::MAX`.
fn supply_voltage() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => (-2.0..308.0_f64).prop_map(|exponent| 10_f64.powf(exponent)),
        1 => Just(f64::MIN_POSITIVE),
        1 => Just(f64::MAX),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every non-positive voltage yields sample_count + 1 zero points.
    #[test]
    fn prop_non_positive_voltage_is_flat(params in motor(), voltage in -100.0..=0.0_f64) {
        let curve = generate(volts(voltage), &params);

        prop_assert_eq!(curve.len(), params.sample_count() + 1);
        prop_assert!(curve.iter().all(|p| *p == OperatingPoint::ZERO));
    }

    /// Speeds start at zero and never decrease.
    #[test]
    fn prop_rpm_is_monotonic(params in motor(), voltage in supply_voltage()) {
        let curve = generate(volts(voltage), &params);

        prop_assert_eq!(curve.len(), params.sample_count() + 1);
        prop_assert_eq!(curve.points()[0].rpm(), 0.0);
        for pair in curve.points().windows(2) {
            prop_assert!(pair[0].rpm() <= pair[1].rpm(),
                "rpm decreased from {} to {}", pair[0].rpm(), pair[1].rpm());
        }
    }

    /// Every point is physically bounded.
    #[test]
    fn prop_points_are_bounded(params in motor(), voltage in supply_voltage()) {
        for point in &generate(volts(voltage), &params) {
            for value in [point.rpm(), point.torque(), point.current(), point.power()] {
                prop_assert!(value.is_finite() && value >= 0.0,
                    "{:?} at {} V has a non-finite or negative field", point, voltage);
            }
            prop_assert!((0.0..=1.0).contains(&point.efficiency()),
                "efficiency {} out of range", point.efficiency());
        }
    }

    /// Negative or non-numeric targets are reported as invalid input.
    #[test]
    fn prop_negative_targets_are_invalid(
        params in motor(),
        rpm in -1e6..-1e-9_f64,
        torque in 0.0..10.0_f64,
    ) {
        let result = solve(VoltageQuery { rpm, torque }, &params);
        prop_assert!(matches!(result, VoltageResult::InvalidInput(_)));

        let result = solve(VoltageQuery { rpm: torque, torque: rpm }, &params);
        prop_assert!(matches!(result, VoltageResult::InvalidInput(_)));
    }

    /// Valid targets always produce a voltage, in range or not.
    #[test]
    fn prop_valid_targets_have_a_voltage(
        params in motor(),
        rpm in 0.0..50_000.0_f64,
        torque in 0.0..10.0_f64,
    ) {
        let result = solve(VoltageQuery { rpm, torque }, &params);
        let required = result.required().expect("valid query should be solved");

        prop_assert!(required.get::<volt>() > 0.0);
        match result {
            VoltageResult::Required(_) => {
                prop_assert!(required <= params.max_voltage());
            }
            VoltageResult::ExceedsMaximum { maximum, .. } => {
                prop_assert!(required > maximum);
            }
            VoltageResult::InvalidInput(_) => unreachable!(),
        }
    }
}

#[test]
fn non_numeric_targets_are_invalid() {
    let params = MotorParameters::r550();

    for query in [
        VoltageQuery {
            rpm: -1.0,
            torque: 1.0,
        },
        VoltageQuery {
            rpm: f64::NAN,
            torque: 1.0,
        },
        VoltageQuery {
            rpm: 1.0,
            torque: f64::INFINITY,
        },
    ] {
        assert!(matches!(
            solve(query, &params),
            VoltageResult::InvalidInput(_)
        ));
    }
}
