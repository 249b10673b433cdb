//! Rounded operating points and the chart series they expose.

use uom::si::{
    angular_velocity::revolution_per_minute,
    electric_current::ampere,
    f64::{AngularVelocity, ElectricCurrent, Power, Ratio, Torque},
    power::watt,
    ratio::ratio,
    torque::newton_meter,
};

use super::circuit::Sample;

/// Decimal places kept for shaft speed.
const RPM_PRECISION: i32 = 2;

/// One sample of a motor performance curve.
///
/// Values are rounded to a fixed precision per field (rpm to 2 places,
/// torque to 3, current to 2, power to 2, efficiency to 3), and that rounding
/// is part of the contract: equal inputs give bit-identical points.
///
/// Every field is finite and non-negative, and efficiency lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OperatingPoint {
    rpm: f64,
    torque: f64,
    current: f64,
    power: f64,
    efficiency: f64,
}

impl OperatingPoint {
    /// The point every degenerate curve is made of.
    pub const ZERO: Self = Self {
        rpm: 0.0,
        torque: 0.0,
        current: 0.0,
        power: 0.0,
        efficiency: 0.0,
    };

    pub(super) fn from_sample(sample: &Sample) -> Self {
        Self {
            rpm: round_to(sample.rpm, RPM_PRECISION),
            torque: round_to(sample.torque, Series::Torque.precision()),
            current: round_to(sample.current, Series::Current.precision()),
            power: round_to(sample.power, Series::Power.precision()),
            efficiency: round_to(sample.efficiency, Series::Efficiency.precision()),
        }
    }

    pub(super) fn is_finite(&self) -> bool {
        [self.rpm, self.torque, self.current, self.power, self.efficiency]
            .iter()
            .all(|value| value.is_finite())
    }

    /// Shaft speed in revolutions per minute.
    #[must_use]
    pub fn rpm(&self) -> f64 {
        self.rpm
    }

    /// Shaft torque in newton meters.
    #[must_use]
    pub fn torque(&self) -> f64 {
        self.torque
    }

    /// Armature current in amperes.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Mechanical output power in watts.
    #[must_use]
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Output power over electrical input power, in `[0, 1]`.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Returns the value plotted for `series` at this point.
    #[must_use]
    pub fn series(&self, series: Series) -> f64 {
        match series {
            Series::Torque => self.torque,
            Series::Current => self.current,
            Series::Power => self.power,
            Series::Efficiency => self.efficiency,
        }
    }

    /// Shaft speed as a quantity.
    #[must_use]
    pub fn angular_velocity(&self) -> AngularVelocity {
        AngularVelocity::new::<revolution_per_minute>(self.rpm)
    }

    /// Shaft torque as a quantity.
    #[must_use]
    pub fn shaft_torque(&self) -> Torque {
        Torque::new::<newton_meter>(self.torque)
    }

    /// Armature current as a quantity.
    #[must_use]
    pub fn armature_current(&self) -> ElectricCurrent {
        ElectricCurrent::new::<ampere>(self.current)
    }

    /// Mechanical output power as a quantity.
    #[must_use]
    pub fn output_power(&self) -> Power {
        Power::new::<watt>(self.power)
    }

    /// Efficiency as a ratio quantity.
    #[must_use]
    pub fn efficiency_ratio(&self) -> Ratio {
        Ratio::new::<ratio>(self.efficiency)
    }
}

/// Dependent series of a performance curve, plotted against rpm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Series {
    Torque,
    Current,
    Power,
    Efficiency,
}

impl Series {
    /// Every series, in legend order.
    pub const ALL: [Self; 4] = [Self::Torque, Self::Current, Self::Power, Self::Efficiency];

    /// Human-readable series name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Torque => "Torque",
            Self::Current => "Current",
            Self::Power => "Power",
            Self::Efficiency => "Efficiency",
        }
    }

    /// Unit symbol for axis labels. Efficiency is a bare ratio.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Torque => "N·m",
            Self::Current => "A",
            Self::Power => "W",
            Self::Efficiency => "",
        }
    }

    /// Decimal places a curve keeps for this series.
    #[must_use]
    pub fn precision(self) -> i32 {
        match self {
            Self::Torque | Self::Efficiency => 3,
            Self::Current | Self::Power => 2,
        }
    }
}

/// Rounds half away from zero to a fixed number of decimal places.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round() / scale
}
