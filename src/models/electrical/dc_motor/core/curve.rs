//! Performance curve generation.

use tracing::debug;
use uom::si::{electric_potential::volt, f64::ElectricPotential};

use super::{
    MotorParameters, OperatingPoint, Series,
    circuit::{Circuit, rad_per_sec_to_rpm},
};

/// Ordered operating points from standstill to unloaded top speed.
///
/// A curve always holds `sample_count + 1` points with non-decreasing rpm,
/// so it is never empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Curve(Vec<OperatingPoint>);

impl Curve {
    fn flat(sample_count: usize) -> Self {
        Self(vec![OperatingPoint::ZERO; sample_count + 1])
    }

    /// Returns the points in rpm order.
    #[must_use]
    pub fn points(&self) -> &[OperatingPoint] {
        &self.0
    }

    /// Consumes the curve and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<OperatingPoint> {
        self.0
    }

    /// Iterates over the points in rpm order.
    pub fn iter(&self) -> std::slice::Iter<'_, OperatingPoint> {
        self.0.iter()
    }

    /// Number of points, one more than the motor's sample count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept alongside [`Curve::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shaft speed of the last point, in rpm.
    #[must_use]
    pub fn max_rpm(&self) -> f64 {
        self.0.last().map_or(0.0, OperatingPoint::rpm)
    }

    /// Returns the point whose rpm is closest to `rpm`.
    ///
    /// Ties resolve to the slower point.
    #[must_use]
    pub fn nearest(&self, rpm: f64) -> &OperatingPoint {
        self.0
            .iter()
            .min_by(|a, b| (a.rpm() - rpm).abs().total_cmp(&(b.rpm() - rpm).abs()))
            .expect("curves always hold at least two points")
    }

    /// Returns the first point where `series` reaches its maximum.
    #[must_use]
    pub fn peak(&self, series: Series) -> &OperatingPoint {
        self.0
            .iter()
            .reduce(|best, point| {
                if point.series(series) > best.series(series) {
                    point
                } else {
                    best
                }
            })
            .expect("curves always hold at least two points")
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a OperatingPoint;
    type IntoIter = std::slice::Iter<'a, OperatingPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Generates the steady-state performance curve at a supply voltage.
///
/// The speed range from zero to the unloaded top speed at `voltage` is split
/// into [`MotorParameters::sample_count`] equal steps, and the circuit is
/// evaluated at each step.
///
/// A non-positive (or non-finite) voltage drives no current, so the result is
/// a flat curve of [`OperatingPoint::ZERO`] with the usual length.
/// A voltage so large that speed or power overflows `f64` gives the same flat
/// curve. This function never fails.
#[must_use]
pub fn generate(voltage: ElectricPotential, params: &MotorParameters) -> Curve {
    let voltage = voltage.get::<volt>();
    let sample_count = params.sample_count();

    if !voltage.is_finite() || voltage <= 0.0 {
        debug!(voltage, "no usable supply voltage, returning a flat curve");
        return Curve::flat(sample_count);
    }

    let circuit = Circuit::at_voltage(voltage, params);
    let max_rpm = rad_per_sec_to_rpm(circuit.max_omega());
    if !max_rpm.is_finite() {
        debug!(voltage, "top speed overflows, returning a flat curve");
        return Curve::flat(sample_count);
    }

    #[allow(clippy::cast_precision_loss)]
    let rpm_step = max_rpm / sample_count as f64;

    #[allow(clippy::cast_precision_loss)]
    let points: Vec<_> = (0..=sample_count)
        .map(|i| OperatingPoint::from_sample(&circuit.at_rpm(i as f64 * rpm_step)))
        .collect();

    if !points.iter().all(OperatingPoint::is_finite) {
        debug!(voltage, "operating point overflows, returning a flat curve");
        return Curve::flat(sample_count);
    }

    Curve(points)
}
