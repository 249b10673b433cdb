use twine_solvers::equation::bisection;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Torque},
    torque::newton_meter,
};

/// Stopping rules for the loaded-speed search.
///
/// The search halves the speed bracket `[0, ω_max]` until either the bracket
/// is narrower than `speed_tol` or the motor torque at the midpoint is within
/// `torque_tol` of the load.
#[derive(Debug, Clone, Copy)]
pub struct LoadedSpeedConfig {
    /// Halvings allowed before giving up with
    /// [`LoadedSpeedError::MaxIters`](super::LoadedSpeedError::MaxIters).
    pub max_iters: usize,

    /// Bracket width on shaft speed at which the search stops.
    pub speed_tol: AngularVelocity,

    /// Motor torque minus load torque small enough to accept.
    pub torque_tol: Torque,
}

impl Default for LoadedSpeedConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            speed_tol: AngularVelocity::new::<radian_per_second>(1e-9),
            torque_tol: Torque::new::<newton_meter>(1e-12),
        }
    }
}

impl LoadedSpeedConfig {
    /// Solver settings in rad/s and N·m, with no relative speed tolerance.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.speed_tol.get::<radian_per_second>(),
            x_rel_tol: 0.0,
            residual_tol: self.torque_tol.get::<newton_meter>(),
        }
    }
}
