//! Fixed-step integrators for a single point mass
//!
//! Each integrator reads the force sampled at the start of the step from
//! `KinematicState::applied_force` and advances the state in place. They
//! keep no history of their own, so switching between them on any step is
//! legal. Only Verlet reads or writes `previous_position`.

use crate::diagnostics::SimError;
use crate::engine::KinematicState;
use std::fmt;
use std::str::FromStr;

/// The runtime-selectable integration method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntegratorKind {
    #[default]
    Euler,
    SemiImplicitEuler,
    Verlet,
    RungeKutta4,
}

impl IntegratorKind {
    pub const ALL: [IntegratorKind; 4] = [
        IntegratorKind::Euler,
        IntegratorKind::SemiImplicitEuler,
        IntegratorKind::Verlet,
        IntegratorKind::RungeKutta4,
    ];

    /// Name accepted by `from_str`
    pub fn name(self) -> &'static str {
        match self {
            IntegratorKind::Euler => "euler",
            IntegratorKind::SemiImplicitEuler => "semi-implicit-euler",
            IntegratorKind::Verlet => "verlet",
            IntegratorKind::RungeKutta4 => "rk4",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            IntegratorKind::Euler => "explicit Euler, position from the old velocity",
            IntegratorKind::SemiImplicitEuler => "symplectic Euler, position from the new velocity",
            IntegratorKind::Verlet => "position Verlet, velocity is not tracked",
            IntegratorKind::RungeKutta4 => "classical RK4 with force held constant over the step",
        }
    }

    /// Advance `state` by `dt` with this method
    pub fn advance(self, state: &mut KinematicState, dt: f32) {
        match self {
            IntegratorKind::Euler => euler(state, dt),
            IntegratorKind::SemiImplicitEuler => semi_implicit_euler(state, dt),
            IntegratorKind::Verlet => verlet(state, dt),
            IntegratorKind::RungeKutta4 => runge_kutta4(state, dt),
        }
    }
}

impl fmt::Display for IntegratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntegratorKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euler" => Ok(IntegratorKind::Euler),
            "semi-implicit-euler" | "implicit-euler" | "symplectic-euler" => {
                Ok(IntegratorKind::SemiImplicitEuler)
            }
            "verlet" => Ok(IntegratorKind::Verlet),
            "rk4" | "runge-kutta" | "runge-kutta-4" => Ok(IntegratorKind::RungeKutta4),
            other => Err(SimError::configuration(format!(
                "unknown integrator '{}', expected one of: euler, semi-implicit-euler, verlet, rk4",
                other
            ))),
        }
    }
}

/// Explicit Euler: x += v*dt with the old velocity, then v += a*dt
pub fn euler(state: &mut KinematicState, dt: f32) {
    let accel = state.acceleration();
    state.position += state.velocity * dt;
    state.velocity += accel * dt;
}

/// Semi-implicit Euler: v += a*dt, then x += v*dt with the new velocity
pub fn semi_implicit_euler(state: &mut KinematicState, dt: f32) {
    let accel = state.acceleration();
    state.velocity += accel * dt;
    state.position += state.velocity * dt;
}

/// Position Verlet: x' = x + (x - x_prev) + a*dt^2, x_prev' = x
///
/// Velocity is left as it was; callers needing one must estimate it from
/// the position history.
pub fn verlet(state: &mut KinematicState, dt: f32) {
    let accel = state.acceleration();
    let current = state.position;
    state.position += current - state.previous_position + accel * (dt * dt);
    state.previous_position = current;
}

/// Classical RK4 on v' = a and x' = v, sampling the force once per step
///
/// With the acceleration held constant every velocity stage equals `a`, so
/// the position update reduces to x + v*dt + a*dt^2/2.
pub fn runge_kutta4(state: &mut KinematicState, dt: f32) {
    let half_dt = 0.5 * dt;
    let accel = state.acceleration();
    let v = state.velocity;

    // Velocity stages
    let vk1 = accel;
    let vk2 = accel;
    let vk3 = accel;
    let vk4 = accel;

    // Position stages, driven by the velocity at each stage point
    let pk1 = v;
    let pk2 = v + vk1 * half_dt;
    let pk3 = v + vk2 * half_dt;
    let pk4 = v + vk3 * dt;

    state.position += (pk1 + 2.0 * pk2 + 2.0 * pk3 + pk4) * (dt / 6.0);
    state.velocity += (vk1 + 2.0 * vk2 + 2.0 * vk3 + vk4) * (dt / 6.0);
}
